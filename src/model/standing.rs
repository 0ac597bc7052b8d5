/// A player's averaged score and position in the ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerMeanScore {
    pub player_id: String,
    pub mean_score: i64,
    /// 1-based rank; 0 until the ranking stage runs
    pub rank: u32,
}

impl PlayerMeanScore {
    pub fn new(player_id: impl Into<String>, mean_score: i64) -> Self {
        Self {
            player_id: player_id.into(),
            mean_score,
            rank: 0,
        }
    }

    pub fn is_ranked(&self) -> bool {
        self.rank >= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unranked() {
        let pms = PlayerMeanScore::new("alice", 15);
        assert_eq!(pms.player_id, "alice");
        assert_eq!(pms.mean_score, 15);
        assert_eq!(pms.rank, 0);
        assert!(!pms.is_ranked());
    }
}
