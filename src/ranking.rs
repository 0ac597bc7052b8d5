//! Per-player averaging and tie-aware ranking

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::model::{PlayerMeanScore, ScoreEvent};

/// Truncating mean of a score group. Groups built by `aggregate_means` always
/// hold at least one score.
///
/// Division rounds toward zero, so [3, 4] gives 3 and [-3, 4] gives 0.
/// Accumulates in i128; the result always fits back into i64.
fn truncated_mean(scores: &[i64]) -> i64 {
    let sum: i128 = scores.iter().map(|&s| s as i128).sum();
    (sum / scores.len() as i128) as i64
}

/// Group events by player and compute each player's mean score.
///
/// Returns one unranked entry per distinct player, ordered by player id.
pub fn aggregate_means(events: &[ScoreEvent]) -> Vec<PlayerMeanScore> {
    let mut scores_by_player: HashMap<&str, Vec<i64>> = HashMap::new();
    for event in events {
        scores_by_player
            .entry(event.player_id.as_str())
            .or_default()
            .push(event.score);
    }

    let mut means: Vec<PlayerMeanScore> = scores_by_player
        .into_iter()
        .map(|(player, scores)| PlayerMeanScore::new(player, truncated_mean(&scores)))
        .collect();
    means.sort_by(|a, b| a.player_id.cmp(&b.player_id));

    log::debug!("Aggregated {} events into {} players", events.len(), means.len());
    means
}

/// Highest mean first; equal means fall back to player id ascending
fn standing_order(a: &PlayerMeanScore, b: &PlayerMeanScore) -> Ordering {
    b.mean_score
        .cmp(&a.mean_score)
        .then_with(|| a.player_id.cmp(&b.player_id))
}

/// Sort players by mean score and assign ranks.
///
/// Players with equal means share a rank, and the next distinct mean takes its
/// 1-based position: [100, 100, 90] ranks as [1, 1, 3].
pub fn assign_ranks(mut players: Vec<PlayerMeanScore>) -> Vec<PlayerMeanScore> {
    players.sort_by(standing_order);

    for i in 0..players.len() {
        players[i].rank = if i > 0 && players[i - 1].mean_score == players[i].mean_score {
            players[i - 1].rank
        } else {
            (i + 1) as u32
        };
    }

    players
}

/// Aggregate and rank in one step
pub fn rank_players(events: &[ScoreEvent]) -> Vec<PlayerMeanScore> {
    assign_ranks(aggregate_means(events))
}
