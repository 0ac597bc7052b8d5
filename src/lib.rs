pub mod error;
pub mod model;
pub mod ranking;
pub mod report;
pub mod scores;

use std::path::Path;

pub use error::{RankError, Result};
pub use model::*;

/// Load a score log and produce the ranked CSV lines.
///
/// Nothing is returned unless every row parses.
pub fn rank_file(path: &Path) -> Result<Vec<String>> {
    let events = scores::read_events_file(path)?;
    let ranked = ranking::rank_players(&events);
    log::info!("Ranked {} players from {} events", ranked.len(), events.len());
    Ok(report::format_rankings(&ranked))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_log(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_rank_file_end_to_end() {
        let file = write_log(
            "create_timestamp,player_id,score\n\
             2024/01/01 10:00,alice,10\n\
             2024/01/01 11:00,alice,20\n\
             2024/01/01 12:00,bob,15\n",
        );
        let lines = rank_file(file.path()).unwrap();
        assert_eq!(lines, vec!["rank,player_id,mean_score", "1,alice,15", "1,bob,15"]);
    }

    #[test]
    fn test_rank_file_line_count() {
        let file = write_log(
            "create_timestamp,player_id,score\n\
             2024/01/01 10:00,p1,100\n\
             2024/01/01 10:00,p2,100\n\
             2024/01/01 10:00,p3,90\n\
             2024/01/01 10:00,p4,80\n\
             2024/01/01 10:00,p1,100\n\
             2024/01/01 10:00,p5,80\n",
        );
        let lines = rank_file(file.path()).unwrap();
        assert_eq!(lines.len(), 5 + 1);
        assert_eq!(
            lines,
            vec![
                "rank,player_id,mean_score",
                "1,p1,100",
                "1,p2,100",
                "3,p3,90",
                "4,p4,80",
                "4,p5,80",
            ]
        );
    }

    #[test]
    fn test_rank_file_fails_on_bad_timestamp() {
        let file = write_log(
            "create_timestamp,player_id,score\n\
             2024/01/01 10:00,alice,10\n\
             2024-01-01 10:00,bob,15\n",
        );
        let err = rank_file(file.path()).unwrap_err();
        assert!(matches!(err, RankError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_rank_file_fails_on_bad_score() {
        let file = write_log("create_timestamp,player_id,score\n2024/01/01 10:00,alice,abc\n");
        let err = rank_file(file.path()).unwrap_err();
        assert!(matches!(err, RankError::InvalidScore { .. }));
    }

    #[test]
    fn test_rank_file_header_only() {
        let file = write_log("create_timestamp,player_id,score\n");
        assert_eq!(rank_file(file.path()).unwrap(), vec![report::HEADER.to_string()]);
    }
}
