use chrono::NaiveDateTime;

/// Timestamp layout of the input log: "2024/01/31 09:05"
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M";

const TIMESTAMP_LEN: usize = "YYYY/MM/DD hh:mm".len();

/// A single score entry from the input log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEvent {
    pub timestamp: NaiveDateTime,
    pub player_id: String,
    pub score: i64,
}

impl ScoreEvent {
    pub fn new(timestamp: NaiveDateTime, player_id: impl Into<String>, score: i64) -> Self {
        Self {
            timestamp,
            player_id: player_id.into(),
            score,
        }
    }
}

/// Parse a naive local timestamp in the fixed-width "YYYY/MM/DD hh:mm" layout.
///
/// Every numeric component must be zero padded digits, so "2024/1/01 10:00",
/// "2024/01/01  9:00" and "+2024/01/01 1:00" are all rejected even though
/// chrono alone would accept some of them.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if !has_timestamp_layout(s) {
        return None;
    }
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
}

/// Byte-level check against "YYYY/MM/DD hh:mm"
fn has_timestamp_layout(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != TIMESTAMP_LEN {
        return false;
    }
    bytes.iter().enumerate().all(|(i, &b)| match i {
        4 | 7 => b == b'/',
        10 => b == b' ',
        13 => b == b':',
        _ => b.is_ascii_digit(),
    })
}
