pub mod event;
pub mod standing;

pub use event::{parse_timestamp, ScoreEvent, TIMESTAMP_FORMAT};
pub use standing::PlayerMeanScore;
