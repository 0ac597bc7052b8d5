//! Score log input

pub mod reader;

pub use reader::{events_from_rows, parse_row, read_events, read_events_file};
