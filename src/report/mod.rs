pub mod writer;

pub use writer::{format_line, format_rankings, write_lines, HEADER};
