use std::io::Write;

use crate::model::PlayerMeanScore;

pub const HEADER: &str = "rank,player_id,mean_score";

/// Format a single ranked player as "rank,player_id,mean_score".
///
/// Player ids are written verbatim, without CSV quoting.
pub fn format_line(player: &PlayerMeanScore) -> String {
    format!("{},{},{}", player.rank, player.player_id, player.mean_score)
}

/// Render the ranking as CSV lines, header first
pub fn format_rankings(ranked: &[PlayerMeanScore]) -> Vec<String> {
    let mut lines = Vec::with_capacity(ranked.len() + 1);
    lines.push(HEADER.to_string());
    lines.extend(ranked.iter().map(format_line));
    lines
}

/// Write lines, each terminated by a newline
pub fn write_lines<W: Write>(mut out: W, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
