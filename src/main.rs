use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use score_rank::report;

#[derive(Parser)]
#[command(name = "score-rank")]
#[command(about = "Rank players by mean score from a CSV score log", long_about = None)]
struct Cli {
    /// Score log CSV (header, then timestamp,player_id,score rows)
    input: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Build every line before printing so a failure leaves stdout empty
    let lines = score_rank::rank_file(&cli.input)
        .with_context(|| format!("Failed to rank scores from {}", cli.input.display()))?;

    let stdout = std::io::stdout();
    report::write_lines(stdout.lock(), &lines).context("Failed to write output")?;

    Ok(())
}
