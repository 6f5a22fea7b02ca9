//! Command-line interface for ranking restaurant listing exports.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod rank;

pub use error::CliError;

use rank::RankArgs;

const ARG_RANK_INPUT: &str = "input";
const ARG_RANK_TOP: &str = "top";
const ARG_RANK_SCATTER: &str = "scatter";
const ARG_RANK_MIN_LAT: &str = "min-lat";
const ARG_RANK_MAX_LAT: &str = "max-lat";
const ARG_RANK_MIN_LON: &str = "min-lon";
const ARG_RANK_MAX_LON: &str = "max-lon";
const ARG_RANK_DENY: &str = "deny";
const ARG_RANK_HISTOGRAM_BINS: &str = "histogram-bins";
const ARG_RANK_REPORT: &str = "report";
const ARG_RANK_OUTPUT: &str = "output";
const ENV_RANK_INPUT: &str = "MESA_CMDS_RANK_INPUT";

/// Run the Mesa CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, loading or output
/// fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => rank::run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "mesa",
    about = "Rank restaurant listings by rating and review volume",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a CSV export and print the leaderboard or full report as JSON.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
