//! Command-line interface for scoring developer profiles against the
//! distribution catalog.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod catalog;
mod error;
mod fs;
mod score;

pub use error::CliError;

use catalog::CatalogArgs;
use score::ScoreArgs;

pub(crate) const ARG_SIGNALS: &str = "signals";
pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_REFERENCE_POPULARITY: &str = "reference-popularity";
pub(crate) const ARG_SENIOR_POPULARITY_FLOOR: &str = "senior-popularity-floor";
pub(crate) const ARG_DIAGNOSTICS: &str = "diagnostics";
pub(crate) const ENV_SIGNALS: &str = "DISTROFIT_CMDS_SCORE_SIGNALS_PATH";

/// Run the distrofit CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, when an
/// input file cannot be read or decoded, or when writing the output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => score::run_score(args),
        Command::Catalog(args) => catalog::run_catalog(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "distrofit",
    about = "Match developer profiles to Linux distributions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a signals document against the catalog.
    Score(ScoreArgs),
    /// Validate and print a catalog.
    Catalog(CatalogArgs),
}

#[cfg(test)]
mod tests;
