//! Score command implementation for the distrofit CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser};
use distrofit_core::{ProfileScorer, Signals};
use distrofit_scorer::{FitEngine, MatchWeights};
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalog::{load_catalog, write_json};
use crate::fs::{open_utf8_file, require_existing};
use crate::{
    ARG_CATALOG, ARG_DIAGNOSTICS, ARG_REFERENCE_POPULARITY, ARG_SENIOR_POPULARITY_FLOOR,
    ARG_SIGNALS, CliError, ENV_SIGNALS,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a JSON signals document (topics, sentiment, \
                 experience_level, keywords, tech_stack) against the \
                 distribution catalog and print the result as JSON.",
    about = "Score a profile against the catalog"
)]
#[ortho_config(prefix = "DISTROFIT")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing extracted profile signals.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) signals_path: Option<Utf8PathBuf>,
    /// Path to a JSON catalog; defaults to the shipped catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Popularity that normalises to 1.0.
    #[arg(long = ARG_REFERENCE_POPULARITY, value_name = "count")]
    #[serde(default)]
    pub(crate) reference_popularity: Option<u32>,
    /// Minimum popularity considered for senior profiles.
    #[arg(long = ARG_SENIOR_POPULARITY_FLOOR, value_name = "count")]
    #[serde(default)]
    pub(crate) senior_popularity_floor: Option<u32>,
    /// Print the full assessment instead of the score alone.
    #[arg(long = ARG_DIAGNOSTICS, action = ArgAction::SetTrue)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) diagnostics: bool,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    /// Path to the signals document.
    pub(crate) signals_path: Utf8PathBuf,
    /// Optional catalog override.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Weights with any overrides applied.
    pub(crate) weights: MatchWeights,
    /// Whether to print the full assessment.
    pub(crate) diagnostics: bool,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.signals_path, ARG_SIGNALS)?;
        if let Some(catalog) = &self.catalog {
            require_existing(catalog, ARG_CATALOG)?;
        }
        Ok(())
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let signals_path = args.signals_path.ok_or(CliError::MissingArgument {
            field: ARG_SIGNALS,
            env: ENV_SIGNALS,
        })?;
        let defaults = MatchWeights::default();
        let weights = MatchWeights {
            reference_popularity: args
                .reference_popularity
                .unwrap_or(defaults.reference_popularity),
            senior_popularity_floor: args
                .senior_popularity_floor
                .unwrap_or(defaults.senior_popularity_floor),
            ..defaults
        };
        Ok(Self {
            signals_path,
            catalog: args.catalog,
            weights,
            diagnostics: args.diagnostics,
        })
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &mut stdout)
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    write_score(&config, writer)
}

/// Score the configured signals and write the outcome as JSON.
pub(crate) fn write_score(config: &ScoreConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let engine = FitEngine::new(config.weights)?;
    let signals = load_signals(&config.signals_path)?;
    let catalog = load_catalog(config.catalog.as_deref())?;
    debug!(
        "scoring {} against {} catalog items",
        config.signals_path,
        catalog.len()
    );
    if config.diagnostics {
        write_json(writer, &engine.assess(&signals, &catalog))
    } else {
        write_json(writer, &engine.score(&signals, &catalog))
    }
}

/// Loads a JSON-encoded [`Signals`] document from disk.
pub(crate) fn load_signals(path: &Utf8Path) -> Result<Signals, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenSignals {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseSignals {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
