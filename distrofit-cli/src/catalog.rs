//! Catalog command implementation and catalog loading shared with `score`.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use distrofit_core::Catalog;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::{open_utf8_file, require_existing};
use crate::{ARG_CATALOG, CliError};

/// CLI arguments for the `catalog` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load a catalog, validate every entry and print it as JSON. \
                 Without --catalog the shipped catalog is printed.",
    about = "Validate and print a distribution catalog"
)]
#[ortho_config(prefix = "DISTROFIT")]
pub(crate) struct CatalogArgs {
    /// Path to a JSON catalog; defaults to the shipped catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl CatalogArgs {
    pub(crate) fn into_config(self) -> Result<CatalogConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(CatalogConfig::from(merged))
    }
}

/// Resolved `catalog` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CatalogConfig {
    /// Optional catalog override.
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl CatalogConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        self.catalog
            .as_deref()
            .map_or(Ok(()), |path| require_existing(path, ARG_CATALOG))
    }
}

impl From<CatalogArgs> for CatalogConfig {
    fn from(args: CatalogArgs) -> Self {
        Self {
            catalog: args.catalog,
        }
    }
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_catalog_with(args, &mut stdout)
}

pub(crate) fn run_catalog_with(args: CatalogArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let catalog = load_catalog(config.catalog.as_deref())?;
    write_json(writer, &catalog)
}

/// Load the catalog at `path`, or the shipped catalog when no path is given.
pub(crate) fn load_catalog(source: Option<&Utf8Path>) -> Result<Catalog, CliError> {
    let Some(path) = source else {
        return Ok(Catalog::builtin());
    };
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: Catalog = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        CliError::ParseCatalog {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!("loaded {} catalog items from {path}", catalog.len());
    Ok(catalog)
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
