//! Error types emitted by the Mesa CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use mesa_core::ConfigError;
use mesa_data::LoadError;
use thiserror::Error;

/// Errors emitted by the Mesa CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Some but not all bounding box edges were supplied.
    #[error("bounding box is incomplete: --{missing} is required when any edge is set")]
    IncompleteBounds { missing: &'static str },
    /// The rating histogram was asked for zero bins.
    #[error("--histogram-bins must be at least 1")]
    ZeroHistogramBins,
    /// The ranking settings failed validation.
    #[error("invalid ranking configuration: {0}")]
    InvalidRanking(#[from] ConfigError),
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading the listings export failed.
    #[error("failed to load listings: {0}")]
    Load(#[from] LoadError),
    /// The output file could not be created.
    #[error("failed to create output file {path:?}: {source}")]
    CreateOutput {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Serializing the ranking output failed.
    #[error("failed to serialize ranking output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the ranking output failed.
    #[error("failed to write ranking output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
