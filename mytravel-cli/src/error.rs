//! Error types emitted by the MyTravel CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use mytravel_core::SourceError;
use mytravel_data::SourceBuildError;
use thiserror::Error;

/// Errors emitted by the MyTravel CLI.
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
        /// Long flag name of the option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Neither data source option was supplied.
    #[error("no data source configured (set --api-url or --snapshot-dir, or {api_env} or {snapshot_env})")]
    MissingSource {
        /// Environment variable for the API URL.
        api_env: &'static str,
        /// Environment variable for the snapshot directory.
        snapshot_env: &'static str,
    },
    /// Both data source options were supplied.
    #[error("--api-url and --snapshot-dir are mutually exclusive")]
    ConflictingSources,
    /// Only one half of the reference location was supplied.
    #[error("reference location needs both --lat and --lng (only --{provided} was set)")]
    PartialReference {
        /// The flag that was supplied.
        provided: &'static str,
    },
    /// The reference location is outside WGS84 bounds.
    #[error("reference location ({lat}, {lng}) is not a valid coordinate")]
    InvalidReference {
        /// Latitude supplied.
        lat: f64,
        /// Longitude supplied.
        lng: f64,
    },
    /// The snapshot directory does not exist.
    #[error("snapshot directory {path:?} does not exist")]
    MissingSnapshotDir {
        /// Path supplied.
        path: Utf8PathBuf,
    },
    /// The snapshot path exists but is not a directory.
    #[error("snapshot path {path:?} exists but is not a directory")]
    SnapshotPathNotDirectory {
        /// Path supplied.
        path: Utf8PathBuf,
    },
    /// The snapshot path could not be inspected.
    #[error("failed to inspect snapshot path {path:?}: {source}")]
    InspectSnapshotDir {
        /// Path supplied.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Constructing the HTTP data source failed.
    #[error("failed to build data source for {base_url:?}: {source}")]
    BuildSource {
        /// Base URL supplied.
        base_url: String,
        /// Underlying construction error.
        #[source]
        source: SourceBuildError,
    },
    /// Loading places or reviews failed.
    #[error("failed to load data: {0}")]
    Load(#[from] SourceError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
