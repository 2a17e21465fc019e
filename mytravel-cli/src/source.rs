//! Data source selection shared by every subcommand.

use camino::{Utf8Path, Utf8PathBuf};
use mytravel_core::PlaceSource;
use mytravel_data::{HttpPlaceSource, SnapshotDirSource};

use crate::CliError;

/// Environment variables naming a subcommand's source options, used in
/// error messages.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SourceEnv {
    pub(crate) api_url: &'static str,
    pub(crate) snapshot_dir: &'static str,
}

/// Where a command loads places and reviews from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SourceConfig {
    /// The listing HTTP API at `base_url`.
    Http { base_url: String },
    /// A snapshot directory holding `places.json` and `reviews.json`.
    SnapshotDir { path: Utf8PathBuf },
}

impl SourceConfig {
    /// Pick exactly one configured source.
    pub(crate) fn resolve(
        api_url: Option<String>,
        snapshot_dir: Option<Utf8PathBuf>,
        env: SourceEnv,
    ) -> Result<Self, CliError> {
        match (api_url, snapshot_dir) {
            (Some(base_url), None) => Ok(Self::Http { base_url }),
            (None, Some(path)) => Ok(Self::SnapshotDir { path }),
            (Some(_), Some(_)) => Err(CliError::ConflictingSources),
            (None, None) => Err(CliError::MissingSource {
                api_env: env.api_url,
                snapshot_env: env.snapshot_dir,
            }),
        }
    }

    /// Check that a snapshot directory exists before any data is read.
    pub(crate) fn validate(&self) -> Result<(), CliError> {
        match self {
            Self::Http { .. } => Ok(()),
            Self::SnapshotDir { path } => require_directory(path),
        }
    }
}

fn require_directory(path: &Utf8Path) -> Result<(), CliError> {
    match path.metadata() {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(CliError::SnapshotPathNotDirectory {
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSnapshotDir {
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSnapshotDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Builds the data source for the current invocation.
pub(crate) trait SourceBuilder {
    fn build(&self, config: &SourceConfig) -> Result<Box<dyn PlaceSource>, CliError>;
}

pub(crate) struct DefaultSourceBuilder;

impl SourceBuilder for DefaultSourceBuilder {
    fn build(&self, config: &SourceConfig) -> Result<Box<dyn PlaceSource>, CliError> {
        match config {
            SourceConfig::Http { base_url } => {
                let source = HttpPlaceSource::new(base_url.clone()).map_err(|source| {
                    CliError::BuildSource {
                        base_url: base_url.clone(),
                        source,
                    }
                })?;
                Ok(Box::new(source))
            }
            SourceConfig::SnapshotDir { path } => Ok(Box::new(SnapshotDirSource::open(path)?)),
        }
    }
}
