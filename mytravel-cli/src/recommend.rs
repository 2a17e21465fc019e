//! Recommend command implementation for the MyTravel CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use geo::Coord;
use log::info;
use mytravel_core::load_snapshot;
use mytravel_scorer::{DEFAULT_LIMIT, ScoredPlace, recommend_snapshot};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::render::{OutputFormat, write_recommendations};
use crate::source::{DefaultSourceBuilder, SourceBuilder, SourceConfig, SourceEnv};
use crate::{
    ARG_API_URL, ARG_FORMAT, ARG_LAT, ARG_LIMIT, ARG_LNG, ARG_SNAPSHOT_DIR, CliError,
    ENV_RECOMMEND_API_URL, ENV_RECOMMEND_SNAPSHOT_DIR,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank places by mean rating, review volume and proximity to \
                 an optional reference location, and print the best few. \
                 Options can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Recommend places",
    allow_negative_numbers = true
)]
#[ortho_config(prefix = "MYTRAVEL")]
pub(crate) struct RecommendArgs {
    /// Base URL of the listing API (e.g. "http://localhost:8080").
    #[arg(long = ARG_API_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) api_url: Option<String>,
    /// Directory containing places.json and reviews.json.
    #[arg(long = ARG_SNAPSHOT_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) snapshot_dir: Option<Utf8PathBuf>,
    /// Latitude of the reference location.
    #[arg(long = ARG_LAT, value_name = "degrees")]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the reference location.
    #[arg(long = ARG_LNG, value_name = "degrees")]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Number of recommendations to print (default 6).
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    pub(crate) source: SourceConfig,
    /// Reference location as `x = longitude`, `y = latitude`.
    pub(crate) reference: Option<Coord<f64>>,
    pub(crate) limit: usize,
    pub(crate) format: OutputFormat,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let source = SourceConfig::resolve(
            args.api_url,
            args.snapshot_dir,
            SourceEnv {
                api_url: ENV_RECOMMEND_API_URL,
                snapshot_dir: ENV_RECOMMEND_SNAPSHOT_DIR,
            },
        )?;
        let reference = reference_location(args.lat, args.lng)?;
        Ok(Self {
            source,
            reference,
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
            format: args.format.unwrap_or_default(),
        })
    }
}

/// Combine `--lat` and `--lng`; both or neither must be set.
pub(crate) fn reference_location(
    lat: Option<f64>,
    lng: Option<f64>,
) -> Result<Option<Coord<f64>>, CliError> {
    match (lat, lng) {
        (None, None) => Ok(None),
        (Some(_), None) => Err(CliError::PartialReference { provided: ARG_LAT }),
        (None, Some(_)) => Err(CliError::PartialReference { provided: ARG_LNG }),
        (Some(lat), Some(lng)) => {
            if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng) {
                Ok(Some(Coord { x: lng, y: lat }))
            } else {
                Err(CliError::InvalidReference { lat, lng })
            }
        }
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &DefaultSourceBuilder, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn SourceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let ranked = execute_recommend(&config, builder)?;
    write_recommendations(
        writer,
        &ranked,
        config.format,
        config.reference.is_some(),
    )
}

fn execute_recommend(
    config: &RecommendConfig,
    builder: &dyn SourceBuilder,
) -> Result<Vec<ScoredPlace>, CliError> {
    config.source.validate()?;
    let source = builder.build(&config.source)?;
    let snapshot = load_snapshot(source.as_ref())?;
    let ranked = recommend_snapshot(&snapshot, config.reference, config.limit);
    info!(
        "recommended {} of {} places",
        ranked.len(),
        snapshot.places.len()
    );
    Ok(ranked)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
