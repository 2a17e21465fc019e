//! `reviews` command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use mytravel_core::PlaceId;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::render::{OutputFormat, write_reviews};
use crate::source::{DefaultSourceBuilder, SourceBuilder, SourceConfig, SourceEnv};
use crate::{
    ARG_API_URL, ARG_FORMAT, ARG_PLACE_ID, ARG_SNAPSHOT_DIR, CliError, ENV_REVIEWS_API_URL,
    ENV_REVIEWS_PLACE_ID, ENV_REVIEWS_SNAPSHOT_DIR,
};

/// CLI arguments for the `reviews` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Show the reviews left for one place")]
#[ortho_config(prefix = "MYTRAVEL")]
pub(crate) struct ReviewsArgs {
    /// Identifier of the place.
    #[arg(value_name = "place-id")]
    #[serde(default)]
    pub(crate) place_id: Option<String>,
    /// Base URL of the listing API.
    #[arg(long = ARG_API_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) api_url: Option<String>,
    /// Directory containing places.json and reviews.json.
    #[arg(long = ARG_SNAPSHOT_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) snapshot_dir: Option<Utf8PathBuf>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

/// Resolved `reviews` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReviewsConfig {
    pub(crate) place_id: PlaceId,
    pub(crate) source: SourceConfig,
    pub(crate) format: OutputFormat,
}

impl TryFrom<ReviewsArgs> for ReviewsConfig {
    type Error = CliError;

    fn try_from(args: ReviewsArgs) -> Result<Self, Self::Error> {
        let place_id = args
            .place_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_PLACE_ID,
                env: ENV_REVIEWS_PLACE_ID,
            })?;
        let source = SourceConfig::resolve(
            args.api_url,
            args.snapshot_dir,
            SourceEnv {
                api_url: ENV_REVIEWS_API_URL,
                snapshot_dir: ENV_REVIEWS_SNAPSHOT_DIR,
            },
        )?;
        Ok(Self {
            place_id: PlaceId::new(place_id),
            source,
            format: args.format.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_reviews(args: ReviewsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_reviews_with(args, &DefaultSourceBuilder, &mut stdout)
}

pub(crate) fn run_reviews_with(
    args: ReviewsArgs,
    builder: &dyn SourceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = ReviewsConfig::try_from(merged)?;
    config.source.validate()?;
    let source = builder.build(&config.source)?;
    let reviews = source.reviews_for_place(&config.place_id)?;
    write_reviews(writer, &reviews, config.format)
}
