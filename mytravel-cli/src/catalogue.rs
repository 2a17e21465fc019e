//! `list` and `categories` command implementations.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use mytravel_core::{
    CatalogueSort, CategoryFilter, RatedPlace, categories, filter_by_category, load_snapshot,
    sort_places,
};
use mytravel_scorer::aggregate_ratings;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::render::{OutputFormat, write_categories, write_listing};
use crate::source::{DefaultSourceBuilder, SourceBuilder, SourceConfig, SourceEnv};
use crate::{
    ARG_API_URL, ARG_CATEGORY, ARG_FORMAT, ARG_SNAPSHOT_DIR, ARG_SORT, CliError,
    ENV_CATEGORIES_API_URL, ENV_CATEGORIES_SNAPSHOT_DIR, ENV_LIST_API_URL, ENV_LIST_SNAPSHOT_DIR,
};

/// CLI arguments for the `list` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List places with their review counts and mean ratings, \
                 optionally restricted to the selected categories and \
                 sorted. Repeat --category to select several.",
    about = "List places"
)]
#[ortho_config(prefix = "MYTRAVEL")]
pub(crate) struct ListArgs {
    /// Base URL of the listing API.
    #[arg(long = ARG_API_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) api_url: Option<String>,
    /// Directory containing places.json and reviews.json.
    #[arg(long = ARG_SNAPSHOT_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) snapshot_dir: Option<Utf8PathBuf>,
    /// Only list places in these categories ("all" lists everything).
    #[arg(long = ARG_CATEGORY, value_name = "name")]
    #[serde(default)]
    pub(crate) category: Vec<String>,
    /// Sort order: newest, rating, name or unsorted.
    #[arg(long = ARG_SORT, value_name = "order")]
    #[serde(default)]
    pub(crate) sort: Option<CatalogueSort>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

/// Resolved `list` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ListConfig {
    pub(crate) source: SourceConfig,
    pub(crate) filter: CategoryFilter,
    pub(crate) sort: CatalogueSort,
    pub(crate) format: OutputFormat,
}

impl TryFrom<ListArgs> for ListConfig {
    type Error = CliError;

    fn try_from(args: ListArgs) -> Result<Self, Self::Error> {
        let source = SourceConfig::resolve(
            args.api_url,
            args.snapshot_dir,
            SourceEnv {
                api_url: ENV_LIST_API_URL,
                snapshot_dir: ENV_LIST_SNAPSHOT_DIR,
            },
        )?;
        Ok(Self {
            source,
            filter: CategoryFilter::from_names(&args.category),
            sort: args.sort.unwrap_or_default(),
            format: args.format.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_list(args: ListArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_list_with(args, &DefaultSourceBuilder, &mut stdout)
}

pub(crate) fn run_list_with(
    args: ListArgs,
    builder: &dyn SourceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = ListConfig::try_from(merged)?;
    let listing = execute_list(&config, builder)?;
    write_listing(writer, &listing, config.format)
}

fn execute_list(
    config: &ListConfig,
    builder: &dyn SourceBuilder,
) -> Result<Vec<RatedPlace>, CliError> {
    config.source.validate()?;
    let source = builder.build(&config.source)?;
    let snapshot = load_snapshot(source.as_ref())?;
    let rated = aggregate_ratings(&snapshot.places, &snapshot.reviews);
    let mut listing = filter_by_category(rated, &config.filter);
    sort_places(&mut listing, config.sort);
    Ok(listing)
}

/// CLI arguments for the `categories` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the distinct place categories")]
#[ortho_config(prefix = "MYTRAVEL")]
pub(crate) struct CategoriesArgs {
    /// Base URL of the listing API.
    #[arg(long = ARG_API_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) api_url: Option<String>,
    /// Directory containing places.json.
    #[arg(long = ARG_SNAPSHOT_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) snapshot_dir: Option<Utf8PathBuf>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

pub(crate) fn run_categories(args: CategoriesArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_categories_with(args, &DefaultSourceBuilder, &mut stdout)
}

pub(crate) fn run_categories_with(
    args: CategoriesArgs,
    builder: &dyn SourceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let source_config = SourceConfig::resolve(
        merged.api_url,
        merged.snapshot_dir,
        SourceEnv {
            api_url: ENV_CATEGORIES_API_URL,
            snapshot_dir: ENV_CATEGORIES_SNAPSHOT_DIR,
        },
    )?;
    source_config.validate()?;
    let source = builder.build(&source_config)?;
    let places = source.places()?;
    write_categories(
        writer,
        &categories(&places),
        merged.format.unwrap_or_default(),
    )
}
