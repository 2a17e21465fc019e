//! Command-line interface for MyTravel place recommendations.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod catalogue;
mod error;
mod recommend;
mod render;
mod reviews;
mod source;

pub use error::CliError;

use catalogue::{CategoriesArgs, ListArgs, run_categories, run_list};
use recommend::{RecommendArgs, run_recommend};
use reviews::{ReviewsArgs, run_reviews};

const ARG_API_URL: &str = "api-url";
const ARG_SNAPSHOT_DIR: &str = "snapshot-dir";
const ARG_LAT: &str = "lat";
const ARG_LNG: &str = "lng";
const ARG_LIMIT: &str = "limit";
const ARG_FORMAT: &str = "format";
const ARG_CATEGORY: &str = "category";
const ARG_SORT: &str = "sort";
const ARG_PLACE_ID: &str = "place-id";
const ENV_RECOMMEND_API_URL: &str = "MYTRAVEL_CMDS_RECOMMEND_API_URL";
const ENV_RECOMMEND_SNAPSHOT_DIR: &str = "MYTRAVEL_CMDS_RECOMMEND_SNAPSHOT_DIR";
const ENV_LIST_API_URL: &str = "MYTRAVEL_CMDS_LIST_API_URL";
const ENV_LIST_SNAPSHOT_DIR: &str = "MYTRAVEL_CMDS_LIST_SNAPSHOT_DIR";
const ENV_CATEGORIES_API_URL: &str = "MYTRAVEL_CMDS_CATEGORIES_API_URL";
const ENV_CATEGORIES_SNAPSHOT_DIR: &str = "MYTRAVEL_CMDS_CATEGORIES_SNAPSHOT_DIR";
const ENV_REVIEWS_API_URL: &str = "MYTRAVEL_CMDS_REVIEWS_API_URL";
const ENV_REVIEWS_SNAPSHOT_DIR: &str = "MYTRAVEL_CMDS_REVIEWS_SNAPSHOT_DIR";
const ENV_REVIEWS_PLACE_ID: &str = "MYTRAVEL_CMDS_REVIEWS_PLACE_ID";

/// Run the MyTravel CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments or configuration are invalid, data
/// cannot be loaded, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::List(args) => run_list(args),
        Command::Categories(args) => run_categories(args),
        Command::Reviews(args) => run_reviews(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "mytravel",
    about = "Browse and rank MyTravel places",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank places for a "recommended for you" view.
    Recommend(RecommendArgs),
    /// List places with their aggregated ratings.
    List(ListArgs),
    /// List the distinct place categories.
    Categories(CategoriesArgs),
    /// Show the reviews of one place.
    Reviews(ReviewsArgs),
}

#[cfg(test)]
mod tests;
