//! Facade crate for the MyTravel recommendation engine.
//!
//! This crate re-exports the domain types and the scorer, and exposes the
//! HTTP and snapshot data sources behind the `source-http` feature.

#![forbid(unsafe_code)]

pub use mytravel_core::{
    CatalogueSort, CategoryFilter, EARTH_RADIUS_KM, Place, PlaceId, PlaceSource, RatedPlace,
    Review, Snapshot, SourceError, categories, descending_nan_last, filter_by_category,
    haversine_km, load_snapshot, sort_places,
};
pub use mytravel_scorer::{
    DEFAULT_LIMIT, RecommendationWeights, Recommender, ScoredPlace, UNKNOWN_DISTANCE_KM,
    aggregate_ratings, recommend, recommend_snapshot,
};

#[cfg(feature = "source-http")]
pub use mytravel_data::{
    HttpPlaceSource, HttpPlaceSourceConfig, SnapshotDirSource, SourceBuildError,
};

#[cfg(feature = "test-support")]
pub use mytravel_core::test_support;
