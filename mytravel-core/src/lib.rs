//! Core domain types for the MyTravel recommendation engine.
//!
//! Places and reviews are owned by a remote listing service; this crate
//! models them as immutable snapshot data and provides the pure helpers the
//! rest of the workspace builds on: great-circle distance, catalogue
//! filtering and sorting, and the [`PlaceSource`] seam used to load data.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalogue;
pub mod distance;
pub mod place;
pub mod review;
pub mod snapshot;
pub mod source;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalogue::{
    CatalogueSort, CategoryFilter, ParseSortError, categories, descending_nan_last,
    filter_by_category, sort_places,
};
pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use place::{Place, PlaceId, RatedPlace};
pub use review::Review;
pub use snapshot::Snapshot;
pub use source::{PlaceSource, SourceError, load_snapshot};
