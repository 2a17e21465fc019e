//! Recommendation scoring for MyTravel places.
//!
//! The crate provides the two halves of the "recommended for you" view:
//! - **Rating aggregation** joins reviews to places in a single pass and
//!   yields each place's review count and mean rating
//!   ([`aggregate_ratings`]).
//! - **Scoring and ranking** combines the mean rating, the review volume and
//!   the proximity to an optional reference location into one score, ranks
//!   places by it and keeps the top N ([`Recommender`]).
//!
//! Both steps are pure: they borrow or consume their inputs and return new
//! collections, so callers can run them over a loaded
//! [`Snapshot`](mytravel_core::Snapshot) without sharing mutable state.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use mytravel_core::{Place, Review};
//! use mytravel_scorer::{DEFAULT_LIMIT, recommend};
//!
//! let places = vec![
//!     Place::new("a", "Gedung Sate", Some(Coord { x: 107.618, y: -6.902 })),
//!     Place::new("b", "Kawah Putih", Some(Coord { x: 107.402, y: -7.166 })),
//! ];
//! let reviews = vec![Review::new("r1", "b", 5.0)];
//! let here = Some(Coord { x: 107.619, y: -6.917 });
//!
//! let ranked = recommend(&places, &reviews, here, DEFAULT_LIMIT);
//! assert_eq!(ranked.len(), 2);
//! assert_eq!(ranked[0].place.id.as_str(), "a");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use geo::Coord;
use mytravel_core::{Place, Review, Snapshot};

mod aggregate;
mod rank;
mod types;

pub use aggregate::aggregate_ratings;
pub use rank::Recommender;
pub use types::{DEFAULT_LIMIT, RecommendationWeights, ScoredPlace, UNKNOWN_DISTANCE_KM};

/// Aggregate `reviews` onto `places` and return the top `limit` by score,
/// using the default [`RecommendationWeights`].
#[must_use]
pub fn recommend(
    places: &[Place],
    reviews: &[Review],
    reference: Option<Coord<f64>>,
    limit: usize,
) -> Vec<ScoredPlace> {
    Recommender::default().recommend(aggregate_ratings(places, reviews), reference, limit)
}

/// Run [`recommend`] over a loaded snapshot.
#[must_use]
pub fn recommend_snapshot(
    snapshot: &Snapshot,
    reference: Option<Coord<f64>>,
    limit: usize,
) -> Vec<ScoredPlace> {
    recommend(&snapshot.places, &snapshot.reviews, reference, limit)
}

#[cfg(test)]
mod tests;
