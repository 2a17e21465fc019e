//! Public configuration and output types for recommendation scoring.
#![forbid(unsafe_code)]

use mytravel_core::Place;
use serde::{Deserialize, Serialize};

/// Distance assigned when no reference location (or no place location) is
/// available, in kilometres.
pub const UNKNOWN_DISTANCE_KM: f64 = 999.0;

/// Number of recommendations returned when the caller does not choose.
pub const DEFAULT_LIMIT: usize = 6;

/// Weights of the linear recommendation score.
///
/// `score = rating * rating_weight
///        + review_count * review_count_weight
///        + (proximity_base_km - distance_km)`
///
/// The proximity term is a bonus that shrinks with distance and turns
/// negative beyond `proximity_base_km`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationWeights {
    /// Multiplier applied to the mean rating.
    pub rating_weight: f64,
    /// Multiplier applied to the review count.
    pub review_count_weight: f64,
    /// Distance at which the proximity bonus reaches zero, in kilometres.
    pub proximity_base_km: f64,
    /// Distance used when proximity cannot be computed, in kilometres.
    pub unknown_distance_km: f64,
}

impl Default for RecommendationWeights {
    fn default() -> Self {
        Self {
            rating_weight: 2.0,
            review_count_weight: 1.0,
            proximity_base_km: 100.0,
            unknown_distance_km: UNKNOWN_DISTANCE_KM,
        }
    }
}

impl RecommendationWeights {
    /// Combine the three signals into a score.
    ///
    /// # Examples
    /// ```
    /// use mytravel_scorer::RecommendationWeights;
    ///
    /// let weights = RecommendationWeights::default();
    /// assert_eq!(weights.score(4.0, 2, 0.0), 110.0);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "the recommendation score is a floating-point weighted sum of counts"
    )]
    pub fn score(&self, rating: f64, review_count: usize, distance_km: f64) -> f64 {
        rating * self.rating_weight
            + review_count as f64 * self.review_count_weight
            + (self.proximity_base_km - distance_km)
    }
}

/// A ranked recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPlace {
    /// The recommended place.
    pub place: Place,
    /// Number of reviews referencing the place.
    pub review_count: usize,
    /// Mean review rating, `0.0` when unreviewed.
    pub rating: f64,
    /// Distance to the reference location, or the unknown-distance sentinel.
    pub distance_km: f64,
    /// Composite score the ranking sorts by.
    pub score: f64,
}
