//! Score and rank rated places.

use geo::Coord;
use log::debug;
use mytravel_core::{Place, RatedPlace, descending_nan_last, haversine_km};

use crate::types::{RecommendationWeights, ScoredPlace};

/// Ranks places by the weighted recommendation score.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use mytravel_core::{Place, RatedPlace};
/// use mytravel_scorer::Recommender;
///
/// let near = RatedPlace::unrated(Place::new("near", "Near", Some(Coord { x: 0.0, y: 0.0 })));
/// let far = RatedPlace::unrated(Place::new("far", "Far", Some(Coord { x: 1.0, y: 0.0 })));
///
/// let ranked = Recommender::default().recommend(vec![far, near], Some(Coord { x: 0.0, y: 0.0 }), 1);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].place.id.as_str(), "near");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Recommender {
    weights: RecommendationWeights,
}

impl Recommender {
    /// Build a recommender with explicit weights.
    #[must_use]
    pub const fn new(weights: RecommendationWeights) -> Self {
        Self { weights }
    }

    /// Return the weights in use.
    #[must_use]
    pub const fn weights(&self) -> &RecommendationWeights {
        &self.weights
    }

    /// Distance from `reference` to `place` in kilometres.
    ///
    /// Falls back to the unknown-distance sentinel when either location is
    /// missing.
    #[must_use]
    pub fn distance_km(&self, place: &Place, reference: Option<Coord<f64>>) -> f64 {
        match (reference, place.location) {
            (Some(origin), Some(location)) => haversine_km(origin, location),
            _ => self.weights.unknown_distance_km,
        }
    }

    /// Score every place without reordering or truncating.
    #[must_use]
    pub fn score_all(
        &self,
        rated: Vec<RatedPlace>,
        reference: Option<Coord<f64>>,
    ) -> Vec<ScoredPlace> {
        rated
            .into_iter()
            .map(|entry| {
                let distance_km = self.distance_km(&entry.place, reference);
                let score = self
                    .weights
                    .score(entry.rating, entry.review_count, distance_km);
                ScoredPlace {
                    place: entry.place,
                    review_count: entry.review_count,
                    rating: entry.rating,
                    distance_km,
                    score,
                }
            })
            .collect()
    }

    /// Score, rank and keep the best `limit` places.
    ///
    /// Ranking is by descending score and stable, so equal scores keep their
    /// input order. `NaN` scores rank below every other score. An empty
    /// input or a `limit` of zero yields an empty result; a `limit` beyond
    /// the input size returns every place.
    #[must_use]
    pub fn recommend(
        &self,
        rated: Vec<RatedPlace>,
        reference: Option<Coord<f64>>,
        limit: usize,
    ) -> Vec<ScoredPlace> {
        let mut scored = self.score_all(rated, reference);
        let candidates = scored.len();
        scored.sort_by(|a, b| descending_nan_last(a.score, b.score));
        scored.truncate(limit);
        debug!(
            "ranked {candidates} places (reference location: {}), kept {}",
            if reference.is_some() { "set" } else { "unset" },
            scored.len()
        );
        scored
    }
}
