//! Join reviews onto places.

use std::collections::{HashMap, HashSet};

use log::debug;
use mytravel_core::{Place, PlaceId, RatedPlace, Review};

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    count: usize,
    sum: f64,
}

impl Tally {
    #[expect(
        clippy::float_arithmetic,
        reason = "accumulating ratings requires floating-point addition"
    )]
    fn add(&mut self, rating: f64) {
        self.count += 1;
        self.sum += rating;
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "the mean divides the rating sum by the review count"
    )]
    fn mean(self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum / self.count as f64
    }
}

/// Attach review counts and mean ratings to `places`.
///
/// Returns one [`RatedPlace`] per input place, in input order. Reviews are
/// grouped by place reference in one pass, so the cost is linear in the
/// combined input size. Places without reviews get a count of zero and a
/// rating of exactly `0.0`. Reviews for places absent from `places` are
/// ignored.
///
/// # Examples
/// ```
/// use mytravel_core::{Place, Review};
/// use mytravel_scorer::aggregate_ratings;
///
/// let places = vec![Place::new("a", "Braga", None), Place::new("b", "Dago", None)];
/// let reviews = vec![Review::new("r1", "a", 5.0), Review::new("r2", "a", 3.0)];
///
/// let rated = aggregate_ratings(&places, &reviews);
/// assert_eq!(rated[0].review_count, 2);
/// assert_eq!(rated[0].rating, 4.0);
/// assert_eq!(rated[1].review_count, 0);
/// assert_eq!(rated[1].rating, 0.0);
/// ```
#[must_use]
pub fn aggregate_ratings(places: &[Place], reviews: &[Review]) -> Vec<RatedPlace> {
    let mut tallies: HashMap<&PlaceId, Tally> = HashMap::with_capacity(places.len());
    for review in reviews {
        tallies.entry(&review.place_id).or_default().add(review.rating);
    }

    let known: HashSet<&PlaceId> = places.iter().map(|place| &place.id).collect();
    let orphaned: usize = tallies
        .iter()
        .filter(|(id, _)| !known.contains(*id))
        .map(|(_, tally)| tally.count)
        .sum();
    if orphaned > 0 {
        debug!("ignored {orphaned} reviews referencing unknown places");
    }

    places
        .iter()
        .map(|place| match tallies.get(&place.id) {
            Some(tally) => RatedPlace {
                place: place.clone(),
                review_count: tally.count,
                rating: tally.mean(),
            },
            None => RatedPlace::unrated(place.clone()),
        })
        .collect()
}
