//! Owned place and review collections for one computation pass.

use crate::{Place, PlaceId, Review};

/// The places and reviews a single recommendation or listing runs over.
///
/// A snapshot owns its data, so a computation never observes later changes
/// made by whoever loaded it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    /// Places in the order the source returned them.
    pub places: Vec<Place>,
    /// Reviews in the order the source returned them.
    pub reviews: Vec<Review>,
}

impl Snapshot {
    /// Bundle loaded places and reviews.
    #[must_use]
    pub const fn new(places: Vec<Place>, reviews: Vec<Review>) -> Self {
        Self { places, reviews }
    }

    /// Report whether the snapshot holds no places.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Look up a place by identifier.
    #[must_use]
    pub fn place(&self, id: &PlaceId) -> Option<&Place> {
        self.places.iter().find(|place| place.id == *id)
    }

    /// Iterate over the reviews referencing `id`.
    pub fn reviews_for<'a>(&'a self, id: &'a PlaceId) -> impl Iterator<Item = &'a Review> + 'a {
        self.reviews.iter().filter(move |review| review.place_id == *id)
    }
}
