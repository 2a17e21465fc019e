//! Test-only, in-memory `PlaceSource` implementation used by unit and
//! behaviour tests.

use crate::{Place, PlaceSource, Review, SourceError};

/// In-memory `PlaceSource` returning fixed data or a fixed error.
#[derive(Default, Debug, Clone)]
pub struct MemorySource {
    places: Vec<Place>,
    reviews: Vec<Review>,
    failure: Option<SourceError>,
}

impl MemorySource {
    /// Create a source serving the given places and reviews.
    #[must_use]
    pub const fn new(places: Vec<Place>, reviews: Vec<Review>) -> Self {
        Self {
            places,
            reviews,
            failure: None,
        }
    }

    /// Create a source whose every call fails with `error`.
    #[must_use]
    pub const fn failing(error: SourceError) -> Self {
        Self {
            places: Vec::new(),
            reviews: Vec::new(),
            failure: Some(error),
        }
    }

    fn check(&self) -> Result<(), SourceError> {
        self.failure.clone().map_or(Ok(()), Err)
    }
}

impl PlaceSource for MemorySource {
    fn places(&self) -> Result<Vec<Place>, SourceError> {
        self.check()?;
        Ok(self.places.clone())
    }

    fn reviews(&self) -> Result<Vec<Review>, SourceError> {
        self.check()?;
        Ok(self.reviews.clone())
    }
}
