//! Load places and reviews from wherever the listing service keeps them.
//!
//! The [`PlaceSource`] trait abstracts retrieval so computations can run
//! against an HTTP API, files on disk, or in-memory fixtures. Loading is
//! synchronous and sequential: [`load_snapshot`] fetches places first and
//! reviews second, then hands back an owned [`Snapshot`].

use log::debug;
use thiserror::Error;

use crate::{Place, PlaceId, Review, Snapshot};

/// Errors raised while loading places or reviews.
///
/// Variants carry rendered messages rather than source errors so the type
/// stays `Clone` and comparable in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Timeout that elapsed, in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("request to {url} failed with HTTP {status}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The service could not be reached.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Error description.
        message: String,
    },
    /// The service answered with an `{"error": ...}` payload.
    #[error("service at {url} reported an error: {message}")]
    Service {
        /// Requested URL.
        url: String,
        /// Message reported by the service.
        message: String,
    },
    /// A payload was not the JSON shape expected.
    #[error("failed to decode {resource}: {message}")]
    Decode {
        /// URL or path the payload came from.
        resource: String,
        /// Error description.
        message: String,
    },
    /// Reading local data failed.
    #[error("failed to read {path}: {message}")]
    Io {
        /// Path that could not be read.
        path: String,
        /// Error description.
        message: String,
    },
    /// The blocking runtime needed to drive a request could not be started.
    #[error("failed to start request runtime: {message}")]
    Runtime {
        /// Error description.
        message: String,
    },
}

/// Retrieve places and reviews.
///
/// # Examples
///
/// ```rust
/// use mytravel_core::{Place, PlaceSource, Review, SourceError, load_snapshot};
///
/// struct Fixed;
///
/// impl PlaceSource for Fixed {
///     fn places(&self) -> Result<Vec<Place>, SourceError> {
///         Ok(vec![Place::new("a", "Braga", None)])
///     }
///
///     fn reviews(&self) -> Result<Vec<Review>, SourceError> {
///         Ok(vec![Review::new("r1", "a", 4.0)])
///     }
/// }
///
/// let snapshot = load_snapshot(&Fixed)?;
/// assert_eq!(snapshot.places.len(), 1);
/// assert_eq!(snapshot.reviews.len(), 1);
/// # Ok::<(), SourceError>(())
/// ```
pub trait PlaceSource {
    /// Return every listed place.
    fn places(&self) -> Result<Vec<Place>, SourceError>;

    /// Return every review.
    fn reviews(&self) -> Result<Vec<Review>, SourceError>;

    /// Return the reviews for one place.
    ///
    /// The default implementation filters [`PlaceSource::reviews`];
    /// sources that can query by place should override it.
    fn reviews_for_place(&self, place_id: &PlaceId) -> Result<Vec<Review>, SourceError> {
        let reviews = self.reviews()?;
        Ok(reviews
            .into_iter()
            .filter(|review| review.place_id == *place_id)
            .collect())
    }
}

impl<S: PlaceSource + ?Sized> PlaceSource for Box<S> {
    fn places(&self) -> Result<Vec<Place>, SourceError> {
        (**self).places()
    }

    fn reviews(&self) -> Result<Vec<Review>, SourceError> {
        (**self).reviews()
    }

    fn reviews_for_place(&self, place_id: &PlaceId) -> Result<Vec<Review>, SourceError> {
        (**self).reviews_for_place(place_id)
    }
}

/// Load places, then reviews, into an owned [`Snapshot`].
///
/// # Errors
/// Returns the first [`SourceError`] raised by `source`; reviews are not
/// requested when loading places fails.
pub fn load_snapshot<S: PlaceSource + ?Sized>(source: &S) -> Result<Snapshot, SourceError> {
    let places = source.places()?;
    let reviews = source.reviews()?;
    debug!(
        "loaded snapshot with {} places and {} reviews",
        places.len(),
        reviews.len()
    );
    Ok(Snapshot::new(places, reviews))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::test_support::MemorySource;

    #[rstest]
    fn loads_places_and_reviews() {
        let source = MemorySource::new(
            vec![Place::new("a", "A", None)],
            vec![Review::new("r1", "a", 5.0), Review::new("r2", "b", 1.0)],
        );

        let snapshot = load_snapshot(&source).expect("snapshot loads");

        assert_eq!(snapshot.places.len(), 1);
        assert_eq!(snapshot.reviews.len(), 2);
    }

    #[rstest]
    fn default_reviews_for_place_filters_by_reference() {
        let source = MemorySource::new(
            Vec::new(),
            vec![Review::new("r1", "a", 5.0), Review::new("r2", "b", 1.0)],
        );

        let reviews = source
            .reviews_for_place(&PlaceId::from("b"))
            .expect("reviews load");

        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].id, "r2");
    }

    #[rstest]
    fn propagates_source_failure() {
        let failure = SourceError::Network {
            url: "http://example.test/api/places".into(),
            message: "connection refused".into(),
        };
        let source = MemorySource::failing(failure.clone());

        let err = load_snapshot(&source).expect_err("load should fail");

        assert_eq!(err, failure);
    }
}
