//! User reviews attached to places.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::PlaceId;

/// A rating and comment left for one place.
///
/// Ratings are expected in `1.0..=5.0` but are not validated here; the
/// listing service owns that rule.
///
/// # Examples
/// ```
/// use mytravel_core::Review;
///
/// let review = Review::new("r1", "a1", 4.0).with_comment("Sejuk");
/// assert_eq!(review.place_id.as_str(), "a1");
/// assert_eq!(review.rating, 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Review {
    /// Identifier assigned by the listing service.
    pub id: String,
    /// The reviewed place.
    pub place_id: PlaceId,
    /// Numeric rating.
    pub rating: f64,
    /// Free-text comment.
    pub comment: String,
    /// Author, when the service exposes it.
    pub user_id: Option<String>,
    /// Creation time as Unix seconds, when supplied.
    pub created_at: Option<i64>,
}

impl Review {
    /// Construct a review without a comment.
    pub fn new(id: impl Into<String>, place_id: impl Into<PlaceId>, rating: f64) -> Self {
        Self {
            id: id.into(),
            place_id: place_id.into(),
            rating,
            comment: String::new(),
            user_id: None,
            created_at: None,
        }
    }

    /// Set the comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Set the author.
    #[must_use]
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}
