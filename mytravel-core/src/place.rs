//! Places listed by the travel service and their rating aggregates.

use std::fmt;

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque identifier assigned to a place by the listing service.
///
/// # Examples
/// ```
/// use mytravel_core::PlaceId;
///
/// let id = PlaceId::from("665f1c");
/// assert_eq!(id.as_str(), "665f1c");
/// assert_eq!(id.to_string(), "665f1c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct PlaceId(String);

impl PlaceId {
    /// Wrap a raw identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlaceId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for PlaceId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// A travel destination.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. A place
/// without coordinates is still valid input; ranking treats its distance as
/// unknown.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use mytravel_core::Place;
///
/// let place = Place::new("a1", "Kawah Putih", Some(Coord { x: 107.40, y: -7.16 }))
///     .with_category("Wisata")
///     .with_description("Crater lake");
///
/// assert_eq!(place.id.as_str(), "a1");
/// assert_eq!(place.category, "Wisata");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Place {
    /// Identifier assigned by the listing service.
    pub id: PlaceId,
    /// Display name.
    pub name: String,
    /// Free-form category label, e.g. `"Kuliner"`.
    pub category: String,
    /// Geospatial position, when known.
    pub location: Option<Coord<f64>>,
    /// Reference to the stored photo, when one was uploaded.
    pub photo_id: Option<String>,
    /// Free-text description.
    pub description: String,
    /// Street address, when supplied.
    pub address: Option<String>,
    /// Creation time as Unix seconds, when supplied.
    pub created_at: Option<i64>,
}

impl Place {
    /// Construct a place with empty descriptive fields.
    pub fn new(
        id: impl Into<PlaceId>,
        name: impl Into<String>,
        location: Option<Coord<f64>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            location,
            photo_id: None,
            description: String::new(),
            address: None,
            created_at: None,
        }
    }

    /// Set the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the photo reference.
    #[must_use]
    pub fn with_photo(mut self, photo_id: impl Into<String>) -> Self {
        self.photo_id = Some(photo_id.into());
        self
    }

    /// Set the street address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the creation timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// A place together with the aggregate of its reviews.
///
/// `rating` is the arithmetic mean of the review ratings, or exactly `0.0`
/// when `review_count` is zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RatedPlace {
    /// The underlying place.
    pub place: Place,
    /// Number of reviews referencing the place.
    pub review_count: usize,
    /// Mean review rating.
    pub rating: f64,
}

impl RatedPlace {
    /// Wrap a place that has no reviews.
    #[must_use]
    pub const fn unrated(place: Place) -> Self {
        Self {
            place,
            review_count: 0,
            rating: 0.0,
        }
    }
}
