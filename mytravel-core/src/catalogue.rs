//! Browse helpers for the place catalogue.
//!
//! These cover the list and map views: discovering the distinct categories,
//! narrowing to the selected categories, and ordering places by recency,
//! rating or name. Every ordering is stable so equal entries keep their
//! input order.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Place, RatedPlace};

/// Return the distinct categories of `places` in first-seen order.
///
/// Places without a category (empty or whitespace-only) are not listed.
///
/// # Examples
/// ```
/// use mytravel_core::{Place, categories};
///
/// let places = vec![
///     Place::new("1", "Braga", None).with_category("Belanja"),
///     Place::new("2", "Kawah Putih", None).with_category("Wisata"),
///     Place::new("3", "Paris Van Java", None).with_category("Belanja"),
///     Place::new("4", "Tanpa Label", None),
/// ];
/// assert_eq!(categories(&places), vec!["Belanja", "Wisata"]);
/// ```
#[must_use]
pub fn categories(places: &[Place]) -> Vec<&str> {
    let mut seen = HashSet::new();
    places
        .iter()
        .map(|place| place.category.as_str())
        .filter(|category| !category.trim().is_empty())
        .filter(|category| seen.insert(*category))
        .collect()
}

/// Which categories a listing should include.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Keep every place.
    #[default]
    All,
    /// Keep places whose category matches exactly.
    Only(String),
    /// Keep places whose category matches any of the names exactly.
    AnyOf(Vec<String>),
}

impl CategoryFilter {
    /// Build a filter from an optional category name.
    ///
    /// `None` and the literal `"all"` both select every place.
    #[must_use]
    pub fn from_option(category: Option<&str>) -> Self {
        match category {
            None | Some("all") => Self::All,
            Some(name) => Self::Only(name.to_owned()),
        }
    }

    /// Build a filter from a set of selected category names.
    ///
    /// An empty selection, or one containing `"all"`, selects every place.
    /// Repeated names are kept once.
    ///
    /// # Examples
    /// ```
    /// use mytravel_core::CategoryFilter;
    ///
    /// assert_eq!(CategoryFilter::from_names::<&str>(&[]), CategoryFilter::All);
    /// assert_eq!(
    ///     CategoryFilter::from_names(&["Taman"]),
    ///     CategoryFilter::Only("Taman".into())
    /// );
    /// assert_eq!(
    ///     CategoryFilter::from_names(&["Taman", "Kuliner", "Taman"]),
    ///     CategoryFilter::AnyOf(vec!["Taman".into(), "Kuliner".into()])
    /// );
    /// ```
    #[must_use]
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut seen = HashSet::new();
        let mut selected: Vec<String> = Vec::new();
        for name in names.iter().map(AsRef::as_ref) {
            if name == "all" {
                return Self::All;
            }
            if seen.insert(name) {
                selected.push(name.to_owned());
            }
        }
        match selected.len() {
            0 => Self::All,
            1 => selected.pop().map_or(Self::All, Self::Only),
            _ => Self::AnyOf(selected),
        }
    }

    /// Report whether `place` passes the filter.
    #[must_use]
    pub fn matches(&self, place: &Place) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => place.category == *category,
            Self::AnyOf(selected) => selected.iter().any(|category| place.category == *category),
        }
    }
}

/// Keep the entries of `places` accepted by `filter`, preserving order.
#[must_use]
pub fn filter_by_category(places: Vec<RatedPlace>, filter: &CategoryFilter) -> Vec<RatedPlace> {
    places
        .into_iter()
        .filter(|rated| filter.matches(&rated.place))
        .collect()
}

/// Orderings offered by the catalogue listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum CatalogueSort {
    /// Keep the order supplied by the listing service.
    #[default]
    Unsorted,
    /// Most recently created first; places without a timestamp go last.
    Newest,
    /// Highest mean rating first; `NaN` ratings go last.
    Rating,
    /// Alphabetical by name, ignoring case.
    Name,
}

/// Error returned when parsing an unknown [`CatalogueSort`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order {0:?} (expected newest, rating, name or unsorted)")]
pub struct ParseSortError(String);

impl FromStr for CatalogueSort {
    type Err = ParseSortError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "unsorted" | "none" => Ok(Self::Unsorted),
            "newest" => Ok(Self::Newest),
            "rating" => Ok(Self::Rating),
            "name" => Ok(Self::Name),
            _ => Err(ParseSortError(raw.to_owned())),
        }
    }
}

impl fmt::Display for CatalogueSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unsorted => "unsorted",
            Self::Newest => "newest",
            Self::Rating => "rating",
            Self::Name => "name",
        };
        f.write_str(label)
    }
}

/// Sort `places` in place according to `order`.
///
/// # Examples
/// ```
/// use mytravel_core::{CatalogueSort, Place, RatedPlace, sort_places};
///
/// let mut places = vec![
///     RatedPlace::unrated(Place::new("1", "taman lalu lintas", None)),
///     RatedPlace::unrated(Place::new("2", "Braga", None)),
/// ];
/// sort_places(&mut places, CatalogueSort::Name);
/// assert_eq!(places[0].place.name, "Braga");
/// ```
pub fn sort_places(places: &mut [RatedPlace], order: CatalogueSort) {
    match order {
        CatalogueSort::Unsorted => {}
        CatalogueSort::Newest => {
            places.sort_by(|a, b| newest_first(a.place.created_at, b.place.created_at));
        }
        CatalogueSort::Rating => places.sort_by(|a, b| descending_nan_last(a.rating, b.rating)),
        CatalogueSort::Name => places.sort_by_cached_key(|rated| rated.place.name.to_lowercase()),
    }
}

/// Compare two values for a descending sort that places `NaN` after every
/// other value. Two `NaN`s compare equal, so a stable sort keeps their
/// input order.
///
/// # Examples
/// ```
/// use mytravel_core::descending_nan_last;
///
/// let mut values = vec![1.0, f64::NAN, 3.0, 2.0];
/// values.sort_by(|a, b| descending_nan_last(*a, *b));
/// assert_eq!(&values[..3], &[3.0, 2.0, 1.0]);
/// assert!(values[3].is_nan());
/// ```
#[must_use]
pub fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

fn newest_first(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
