//! JSON records served by the listing service.
//!
//! The service stores documents without a schema, so decoding is lenient:
//! numbers may arrive as strings, optional fields may be absent or empty, and
//! identifiers may be plain strings or extended-JSON `{"$oid": "..."}`
//! objects. Records that cannot be identified are dropped with a warning
//! rather than failing the whole payload.

use geo::Coord;
use log::warn;
use mytravel_core::{Place, PlaceId, Review, SourceError};
use serde::Deserialize;
use serde_json::Value;

/// Document identifier as exported by the service.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordId {
    Plain(String),
    Object {
        #[serde(rename = "$oid")]
        oid: String,
    },
}

impl RecordId {
    fn into_string(self) -> Option<String> {
        let raw = match self {
            Self::Plain(raw) | Self::Object { oid: raw } => raw,
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    }
}

#[derive(Debug, Deserialize)]
struct PlaceRecord {
    #[serde(rename = "_id", default)]
    id: Option<RecordId>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    lat: Option<Value>,
    #[serde(default)]
    lng: Option<Value>,
    #[serde(default)]
    photo_id: Option<String>,
    #[serde(default)]
    created_at: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ReviewRecord {
    #[serde(rename = "_id", default)]
    id: Option<RecordId>,
    #[serde(default)]
    place_id: Option<RecordId>,
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    rating: Option<Value>,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    created_at: Option<Value>,
}

/// Read a finite number from a JSON number or numeric string.
fn lenient_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn lenient_timestamp(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|text| !text.trim().is_empty())
}

/// Coordinates are kept only when both axes are present, finite and within
/// WGS84 bounds.
fn location(lat: Option<&Value>, lng: Option<&Value>) -> Option<Coord<f64>> {
    let y = lenient_number(lat)?;
    let x = lenient_number(lng)?;
    ((-90.0..=90.0).contains(&y) && (-180.0..=180.0).contains(&x)).then_some(Coord { x, y })
}

impl PlaceRecord {
    fn into_place(self) -> Option<Place> {
        let id = self.id.and_then(RecordId::into_string)?;
        let mut place = Place::new(
            id,
            self.name.unwrap_or_default(),
            location(self.lat.as_ref(), self.lng.as_ref()),
        );
        place.category = self.category.unwrap_or_default();
        place.description = self.description.unwrap_or_default();
        place.address = non_empty(self.address);
        place.photo_id = non_empty(self.photo_id);
        place.created_at = lenient_timestamp(self.created_at.as_ref());
        Some(place)
    }
}

impl ReviewRecord {
    fn into_review(self) -> Option<Review> {
        let id = self.id.and_then(RecordId::into_string)?;
        let place_id = self.place_id.and_then(RecordId::into_string)?;
        let rating = lenient_number(self.rating.as_ref()).unwrap_or(0.0);
        let mut review = Review::new(id, PlaceId::new(place_id), rating);
        review.comment = self.comment.unwrap_or_default();
        review.user_id = non_empty(self.user_id);
        review.created_at = lenient_timestamp(self.created_at.as_ref());
        Some(review)
    }
}

/// Return the message of an `{"error": "..."}` payload.
pub(crate) fn service_error_message(payload: &Value) -> Option<String> {
    match payload.get("error")? {
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

fn records(payload: Value, resource: &str) -> Result<Vec<Value>, SourceError> {
    match payload {
        Value::Array(items) => Ok(items),
        Value::Null => Ok(Vec::new()),
        other => Err(SourceError::Decode {
            resource: resource.to_owned(),
            message: format!("expected a JSON array, found {}", kind(&other)),
        }),
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decode a place listing, skipping records without a usable identifier.
///
/// # Errors
///
/// Returns [`SourceError::Decode`] when `payload` is not an array.
pub fn decode_places(payload: Value, resource: &str) -> Result<Vec<Place>, SourceError> {
    let items = records(payload, resource)?;
    let total = items.len();
    let places: Vec<Place> = items
        .into_iter()
        .filter_map(|item| {
            serde_json::from_value::<PlaceRecord>(item)
                .ok()
                .and_then(PlaceRecord::into_place)
        })
        .collect();
    if places.len() < total {
        warn!(
            "skipped {} unreadable place records from {resource}",
            total - places.len()
        );
    }
    Ok(places)
}

/// Decode a review listing, skipping records without an identifier or place
/// reference. Missing or non-numeric ratings decode as `0.0`.
///
/// # Errors
///
/// Returns [`SourceError::Decode`] when `payload` is not an array.
pub fn decode_reviews(payload: Value, resource: &str) -> Result<Vec<Review>, SourceError> {
    let items = records(payload, resource)?;
    let total = items.len();
    let reviews: Vec<Review> = items
        .into_iter()
        .filter_map(|item| {
            serde_json::from_value::<ReviewRecord>(item)
                .ok()
                .and_then(ReviewRecord::into_review)
        })
        .collect();
    if reviews.len() < total {
        warn!(
            "skipped {} unreadable review records from {resource}",
            total - reviews.len()
        );
    }
    Ok(reviews)
}
