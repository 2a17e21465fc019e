//! Output rendering for CLI commands.
//!
//! Every command prints either pretty JSON or a plain-text listing. Text
//! output mirrors the listing cards: name, category, a five-slot star bar,
//! review count and, when a reference location was supplied, the distance.

use std::io::Write;

use clap::ValueEnum;
use mytravel_core::{RatedPlace, Review};
use mytravel_scorer::ScoredPlace;
use serde::{Deserialize, Serialize};

use crate::CliError;

const STAR_SLOTS: u8 = 5;
const FULL_STAR: char = '★';
const HALF_STAR: char = '½';
const EMPTY_STAR: char = '☆';

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Render `rating` as five slots: a full star per whole point, a half star
/// when the remainder is at least one half, and empty stars for the rest.
///
/// Ratings outside `0..=5` (and `NaN`) are clamped into range.
pub(crate) fn star_bar(rating: f64) -> String {
    let rating = if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, f64::from(STAR_SLOTS))
    };
    let full = (1..=STAR_SLOTS)
        .take_while(|slot| f64::from(*slot) <= rating)
        .count();
    let mut bar = String::new();
    for slot in 0..STAR_SLOTS {
        let position = usize::from(slot);
        let symbol = if position < full {
            FULL_STAR
        } else if position == full && rating - f64::from(slot) >= 0.5 {
            HALF_STAR
        } else {
            EMPTY_STAR
        };
        bar.push(symbol);
    }
    bar
}

fn review_label(count: usize) -> String {
    if count == 1 {
        "1 review".to_owned()
    } else {
        format!("{count} reviews")
    }
}

fn name_with_category(name: &str, category: &str) -> String {
    if category.trim().is_empty() {
        name.to_owned()
    } else {
        format!("{name} [{category}]")
    }
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)
}

fn write_line(writer: &mut dyn Write, line: &str) -> Result<(), CliError> {
    writeln!(writer, "{line}").map_err(CliError::WriteOutput)
}

/// Print ranked recommendations. Distances are shown only when
/// `show_distance` is set, i.e. a reference location was supplied.
pub(crate) fn write_recommendations(
    writer: &mut dyn Write,
    ranked: &[ScoredPlace],
    format: OutputFormat,
    show_distance: bool,
) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        return write_json(writer, ranked);
    }
    if ranked.is_empty() {
        return write_line(writer, "No recommendations.");
    }
    for (rank, entry) in ranked.iter().enumerate() {
        let place = &entry.place;
        write_line(
            writer,
            &format!(
                "{}. {}",
                rank + 1,
                name_with_category(&place.name, &place.category)
            ),
        )?;
        write_line(
            writer,
            &format!(
                "   {} {:.1} ({})",
                star_bar(entry.rating),
                entry.rating,
                review_label(entry.review_count)
            ),
        )?;
        if !place.description.trim().is_empty() {
            write_line(writer, &format!("   {}", place.description))?;
        }
        if show_distance {
            write_line(writer, &format!("   Distance: {:.1} km", entry.distance_km))?;
        }
    }
    Ok(())
}

/// Print a catalogue listing.
pub(crate) fn write_listing(
    writer: &mut dyn Write,
    listing: &[RatedPlace],
    format: OutputFormat,
) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        return write_json(writer, listing);
    }
    if listing.is_empty() {
        return write_line(writer, "No places found.");
    }
    for entry in listing {
        write_line(
            writer,
            &format!(
                "{}  {}  {} {:.1} ({})",
                entry.place.id,
                name_with_category(&entry.place.name, &entry.place.category),
                star_bar(entry.rating),
                entry.rating,
                review_label(entry.review_count)
            ),
        )?;
    }
    Ok(())
}

/// Print distinct category names, one per line.
pub(crate) fn write_categories(
    writer: &mut dyn Write,
    names: &[&str],
    format: OutputFormat,
) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        return write_json(writer, names);
    }
    for name in names {
        write_line(writer, name)?;
    }
    Ok(())
}

/// Print the reviews of one place.
pub(crate) fn write_reviews(
    writer: &mut dyn Write,
    reviews: &[Review],
    format: OutputFormat,
) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        return write_json(writer, reviews);
    }
    if reviews.is_empty() {
        return write_line(writer, "No reviews yet.");
    }
    for review in reviews {
        let mut line = format!("{} {:.1}", star_bar(review.rating), review.rating);
        if !review.comment.trim().is_empty() {
            line.push_str("  ");
            line.push_str(&review.comment);
        }
        if let Some(user) = &review.user_id {
            line.push_str(&format!(" (by {user})"));
        }
        write_line(writer, &line)?;
    }
    Ok(())
}
