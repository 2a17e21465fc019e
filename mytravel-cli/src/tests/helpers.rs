//! Test helpers for building snapshot directories and stub data sources.

use camino::{Utf8Path, Utf8PathBuf};
use geo::Coord;
use mytravel_core::test_support::MemorySource;
use mytravel_core::{Place, PlaceSource, Review};
use std::fs;
use tempfile::TempDir;

use crate::CliError;
use crate::source::{SourceBuilder, SourceConfig};

/// Reference location used throughout the CLI tests.
pub(super) const ORIGIN: Coord<f64> = Coord { x: 0.0, y: 0.0 };

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents)
        .unwrap_or_else(|err| panic!("failed to write {path}: {err}"));
}

/// Two places one degree apart on the equator; `A` has ratings 5 and 3.
pub(super) fn sample_places() -> Vec<Place> {
    vec![
        Place::new("A", "Alun-Alun", Some(ORIGIN))
            .with_category("Taman")
            .with_description("Town square")
            .with_created_at(1_700_000_100),
        Place::new("B", "Braga", Some(Coord { x: 1.0, y: 0.0 }))
            .with_category("Kuliner")
            .with_created_at(1_700_000_200),
    ]
}

pub(super) fn sample_reviews() -> Vec<Review> {
    vec![
        Review::new("r1", "A", 5.0).with_comment("Ramai").with_user("u1"),
        Review::new("r2", "A", 3.0),
    ]
}

/// A temporary snapshot directory holding the sample listing as JSON.
pub(super) struct SnapshotFixture {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl SnapshotFixture {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        write_utf8(
            &root.join("places.json"),
            br#"[
                {"_id": "A", "name": "Alun-Alun", "category": "Taman", "description": "Town square", "lat": 0.0, "lng": 0.0, "created_at": 1700000100},
                {"_id": "B", "name": "Braga", "category": "Kuliner", "lat": 0.0, "lng": 1.0, "created_at": 1700000200}
            ]"#,
        );
        write_utf8(
            &root.join("reviews.json"),
            br#"[
                {"_id": "r1", "place_id": "A", "rating": 5, "comment": "Ramai", "user_id": "u1"},
                {"_id": "r2", "place_id": "A", "rating": "3"}
            ]"#,
        );
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// Serves a fixed in-memory listing regardless of the configured source.
#[derive(Debug, Clone)]
pub(super) struct StubSourceBuilder {
    source: MemorySource,
}

impl StubSourceBuilder {
    pub(super) fn new(places: Vec<Place>, reviews: Vec<Review>) -> Self {
        Self {
            source: MemorySource::new(places, reviews),
        }
    }

    pub(super) fn sample() -> Self {
        Self::new(sample_places(), sample_reviews())
    }

    pub(super) fn failing(error: mytravel_core::SourceError) -> Self {
        Self {
            source: MemorySource::failing(error),
        }
    }
}

impl SourceBuilder for StubSourceBuilder {
    fn build(&self, _config: &SourceConfig) -> Result<Box<dyn PlaceSource>, CliError> {
        Ok(Box::new(self.source.clone()))
    }
}

pub(super) fn output(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).expect("stdout utf-8")
}
