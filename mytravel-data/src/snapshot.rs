//! Directory-backed [`PlaceSource`] reading exported listings from disk.
//!
//! A snapshot directory holds `places.json` and, optionally,
//! `reviews.json`, each containing the JSON array the listing API would
//! return. Files are decoded with the same lenient rules as HTTP payloads.

use std::io::{self, Read};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use log::debug;
use mytravel_core::{Place, PlaceSource, Review, SourceError};
use serde_json::Value;

use crate::wire::{decode_places, decode_reviews};

/// File holding the place listing.
pub const PLACES_FILE: &str = "places.json";
/// File holding the review listing.
pub const REVIEWS_FILE: &str = "reviews.json";

/// Reads places and reviews from a snapshot directory.
///
/// # Examples
///
/// ```no_run
/// use mytravel_core::load_snapshot;
/// use mytravel_data::SnapshotDirSource;
///
/// let source = SnapshotDirSource::open("data/bandung")?;
/// let snapshot = load_snapshot(&source)?;
/// # Ok::<(), mytravel_core::SourceError>(())
/// ```
#[derive(Debug)]
pub struct SnapshotDirSource {
    root: Utf8PathBuf,
    dir: Dir,
}

impl SnapshotDirSource {
    /// Open `root` as a snapshot directory.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Io`] when the directory cannot be opened.
    pub fn open(root: impl AsRef<Utf8Path>) -> Result<Self, SourceError> {
        let root = root.as_ref().to_path_buf();
        let dir = Dir::open_ambient_dir(&root, ambient_authority())
            .map_err(|err| io_error(&root, &err))?;
        Ok(Self { root, dir })
    }

    /// Directory the source reads from.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn read_json(&self, name: &str) -> Result<Option<Value>, SourceError> {
        let path = self.root.join(name);
        let mut file = match self.dir.open(name) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(io_error(&path, &err)),
        };
        let mut text = String::new();
        file.read_to_string(&mut text)
            .map_err(|err| io_error(&path, &err))?;
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|err| SourceError::Decode {
                resource: path.to_string(),
                message: err.to_string(),
            })
    }
}

fn io_error(path: &Utf8Path, err: &io::Error) -> SourceError {
    SourceError::Io {
        path: path.to_string(),
        message: err.to_string(),
    }
}

impl PlaceSource for SnapshotDirSource {
    fn places(&self) -> Result<Vec<Place>, SourceError> {
        let path = self.root.join(PLACES_FILE);
        let payload = self.read_json(PLACES_FILE)?.ok_or_else(|| SourceError::Io {
            path: path.to_string(),
            message: "snapshot has no place listing".to_owned(),
        })?;
        decode_places(payload, path.as_str())
    }

    fn reviews(&self) -> Result<Vec<Review>, SourceError> {
        let path = self.root.join(REVIEWS_FILE);
        match self.read_json(REVIEWS_FILE)? {
            Some(payload) => decode_reviews(payload, path.as_str()),
            None => {
                debug!("{path} not found; treating snapshot as unreviewed");
                Ok(Vec::new())
            }
        }
    }
}
