//! Data access for the MyTravel recommendation engine.
//!
//! Responsibilities:
//! - Implement [`PlaceSource`](mytravel_core::PlaceSource) over the listing
//!   HTTP API and over snapshot directories on disk.
//! - Own the wire format, including lenient decoding of loosely typed
//!   documents.
//!
//! Boundaries:
//! - Do not encode ranking rules (live in `mytravel-scorer`).
//! - Keep blocking I/O off async executors; async callers use the
//!   `fetch_*` methods on [`HttpPlaceSource`].
//!
//! Invariants:
//! - No global mutable state.

#![forbid(unsafe_code)]

mod http;
mod snapshot;
pub mod wire;

pub use http::{DEFAULT_USER_AGENT, HttpPlaceSource, HttpPlaceSourceConfig, SourceBuildError};
pub use snapshot::{PLACES_FILE, REVIEWS_FILE, SnapshotDirSource};
