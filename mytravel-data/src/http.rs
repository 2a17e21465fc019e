//! HTTP-backed [`PlaceSource`] for the MyTravel listing API.
//!
//! [`HttpPlaceSource`] issues `GET {base}/api/places` and
//! `GET {base}/api/reviews` (optionally filtered with `?place_id=`) and
//! decodes the payloads with the lenient rules in [`crate::wire`].
//!
//! # Architecture
//!
//! [`PlaceSource`] is synchronous so computations stay embeddable in
//! synchronous callers. The async fetch methods are public for callers
//! already running on Tokio; the trait implementation blocks on them.
//!
//! # Example
//!
//! ```no_run
//! use mytravel_core::{PlaceSource, load_snapshot};
//! use mytravel_data::HttpPlaceSource;
//!
//! let source = HttpPlaceSource::new("https://my-travel.example.com")?;
//! let snapshot = load_snapshot(&source)?;
//! println!("{} places", snapshot.places.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::sync::OnceLock;
use std::time::Duration;

use log::debug;
use mytravel_core::{Place, PlaceId, PlaceSource, Review, SourceError};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use crate::wire::{decode_places, decode_reviews, service_error_message};

const CURRENT_THREAD_BLOCKING: &str =
    "blocking call inside a current_thread runtime; use the fetch_* methods instead";

/// Errors raised while constructing an [`HttpPlaceSource`].
#[derive(Debug, Error)]
pub enum SourceBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Default user agent for listing requests.
pub const DEFAULT_USER_AGENT: &str = "mytravel-engine/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpPlaceSource`].
#[derive(Debug, Clone)]
pub struct HttpPlaceSourceConfig {
    /// Base URL of the listing service, e.g. `"http://localhost:8080"`.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for HttpPlaceSourceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpPlaceSourceConfig {
    /// Create a configuration for `base_url` with default settings.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Listing-service client implementing [`PlaceSource`].
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime the blocking trait methods drive requests on a
/// private runtime created on first use. Inside a multi-threaded runtime they
/// borrow the caller's handle through [`tokio::task::block_in_place`].
/// Inside a `current_thread` runtime they cannot block, and return
/// [`SourceError::Runtime`]; async callers there should use the `fetch_*`
/// methods instead.
pub struct HttpPlaceSource {
    client: Client,
    config: HttpPlaceSourceConfig,
    runtime: OnceLock<Runtime>,
}

impl std::fmt::Debug for HttpPlaceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPlaceSource")
            .field("config", &self.config)
            .field("runtime_started", &self.runtime.get().is_some())
            .finish_non_exhaustive()
    }
}

impl HttpPlaceSource {
    /// Create a source for `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, SourceBuildError> {
        Self::with_config(HttpPlaceSourceConfig::new(base_url))
    }

    /// Create a source with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_config(config: HttpPlaceSourceConfig) -> Result<Self, SourceBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(SourceBuildError::HttpClient)?;
        Ok(Self {
            client,
            config,
            runtime: OnceLock::new(),
        })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &HttpPlaceSourceConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Fetch every listed place.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the request fails or the payload is
    /// not a place listing.
    pub async fn fetch_places(&self) -> Result<Vec<Place>, SourceError> {
        let url = self.endpoint("places");
        let payload = self.get_json(&url, &[]).await?;
        let places = decode_places(payload, &url)?;
        debug!("fetched {} places from {url}", places.len());
        Ok(places)
    }

    /// Fetch every review.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the request fails or the payload is
    /// not a review listing.
    pub async fn fetch_reviews(&self) -> Result<Vec<Review>, SourceError> {
        let url = self.endpoint("reviews");
        let payload = self.get_json(&url, &[]).await?;
        let reviews = decode_reviews(payload, &url)?;
        debug!("fetched {} reviews from {url}", reviews.len());
        Ok(reviews)
    }

    /// Fetch the reviews of one place using the service-side filter.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the request fails or the payload is
    /// not a review listing.
    pub async fn fetch_reviews_for_place(
        &self,
        place_id: &PlaceId,
    ) -> Result<Vec<Review>, SourceError> {
        let url = self.endpoint("reviews");
        let payload = self
            .get_json(&url, &[("place_id", place_id.as_str())])
            .await?;
        let reviews = decode_reviews(payload, &url)?;
        debug!("fetched {} reviews for place {place_id}", reviews.len());
        Ok(reviews)
    }

    /// Issue a GET and parse the body as JSON.
    ///
    /// Error bodies of the form `{"error": "..."}` become
    /// [`SourceError::Service`] regardless of status.
    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, SourceError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?;
        let payload = serde_json::from_slice::<Value>(&body);

        if let Some(message) = payload.as_ref().ok().and_then(service_error_message) {
            return Err(SourceError::Service {
                url: url.to_owned(),
                message,
            });
        }
        if !status.is_success() {
            return Err(SourceError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_owned(),
            });
        }
        payload.map_err(|err| SourceError::Decode {
            resource: url.to_owned(),
            message: err.to_string(),
        })
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> SourceError {
        if error.is_timeout() {
            return SourceError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return SourceError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        SourceError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }

    fn own_runtime(&self) -> Result<&Runtime, SourceError> {
        if let Some(runtime) = self.runtime.get() {
            return Ok(runtime);
        }
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| SourceError::Runtime {
                message: err.to_string(),
            })?;
        Ok(self.runtime.get_or_init(|| runtime))
    }

    /// Drive `future` to completion from synchronous code.
    fn block_on<T>(
        &self,
        future: impl Future<Output = Result<T, SourceError>>,
    ) -> Result<T, SourceError> {
        // Neither block_in_place nor a nested block_on may run on a thread
        // that is driving a current_thread runtime.
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            Ok(_) => Err(SourceError::Runtime {
                message: CURRENT_THREAD_BLOCKING.to_owned(),
            }),
            Err(_) => self.own_runtime()?.block_on(future),
        }
    }
}

impl PlaceSource for HttpPlaceSource {
    fn places(&self) -> Result<Vec<Place>, SourceError> {
        self.block_on(self.fetch_places())
    }

    fn reviews(&self) -> Result<Vec<Review>, SourceError> {
        self.block_on(self.fetch_reviews())
    }

    fn reviews_for_place(&self, place_id: &PlaceId) -> Result<Vec<Review>, SourceError> {
        self.block_on(self.fetch_reviews_for_place(place_id))
    }
}
