//! Catalog fetch boundary.
//!
//! # Responsibility
//! - Define the `CatalogSource` seam the store fetches through.
//! - Classify transport failures into a stable error taxonomy.
//!
//! # Invariants
//! - Every failure variant maps to exactly one user-facing message.
//! - Decoded records are validated before they reach the store.

use crate::model::fruit::{Fruit, FruitValidationError};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Public upstream catalog endpoint.
///
/// A same-origin proxy that relays upstream status and body unchanged works
/// interchangeably here; the core does not distinguish the two.
pub const DEFAULT_ENDPOINT: &str =
    "https://wcz3qr33kmjvzotdqt65efniv40kokon.lambda-url.us-east-2.on.aws";

/// Fixed fetch timeout applied by the HTTP source.
pub const FETCH_TIMEOUT: Duration = Duration::from_millis(5000);

/// Result type for catalog fetch APIs.
pub type FetchResult<T> = Result<T, FetchError>;

/// Classified catalog fetch failure.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// No outcome within the fetch timeout.
    Timeout,
    /// No response received at all.
    Network(String),
    /// Response received with a non-success status.
    Upstream {
        status: u16,
        message: Option<String>,
    },
    /// Response received but the body does not decode into a valid catalog.
    MalformedPayload(String),
    /// Anything that escapes the categories above.
    Unexpected(String),
}

impl FetchError {
    /// Single user-facing message shown next to the retry affordance.
    pub fn user_message(&self) -> String {
        match self {
            Self::Timeout => "Request timed out. Please try again.".to_string(),
            Self::Network(_) => "Network error. Please check your connection.".to_string(),
            Self::Upstream { message, .. } => format!(
                "Failed to fetch fruits: {}",
                message.as_deref().unwrap_or("Unknown error")
            ),
            Self::MalformedPayload(details) => format!("Failed to fetch fruits: {details}"),
            Self::Unexpected(_) => "An unexpected error occurred.".to_string(),
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "catalog fetch timed out"),
            Self::Network(details) => write!(f, "network failure: {details}"),
            Self::Upstream { status, message } => match message {
                Some(message) => write!(f, "upstream returned status {status}: {message}"),
                None => write!(f, "upstream returned status {status}"),
            },
            Self::MalformedPayload(details) => write!(f, "malformed catalog payload: {details}"),
            Self::Unexpected(details) => write!(f, "unexpected fetch failure: {details}"),
        }
    }
}

impl Error for FetchError {}

impl From<FruitValidationError> for FetchError {
    fn from(value: FruitValidationError) -> Self {
        Self::MalformedPayload(value.to_string())
    }
}

/// Configuration for the HTTP catalog source.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: FETCH_TIMEOUT,
        }
    }
}

/// Source seam for fetching the catalog.
///
/// The store depends on this trait only, so tests substitute in-memory
/// doubles and the HTTP implementation stays at the edge.
pub trait CatalogSource {
    fn fetch_catalog(&self) -> FetchResult<Vec<Fruit>>;
}

/// Optional error body shipped by the upstream or proxy on failure.
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// HTTP catalog source backed by a blocking reqwest client.
pub struct HttpCatalogSource {
    config: CatalogConfig,
    client: reqwest::blocking::Client,
}

impl HttpCatalogSource {
    /// Builds a source for the default public endpoint.
    pub fn new() -> FetchResult<Self> {
        Self::with_config(CatalogConfig::default())
    }

    /// Builds a source for a caller-provided endpoint and timeout.
    ///
    /// # Errors
    /// - Returns `FetchError::Unexpected` when the HTTP client cannot be
    ///   constructed.
    pub fn with_config(config: CatalogConfig) -> FetchResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| FetchError::Unexpected(err.to_string()))?;
        Ok(Self { config, client })
    }

    /// Endpoint this source fetches from.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch_catalog(&self) -> FetchResult<Vec<Fruit>> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<UpstreamErrorBody>()
                .ok()
                .and_then(|body| body.message.or(body.error));
            return Err(FetchError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let fruits: Vec<Fruit> = response
            .json()
            .map_err(|err| FetchError::MalformedPayload(err.to_string()))?;
        for fruit in &fruits {
            fruit.validate()?;
        }
        Ok(fruits)
    }
}

fn classify_transport_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else if err.is_connect() {
        // Only connection-level failures count as "no response received";
        // request-construction errors fall through to `Unexpected`.
        FetchError::Network(err.to_string())
    } else {
        FetchError::Unexpected(err.to_string())
    }
}
