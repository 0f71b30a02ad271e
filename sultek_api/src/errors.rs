//! Error types for the API client.

/// Errors raised while validating a [`Config`](crate::Config) or opening a
/// [`Session`](crate::Session). Nothing touches the network before these pass.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The base URI could not be parsed as an absolute URL.
    #[error("Invalid URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },
    /// The base URI is not `http` or `https`.
    #[error("Unsupported URI scheme '{0}', expected http or https")]
    UnsupportedScheme(String),
    /// No credential was supplied.
    #[error("Missing API token")]
    MissingToken,
    /// The credential cannot be sent as an HTTP header value.
    #[error("API token contains characters not allowed in a header")]
    InvalidToken,
    /// The client timeout must be at least one second.
    #[error("Invalid client timeout {0}, expected a positive number of seconds")]
    InvalidTimeout(i64),
    /// A required environment variable is absent.
    #[error("Missing environment variable {0}")]
    MissingVariable(&'static str),
    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Raised while building a record model from raw JSON: a missing field, a
/// field of the wrong JSON type, or a value that does not coerce.
///
/// Only [`Record::from_raw`](crate::types::Record::from_raw) produces these;
/// the response mapper always wraps them in [`ApiError::InvalidRecord`].
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct ValidationError(#[from] serde_json::Error);

/// Errors returned by the API facades. This is the only error type callers
/// of [`AccountClient`](crate::AccountClient) and
/// [`CampaignDataClient`](crate::CampaignDataClient) need to handle.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// The request could not be sent or the body could not be read
    /// (connection refused, timeout, invalid URL).
    #[error("Request to {endpoint} failed: {reason}")]
    RequestFailed { endpoint: String, reason: String },
    /// The API returned a non-success status with a body snippet.
    #[error("Request to {endpoint} failed with status {status}")]
    HttpStatus {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// The response body is not valid JSON.
    #[error("Response from {endpoint} is not valid JSON: {reason}")]
    MalformedJson { endpoint: String, reason: String },
    /// The payload parsed but does not have the expected structure.
    #[error("Unexpected payload shape{}: {reason}", at(.endpoint))]
    UnexpectedShape {
        endpoint: Option<String>,
        reason: String,
    },
    /// An element of a payload array failed record validation.
    #[error("Invalid {record} at index {index}{}: {source} | element: {element}", at(.endpoint))]
    InvalidRecord {
        endpoint: Option<String>,
        record: &'static str,
        index: usize,
        element: String,
        #[source]
        source: ValidationError,
    },
    /// Summing same-date campaign rows overflowed.
    #[error("Overflow while aggregating '{field}' for {date}")]
    Aggregation { date: String, field: &'static str },
    /// Rendering the external JSON representation failed.
    #[error("Failed to serialize output: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Attaches the endpoint to payload errors raised before it was known.
    pub fn at_endpoint(self, path: &str) -> Self {
        match self {
            ApiError::UnexpectedShape { endpoint: None, reason } => ApiError::UnexpectedShape {
                endpoint: Some(path.to_string()),
                reason,
            },
            ApiError::InvalidRecord {
                endpoint: None,
                record,
                index,
                element,
                source,
            } => ApiError::InvalidRecord {
                endpoint: Some(path.to_string()),
                record,
                index,
                element,
                source,
            },
            other => other,
        }
    }

    /// Endpoint path the error relates to, when known.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            ApiError::RequestFailed { endpoint, .. }
            | ApiError::HttpStatus { endpoint, .. }
            | ApiError::MalformedJson { endpoint, .. } => Some(endpoint),
            ApiError::UnexpectedShape { endpoint, .. } | ApiError::InvalidRecord { endpoint, .. } => {
                endpoint.as_deref()
            }
            ApiError::Aggregation { .. } | ApiError::Serialization(_) => None,
        }
    }
}

fn at(endpoint: &Option<String>) -> String {
    match endpoint {
        Some(path) => format!(" from {}", path),
        None => String::new(),
    }
}
