//! Pickup Mtaani client error types.
//!
//! One closed sum type for every failure a call can produce. The transport
//! layer is the only place that classifies remote failures; services
//! propagate them untouched.
//!
//! Classified variants (`Validation` through `Api`) share one payload shape,
//! [`ErrorDetails`]. The remaining variants are local: a 2xx envelope
//! without data, a body that does not match the typed model, a request that
//! could not be built, or a bad configuration.

use mtaani_core::ValidationError;

use crate::config::ConfigError;

/// Message, status and field-level messages of a classified failure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorDetails {
    pub message: String,
    /// HTTP status, when a response was received.
    pub status: Option<u16>,
    /// Field-level messages from the API's `validationErrors` list.
    pub validation_errors: Vec<String>,
}

impl ErrorDetails {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            validation_errors: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_validation_errors(mut self, errors: Vec<String>) -> Self {
        self.validation_errors = errors;
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if !self.validation_errors.is_empty() {
            write!(f, " ({})", self.validation_errors.join("; "))?;
        }
        Ok(())
    }
}

/// Errors from Pickup Mtaani API calls.
#[derive(Debug, thiserror::Error)]
pub enum MtaaniError {
    /// HTTP 400, or a request rejected by a local validator.
    #[error("validation failed: {0}")]
    Validation(ErrorDetails),
    /// HTTP 401.
    #[error("authentication failed: {0}")]
    Authentication(ErrorDetails),
    /// HTTP 403.
    #[error("not authorized: {0}")]
    Authorization(ErrorDetails),
    /// HTTP 404.
    #[error("not found: {0}")]
    NotFound(ErrorDetails),
    /// HTTP 409.
    #[error("conflict: {0}")]
    Conflict(ErrorDetails),
    /// HTTP 500, 502, 503, 504.
    #[error("internal server error: {0}")]
    InternalServer(ErrorDetails),
    /// The request timed out before a response arrived.
    #[error("request timed out: {0}")]
    Timeout(ErrorDetails),
    /// No response was received.
    #[error("network error: {0}")]
    Network(ErrorDetails),
    /// Any other non-2xx status.
    #[error("Pickup Mtaani API returned {status}: {details}", status = .0.status.unwrap_or_default(), details = .0)]
    Api(ErrorDetails),
    /// A 2xx response whose envelope carried no `data`.
    #[error("no {what} data returned from {endpoint}")]
    MissingData {
        endpoint: String,
        what: &'static str,
    },
    /// A 2xx body that does not match the expected model.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: serde_json::Error,
    },
    /// The request could not be built (bad header, unserializable body).
    #[error("failed to build request for {endpoint}: {source}")]
    InvalidRequest {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MtaaniError {
    /// Shared payload of a classified failure; `None` for local errors.
    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            Self::Validation(d)
            | Self::Authentication(d)
            | Self::Authorization(d)
            | Self::NotFound(d)
            | Self::Conflict(d)
            | Self::InternalServer(d)
            | Self::Timeout(d)
            | Self::Network(d)
            | Self::Api(d) => Some(d),
            Self::MissingData { .. }
            | Self::Deserialization { .. }
            | Self::InvalidRequest { .. }
            | Self::Config(_) => None,
        }
    }

    /// HTTP status of the response that caused the failure, if any.
    pub fn status(&self) -> Option<u16> {
        self.details().and_then(|d| d.status)
    }

    /// Server or validator message for classified failures, the display
    /// text otherwise.
    pub fn message(&self) -> String {
        match self.details() {
            Some(d) => d.message.clone(),
            None => self.to_string(),
        }
    }

    /// Field-level messages; empty unless the failure was a validation.
    pub fn validation_errors(&self) -> &[String] {
        self.details()
            .map(|d| d.validation_errors.as_slice())
            .unwrap_or_default()
    }

    /// True for failures classified from a transport outcome.
    pub fn is_transport_classified(&self) -> bool {
        self.details().is_some()
    }
}

impl From<ValidationError> for MtaaniError {
    fn from(err: ValidationError) -> Self {
        let errors = err.field_errors();
        Self::Validation(ErrorDetails::new(err.to_string()).with_validation_errors(errors))
    }
}

/// Map an HTTP status to its error variant.
///
/// Total over `u16`: anything not listed lands in [`MtaaniError::Api`].
pub fn classify(status: u16, details: ErrorDetails) -> MtaaniError {
    let details = details.with_status(status);
    match status {
        400 => MtaaniError::Validation(details),
        401 => MtaaniError::Authentication(details),
        403 => MtaaniError::Authorization(details),
        404 => MtaaniError::NotFound(details),
        409 => MtaaniError::Conflict(details),
        500 | 502 | 503 | 504 => MtaaniError::InternalServer(details),
        _ => MtaaniError::Api(details),
    }
}

/// Message used when the server's error body carries none.
pub(crate) fn default_message(status: u16) -> &'static str {
    match status {
        401 => "Invalid API key or authentication failed",
        403 => "Insufficient permissions",
        404 => "Resource not found",
        500 | 502 | 503 | 504 => "Internal server error",
        _ => "An error occurred",
    }
}
