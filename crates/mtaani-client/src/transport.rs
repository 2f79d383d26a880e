//! HTTP transport: the single chokepoint for every outbound call.
//!
//! Owns the `reqwest::Client` (API key header, JSON content type, timeout),
//! joins request paths onto the base URL, serializes query parameters and
//! JSON bodies, and turns every failure into an [`MtaaniError`].
//!
//! ## Error normalization
//!
//! In priority order:
//! 1. no response, timeout signal → [`MtaaniError::Timeout`]
//! 2. no response → [`MtaaniError::Network`]
//! 3. non-2xx response → [`crate::error::classify`] on the status
//!
//! ## Retries
//!
//! Only `GET` requests are retried, and only when no response arrived.
//! `POST`, `PUT` and `DELETE` are sent exactly once: they may trigger
//! server-side effects (package creation, rider assignment, payment prompts).

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::{ensure_api_key, ClientConfig, ConfigError};
use crate::envelope::ErrorEnvelope;
use crate::error::{classify, default_message, ErrorDetails, MtaaniError};

/// Header carrying the API key on every request.
const API_KEY_HEADER: &str = "apikey";

/// Placeholder for calls without query parameters.
pub const NO_QUERY: Option<&'static ()> = None;

/// Placeholder for calls without a request body.
pub const NO_BODY: Option<&'static ()> = None;

/// Shared HTTP transport. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: Url,
    retries: u32,
    debug: bool,
}

impl Transport {
    /// Build the transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns `MtaaniError::Config` if the API key is missing or cannot be
    /// sent as a header, or the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, MtaaniError> {
        ensure_api_key(&config.api_key)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .default_headers({
                let mut headers = HeaderMap::new();
                let mut api_key = HeaderValue::from_str(config.api_key.as_str())
                    .map_err(|_| ConfigError::InvalidApiKey)?;
                api_key.set_sensitive(true);
                headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                headers
            })
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            retries: config.retries,
            debug: config.debug,
        })
    }

    /// Absolute URL for a path relative to the base URL.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// `GET path?query`.
    pub async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, MtaaniError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(Method::GET, path, NO_BODY, query).await
    }

    /// `POST path?query` with an optional JSON body.
    pub async fn post<T, B, Q>(
        &self,
        path: &str,
        body: Option<&B>,
        query: Option<&Q>,
    ) -> Result<T, MtaaniError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        self.send(Method::POST, path, body, query).await
    }

    /// `PUT path?query` with an optional JSON body.
    pub async fn put<T, B, Q>(
        &self,
        path: &str,
        body: Option<&B>,
        query: Option<&Q>,
    ) -> Result<T, MtaaniError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, body, query).await
    }

    /// `DELETE path?query`.
    pub async fn delete<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, MtaaniError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(Method::DELETE, path, NO_BODY, query).await
    }

    async fn send<T, B, Q>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: Option<&Q>,
    ) -> Result<T, MtaaniError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        let endpoint = format!("{method} {path}");
        let url = self.url(path);

        if self.debug {
            tracing::debug!(
                %method,
                %url,
                query = %query.map(to_log_json).unwrap_or_default(),
                body = %body.map(to_log_json).unwrap_or_default(),
                "Pickup Mtaani request"
            );
        }

        let max_retries = if method == Method::GET { self.retries } else { 0 };
        let resp = crate::retry::retry_send(max_retries, || {
            let mut req = self.http.request(method.clone(), &url);
            if let Some(query) = query {
                req = req.query(query);
            }
            if let Some(body) = body {
                req = req.json(body);
            }
            req.send()
        })
        .await
        .map_err(|e| self.transport_error(&endpoint, e))?;

        let status = resp.status().as_u16();
        let text = resp
            .text()
            .await
            .map_err(|e| self.transport_error(&endpoint, e))?;

        if self.debug {
            tracing::debug!(%endpoint, status, body = %text, "Pickup Mtaani response");
        }

        if !(200..300).contains(&status) {
            return Err(error_from_response(status, &text));
        }

        // A 2xx with an empty body is an empty envelope.
        let raw = if text.trim().is_empty() { "{}" } else { text.as_str() };
        serde_json::from_str(raw).map_err(|source| MtaaniError::Deserialization { endpoint, source })
    }

    fn transport_error(&self, endpoint: &str, e: reqwest::Error) -> MtaaniError {
        if self.debug {
            tracing::debug!(%endpoint, error = %e, "Pickup Mtaani request error");
        }
        if e.is_builder() {
            return MtaaniError::InvalidRequest {
                endpoint: endpoint.to_string(),
                source: e,
            };
        }
        let details = ErrorDetails::new(format!("{endpoint}: {e}"));
        if e.is_timeout() {
            MtaaniError::Timeout(details)
        } else {
            MtaaniError::Network(details)
        }
    }
}

fn join_url(base_url: &Url, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn to_log_json<S: Serialize + ?Sized>(value: &S) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Classify a non-2xx response using its `{message, validationErrors}` body.
pub(crate) fn error_from_response(status: u16, body: &str) -> MtaaniError {
    let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap_or_default();
    let message = envelope
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| default_message(status).to_string());
    let details = ErrorDetails::new(message)
        .with_validation_errors(envelope.validation_errors.unwrap_or_default());
    classify(status, details)
}
