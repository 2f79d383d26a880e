//! Webhook registration and the payload type of webhook deliveries.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/webhooks/register` | Register the callback URL |
//!
//! Deliveries arrive at the integrator's own server. [`WebhookEvent`] parses
//! them; receiving, acknowledging and deduplicating them (deliveries are
//! at-least-once) is up to that server.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use mtaani_core::ValidationError;

use crate::envelope::ApiResponse;
use crate::error::MtaaniError;
use crate::packages::{PackageKind, PackageState};
use crate::transport::{Transport, NO_QUERY};
use crate::types::PackageId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterWebhookRequest {
    pub webhook_url: String,
}

impl RegisterWebhookRequest {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
        }
    }

    /// The URL must parse and use `http` or `https`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let invalid = |reason: String| ValidationError::InvalidUrl {
            url: self.webhook_url.clone(),
            reason,
        };
        let url = Url::parse(&self.webhook_url).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme {other:?}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebhookEventType {
    #[serde(rename = "package.created")]
    PackageCreated,
    #[serde(rename = "package.updated")]
    PackageUpdated,
    #[serde(rename = "package.state_changed")]
    PackageStateChanged,
    #[serde(rename = "package.delivered")]
    PackageDelivered,
    #[serde(rename = "package.cancelled")]
    PackageCancelled,
}

/// Package snapshot carried by a webhook delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPackage {
    pub package_id: PackageId,
    pub package_type: PackageKind,
    #[serde(default)]
    pub receipt_no: String,
    pub state: PackageState,
    #[serde(default)]
    pub track_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// One webhook delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub event_type: WebhookEventType,
    /// Unix timestamp of the event.
    pub timestamp: i64,
    pub data: WebhookPackage,
}

impl WebhookEvent {
    /// Parse a raw delivery body.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

#[derive(Debug, Clone)]
pub struct WebhooksClient {
    transport: Transport,
}

impl WebhooksClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Register the URL deliveries are posted to, replacing any previous one.
    pub async fn register(&self, req: &RegisterWebhookRequest) -> Result<String, MtaaniError> {
        req.validate()?;
        let resp: ApiResponse<serde_json::Value> = self
            .transport
            .post("/webhooks/register", Some(req), NO_QUERY)
            .await?;
        Ok(resp.message_or("Webhook registered successfully"))
    }
}
