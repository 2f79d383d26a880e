//! Package models shared by the agent, doorstep and express services.
//!
//! The API serves three package shapes. They share a common core
//! ([`PackageDetails`], flattened into each shape) and differ in routing:
//! an agent pair, a doorstep destination with optional coordinates, or a
//! GPS departure/destination pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mtaani_core::ValidationError;

use crate::types::{AgentId, BusinessId, DoorstepDestinationId, PackageId};

// -- Typed enums matching API values -----------------------------------------

/// Package state.
///
/// Rider- and delivery-specific sub-states surfaced by webhook events
/// (`picked_up`, `out_for_delivery`, `failed`, ...) are kept verbatim in
/// `Other` and serialize back to the same string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageState {
    Request,
    InTransit,
    Delivered,
    Cancelled,
    Pending,
    #[serde(untagged)]
    Other(String),
}

impl PackageState {
    /// Wire value of the state.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Request => "request",
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Pending => "pending",
            Self::Other(raw) => raw,
        }
    }
}

/// Who pays the delivery fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentOption {
    Vendor,
    Collection,
    Customer,
    /// Forward-compatible catch-all.
    #[serde(other)]
    Unknown,
}

/// Shape of a package, as reported by webhook events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    Agent,
    Doorstep,
    Express,
}

/// A `[longitude, latitude]` pair, serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate(pub f64, pub f64);

impl Coordinate {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self(lng, lat)
    }

    pub fn lng(&self) -> f64 {
        self.0
    }

    pub fn lat(&self) -> f64 {
        self.1
    }
}

// -- Response types -----------------------------------------------------------

/// One entry of a package's tracking history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageTrackEvent {
    /// Unix timestamp of the event.
    pub time: i64,
    pub state: PackageState,
    pub descriptions: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Tracking history wrapper as served by the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PackageTracks {
    #[serde(default)]
    pub descriptions: Vec<PackageTrackEvent>,
}

/// Fields common to every package shape.
///
/// Fields use `#[serde(default)]` for resilience against schema evolution;
/// unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageDetails {
    pub id: PackageId,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "customerName", default)]
    pub customer_name: String,
    #[serde(rename = "customerPhoneNumber", default)]
    pub customer_phone_number: String,
    #[serde(rename = "packageName", default)]
    pub package_name: String,
    #[serde(rename = "packageValue", default)]
    pub package_value: Option<f64>,
    /// Receipt code shown to customers.
    #[serde(default)]
    pub receipt_no: String,
    pub state: PackageState,
    #[serde(default)]
    pub delivery_fee: f64,
    #[serde(default)]
    pub payment_option: Option<PaymentOption>,
    #[serde(default)]
    pub on_delivery_balance: Option<f64>,
    /// Opaque tracking code.
    #[serde(rename = "trackId", default)]
    pub track_id: String,
    #[serde(rename = "businessId_id", default)]
    pub business_id: Option<BusinessId>,
}

/// Agent-to-agent package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentPackage {
    #[serde(flatten)]
    pub details: PackageDetails,
    #[serde(rename = "senderAgentID_id", default)]
    pub sender_agent_id: Option<AgentId>,
    // Misspelled on the wire.
    #[serde(rename = "receieverAgentID_id", alias = "receiverAgentID_id", default)]
    pub receiver_agent_id: Option<AgentId>,
    #[serde(default)]
    pub agent_package_tracks: Option<PackageTracks>,
}

/// Doorstep delivery package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorstepPackage {
    #[serde(flatten)]
    pub details: PackageDetails,
    #[serde(default)]
    pub agent_id: Option<AgentId>,
    #[serde(rename = "doorstepDestinationId", default)]
    pub doorstep_destination_id: Option<DoorstepDestinationId>,
    #[serde(rename = "locationDescription", default)]
    pub location_description: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub door_step_package_tracks: Option<PackageTracks>,
}

/// Business summary embedded in express packages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessSummary {
    pub id: BusinessId,
    #[serde(default)]
    pub name: String,
}

/// Express (GPS point-to-point) package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressPackage {
    #[serde(flatten)]
    pub details: PackageDetails,
    #[serde(default)]
    pub depart_point: Option<Coordinate>,
    #[serde(default)]
    pub destination: Option<Coordinate>,
    #[serde(default)]
    pub exact_location: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub business: Option<BusinessSummary>,
}

/// Any package, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Package {
    Agent(AgentPackage),
    Doorstep(DoorstepPackage),
    Express(ExpressPackage),
}

impl Package {
    pub fn details(&self) -> &PackageDetails {
        match self {
            Self::Agent(p) => &p.details,
            Self::Doorstep(p) => &p.details,
            Self::Express(p) => &p.details,
        }
    }

    pub fn kind(&self) -> PackageKind {
        match self {
            Self::Agent(_) => PackageKind::Agent,
            Self::Doorstep(_) => PackageKind::Doorstep,
            Self::Express(_) => PackageKind::Express,
        }
    }
}

// -- Query parameters ---------------------------------------------------------

/// Filters for the agent and doorstep "mine" listings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PackageFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<PackageState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_no: Option<String>,
    #[serde(rename = "phoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(rename = "customerName", skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PackageId>,
    #[serde(rename = "pageNumber", skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(rename = "pageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Check the customer-facing fields of a create or update request.
///
/// Absent fields are skipped; the package value is held to the default limit.
pub(crate) fn validate_package_fields(
    customer_phone: Option<&str>,
    package_value: Option<f64>,
    on_delivery_balance: Option<f64>,
) -> Result<(), ValidationError> {
    if let Some(phone) = customer_phone {
        mtaani_core::validate_phone_number(phone)?;
    }
    if let Some(value) = package_value {
        mtaani_core::validate_package_value_default(value)?;
    }
    if let Some(balance) = on_delivery_balance {
        mtaani_core::validate_delivery_balance(balance)?;
    }
    Ok(())
}
