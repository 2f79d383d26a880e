//! Typed client for express (GPS point-to-point) deliveries.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/packages/express/directions?b_id` | Distance, duration and price quote |
//! | POST   | `/packages/express?b_id` | Create |
//! | GET    | `/packages/express?id` | Get |
//! | PUT    | `/packages/express?id&b_id` | Update |
//! | PUT    | `/packages/express/find-rider?id` | Find (and possibly assign) a nearby rider |
//! | GET    | `/packages/express/delivery-modes` | Delivery mode catalog |
//!
//! `find_rider` is a `PUT` with no body. The server may assign a rider as a
//! side effect, so the call is never retried.

use serde::{Deserialize, Serialize};

use crate::envelope::ApiResponse;
use crate::error::MtaaniError;
use crate::packages::{validate_package_fields, Coordinate, ExpressPackage, PaymentOption};
use crate::transport::{Transport, NO_BODY, NO_QUERY};
use crate::types::{BusinessId, BusinessScope, PackageId, PackageRef, RiderTypeId, ScopedPackageRef};

// -- Types matching API schemas ------------------------------------------------

/// Route quote for an express delivery.
#[derive(Debug, Clone, Serialize)]
pub struct ExpressDirectionsRequest {
    /// Departure first, destination last.
    pub coordinates: Vec<Coordinate>,
    pub rider_type_id: RiderTypeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressDirections {
    /// Metres.
    #[serde(default)]
    pub distance: f64,
    /// Seconds.
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub gross_price: f64,
}

/// Rider category (motorbike, car, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryMode {
    pub id: RiderTypeId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyRider {
    pub rider_id: u64,
    #[serde(default)]
    pub loc: Option<Coordinate>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
}

/// Request to create an express package.
#[derive(Debug, Clone, Serialize)]
pub struct CreateExpressPackageRequest {
    pub customer_name: String,
    pub customer_phone_number: String,
    pub package_value: f64,
    pub package_name: String,
    pub departure: Coordinate,
    pub destination: Coordinate,
    pub exact_location: String,
    pub payment_option: PaymentOption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_delivery_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

/// Request to update an express package. Unset fields are unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateExpressPackageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure: Option<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_option: Option<PaymentOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_delivery_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rider_type_id: Option<RiderTypeId>,
}

// -- Client -------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ExpressDeliveriesClient {
    transport: Transport,
}

impl ExpressDeliveriesClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Quote distance, duration and price for a route.
    pub async fn directions(
        &self,
        business_id: BusinessId,
        req: &ExpressDirectionsRequest,
    ) -> Result<ExpressDirections, MtaaniError> {
        let resp: ApiResponse<ExpressDirections> = self
            .transport
            .post(
                "/packages/express/directions",
                Some(req),
                Some(&BusinessScope { b_id: business_id }),
            )
            .await?;
        resp.into_data("POST /packages/express/directions", "directions")
    }

    pub async fn create(
        &self,
        business_id: BusinessId,
        req: &CreateExpressPackageRequest,
    ) -> Result<ExpressPackage, MtaaniError> {
        validate_package_fields(
            Some(&req.customer_phone_number),
            Some(req.package_value),
            req.on_delivery_balance,
        )?;
        let resp: ApiResponse<ExpressPackage> = self
            .transport
            .post(
                "/packages/express",
                Some(req),
                Some(&BusinessScope { b_id: business_id }),
            )
            .await?;
        resp.into_data("POST /packages/express", "package")
    }

    pub async fn get(&self, id: PackageId) -> Result<ExpressPackage, MtaaniError> {
        let resp: ApiResponse<ExpressPackage> = self
            .transport
            .get("/packages/express", Some(&PackageRef { id }))
            .await?;
        resp.into_data("GET /packages/express", "package")
    }

    pub async fn update(
        &self,
        id: PackageId,
        business_id: BusinessId,
        req: &UpdateExpressPackageRequest,
    ) -> Result<ExpressPackage, MtaaniError> {
        validate_package_fields(
            req.customer_phone_number.as_deref(),
            req.package_value,
            req.on_delivery_balance,
        )?;
        let query = ScopedPackageRef { id, b_id: business_id };
        let resp: ApiResponse<ExpressPackage> = self
            .transport
            .put("/packages/express", Some(req), Some(&query))
            .await?;
        resp.into_data("PUT /packages/express", "package")
    }

    /// Look for riders near the package's departure point.
    ///
    /// An empty list means none were found without an error status.
    pub async fn find_rider(&self, id: PackageId) -> Result<Vec<NearbyRider>, MtaaniError> {
        let resp: ApiResponse<Vec<NearbyRider>> = self
            .transport
            .put("/packages/express/find-rider", NO_BODY, Some(&PackageRef { id }))
            .await?;
        Ok(resp.data_or_default())
    }

    pub async fn delivery_modes(&self) -> Result<Vec<DeliveryMode>, MtaaniError> {
        let resp: ApiResponse<Vec<DeliveryMode>> = self
            .transport
            .get("/packages/express/delivery-modes", NO_QUERY)
            .await?;
        Ok(resp.data_or_default())
    }
}
