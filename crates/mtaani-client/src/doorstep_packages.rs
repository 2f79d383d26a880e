//! Typed client for doorstep packages (agent drop-off, rider delivers to
//! the customer's door).
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/packages/doorstep?b_id` | Create |
//! | GET    | `/packages/doorstep?id&b_id` | Get |
//! | PUT    | `/packages/doorstep-update?id` | Update |
//! | GET    | `/packages/doorstep/mine?b_id&...` | List with filters (paginated) |
//! | DELETE | `/packages/doorstep-package?id` | Delete |
//! | GET    | `/packages/my-unpaid-packages?b_id` | Unpaid packages |

use serde::Serialize;

use crate::envelope::{ApiResponse, Paginated};
use crate::error::MtaaniError;
use crate::packages::{validate_package_fields, DoorstepPackage, PackageFilters, PaymentOption};
use crate::payments::PaymentPackage;
use crate::transport::Transport;
use crate::types::{
    AgentId, BusinessId, BusinessScope, DoorstepDestinationId, PackageId, PackageRef,
    ScopedFilters, ScopedPackageRef,
};

// -- Request types --------------------------------------------------------------

/// Request to create a doorstep package.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDoorstepPackageRequest {
    #[serde(rename = "senderAgentID_id")]
    pub sender_agent_id: AgentId,
    pub doorstep_destination_id: DoorstepDestinationId,
    pub package_value: f64,
    pub customer_name: String,
    pub package_name: String,
    pub customer_phone_number: String,
    pub payment_option: PaymentOption,
    #[serde(rename = "on_delivery_balance", skip_serializing_if = "Option::is_none")]
    pub on_delivery_balance: Option<f64>,
    /// Free-text directions for the rider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

/// Request to update a doorstep package. Unset fields are unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDoorstepPackageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_agent_id: Option<AgentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doorstep_destination_id: Option<DoorstepDestinationId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_option: Option<PaymentOption>,
    #[serde(rename = "on_delivery_balance", skip_serializing_if = "Option::is_none")]
    pub on_delivery_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

// -- Client -------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct DoorstepPackagesClient {
    transport: Transport,
}

impl DoorstepPackagesClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Create a doorstep package for a business.
    pub async fn create(
        &self,
        business_id: BusinessId,
        req: &CreateDoorstepPackageRequest,
    ) -> Result<DoorstepPackage, MtaaniError> {
        validate_package_fields(
            Some(&req.customer_phone_number),
            Some(req.package_value),
            req.on_delivery_balance,
        )?;
        let resp: ApiResponse<DoorstepPackage> = self
            .transport
            .post(
                "/packages/doorstep",
                Some(req),
                Some(&BusinessScope { b_id: business_id }),
            )
            .await?;
        resp.into_data("POST /packages/doorstep", "package")
    }

    pub async fn get(
        &self,
        id: PackageId,
        business_id: BusinessId,
    ) -> Result<DoorstepPackage, MtaaniError> {
        let query = ScopedPackageRef { id, b_id: business_id };
        let resp: ApiResponse<DoorstepPackage> =
            self.transport.get("/packages/doorstep", Some(&query)).await?;
        resp.into_data("GET /packages/doorstep", "package")
    }

    pub async fn update(
        &self,
        id: PackageId,
        req: &UpdateDoorstepPackageRequest,
    ) -> Result<DoorstepPackage, MtaaniError> {
        validate_package_fields(
            req.customer_phone_number.as_deref(),
            req.package_value,
            req.on_delivery_balance,
        )?;
        let resp: ApiResponse<DoorstepPackage> = self
            .transport
            .put("/packages/doorstep-update", Some(req), Some(&PackageRef { id }))
            .await?;
        resp.into_data("PUT /packages/doorstep-update", "package")
    }

    pub async fn list(
        &self,
        business_id: BusinessId,
        filters: &PackageFilters,
    ) -> Result<Paginated<DoorstepPackage>, MtaaniError> {
        self.transport
            .get(
                "/packages/doorstep/mine",
                Some(&ScopedFilters {
                    b_id: business_id,
                    filters,
                }),
            )
            .await
    }

    pub async fn delete(&self, id: PackageId) -> Result<String, MtaaniError> {
        let resp: ApiResponse<serde_json::Value> = self
            .transport
            .delete("/packages/doorstep-package", Some(&PackageRef { id }))
            .await?;
        Ok(resp.message_or("Package deleted successfully"))
    }

    /// Unpaid packages of the business. Same endpoint as the agent variant.
    pub async fn unpaid(&self, business_id: BusinessId) -> Result<Vec<PaymentPackage>, MtaaniError> {
        let resp: ApiResponse<Vec<PaymentPackage>> = self
            .transport
            .get(
                "/packages/my-unpaid-packages",
                Some(&BusinessScope { b_id: business_id }),
            )
            .await?;
        Ok(resp.data_or_default())
    }
}
