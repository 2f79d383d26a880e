//! Typed client for agent-to-agent packages.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/packages/agent-agent?b_id` | Create |
//! | GET    | `/packages/agent-agent?id&b_id` | Get |
//! | PUT    | `/packages/agent-update?id` | Update |
//! | GET    | `/packages/agent-agent/mine?b_id&...` | List with filters (paginated) |
//! | DELETE | `/packages/agent-package?id` | Delete |
//! | GET    | `/packages/my-unpaid-packages?b_id` | Unpaid packages |

use serde::Serialize;

use crate::envelope::{ApiResponse, Paginated};
use crate::error::MtaaniError;
use crate::packages::{validate_package_fields, AgentPackage, PackageFilters, PaymentOption};
use crate::payments::PaymentPackage;
use crate::transport::Transport;
use crate::types::{
    AgentId, BusinessId, BusinessScope, PackageId, PackageRef, ScopedFilters, ScopedPackageRef,
};

// -- Request types --------------------------------------------------------------

/// Request to create an agent-to-agent package.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAgentPackageRequest {
    pub sender_agent_id: AgentId,
    pub receiver_agent_id: AgentId,
    pub package_value: f64,
    pub customer_name: String,
    pub package_name: String,
    pub customer_phone_number: String,
    pub payment_option: PaymentOption,
    #[serde(rename = "on_delivery_balance", skip_serializing_if = "Option::is_none")]
    pub on_delivery_balance: Option<f64>,
}

/// Request to update an agent-to-agent package. Unset fields are unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAgentPackageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_agent_id: Option<AgentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_agent_id: Option<AgentId>,
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
}

// -- Client -------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AgentPackagesClient {
    transport: Transport,
}

impl AgentPackagesClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Create an agent-to-agent package for a business.
    ///
    /// The customer phone, package value and delivery balance are validated
    /// before anything is sent.
    pub async fn create(
        &self,
        business_id: BusinessId,
        req: &CreateAgentPackageRequest,
    ) -> Result<AgentPackage, MtaaniError> {
        validate_package_fields(
            Some(&req.customer_phone_number),
            Some(req.package_value),
            req.on_delivery_balance,
        )?;
        let scope = BusinessScope { b_id: business_id };
        let resp: ApiResponse<AgentPackage> = self
            .transport
            .post("/packages/agent-agent", Some(req), Some(&scope))
            .await?;
        resp.into_data("POST /packages/agent-agent", "package")
    }

    pub async fn get(
        &self,
        id: PackageId,
        business_id: BusinessId,
    ) -> Result<AgentPackage, MtaaniError> {
        let query = ScopedPackageRef { id, b_id: business_id };
        let resp: ApiResponse<AgentPackage> = self
            .transport
            .get("/packages/agent-agent", Some(&query))
            .await?;
        resp.into_data("GET /packages/agent-agent", "package")
    }

    /// Update an agent-to-agent package; fields present are validated first.
    pub async fn update(
        &self,
        id: PackageId,
        req: &UpdateAgentPackageRequest,
    ) -> Result<AgentPackage, MtaaniError> {
        validate_package_fields(
            req.customer_phone_number.as_deref(),
            req.package_value,
            req.on_delivery_balance,
        )?;
        let resp: ApiResponse<AgentPackage> = self
            .transport
            .put("/packages/agent-update", Some(req), Some(&PackageRef { id }))
            .await?;
        resp.into_data("PUT /packages/agent-update", "package")
    }

    /// List the business's agent packages. The paginated envelope is
    /// returned as served.
    pub async fn list(
        &self,
        business_id: BusinessId,
        filters: &PackageFilters,
    ) -> Result<Paginated<AgentPackage>, MtaaniError> {
        self.transport
            .get(
                "/packages/agent-agent/mine",
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
            .delete("/packages/agent-package", Some(&PackageRef { id }))
            .await?;
        Ok(resp.message_or("Package deleted successfully"))
    }

    /// Unpaid packages of the business, as `{id, type}` pairs ready for a
    /// payment batch.
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
