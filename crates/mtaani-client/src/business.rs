//! Typed client for the business endpoints.
//!
//! Every call acts on the business tied to the configured API key.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/business` | Get current business |
//! | PUT    | `/business/update` | Update current business |
//! | DELETE | `/business/remove` | Delete current business |
//! | GET    | `/business/categories` | List categories (paginated) |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::envelope::{ApiResponse, Paginated, Pagination};
use crate::error::MtaaniError;
use crate::transport::{Transport, NO_QUERY};
use crate::types::{BusinessId, CategoryId};

// -- Types matching API schemas ------------------------------------------------

/// Business tied to the API key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Prepaid balance used to settle delivery fees.
    #[serde(default)]
    pub wallet_balance: Option<f64>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Business category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessCategory {
    pub id: CategoryId,
    pub name: String,
}

/// Request to update the current business. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateBusinessRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

// -- Client -------------------------------------------------------------------

/// Client for the business endpoints.
#[derive(Debug, Clone)]
pub struct BusinessClient {
    transport: Transport,
}

impl BusinessClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Get the business tied to the API key.
    ///
    /// Calls `GET {base_url}/business`.
    pub async fn get(&self) -> Result<Business, MtaaniError> {
        let resp: ApiResponse<Business> = self.transport.get("/business", NO_QUERY).await?;
        resp.into_data("GET /business", "business")
    }

    /// Update the business tied to the API key.
    ///
    /// Calls `PUT {base_url}/business/update`. A phone number, when present,
    /// is validated before the request is sent.
    pub async fn update(&self, req: &UpdateBusinessRequest) -> Result<Business, MtaaniError> {
        if let Some(phone) = &req.phone_number {
            mtaani_core::validate_phone_number(phone)?;
        }
        let resp: ApiResponse<Business> = self
            .transport
            .put("/business/update", Some(req), NO_QUERY)
            .await?;
        resp.into_data("PUT /business/update", "business")
    }

    /// Delete the business tied to the API key.
    ///
    /// Calls `DELETE {base_url}/business/remove`.
    pub async fn delete(&self) -> Result<String, MtaaniError> {
        let resp: ApiResponse<serde_json::Value> =
            self.transport.delete("/business/remove", NO_QUERY).await?;
        Ok(resp.message_or("Business deleted successfully"))
    }

    /// List business categories.
    ///
    /// Calls `GET {base_url}/business/categories?pageNumber&pageSize`.
    pub async fn categories(
        &self,
        page: &Pagination,
    ) -> Result<Paginated<BusinessCategory>, MtaaniError> {
        self.transport.get("/business/categories", Some(page)).await
    }
}
