//! Typed client for agent discovery.
//!
//! `GET /agents`, filterable by location id or a free-text search on the
//! agent's business name.

use serde::{Deserialize, Serialize};

use crate::envelope::ApiResponse;
use crate::error::MtaaniError;
use crate::transport::Transport;
use crate::types::{AgentId, LocationId};

/// Agent (drop-off / pick-up site).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    #[serde(alias = "name")]
    pub business_name: String,
    #[serde(default)]
    pub location_id: Option<LocationId>,
}

/// Filters for [`AgentsClient::list`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<LocationId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AgentsClient {
    transport: Transport,
}

impl AgentsClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List agents.
    ///
    /// Calls `GET {base_url}/agents?locationId&searchKey`.
    pub async fn list(&self, filters: &AgentFilters) -> Result<Vec<Agent>, MtaaniError> {
        let resp: ApiResponse<Vec<Agent>> = self.transport.get("/agents", Some(filters)).await?;
        Ok(resp.data_or_default())
    }
}
