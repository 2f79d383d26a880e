//! Typed client for delivery fee quotes.
//!
//! Pricing is computed remotely; the client only forwards the pair of
//! endpoints and returns the quoted price.

use serde::{Deserialize, Serialize};

use crate::envelope::ApiResponse;
use crate::error::MtaaniError;
use crate::transport::Transport;
use crate::types::{AgentId, DoorstepDestinationId};

/// Quoted delivery fee.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliveryCharge {
    pub price: f64,
}

/// Sender and receiver agents of an agent-to-agent package.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AgentChargeQuery {
    #[serde(rename = "senderAgentID")]
    pub sender_agent_id: AgentId,
    #[serde(rename = "receiverAgentID")]
    pub receiver_agent_id: AgentId,
}

/// Sender agent and destination of a doorstep package.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DoorstepChargeQuery {
    #[serde(rename = "senderAgentID")]
    pub sender_agent_id: AgentId,
    #[serde(rename = "doorstepDestinationID")]
    pub doorstep_destination_id: DoorstepDestinationId,
}

#[derive(Debug, Clone)]
pub struct DeliveryChargeClient {
    transport: Transport,
}

impl DeliveryChargeClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Quote an agent-to-agent delivery.
    ///
    /// Calls `GET {base_url}/delivery-charge/agent-package`.
    pub async fn agent_package_fee(
        &self,
        query: &AgentChargeQuery,
    ) -> Result<DeliveryCharge, MtaaniError> {
        let resp: ApiResponse<DeliveryCharge> = self
            .transport
            .get("/delivery-charge/agent-package", Some(query))
            .await?;
        resp.into_data("GET /delivery-charge/agent-package", "delivery charge")
    }

    /// Quote a doorstep delivery.
    ///
    /// Calls `GET {base_url}/delivery-charge/doorstep-package`.
    pub async fn doorstep_package_fee(
        &self,
        query: &DoorstepChargeQuery,
    ) -> Result<DeliveryCharge, MtaaniError> {
        let resp: ApiResponse<DeliveryCharge> = self
            .transport
            .get("/delivery-charge/doorstep-package", Some(query))
            .await?;
        resp.into_data("GET /delivery-charge/doorstep-package", "delivery charge")
    }
}
