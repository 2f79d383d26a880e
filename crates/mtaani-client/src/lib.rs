//! # mtaani-client -- Typed Rust client for the Pickup Mtaani delivery API
//!
//! One sub-client per resource group:
//! - **Business**: the business tied to the API key, and its categories
//! - **Locations**: zones, areas, agent locations, doorstep destinations
//! - **Agents**: drop-off/pick-up sites
//! - **Delivery charge**: fee quotes for agent and doorstep packages
//! - **Agent packages**, **Doorstep packages**, **Express deliveries**
//! - **Payments**: M-Pesa STK push and verification
//! - **Webhooks**: callback URL registration
//!
//! ## Architecture
//!
//! Every call goes through [`transport::Transport`], which adds the API key
//! header, applies the timeout and turns every failure into an
//! [`MtaaniError`]. Sub-clients never catch or reclassify transport errors;
//! they only unwrap response envelopes and run pre-flight validation.
//!
//! ```no_run
//! # async fn demo() -> Result<(), mtaani_client::MtaaniError> {
//! use mtaani_client::{ClientConfig, MtaaniClient};
//!
//! let client = MtaaniClient::new(ClientConfig::new("my-api-key")?)?;
//! let business = client.business().get().await?;
//! println!("{}", business.name);
//! # Ok(())
//! # }
//! ```

pub mod agent_packages;
pub mod agents;
pub mod business;
pub mod config;
pub mod delivery_charge;
pub mod doorstep_packages;
pub mod envelope;
pub mod error;
pub mod express;
pub mod locations;
pub mod packages;
pub mod payments;
pub(crate) mod retry;
pub mod transport;
pub mod types;
pub mod webhooks;

pub use config::{ClientConfig, ConfigError};
pub use envelope::{ApiResponse, Paginated, Pagination};
pub use error::{ErrorDetails, MtaaniError};
pub use mtaani_core::{
    format_phone_number, is_valid_package_value, is_valid_phone_number, validate_delivery_balance,
    validate_package_value, validate_package_value_default, validate_phone_number, PhoneNumber,
    ValidationError,
    DEFAULT_PACKAGE_VALUE_LIMIT,
};
pub use types::*;

/// Top-level Pickup Mtaani client. Holds one sub-client per resource group.
///
/// Cheap to clone: every sub-client shares the same transport and
/// connection pool.
#[derive(Debug, Clone)]
pub struct MtaaniClient {
    transport: transport::Transport,
    business: business::BusinessClient,
    locations: locations::LocationsClient,
    agents: agents::AgentsClient,
    delivery_charge: delivery_charge::DeliveryChargeClient,
    agent_packages: agent_packages::AgentPackagesClient,
    doorstep_packages: doorstep_packages::DoorstepPackagesClient,
    express_deliveries: express::ExpressDeliveriesClient,
    payments: payments::PaymentsClient,
    webhooks: webhooks::WebhooksClient,
}

impl MtaaniClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Fails with `MtaaniError::Config` before any network call when the API
    /// key is missing or the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, MtaaniError> {
        let transport = transport::Transport::new(&config)?;
        tracing::debug!(base_url = %config.base_url, "pickup mtaani client ready");

        Ok(Self {
            business: business::BusinessClient::new(transport.clone()),
            locations: locations::LocationsClient::new(transport.clone()),
            agents: agents::AgentsClient::new(transport.clone()),
            delivery_charge: delivery_charge::DeliveryChargeClient::new(transport.clone()),
            agent_packages: agent_packages::AgentPackagesClient::new(transport.clone()),
            doorstep_packages: doorstep_packages::DoorstepPackagesClient::new(transport.clone()),
            express_deliveries: express::ExpressDeliveriesClient::new(transport.clone()),
            payments: payments::PaymentsClient::new(transport.clone()),
            webhooks: webhooks::WebhooksClient::new(transport.clone()),
            transport,
        })
    }

    /// Build a client from `PICKUP_MTAANI_*` environment variables.
    pub fn from_env() -> Result<Self, MtaaniError> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn business(&self) -> &business::BusinessClient {
        &self.business
    }

    pub fn locations(&self) -> &locations::LocationsClient {
        &self.locations
    }

    pub fn agents(&self) -> &agents::AgentsClient {
        &self.agents
    }

    pub fn delivery_charge(&self) -> &delivery_charge::DeliveryChargeClient {
        &self.delivery_charge
    }

    pub fn agent_packages(&self) -> &agent_packages::AgentPackagesClient {
        &self.agent_packages
    }

    pub fn doorstep_packages(&self) -> &doorstep_packages::DoorstepPackagesClient {
        &self.doorstep_packages
    }

    pub fn express_deliveries(&self) -> &express::ExpressDeliveriesClient {
        &self.express_deliveries
    }

    pub fn payments(&self) -> &payments::PaymentsClient {
        &self.payments
    }

    pub fn webhooks(&self) -> &webhooks::WebhooksClient {
        &self.webhooks
    }

    /// The underlying transport, for endpoints without a typed wrapper.
    pub fn transport(&self) -> &transport::Transport {
        &self.transport
    }
}
