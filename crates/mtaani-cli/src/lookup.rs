//! # Lookup Subcommands
//!
//! Read-only queries: the business, its categories, the location hierarchy,
//! agents, express delivery modes and unpaid packages.

use anyhow::Result;
use clap::Args;
use serde_json::Value;

use mtaani_client::agents::AgentFilters;
use mtaani_client::locations::{DestinationFilters, LocationFilters};
use mtaani_client::{AreaId, BusinessId, LocationId, MtaaniClient, Pagination, ZoneId};

/// Arguments for `mtaani categories`.
#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Zero-based page number.
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    #[arg(long, default_value_t = 20)]
    pub page_size: u32,
}

/// Arguments for `mtaani locations`.
#[derive(Args, Debug)]
pub struct LocationsArgs {
    #[arg(long)]
    pub area_id: Option<u64>,
    #[arg(long)]
    pub zone_id: Option<u64>,
    /// Free-text search on the location name.
    #[arg(long)]
    pub search_key: Option<String>,
}

/// Arguments for `mtaani destinations`.
#[derive(Args, Debug)]
pub struct DestinationsArgs {
    #[arg(long)]
    pub area_id: Option<u64>,
    #[arg(long)]
    pub search_key: Option<String>,
}

/// Arguments for `mtaani agents`.
#[derive(Args, Debug)]
pub struct AgentsArgs {
    #[arg(long)]
    pub location_id: Option<u64>,
    #[arg(long)]
    pub search_key: Option<String>,
}

/// Arguments for `mtaani unpaid`.
#[derive(Args, Debug)]
pub struct UnpaidArgs {
    /// Business id (`b_id`).
    #[arg(long)]
    pub business: u64,
}

pub async fn run_business(client: &MtaaniClient) -> Result<Value> {
    Ok(serde_json::to_value(client.business().get().await?)?)
}

pub async fn run_categories(client: &MtaaniClient, args: &CategoriesArgs) -> Result<Value> {
    let page = client
        .business()
        .categories(&Pagination::page(args.page, args.page_size))
        .await?;
    Ok(serde_json::to_value(page)?)
}

pub async fn run_zones(client: &MtaaniClient) -> Result<Value> {
    Ok(serde_json::to_value(client.locations().zones().await?)?)
}

pub async fn run_areas(client: &MtaaniClient) -> Result<Value> {
    Ok(serde_json::to_value(client.locations().areas().await?)?)
}

pub async fn run_locations(client: &MtaaniClient, args: &LocationsArgs) -> Result<Value> {
    let filters = LocationFilters {
        area_id: args.area_id.map(AreaId::from),
        zone_id: args.zone_id.map(ZoneId::from),
        search_key: args.search_key.clone(),
    };
    Ok(serde_json::to_value(client.locations().locations(&filters).await?)?)
}

pub async fn run_destinations(client: &MtaaniClient, args: &DestinationsArgs) -> Result<Value> {
    let filters = DestinationFilters {
        area_id: args.area_id.map(AreaId::from),
        search_key: args.search_key.clone(),
    };
    let destinations = client.locations().doorstep_destinations(&filters).await?;
    Ok(serde_json::to_value(destinations)?)
}

pub async fn run_agents(client: &MtaaniClient, args: &AgentsArgs) -> Result<Value> {
    let filters = AgentFilters {
        location_id: args.location_id.map(LocationId::from),
        search_key: args.search_key.clone(),
    };
    Ok(serde_json::to_value(client.agents().list(&filters).await?)?)
}

pub async fn run_delivery_modes(client: &MtaaniClient) -> Result<Value> {
    Ok(serde_json::to_value(
        client.express_deliveries().delivery_modes().await?,
    )?)
}

pub async fn run_unpaid(client: &MtaaniClient, args: &UnpaidArgs) -> Result<Value> {
    let unpaid = client
        .agent_packages()
        .unpaid(BusinessId::from(args.business))
        .await?;
    tracing::info!(count = unpaid.len(), "unpaid packages");
    Ok(serde_json::to_value(unpaid)?)
}
