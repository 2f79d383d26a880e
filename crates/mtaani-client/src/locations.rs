//! Typed client for the location lookups.
//!
//! Zone → Area → Location (agent site) → DoorstepDestination. All four are
//! plain lookups without pagination; an empty payload yields an empty list.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/locations/zones` | Zones |
//! | GET    | `/locations/areas` | Areas |
//! | GET    | `/locations` | Agent locations (`areaId`, `zoneId`, `searchKey`) |
//! | GET    | `/locations/doorstep-destinations` | Doorstep destinations (`areaId`, `searchKey`) |

use serde::{Deserialize, Serialize};

use crate::envelope::ApiResponse;
use crate::error::MtaaniError;
use crate::transport::{Transport, NO_QUERY};
use crate::types::{AreaId, DoorstepDestinationId, LocationId, ZoneId};

// -- Types matching API schemas ------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: AreaId,
    pub name: String,
}

/// Agent location, with a back-reference to its zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    #[serde(default)]
    pub zone_id: Option<ZoneId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorstepDestination {
    pub id: DoorstepDestinationId,
    pub name: String,
}

/// Filters for [`LocationsClient::locations`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_id: Option<AreaId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<ZoneId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_key: Option<String>,
}

/// Filters for [`LocationsClient::doorstep_destinations`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_id: Option<AreaId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_key: Option<String>,
}

// -- Client -------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct LocationsClient {
    transport: Transport,
}

impl LocationsClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn zones(&self) -> Result<Vec<Zone>, MtaaniError> {
        let resp: ApiResponse<Vec<Zone>> =
            self.transport.get("/locations/zones", NO_QUERY).await?;
        Ok(resp.data_or_default())
    }

    pub async fn areas(&self) -> Result<Vec<Area>, MtaaniError> {
        let resp: ApiResponse<Vec<Area>> =
            self.transport.get("/locations/areas", NO_QUERY).await?;
        Ok(resp.data_or_default())
    }

    /// Agent locations, optionally narrowed by area, zone or name.
    pub async fn locations(&self, filters: &LocationFilters) -> Result<Vec<Location>, MtaaniError> {
        let resp: ApiResponse<Vec<Location>> =
            self.transport.get("/locations", Some(filters)).await?;
        Ok(resp.data_or_default())
    }

    /// Doorstep destinations, optionally narrowed by area or name.
    pub async fn doorstep_destinations(
        &self,
        filters: &DestinationFilters,
    ) -> Result<Vec<DoorstepDestination>, MtaaniError> {
        let resp: ApiResponse<Vec<DoorstepDestination>> = self
            .transport
            .get("/locations/doorstep-destinations", Some(filters))
            .await?;
        Ok(resp.data_or_default())
    }
}
