//! # Shared Identifier Types
//!
//! Re-exports identifier newtypes from [`mtaani_core`] so that consumers of
//! `mtaani-client` do not need a direct dependency on the core crate.

pub use mtaani_core::{
    AgentId, AreaId, BusinessId, CategoryId, DoorstepDestinationId, LocationId, PackageId,
    RiderTypeId, ZoneId,
};

/// Query parameter scoping a call to one business (`b_id`).
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub(crate) struct BusinessScope {
    pub b_id: BusinessId,
}

/// Query parameter addressing one package (`id`).
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub(crate) struct PackageRef {
    pub id: PackageId,
}

/// Query parameters addressing one package of one business (`id`, `b_id`).
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub(crate) struct ScopedPackageRef {
    pub id: PackageId,
    pub b_id: BusinessId,
}

/// `b_id` followed by package listing filters, as one query string.
#[derive(Debug, serde::Serialize)]
pub(crate) struct ScopedFilters<'a> {
    pub b_id: BusinessId,
    #[serde(flatten)]
    pub filters: &'a crate::packages::PackageFilters,
}
