//! # mtaani-core -- Foundational Types for the Pickup Mtaani Client
//!
//! Leaf crate of the workspace. Defines the identifier newtypes shared by
//! every request and response model, and the pure validators that guard
//! request payloads before they leave the process.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `BusinessId`, `AgentId`,
//!    `PackageId` and friends are distinct types, so an agent id cannot be
//!    passed where a package id is expected. On the wire they are plain
//!    numbers.
//!
//! 2. **Validators are pure.** Phone number and package value checks operate
//!    only on the value passed in. No network, no global state.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mtaani-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod package;
pub mod phone;

pub use error::ValidationError;
pub use identity::{
    AgentId, AreaId, BusinessId, CategoryId, DoorstepDestinationId, LocationId, PackageId,
    RiderTypeId, ZoneId,
};
pub use package::{
    is_valid_package_value, validate_delivery_balance, validate_package_value,
    validate_package_value_default, DEFAULT_PACKAGE_VALUE_LIMIT,
};
pub use phone::{format_phone_number, is_valid_phone_number, validate_phone_number, PhoneNumber};
