//! # Identifier Newtypes
//!
//! Every resource in the Pickup Mtaani API is addressed by a numeric id.
//! Wrapping each namespace in its own type means a `ZoneId` cannot be passed
//! where an `AreaId` is expected, while the wire format stays a bare number
//! (`#[serde(transparent)]`).

use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Access the raw numeric value.
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Business account tied to an API key.
    BusinessId
);
numeric_id!(
    /// Agent (drop-off / pick-up site).
    AgentId
);
numeric_id!(
    /// Package of any kind (agent, doorstep, express).
    PackageId
);
numeric_id!(
    /// Agent location.
    LocationId
);
numeric_id!(AreaId);
numeric_id!(ZoneId);
numeric_id!(
    /// Doorstep destination, finer-grained than an area.
    DoorstepDestinationId
);
numeric_id!(
    /// Business category.
    CategoryId
);
numeric_id!(
    /// Express delivery mode (motorbike, car, ...).
    RiderTypeId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_bare_numbers_on_the_wire() {
        assert_eq!(serde_json::to_string(&PackageId(42)).unwrap(), "42");
        let id: AgentId = serde_json::from_str("362").unwrap();
        assert_eq!(id, AgentId(362));
    }

    #[test]
    fn display_prints_raw_value() {
        assert_eq!(BusinessId(505).to_string(), "505");
        assert_eq!(ZoneId::from(7).get(), 7);
    }
}
