//! # Validation Errors
//!
//! Failures raised by the local validators. Each variant carries the
//! offending value so the caller can report exactly what was rejected.

use thiserror::Error;

/// A value failed a local validation check.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Phone number does not match `^(\+254|0)(1|7)[0-9]{8}$`.
    #[error("invalid Kenyan phone number {0:?}: expected +254 or 0, then 1 or 7, then 8 digits")]
    InvalidPhoneNumber(String),

    /// Package value is above the allowed limit.
    #[error("package value {value} exceeds the limit of {limit}")]
    PackageValueExceedsLimit { value: f64, limit: f64 },

    /// Package value is below zero.
    #[error("package value {0} must be a positive number")]
    NegativePackageValue(f64),

    /// On-delivery balance is below zero.
    #[error("delivery balance {0} must be a positive number")]
    NegativeDeliveryBalance(f64),

    /// A URL field could not be accepted.
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ValidationError {
    /// Field-level messages in the same `field: reason` shape the API uses
    /// for its own `validationErrors` list.
    pub fn field_errors(&self) -> Vec<String> {
        match self {
            Self::InvalidPhoneNumber(phone) => {
                vec![format!("phone: \"{phone}\" does not match the required format")]
            }
            Self::PackageValueExceedsLimit { limit, .. } => {
                vec![format!("packageValue: must not exceed {limit}")]
            }
            Self::NegativePackageValue(_) => {
                vec!["packageValue: must be greater than or equal to 0".to_string()]
            }
            Self::NegativeDeliveryBalance(_) => {
                vec!["on_delivery_balance: must be greater than or equal to 0".to_string()]
            }
            Self::InvalidUrl { reason, .. } => vec![format!("webhook_url: {reason}")],
        }
    }
}
