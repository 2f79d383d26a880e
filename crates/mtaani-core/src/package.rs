//! # Package Value Checks
//!
//! Bounds on the declared value of a package and on the balance collected
//! at delivery. Values are plain JSON numbers on the wire, so they are `f64`
//! here.

use crate::error::ValidationError;

/// Upper bound on a declared package value unless the caller overrides it.
pub const DEFAULT_PACKAGE_VALUE_LIMIT: f64 = 1_000_000.0;

/// Validate a package value against `limit`.
///
/// Rejects iff `value < 0` or `value > limit`.
///
/// # Errors
///
/// [`ValidationError::PackageValueExceedsLimit`] above the limit,
/// [`ValidationError::NegativePackageValue`] below zero.
pub fn validate_package_value(value: f64, limit: f64) -> Result<(), ValidationError> {
    if value > limit {
        return Err(ValidationError::PackageValueExceedsLimit { value, limit });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativePackageValue(value));
    }
    Ok(())
}

/// [`validate_package_value`] with [`DEFAULT_PACKAGE_VALUE_LIMIT`].
pub fn validate_package_value_default(value: f64) -> Result<(), ValidationError> {
    validate_package_value(value, DEFAULT_PACKAGE_VALUE_LIMIT)
}

/// Non-failing variant of [`validate_package_value`].
pub fn is_valid_package_value(value: f64, limit: f64) -> bool {
    validate_package_value(value, limit).is_ok()
}

/// The balance collected on delivery may not be negative.
pub fn validate_delivery_balance(balance: f64) -> Result<(), ValidationError> {
    if balance < 0.0 {
        return Err(ValidationError::NegativeDeliveryBalance(balance));
    }
    Ok(())
}
