//! # Kenyan Phone Numbers
//!
//! Customer, business and M-Pesa payer phone numbers must be Kenyan mobile
//! numbers: `+254` or a leading `0`, then a `1` or `7` line prefix, then
//! exactly eight digits (`^(\+254|0)(1|7)[0-9]{8}$`).
//!
//! [`format_phone_number`] is a pure string transform into the `+254` form.
//! It does not validate.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const INTERNATIONAL_PREFIX: &str = "+254";
const COUNTRY_CODE: &str = "254";

fn matches_kenyan_pattern(phone: &str) -> bool {
    let subscriber = match phone
        .strip_prefix(INTERNATIONAL_PREFIX)
        .or_else(|| phone.strip_prefix('0'))
    {
        Some(rest) => rest.as_bytes(),
        None => return false,
    };
    subscriber.len() == 9
        && matches!(subscriber[0], b'1' | b'7')
        && subscriber[1..].iter().all(u8::is_ascii_digit)
}

/// Validate a Kenyan phone number.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPhoneNumber`] carrying the input when it
/// does not match the pattern. The empty string is rejected.
pub fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    if matches_kenyan_pattern(phone) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhoneNumber(phone.to_string()))
    }
}

/// Non-failing variant of [`validate_phone_number`].
pub fn is_valid_phone_number(phone: &str) -> bool {
    matches_kenyan_pattern(phone)
}

/// Normalize a phone number to the international `+254` form.
///
/// Spaces and dashes are stripped first. A leading `0` becomes `+254`, a
/// leading `254` gets a `+`, anything else is returned as cleaned.
/// Idempotent: `format(format(x)) == format(x)`.
pub fn format_phone_number(phone: &str) -> String {
    let cleaned: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if let Some(rest) = cleaned.strip_prefix('0') {
        return format!("{INTERNATIONAL_PREFIX}{rest}");
    }
    if cleaned.starts_with(COUNTRY_CODE) {
        return format!("+{cleaned}");
    }
    cleaned
}

/// A phone number that passed [`validate_phone_number`].
///
/// Stored exactly as given; use [`PhoneNumber::international`] for the
/// `+254` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate and wrap a phone number.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPhoneNumber`] if the format is invalid.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        validate_phone_number(&s)?;
        Ok(Self(s))
    }

    /// Access the number as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The number in `+254XXXXXXXXX` form.
    pub fn international(&self) -> String {
        format_phone_number(&self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
