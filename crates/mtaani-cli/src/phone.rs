//! # Check-Phone Subcommand
//!
//! Local only: validates a phone number and shows its international form.
//! No API key or network access is needed.

use clap::Args;
use serde::Serialize;

use mtaani_client::{format_phone_number, validate_phone_number};

/// Arguments for `mtaani check-phone`.
#[derive(Args, Debug)]
pub struct CheckPhoneArgs {
    /// Phone number, e.g. `0712345678` or `+254712345678`.
    pub phone: String,
}

#[derive(Debug, Serialize)]
pub struct PhoneReport {
    pub input: String,
    pub valid: bool,
    pub formatted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn run_check_phone(args: &CheckPhoneArgs) -> PhoneReport {
    let error = validate_phone_number(&args.phone).err().map(|e| e.to_string());
    PhoneReport {
        input: args.phone.clone(),
        valid: error.is_none(),
        formatted: format_phone_number(&args.phone),
        error,
    }
}
