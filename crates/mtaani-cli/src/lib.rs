//! # mtaani-cli -- Operator CLI for the Pickup Mtaani API
//!
//! Provides the `mtaani` command-line interface over [`mtaani_client`].
//!
//! ## Subcommands
//!
//! - `mtaani business`, `mtaani categories`: the business tied to the key.
//! - `mtaani zones`, `areas`, `locations`, `destinations`, `agents`: lookups.
//! - `mtaani fee agent|doorstep`: delivery fee quotes.
//! - `mtaani delivery-modes`: express rider categories.
//! - `mtaani unpaid`: unpaid packages, ready for an STK push batch.
//! - `mtaani register-webhook`: set the callback URL.
//! - `mtaani check-phone`: validate and normalize a phone number locally.
//!
//! Every command prints pretty JSON on stdout:
//!
//! ```bash
//! PICKUP_MTAANI_API_KEY=... mtaani locations --area-id 4 --search-key Moi
//! mtaani fee doorstep --sender 3 --destination 88
//! mtaani check-phone 0712345678
//! ```

pub mod connection;
pub mod fee;
pub mod lookup;
pub mod phone;
pub mod webhook;

use serde::Serialize;

/// Render a command result for stdout.
pub fn to_pretty_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
