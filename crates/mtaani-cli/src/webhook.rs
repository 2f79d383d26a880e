//! # Register-Webhook Subcommand

use anyhow::Result;
use clap::Args;
use serde_json::{json, Value};

use mtaani_client::webhooks::RegisterWebhookRequest;
use mtaani_client::MtaaniClient;

/// Arguments for `mtaani register-webhook`.
#[derive(Args, Debug)]
pub struct RegisterWebhookArgs {
    /// Callback URL (http or https) that will receive package events.
    pub url: String,
}

pub async fn run_register_webhook(
    client: &MtaaniClient,
    args: &RegisterWebhookArgs,
) -> Result<Value> {
    let message = client
        .webhooks()
        .register(&RegisterWebhookRequest::new(args.url.as_str()))
        .await?;
    Ok(json!({ "message": message }))
}
