//! # mtaani CLI entry point
//!
//! Parses command-line arguments, sets up tracing, builds the API client
//! and dispatches to subcommand handlers.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use mtaani_cli::connection::ConnectionArgs;
use mtaani_cli::fee::{run_fee, FeeArgs};
use mtaani_cli::lookup::{
    run_agents, run_areas, run_business, run_categories, run_delivery_modes, run_destinations,
    run_locations, run_unpaid, run_zones, AgentsArgs, CategoriesArgs, DestinationsArgs,
    LocationsArgs, UnpaidArgs,
};
use mtaani_cli::phone::{run_check_phone, CheckPhoneArgs};
use mtaani_cli::to_pretty_json;
use mtaani_cli::webhook::{run_register_webhook, RegisterWebhookArgs};

/// Pickup Mtaani CLI
///
/// Lookups, fee quotes and account operations against the Pickup Mtaani
/// delivery API.
#[derive(Parser, Debug)]
#[command(name = "mtaani", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the business tied to the API key.
    Business,

    /// List business categories.
    Categories(CategoriesArgs),

    /// List zones.
    Zones,

    /// List areas.
    Areas,

    /// List agent locations.
    Locations(LocationsArgs),

    /// List doorstep destinations.
    Destinations(DestinationsArgs),

    /// List agents.
    Agents(AgentsArgs),

    /// Quote a delivery fee.
    Fee(FeeArgs),

    /// List express delivery modes.
    DeliveryModes,

    /// List unpaid packages of a business.
    Unpaid(UnpaidArgs),

    /// Register the webhook callback URL.
    RegisterWebhook(RegisterWebhookArgs),

    /// Validate and normalize a phone number (offline).
    CheckPhone(CheckPhoneArgs),
}

/// Log level for `-v` repeats; `--debug` never goes below `debug`.
fn log_level(verbose: u8, debug: bool) -> &'static str {
    match verbose {
        0 | 1 if debug => "debug",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level(cli.verbose, cli.connection.debug)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await.and_then(|value| to_pretty_json(&value)) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> Result<Value> {
    if let Commands::CheckPhone(args) = &cli.command {
        return Ok(serde_json::to_value(run_check_phone(args))?);
    }

    let client = cli.connection.connect()?;
    tracing::debug!(command = ?cli.command, "dispatching");

    match &cli.command {
        Commands::Business => run_business(&client).await,
        Commands::Categories(args) => run_categories(&client, args).await,
        Commands::Zones => run_zones(&client).await,
        Commands::Areas => run_areas(&client).await,
        Commands::Locations(args) => run_locations(&client, args).await,
        Commands::Destinations(args) => run_destinations(&client, args).await,
        Commands::Agents(args) => run_agents(&client, args).await,
        Commands::Fee(args) => run_fee(&client, args).await,
        Commands::DeliveryModes => run_delivery_modes(&client).await,
        Commands::Unpaid(args) => run_unpaid(&client, args).await,
        Commands::RegisterWebhook(args) => run_register_webhook(&client, args).await,
        Commands::CheckPhone(args) => Ok(serde_json::to_value(run_check_phone(args))?),
    }
}
