//! # Fee Subcommand
//!
//! Delivery fee quotes. Pricing is computed by the API; this only forwards
//! the agent and destination ids.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::Value;

use mtaani_client::delivery_charge::{AgentChargeQuery, DoorstepChargeQuery};
use mtaani_client::{AgentId, DoorstepDestinationId, MtaaniClient};

/// Arguments for `mtaani fee`.
#[derive(Args, Debug)]
pub struct FeeArgs {
    #[command(subcommand)]
    pub command: FeeCommand,
}

#[derive(Subcommand, Debug)]
pub enum FeeCommand {
    /// Quote an agent-to-agent package.
    Agent {
        /// Sending agent id.
        #[arg(long)]
        sender: u64,
        /// Receiving agent id.
        #[arg(long)]
        receiver: u64,
    },

    /// Quote a doorstep package.
    Doorstep {
        /// Sending agent id.
        #[arg(long)]
        sender: u64,
        /// Doorstep destination id.
        #[arg(long)]
        destination: u64,
    },
}

pub async fn run_fee(client: &MtaaniClient, args: &FeeArgs) -> Result<Value> {
    let charge = match args.command {
        FeeCommand::Agent { sender, receiver } => {
            let query = AgentChargeQuery {
                sender_agent_id: AgentId::from(sender),
                receiver_agent_id: AgentId::from(receiver),
            };
            client.delivery_charge().agent_package_fee(&query).await?
        }
        FeeCommand::Doorstep {
            sender,
            destination,
        } => {
            let query = DoorstepChargeQuery {
                sender_agent_id: AgentId::from(sender),
                doorstep_destination_id: DoorstepDestinationId::from(destination),
            };
            client.delivery_charge().doorstep_package_fee(&query).await?
        }
    };
    Ok(serde_json::to_value(charge)?)
}
