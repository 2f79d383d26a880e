//! # Connection Flags
//!
//! Global flags shared by every networked subcommand. Anything not given on
//! the command line falls back to the `PICKUP_MTAANI_*` environment
//! variables, then to the client defaults.

use anyhow::Result;
use clap::Args;

use mtaani_client::config::{ENV_API_KEY, ENV_BASE_URL, ENV_DEBUG, ENV_RETRIES, ENV_TIMEOUT_MS};
use mtaani_client::{ClientConfig, ConfigError, MtaaniClient};

#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// API key. Defaults to `PICKUP_MTAANI_API_KEY`.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Base URL of the API (e.g. a staging deployment).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Retries for GET requests that got no response.
    #[arg(long, global = true)]
    pub retries: Option<u32>,

    /// Log every request and response at debug level.
    #[arg(long, global = true)]
    pub debug: bool,
}

impl ConnectionArgs {
    /// Merge flags over the environment into a client configuration.
    pub fn client_config(&self) -> Result<ClientConfig> {
        self.client_config_with(|name| std::env::var(name).ok())
    }

    /// Like [`ConnectionArgs::client_config`], resolving unset flags through
    /// `env` instead of the process environment.
    pub fn client_config_with<F>(&self, env: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let layered = |name: &str| {
            let flag = match name {
                ENV_API_KEY => self.api_key.clone(),
                ENV_BASE_URL => self.base_url.clone(),
                ENV_TIMEOUT_MS => self.timeout_ms.map(|ms| ms.to_string()),
                ENV_RETRIES => self.retries.map(|n| n.to_string()),
                ENV_DEBUG if self.debug => Some("true".to_string()),
                _ => None,
            };
            flag.or_else(|| env(name))
        };
        match ClientConfig::from_vars(layered) {
            Err(err @ ConfigError::MissingApiKey) if self.api_key.is_none() => {
                Err(anyhow::Error::new(err)
                    .context("no --api-key given and PICKUP_MTAANI_API_KEY is not set"))
            }
            other => Ok(other?),
        }
    }

    pub fn connect(&self) -> Result<MtaaniClient> {
        Ok(MtaaniClient::new(self.client_config()?)?)
    }
}
