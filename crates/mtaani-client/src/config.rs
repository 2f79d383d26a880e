//! Pickup Mtaani client configuration.
//!
//! Defaults point to the production endpoint. Override via environment
//! variables or the `with_*` setters for staging and testing. A config is
//! built once and read-only afterwards; the client never mutates it.

use url::Url;
use zeroize::Zeroizing;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.pickupmtaani.com/api/v1";

/// Default request timeout (30 seconds).
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default number of extra attempts for retryable requests.
pub const DEFAULT_RETRIES: u32 = 3;

pub const ENV_API_KEY: &str = "PICKUP_MTAANI_API_KEY";
pub const ENV_BASE_URL: &str = "PICKUP_MTAANI_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "PICKUP_MTAANI_TIMEOUT_MS";
pub const ENV_RETRIES: &str = "PICKUP_MTAANI_RETRIES";
pub const ENV_DEBUG: &str = "PICKUP_MTAANI_DEBUG";

/// Configuration for connecting to the Pickup Mtaani API.
///
/// Custom `Debug` implementation redacts the `api_key` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct ClientConfig {
    /// API key sent in the `apikey` header of every request.
    pub api_key: Zeroizing<String>,
    /// Base URL every request path is joined onto.
    /// Default: <https://api.pickupmtaani.com/api/v1>
    pub base_url: Url,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Extra attempts for `GET` requests that received no response.
    pub retries: u32,
    /// Log every request and response at `debug` level.
    pub debug: bool,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .field("retries", &self.retries)
            .field("debug", &self.debug)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration with production defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingApiKey` if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = Zeroizing::new(api_key.into());
        ensure_api_key(&api_key)?;
        Ok(Self {
            api_key,
            base_url: parse_url("base_url", DEFAULT_BASE_URL)?,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retries: DEFAULT_RETRIES,
            debug: false,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `PICKUP_MTAANI_API_KEY` (required)
    /// - `PICKUP_MTAANI_BASE_URL` (default: `https://api.pickupmtaani.com/api/v1`)
    /// - `PICKUP_MTAANI_TIMEOUT_MS` (default: 30000)
    /// - `PICKUP_MTAANI_RETRIES` (default: 3)
    /// - `PICKUP_MTAANI_DEBUG` (default: off)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration through `vars`, which resolves the same
    /// `PICKUP_MTAANI_*` names as [`ClientConfig::from_env`].
    ///
    /// Lets callers layer their own values (command-line flags, a settings
    /// file) over the process environment.
    pub fn from_vars<F>(vars: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = vars(ENV_API_KEY).ok_or(ConfigError::MissingApiKey)?;
        let raw_url = vars(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        fn parsed<T: std::str::FromStr>(vars: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
            vars(name).and_then(|s| s.trim().parse().ok())
        }

        Ok(Self::new(api_key)?
            .with_base_url(&raw_url)?
            .with_timeout_ms(parsed(&vars, ENV_TIMEOUT_MS).unwrap_or(DEFAULT_TIMEOUT_MS))
            .with_retries(parsed(&vars, ENV_RETRIES).unwrap_or(DEFAULT_RETRIES))
            .with_debug(vars(ENV_DEBUG).map(|v| parse_flag(&v)).unwrap_or(false)))
    }

    /// Point the client at another deployment (staging, a local mock).
    pub fn with_base_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_url("base_url", raw)?;
        Ok(self)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

pub(crate) fn ensure_api_key(api_key: &str) -> Result<(), ConfigError> {
    if api_key.trim().is_empty() {
        return Err(ConfigError::MissingApiKey);
    }
    Ok(())
}

fn parse_url(field: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(field.to_string(), e.to_string()))
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API key is required")]
    MissingApiKey,
    #[error("API key contains characters that cannot be sent in a header")]
    InvalidApiKey,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}
