//! Layered client configuration.
//!
//! Values come from an optional TOML file overlaid by `EPOCH__`-prefixed
//! environment variables (`EPOCH__BASE_URL`, `EPOCH__TIMEOUT_SECS`), with
//! built-in defaults underneath.

use crate::error::RegistrationError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

const ENV_PREFIX: &str = "EPOCH";
const ENV_SEPARATOR: &str = "__";

const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for [`HttpGateway`](crate::gateway::HttpGateway).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend origin, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), timeout_secs: DEFAULT_TIMEOUT_SECS }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Loads configuration from defaults, an optional file and the
    /// environment, in increasing precedence.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::Internal`] when a source fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Self, RegistrationError> {
        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default("base_url", defaults.base_url)
            .map_err(into_config_error)?
            .set_default("timeout_secs", defaults.timeout_secs)
            .map_err(into_config_error)?;

        if let Some(path) = path {
            debug!(path = %path.display(), "loading client configuration file");
            builder = builder.add_source(config::File::from(path));
        }
        builder = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR));

        builder
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(into_config_error)
    }
}

fn into_config_error(e: config::ConfigError) -> RegistrationError {
    RegistrationError::Internal { message: e.to_string().into(), context: Some("config".into()) }
}
