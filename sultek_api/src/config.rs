//! Connection settings for the Sultek API.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::ConfigError;

/// Validated connection settings. Construction fails before any request is
/// made if the URI, token or timeout is unusable.
#[derive(Clone)]
pub struct Config {
    uri: Url,
    token: String,
    client_timeout: u64,
}

impl Config {
    /// Builds a config from a base URI, a bearer token and a timeout in seconds.
    pub fn new(uri: &str, token: impl Into<String>, client_timeout: i64) -> Result<Self, ConfigError> {
        let parsed = Url::parse(uri.trim()).map_err(|e| ConfigError::InvalidUri {
            uri: uri.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
        }
        if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
            return Err(ConfigError::InvalidUri {
                uri: uri.to_string(),
                reason: "missing host".to_string(),
            });
        }

        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }

        if client_timeout <= 0 {
            return Err(ConfigError::InvalidTimeout(client_timeout));
        }

        Ok(Self {
            uri: parsed,
            token,
            client_timeout: client_timeout as u64,
        })
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Connection timeout in whole seconds.
    pub fn client_timeout(&self) -> u64 {
        self.client_timeout
    }

    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_secs(self.client_timeout)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("uri", &self.uri.as_str())
            .field("token", &"<redacted>")
            .field("client_timeout", &self.client_timeout)
            .finish()
    }
}
