//! Listener and browser-access settings for the dashboard API.

use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use super::error::ValidationError;

/// Longest request timeout accepted; analyses are single in-memory passes.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Origin the dashboard's dev server runs on.
const DASHBOARD_DEV_ORIGIN: &str = "http://localhost:3000";

/// Where the API listens and which dashboard origins may call it.
///
/// Missing keys take the [`Default`] values, so a bare environment serves
/// the local dashboard on `127.0.0.1:8000`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,

    /// `EnvFilter` directive, used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Per-request deadline enforced by the timeout layer.
    pub request_timeout_secs: u64,

    /// Comma-separated dashboard origins. Empty means none configured.
    pub cors_origins: String,
}

/// Deployment stage. Production switches logs to JSON and closes CORS
/// unless origins are listed.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            environment: Environment::Development,
            log_level: "info,carbon_guard=debug,tower_http=info".to_string(),
            request_timeout_secs: 30,
            cors_origins: DASHBOARD_DEV_ORIGIN.to_string(),
        }
    }
}

impl ServerConfig {
    /// Bind address; the host must be a literal IP.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ValidationError::InvalidBindAddress(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Configured origins, blanks dropped.
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}
