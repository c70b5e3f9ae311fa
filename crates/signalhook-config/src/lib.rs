use std::env;
use std::net::{IpAddr, SocketAddr};

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid HOST value: {0}")]
    InvalidHost(String),

    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("PUBLIC_WEBHOOK_URL must not be empty")]
    EmptyWebhookUrl,
}

// ─────────────────────────────────────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_WEBHOOK_URL: &str = "https://fastapi-production-abac.up.railway.app/webhook";

// ─────────────────────────────────────────────────────────────────────────────
// Server Config
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Reported by `/status` as the address signals should be posted to.
    pub webhook_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `PUBLIC_WEBHOOK_URL` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host_raw = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHost(host_raw.clone()))?;

        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let webhook_url = lookup("PUBLIC_WEBHOOK_URL").unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string());
        if webhook_url.trim().is_empty() {
            return Err(ConfigError::EmptyWebhookUrl);
        }

        Ok(Self { host, port, webhook_url })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
