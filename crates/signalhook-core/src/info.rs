//! Fixed informational payloads served by the root, health and status routes.

use serde::Serialize;

/// Paths advertised by the health report. `/status` is deliberately absent.
pub const ADVERTISED_ENDPOINTS: [&str; 4] = ["/", "/webhook", "/webhook/tradingview", "/health"];

/// Payload for `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub greeting: &'static str,
    pub message: &'static str,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            greeting: "Hello, World!",
            message: "Forex Webhook Active!",
        }
    }
}

/// Payload for `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub service: &'static str,
    pub endpoints: Vec<&'static str>,
}

impl Default for HealthReport {
    fn default() -> Self {
        Self {
            status: "healthy",
            service: "Forex Hybrid Webhook",
            endpoints: ADVERTISED_ENDPOINTS.to_vec(),
        }
    }
}

/// Payload for `GET /status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub service: &'static str,
    pub version: &'static str,
    pub ready: bool,
    /// Public URL the core engine should post signals to.
    pub webhook_url: String,
}

impl ServiceStatus {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            service: "Forex Trading Webhook",
            version: "1.0",
            ready: true,
            webhook_url: webhook_url.into(),
        }
    }
}
