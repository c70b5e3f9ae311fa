//! Core types for the signalhook webhook receiver.

mod info;
mod signal;

pub use info::{Greeting, HealthReport, ServiceStatus, ADVERTISED_ENDPOINTS};
pub use signal::{SchemaError, SchemaErrorKind, TradingSignal};
