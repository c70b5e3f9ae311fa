use serde::Serialize;
use serde_json::Value;
use signalhook_core::TradingSignal;

// === Webhook acknowledgements ===

#[derive(Debug, Serialize)]
pub struct SignalAck {
    pub status: &'static str,
    pub message: String,
    pub timestamp: String,
    pub data: TradingSignal,
}

impl SignalAck {
    pub fn success(signal: TradingSignal, timestamp: String) -> Self {
        Self {
            status: "success",
            message: format!("Signal processed for {}", signal.pair),
            timestamp,
            data: signal,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TradingViewAck {
    pub status: &'static str,
    pub data: Value,
}

impl TradingViewAck {
    pub fn received(data: Value) -> Self {
        Self { status: "received", data }
    }
}
