//! Core engine signal webhook.

use axum::{body::Bytes, Json};
use chrono::{SecondsFormat, Utc};
use signalhook_core::TradingSignal;
use tracing::{debug, info};

use crate::dto::SignalAck;
use crate::error::AppError;

/// POST /webhook - Validates, logs and echoes a trading signal.
pub async fn receive(body: Bytes) -> Result<Json<SignalAck>, AppError> {
    let signal = TradingSignal::from_json(&body).map_err(|issues| {
        debug!(count = issues.len(), issues = ?issues, "Rejected signal");
        issues
    })?;

    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
    info!(
        timestamp = %timestamp,
        pair = %signal.pair,
        direction = %signal.direction,
        entry = signal.entry,
        "Signal: {} {} @ {}",
        signal.pair,
        signal.direction,
        signal.entry
    );

    Ok(Json(SignalAck::success(signal, timestamp)))
}
