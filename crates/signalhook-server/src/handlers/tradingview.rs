//! TradingView alert webhook. Accepts any JSON without a schema.

use axum::{body::Bytes, Json};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::dto::TradingViewAck;
use crate::error::AppError;

/// POST /webhook/tradingview - Logs and echoes an arbitrary JSON payload.
///
/// An empty body is treated as `{}`.
pub async fn receive(body: Bytes) -> Result<Json<TradingViewAck>, AppError> {
    let data = if body.is_empty() {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            debug!("Rejected TradingView payload: {}", e);
            e
        })?
    };

    info!(payload = %data, "TradingView webhook received");
    Ok(Json(TradingViewAck::received(data)))
}
