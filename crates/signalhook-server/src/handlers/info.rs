//! Static informational endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};
use signalhook_core::{Greeting, HealthReport, ServiceStatus};

use crate::ServerState;

/// GET / - Greeting.
pub async fn root() -> Json<Greeting> {
    Json(Greeting::default())
}

/// GET /health - Service descriptor with the advertised endpoint list.
pub async fn health() -> Json<HealthReport> {
    Json(HealthReport::default())
}

/// GET /status - Service metadata including the public webhook URL.
pub async fn status(State(state): State<Arc<ServerState>>) -> Json<ServiceStatus> {
    Json(state.status.clone())
}
