//! HTTP webhook receiver for trading signals.

pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use signalhook_config::ServerConfig;
use signalhook_core::ServiceStatus;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Immutable state shared by all handlers.
///
/// The `/status` payload only depends on startup configuration, so it is
/// assembled once here and cloned per request. Nothing in the state is
/// written after the router is built, which keeps requests independent.
pub struct ServerState {
    pub status: ServiceStatus,
}

impl ServerState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            status: ServiceStatus::new(config.webhook_url.clone()),
        }
    }
}

/// Builds the router with every route and the logging/CORS layers.
///
/// `/health` sits outside the trace layer so load balancer probes do not
/// flood the request log.
pub fn create_router(config: &ServerConfig) -> Router {
    let state = Arc::new(ServerState::new(config));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/", get(handlers::info::root))
        .route("/webhook", post(handlers::signal::receive))
        .route("/webhook/tradingview", post(handlers::tradingview::receive))
        .route("/status", get(handlers::info::status))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/health", get(handlers::info::health))
        .layer(cors)
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl+C or SIGTERM.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let app = create_router(&config);

    info!("Starting server on {}", addr);
    info!("Advertising webhook URL {}", config.webhook_url);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
