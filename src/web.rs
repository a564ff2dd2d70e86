use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use axum::{Router, http::StatusCode};
use tokio::signal;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    api::{self, AppState},
    config::ServiceConfig,
    weather::{NwsClient, WeatherService},
};

/// Build the application router backed by the real upstream client
pub fn app(config: &ServiceConfig) -> Result<Router> {
    let client = NwsClient::new(&config.upstream).context("Failed to create HTTP client")?;
    let state = AppState {
        service: WeatherService::new(Arc::new(client)),
    };

    Ok(api::router(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.server.request_timeout_seconds),
        ))
        .layer(TraceLayer::new_for_http()))
}

pub async fn run(config: ServiceConfig) -> Result<()> {
    let app = app(&config)?;

    let port = config.server.port;
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Weather service starting on port :{}", port);
    tracing::info!(
        "Try: http://localhost:{}/weather?lat=40.7128&lng=-74.0060",
        port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutting down");
}
