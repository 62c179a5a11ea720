// Inbound HTTP boundary
//
// Thin marshalling layer over the pipeline: one resolve operation and a
// health check. The pipeline guarantees the three-key response shape, so
// handlers never construct error bodies of their own.

pub mod routes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::signal;
use tracing::info;

use crate::errors::Result;
use crate::rag::TicketPipeline;
use routes::{health_check, resolve_ticket};

/// Build the application router
pub fn router(pipeline: Arc<TicketPipeline>) -> Router {
    Router::new()
        .route("/resolve-ticket", post(resolve_ticket))
        .route("/health", get(health_check))
        .with_state(pipeline)
}

/// Serve the API until Ctrl+C
pub async fn serve(pipeline: Arc<TicketPipeline>, bind: &str) -> Result<()> {
    let app = router(pipeline);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(addr = bind, "Serving ticket resolution API");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
