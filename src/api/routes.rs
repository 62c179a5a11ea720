//! Request handlers

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::rag::{StructuredResponse, TicketPipeline};

/// Incoming ticket resolution request
#[derive(Debug, Deserialize)]
pub struct TicketRequest {
    pub ticket_text: String,
}

/// Health check payload
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// POST /resolve-ticket
pub async fn resolve_ticket(
    State(pipeline): State<Arc<TicketPipeline>>,
    Json(request): Json<TicketRequest>,
) -> Json<StructuredResponse> {
    Json(pipeline.resolve(&request.ticket_text).await)
}

/// GET /health
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}
