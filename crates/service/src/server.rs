//! HTTP server exposing the `Evaluate` operation.
//!
//! ## Endpoints
//!
//! - `POST /evaluate`: score a [`RiskEvaluationRequest`] and return a
//!   [`RiskEvaluationReply`]. The optional `baggage` header supplies the
//!   caller's correlation context (e.g. `client.Id`).
//! - `GET /health`: simple liveness check

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use rev_core::types::{Baggage, RiskEvaluationReply, RiskEvaluationRequest};
use rev_risk::Evaluator;

use crate::error::ServiceError;

/// Header carrying W3C baggage from the caller.
pub const BAGGAGE_HEADER: &str = "baggage";

/// JSON response for the `/health` endpoint.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Build the evaluator router.
pub fn evaluator_router(evaluator: Arc<Evaluator>) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .route("/health", get(health_handler))
        .with_state(evaluator)
}

/// `POST /evaluate`: classify one client record.
///
/// Scoring is pure in-memory work, so it runs directly on the handler task.
async fn evaluate_handler(
    State(evaluator): State<Arc<Evaluator>>,
    headers: HeaderMap,
    payload: Result<Json<RiskEvaluationRequest>, JsonRejection>,
) -> Result<Json<RiskEvaluationReply>, ServiceError> {
    let Json(request) = payload?;

    let baggage = baggage_from(&headers);
    let span = tracing::info_span!(
        "Evaluate",
        evaluation.email = tracing::field::Empty,
        client.id = tracing::field::Empty,
    );
    let reply = span.in_scope(|| evaluator.evaluate(&request, &baggage));

    Ok(Json(reply))
}

/// `GET /health`: simple liveness check.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Extract the call's baggage; a missing or non-ASCII header yields none.
fn baggage_from(headers: &HeaderMap) -> Baggage {
    headers
        .get(BAGGAGE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(Baggage::from_header)
        .unwrap_or_default()
}

/// Serve the evaluator router on an already bound listener until `cancel`
/// fires.
pub async fn serve(
    listener: TcpListener,
    evaluator: Arc<Evaluator>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let app = evaluator_router(evaluator);

    let addr = listener.local_addr()?;
    tracing::info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Bind `addr` and run the server.
pub async fn run_server(
    addr: SocketAddr,
    evaluator: Arc<Evaluator>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, evaluator, cancel).await
}
