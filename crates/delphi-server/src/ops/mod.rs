//! Operational HTTP endpoints.
//!
//! - `/`           : banner
//! - `/api/health` : liveness with server timestamp
//! - `/metrics`    : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::app_state::AppState;

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Delphi Server is running!" }))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let stored = state.counters().len() as u64;
    let body = state.metrics().render(&[("delphi_counters", stored)]);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}
