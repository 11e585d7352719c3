//! Counter endpoints: verb + path id -> `CounterStore` call -> JSON.
//!
//! | verb   | path           | store call      |
//! |--------|----------------|-----------------|
//! | GET    | /counters      | `list_all`      |
//! | GET    | /counter/{id}  | `get_or_create` |
//! | POST   | /counter/{id}  | `increment`     |
//! | DELETE | /counter/{id}  | `delete`        |

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::SecondsFormat;
use serde::Serialize;

use delphi_core::error::DelphiError;
use delphi_core::{Counter, CounterId};

use crate::app_state::AppState;
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Serialize)]
pub struct CounterView {
    pub count: u64,
    #[serde(rename = "lastClick")]
    pub last_click: String,
}

impl From<Counter> for CounterView {
    fn from(c: Counter) -> Self {
        Self {
            count: c.count,
            last_click: c.last_click.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CounterListItem {
    pub uuid: String,
    #[serde(flatten)]
    pub counter: CounterView,
}

#[derive(Debug, Serialize)]
pub struct DeleteOutcome {
    pub success: bool,
    pub message: &'static str,
}

/// Undecodable path segments and empty ids both surface as `InvalidArgument`.
fn parse_id(
    state: &AppState,
    op: &str,
    raw: Result<Path<String>, PathRejection>,
) -> ApiResult<CounterId> {
    raw.map_err(|rej| {
        DelphiError::InvalidArgument(format!("counter id: {}", rej.body_text()))
    })
    .and_then(|Path(id)| CounterId::new(id))
    .map_err(|e| {
        state.metrics().counter_ops.inc(&[("op", op), ("outcome", "invalid")]);
        ApiError(e)
    })
}

pub async fn list_counters(State(state): State<AppState>) -> Json<Vec<CounterListItem>> {
    let items: Vec<CounterListItem> = state
        .counters()
        .list_all()
        .into_iter()
        .map(|(uuid, c)| CounterListItem {
            uuid,
            counter: c.into(),
        })
        .collect();
    state.metrics().counter_ops.inc(&[("op", "list"), ("outcome", "ok")]);
    Json(items)
}

pub async fn get_counter(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<CounterView>> {
    let id = parse_id(&state, "get", id)?;
    let c = state.counters().get_or_create(&id);
    state.metrics().counter_ops.inc(&[("op", "get"), ("outcome", "ok")]);
    Ok(Json(c.into()))
}

pub async fn increment_counter(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<CounterView>> {
    let id = parse_id(&state, "increment", id)?;
    let c = state.counters().increment(&id);
    tracing::debug!(id = %id, count = c.count, "counter incremented");
    state.metrics().counter_ops.inc(&[("op", "increment"), ("outcome", "ok")]);
    Ok(Json(c.into()))
}

pub async fn delete_counter(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<(StatusCode, Json<DeleteOutcome>)> {
    let id = parse_id(&state, "delete", id)?;
    if state.counters().delete(&id) {
        state.metrics().counter_ops.inc(&[("op", "delete"), ("outcome", "ok")]);
        Ok((
            StatusCode::OK,
            Json(DeleteOutcome {
                success: true,
                message: "Counter deleted",
            }),
        ))
    } else {
        state.metrics().counter_ops.inc(&[("op", "delete"), ("outcome", "not_found")]);
        Ok((
            StatusCode::NOT_FOUND,
            Json(DeleteOutcome {
                success: false,
                message: "Counter not found",
            }),
        ))
    }
}

/// `/counter/` with nothing after the slash.
pub async fn missing_id(State(state): State<AppState>) -> ApiError {
    state.metrics().counter_ops.inc(&[("op", "any"), ("outcome", "invalid")]);
    ApiError(DelphiError::InvalidArgument(
        "counter id must not be empty".into(),
    ))
}
