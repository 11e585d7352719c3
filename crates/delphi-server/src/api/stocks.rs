//! Stock-price passthrough.
//!
//! The lookup runs outside any counter critical section and is bounded by
//! `stocks.timeout_ms`. Failures of the collaborator become a 500 with a
//! readable message; nothing is retried or cached.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tokio::time::timeout;

use delphi_core::error::DelphiError;

use crate::app_state::AppState;

#[derive(Debug, Serialize)]
struct PriceBody {
    success: bool,
    ticker: String,
    price: f64,
    date: String,
}

fn failure(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "success": false, "message": message }))).into_response()
}

pub async fn get_price(
    State(state): State<AppState>,
    ticker: Result<Path<String>, PathRejection>,
) -> Response {
    let ticker = match ticker {
        Ok(Path(t)) => t.trim().to_uppercase(),
        Err(_) => String::new(),
    };
    if ticker.is_empty() {
        return missing_ticker(State(state)).await;
    }

    let source = state.prices();
    let limit = state.price_timeout();
    let lookup = match timeout(limit, source.quote(&ticker)).await {
        Ok(res) => res,
        Err(_) => Err(DelphiError::Unavailable(format!(
            "price lookup timed out after {}ms",
            limit.as_millis()
        ))),
    };

    match lookup {
        Ok(q) => {
            state.metrics().stock_lookups.inc(&[("outcome", "ok")]);
            Json(PriceBody {
                success: true,
                ticker: q.ticker,
                price: q.price,
                date: q.date,
            })
            .into_response()
        }
        Err(e) => {
            let outcome = match e {
                DelphiError::Unavailable(_) => "unavailable",
                _ => "upstream",
            };
            state.metrics().stock_lookups.inc(&[("outcome", outcome)]);
            tracing::warn!(%ticker, source = source.name(), error = %e, "price lookup failed");
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch price for {ticker}: {}", e.detail()),
            )
        }
    }
}

/// `/stocks/` with no ticker.
pub async fn missing_ticker(State(state): State<AppState>) -> Response {
    state.metrics().stock_lookups.inc(&[("outcome", "invalid")]);
    failure(StatusCode::BAD_REQUEST, "Ticker symbol required".into())
}
