//! Axum router wiring.
//!
//! Counter routes are served both at the root (`/counter/{id}`) and under
//! `/api`, which is where the web client points. The stock passthrough and
//! health check live under `/api` only.

use std::time::Duration;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    let cors = if state.cfg().server.cors_permissive {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
            .max_age(Duration::from_secs(3600))
    } else {
        CorsLayer::new()
    };

    let api_routes = Router::new()
        .route("/health", get(ops::health))
        .merge(api::counter_routes())
        .merge(api::stock_routes());

    Router::new()
        .route("/", get(ops::root))
        .route("/metrics", get(ops::metrics))
        .merge(api::counter_routes())
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
