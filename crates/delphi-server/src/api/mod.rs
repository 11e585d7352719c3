//! REST surface: counter CRUD and the stock-price passthrough.

pub mod counters;
pub mod stocks;

use axum::{routing::get, Router};

use crate::app_state::AppState;

pub fn counter_routes() -> Router<AppState> {
    Router::new()
        .route("/counters", get(counters::list_counters))
        .route(
            "/counter/",
            get(counters::missing_id)
                .post(counters::missing_id)
                .delete(counters::missing_id),
        )
        .route(
            "/counter/:id",
            get(counters::get_counter)
                .post(counters::increment_counter)
                .delete(counters::delete_counter),
        )
}

pub fn stock_routes() -> Router<AppState> {
    Router::new()
        .route("/stocks/", get(stocks::missing_ticker))
        .route("/stocks/:ticker", get(stocks::get_price))
}
