//! Delphi server library entry.
//!
//! Wires config, shared state, the counter API, the stock-price passthrough,
//! and operational endpoints into one axum router. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod services;
