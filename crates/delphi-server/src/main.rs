//! Delphi counter service.
//!
//! - Config: `$DELPHI_CONFIG` (default `delphi.yaml`), defaults if absent
//! - `$PORT` overrides the listen port
//! - Log filter from `RUST_LOG`

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use delphi_core::error::{DelphiError, Result};
use delphi_server::{app_state, config, router};

const DEFAULT_CONFIG_PATH: &str = "delphi.yaml";

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "delphi-server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let path = std::env::var("DELPHI_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let mut cfg = config::load_or_default(&path)?;

    if let Ok(port) = std::env::var("PORT") {
        let port: u16 = port
            .parse()
            .map_err(|e| DelphiError::InvalidArgument(format!("PORT must be a u16: {e}")))?;
        cfg.server.override_port(port)?;
    }
    let listen = cfg.server.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, "delphi-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| DelphiError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| DelphiError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
