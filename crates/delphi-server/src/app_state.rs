//! Shared application state for the Delphi service.
//!
//! Built once at startup and cloned into every handler. Tests construct a
//! fresh state per case, so no counter leaks between them.

use std::sync::Arc;
use std::time::Duration;

use delphi_core::error::Result;
use delphi_core::CounterStore;

use crate::config::ServiceConfig;
use crate::obs::ServiceMetrics;
use crate::services::{PriceSource, StaticPriceSource};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    counters: Arc<CounterStore>,
    prices: Arc<dyn PriceSource>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    metrics: ServiceMetrics,
}

impl AppState {
    /// Build state with the config's static quote table as price source.
    pub fn new(cfg: ServiceConfig) -> Result<Self> {
        let prices = Arc::new(StaticPriceSource::from_config(&cfg.stocks.quotes));
        Self::with_parts(cfg, Arc::new(CounterStore::new()), prices)
    }

    pub fn with_parts(
        cfg: ServiceConfig,
        counters: Arc<CounterStore>,
        prices: Arc<dyn PriceSource>,
    ) -> Result<Self> {
        cfg.validate()?;
        tracing::info!(
            price_source = prices.name(),
            quotes = cfg.stocks.quotes.len(),
            "app state ready"
        );
        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics: ServiceMetrics::default(),
            }),
            counters,
            prices,
        })
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn counters(&self) -> &CounterStore {
        &self.counters
    }

    pub fn prices(&self) -> Arc<dyn PriceSource> {
        Arc::clone(&self.prices)
    }

    pub fn price_timeout(&self) -> Duration {
        Duration::from_millis(self.inner.cfg.stocks.timeout_ms)
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.inner.metrics
    }
}
