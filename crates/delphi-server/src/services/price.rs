use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;

use delphi_core::error::{DelphiError, Result};

use crate::config::QuoteConfig;

/// One price observation for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub ticker: String,
    pub price: f64,
    pub date: String,
}

/// External price-lookup collaborator.
///
/// Implementations report their own failures as `Upstream`/`Unavailable`;
/// timeouts are enforced by the caller, not here.
#[async_trait]
pub trait PriceSource: Send + Sync {
    fn name(&self) -> &'static str;
    async fn quote(&self, ticker: &str) -> Result<Quote>;
}

/// Fixed quote table loaded from config.
#[derive(Debug, Default)]
pub struct StaticPriceSource {
    quotes: HashMap<String, Quote>,
}

impl StaticPriceSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(quotes: &[QuoteConfig]) -> Self {
        let mut src = Self::new();
        for q in quotes {
            src.insert(Quote {
                ticker: q.ticker.trim().to_uppercase(),
                price: q.price,
                date: q.date.clone(),
            });
        }
        src
    }

    pub fn insert(&mut self, quote: Quote) {
        self.quotes.insert(quote.ticker.clone(), quote);
    }
}

#[async_trait]
impl PriceSource for StaticPriceSource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn quote(&self, ticker: &str) -> Result<Quote> {
        self.quotes
            .get(ticker)
            .cloned()
            .ok_or_else(|| DelphiError::Upstream(format!("no price available for {ticker}")))
    }
}
