use std::collections::HashSet;
use std::net::SocketAddr;

use delphi_core::error::{DelphiError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub stocks: StocksSection,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            stocks: StocksSection::default(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(DelphiError::InvalidArgument(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.stocks.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_cors_permissive")]
    pub cors_permissive: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            cors_permissive: default_cors_permissive(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            DelphiError::InvalidArgument(format!(
                "server.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }

    /// Replace the port of `listen`, keeping the host.
    pub fn override_port(&mut self, port: u16) -> Result<()> {
        let mut addr = self.listen_addr()?;
        addr.set_port(port);
        self.listen = addr.to_string();
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:4001".into()
}
fn default_cors_permissive() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StocksSection {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default)]
    pub quotes: Vec<QuoteConfig>,
}

impl Default for StocksSection {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            quotes: Vec::new(),
        }
    }
}

impl StocksSection {
    pub fn validate(&self) -> Result<()> {
        if !(100..=30000).contains(&self.timeout_ms) {
            return Err(DelphiError::InvalidArgument(
                "stocks.timeout_ms must be between 100 and 30000".into(),
            ));
        }

        let mut seen = HashSet::new();
        for q in &self.quotes {
            let ticker = q.ticker.trim().to_uppercase();
            if ticker.is_empty() {
                return Err(DelphiError::InvalidArgument(
                    "stocks.quotes[].ticker must not be empty".into(),
                ));
            }
            if !seen.insert(ticker.clone()) {
                return Err(DelphiError::InvalidArgument(format!(
                    "stocks.quotes has duplicate ticker: {ticker}"
                )));
            }
            if !q.price.is_finite() || q.price < 0.0 {
                return Err(DelphiError::InvalidArgument(format!(
                    "stocks.quotes price for {ticker} must be a non-negative number"
                )));
            }
        }
        Ok(())
    }
}

fn default_timeout_ms() -> u64 {
    3000
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuoteConfig {
    pub ticker: String,
    pub price: f64,
    pub date: String,
}
