use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::{DelphiError, Result};

/// Client-supplied counter identifier.
///
/// UUID-shaped in practice, but the only constraint enforced is non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CounterId(String);

impl CounterId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(DelphiError::InvalidArgument(
                "counter id must not be empty".into(),
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CounterId {
    type Error = DelphiError;

    fn try_from(id: String) -> Result<Self> {
        Self::new(id)
    }
}

impl TryFrom<&str> for CounterId {
    type Error = DelphiError;

    fn try_from(id: &str) -> Result<Self> {
        Self::new(id)
    }
}

impl fmt::Display for CounterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Point-in-time copy of one counter's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub count: u64,
    /// Last creation or increment.
    pub last_click: DateTime<Utc>,
}

impl Counter {
    pub(crate) fn fresh(now: DateTime<Utc>) -> Self {
        Self {
            count: 0,
            last_click: now,
        }
    }

    /// +1 and restamp. The stamp never moves backwards even if the clock does.
    pub(crate) fn click(&mut self, now: DateTime<Utc>) {
        self.count = self.count.saturating_add(1);
        if now > self.last_click {
            self.last_click = now;
        }
    }
}
