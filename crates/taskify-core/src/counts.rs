use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Fixed key set of the aggregate state summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CountKey {
    #[serde(rename = "ALL")]
    All,
    #[serde(rename = "STARTED")]
    Started,
    #[serde(rename = "FAILED")]
    Failed,
    #[serde(rename = "FAILED-ACKED")]
    FailedAcked,
}

impl CountKey {
    pub const ALL_KEYS: [CountKey; 4] = [Self::All, Self::Started, Self::Failed, Self::FailedAcked];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Started => "STARTED",
            Self::Failed => "FAILED",
            Self::FailedAcked => "FAILED-ACKED",
        }
    }
}

impl fmt::Display for CountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-state task tallies. Every key is always present; unknown means zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateCounts {
    #[serde(rename = "ALL")]
    pub all: u64,
    #[serde(rename = "STARTED")]
    pub started: u64,
    #[serde(rename = "FAILED")]
    pub failed: u64,
    #[serde(rename = "FAILED-ACKED")]
    pub failed_acked: u64,
}

impl AggregateCounts {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, key: CountKey) -> u64 {
        match key {
            CountKey::All => self.all,
            CountKey::Started => self.started,
            CountKey::Failed => self.failed,
            CountKey::FailedAcked => self.failed_acked,
        }
    }

    fn slot(&mut self, key: CountKey) -> &mut u64 {
        match key {
            CountKey::All => &mut self.all,
            CountKey::Started => &mut self.started,
            CountKey::Failed => &mut self.failed,
            CountKey::FailedAcked => &mut self.failed_acked,
        }
    }

    /// Builds a complete count set from a raw payload. Keys outside the fixed
    /// set are ignored; missing, negative or non-integer values become zero.
    pub fn from_raw(raw: &BTreeMap<String, Value>) -> Self {
        let mut counts = Self::zero();
        for key in CountKey::ALL_KEYS {
            let value = match raw.get(key.as_str()) {
                None => 0,
                Some(v) => v.as_u64().unwrap_or_else(|| {
                    debug!(key = key.as_str(), value = %v, "Ignoring non-count value");
                    0
                }),
            };
            *counts.slot(key) = value;
        }
        counts
    }
}
