use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
///
/// Every field has a default, so an absent config file is equivalent to an
/// empty one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How long an alert stays visible before auto-dismiss, in milliseconds.
    pub alert_duration_ms: u64,
    /// Simulated submission latency, in milliseconds.
    pub submit_latency_ms: u64,
    /// UI event-loop tick interval, in milliseconds.
    pub tick_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alert_duration_ms: 5_000,
            submit_latency_ms: 1_000,
            tick_ms: 50,
        }
    }
}

impl Config {
    pub fn alert_duration(&self) -> Duration {
        Duration::from_millis(self.alert_duration_ms)
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
