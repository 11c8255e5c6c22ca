//! Engine configuration.
//!
//! All simulated latencies live here. The runner and the auth provider
//! receive a [`TimingProfile`] explicitly instead of reading ambient
//! globals, which is what lets the test suite run the whole pipeline under
//! tokio's paused clock.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Simulated-latency profile for the discovery engine.
///
/// The defaults reproduce the delays of the production UI: a short gap
/// between keypress and processing start, a long "thinking" phase, a
/// shorter "typing" phase, the report-generation follow-up delay and the
/// login round-trip.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TimingProfile {
    /// Delay between an accepted submission and the start of the cycle
    pub submit_delay_ms: u64,
    /// Duration of the thinking phase
    pub thinking_ms: u64,
    /// Duration of the typing phase
    pub typing_ms: u64,
    /// Delay before a follow-up turn (report generation)
    pub report_ms: u64,
    /// Simulated login round-trip
    pub login_ms: u64,
}

impl Default for TimingProfile {
    fn default() -> Self {
        Self {
            submit_delay_ms: 500,
            thinking_ms: 3000,
            typing_ms: 2000,
            report_ms: 4000,
            login_ms: 1000,
        }
    }
}

impl TimingProfile {
    /// A profile with every delay set to zero, for interactive debugging.
    pub fn instant() -> Self {
        Self {
            submit_delay_ms: 0,
            thinking_ms: 0,
            typing_ms: 0,
            report_ms: 0,
            login_ms: 0,
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn thinking(&self) -> Duration {
        Duration::from_millis(self.thinking_ms)
    }

    pub fn typing(&self) -> Duration {
        Duration::from_millis(self.typing_ms)
    }

    pub fn report(&self) -> Duration {
        Duration::from_millis(self.report_ms)
    }

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }
}

/// Root of the optional `renus.toml` configuration file.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigRoot {
    #[serde(default)]
    pub timing: TimingProfile,
}

impl ConfigRoot {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the TOML is malformed.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
