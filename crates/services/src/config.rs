use std::time::Duration;

use werkstatt_core::model::ScenarioId;

use crate::error::ConfigError;

pub const ENV_START: &str = "WERKSTATT_START";
pub const ENV_DIAGNOSIS_DELAY_MS: &str = "WERKSTATT_DIAGNOSIS_DELAY_MS";
pub const ENV_VALIDATION_DELAY_MS: &str = "WERKSTATT_VALIDATION_DELAY_MS";

/// Artificial delays used by the ticket views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Pause between a correct diagnosis and opening the workbench.
    pub diagnosis_advance: Duration,
    /// Simulated evaluation time before a verdict is delivered.
    pub validation_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            diagnosis_advance: Duration::from_millis(1500),
            validation_delay: Duration::from_millis(800),
        }
    }
}

impl Timings {
    /// No delays at all. Used by tests and `--instant`.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            diagnosis_advance: Duration::ZERO,
            validation_delay: Duration::ZERO,
        }
    }
}

/// Launch configuration assembled by the binary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Ticket opened on launch; the first catalog entry when unset.
    pub start_scenario: Option<ScenarioId>,
    pub timings: Timings,
}

impl AppConfig {
    /// Overlays values found through `lookup` (usually `std::env::var`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set but malformed.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_START) {
            self.start_scenario = Some(parse_scenario_id(ENV_START, &raw)?);
        }
        if let Some(raw) = lookup(ENV_DIAGNOSIS_DELAY_MS) {
            self.timings.diagnosis_advance = parse_millis(ENV_DIAGNOSIS_DELAY_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_VALIDATION_DELAY_MS) {
            self.timings.validation_delay = parse_millis(ENV_VALIDATION_DELAY_MS, &raw)?;
        }
        Ok(self)
    }
}

/// # Errors
///
/// Returns `ConfigError::InvalidDelay` when `raw` is not an unsigned integer.
pub fn parse_millis(source_name: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidDelay {
            source_name,
            raw: raw.to_string(),
        })
}

/// # Errors
///
/// Returns `ConfigError::InvalidScenarioId` when `raw` is blank or contains whitespace.
pub fn parse_scenario_id(source_name: &'static str, raw: &str) -> Result<ScenarioId, ConfigError> {
    raw.parse::<ScenarioId>()
        .map_err(|_| ConfigError::InvalidScenarioId {
            source_name,
            raw: raw.to_string(),
        })
}
