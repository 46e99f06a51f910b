use std::sync::Arc;
use std::time::Duration;

use werkstatt_core::{Catalog, Verdict, model::ScenarioId};

use crate::error::ValidationError;

//
// ─── VALIDATION SERVICE ────────────────────────────────────────────────────────
//

/// Evaluates submitted CSS against the catalog's rules after a simulated
/// evaluation pause.
///
/// The pause only shapes the user experience; the verdict is a pure function
/// of the scenario and the submitted text.
#[derive(Clone)]
pub struct ValidationService {
    catalog: Arc<Catalog>,
    delay: Duration,
}

impl ValidationService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, delay: Duration) -> Self {
        Self { catalog, delay }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Verdict without the pause.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownScenario` when `scenario_id` is not in the catalog.
    pub fn validate_now(&self, scenario_id: &ScenarioId, css: &str) -> Result<Verdict, ValidationError> {
        let scenario = self
            .catalog
            .get(scenario_id)
            .ok_or_else(|| ValidationError::UnknownScenario(scenario_id.clone()))?;
        let verdict = self.catalog.rules().validate(scenario, css);
        tracing::debug!(
            scenario = %scenario_id,
            passed = verdict.passed,
            "validated submission"
        );
        Ok(verdict)
    }

    /// Waits for the configured delay, then evaluates `css`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownScenario` when `scenario_id` is not in the catalog.
    pub async fn validate(&self, scenario_id: &ScenarioId, css: &str) -> Result<Verdict, ValidationError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.validate_now(scenario_id, css)
    }
}
