use std::sync::Arc;

use werkstatt_core::model::{Scenario, ScenarioId};
use werkstatt_core::{Catalog, RuleBook};

use crate::config::{AppConfig, Timings};
use crate::error::AppServicesError;
use crate::validation_service::ValidationService;

/// Assembles app-facing services and resolves the ticket opened on launch.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<Catalog>,
    validation: Arc<ValidationService>,
    timings: Timings,
    start_scenario: ScenarioId,
}

impl AppServices {
    /// Build services around an already validated catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::UnknownStartScenario` if the configured start
    /// ticket is not part of `catalog`.
    pub fn new(catalog: Catalog, config: &AppConfig) -> Result<Self, AppServicesError> {
        let start_scenario = match &config.start_scenario {
            Some(id) if catalog.contains(id) => id.clone(),
            Some(id) => return Err(AppServicesError::UnknownStartScenario(id.clone())),
            None => catalog.first().id.clone(),
        };

        let catalog = Arc::new(catalog);
        let validation = Arc::new(ValidationService::new(
            Arc::clone(&catalog),
            config.timings.validation_delay,
        ));

        tracing::info!(
            tickets = catalog.len(),
            start = %start_scenario,
            "app services ready"
        );

        Ok(Self {
            catalog,
            validation,
            timings: config.timings,
            start_scenario,
        })
    }

    /// Build services over tickets and rules that still need validating.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Core` when the catalog is rejected, or
    /// `AppServicesError::UnknownStartScenario` as for [`AppServices::new`].
    pub fn from_parts(
        scenarios: Vec<Scenario>,
        rules: RuleBook,
        config: &AppConfig,
    ) -> Result<Self, AppServicesError> {
        Self::new(Catalog::new(scenarios, rules)?, config)
    }

    /// Build services over the bundled ticket catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` when the bundled catalog fails validation or
    /// the start ticket is unknown.
    pub fn builtin(config: &AppConfig) -> Result<Self, AppServicesError> {
        Self::new(Catalog::try_builtin()?, config)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn validation(&self) -> Arc<ValidationService> {
        Arc::clone(&self.validation)
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    #[must_use]
    pub fn start_scenario(&self) -> &ScenarioId {
        &self.start_scenario
    }
}
