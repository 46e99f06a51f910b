//! Shared error types for the services crate.

use thiserror::Error;

use werkstatt_core::CatalogError;
use werkstatt_core::model::ScenarioId;

/// Errors emitted by `ValidationService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("unknown scenario: {0}")]
    UnknownScenario(ScenarioId),
}

/// Errors emitted while reading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{source_name} must be a whole number of milliseconds, got {raw:?}")]
    InvalidDelay {
        source_name: &'static str,
        raw: String,
    },
    #[error("{source_name} must be a scenario id, got {raw:?}")]
    InvalidScenarioId {
        source_name: &'static str,
        raw: String,
    },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Core(#[from] werkstatt_core::Error),
    #[error("start scenario {0} is not in the catalog")]
    UnknownStartScenario(ScenarioId),
}

impl From<CatalogError> for AppServicesError {
    fn from(err: CatalogError) -> Self {
        AppServicesError::Core(err.into())
    }
}
