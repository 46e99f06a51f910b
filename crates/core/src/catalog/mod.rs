//! Read-only, ordered collection of scenarios and their validation rules.

mod builtin;

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{Scenario, ScenarioId};
use crate::validation::RuleBook;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog must contain at least one scenario")]
    Empty,

    #[error("duplicate scenario id: {0}")]
    DuplicateId(ScenarioId),

    #[error("scenario {0} has no validation rule")]
    MissingRule(ScenarioId),

    #[error("validation rule registered for unknown scenario {0}")]
    OrphanRule(ScenarioId),
}

/// Ordered scenario sequence. Ids are unique and every scenario has a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    scenarios: Vec<Scenario>,
    rules: RuleBook,
}

impl Catalog {
    /// Builds a catalog, checking ids and rule coverage.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty list,
    /// `CatalogError::DuplicateId` when two scenarios share an id,
    /// `CatalogError::MissingRule` when a scenario has no rule and
    /// `CatalogError::OrphanRule` when a rule names no scenario.
    pub fn new(scenarios: Vec<Scenario>, rules: RuleBook) -> Result<Self, CatalogError> {
        if scenarios.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(scenarios.len());
        for scenario in &scenarios {
            if !seen.insert(&scenario.id) {
                return Err(CatalogError::DuplicateId(scenario.id.clone()));
            }
            if !rules.contains(&scenario.id) {
                return Err(CatalogError::MissingRule(scenario.id.clone()));
            }
            let correct = scenario.diagnosis.correct_count();
            if correct != 1 {
                tracing::warn!(
                    scenario = %scenario.id,
                    correct,
                    "diagnosis should have exactly one correct option"
                );
            }
        }

        let mut orphans = rules.ids().filter(|id| !seen.contains(id)).collect::<Vec<_>>();
        orphans.sort();
        if let Some(orphan) = orphans.first() {
            return Err(CatalogError::OrphanRule((*orphan).clone()));
        }

        Ok(Self { scenarios, rules })
    }

    /// The tickets shipped with the app.
    ///
    /// # Panics
    ///
    /// Panics if the built-in data violates catalog invariants; covered by tests.
    #[must_use]
    pub fn builtin() -> Self {
        Self::try_builtin().expect("built-in catalog should be valid")
    }

    /// Fallible form of [`Catalog::builtin`].
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the bundled tickets violate catalog invariants.
    pub fn try_builtin() -> Result<Self, CatalogError> {
        let (scenarios, rules) = builtin::scenarios();
        Self::new(scenarios, rules)
    }

    #[must_use]
    pub fn get(&self, id: &ScenarioId) -> Option<&Scenario> {
        self.scenarios.iter().find(|scenario| scenario.id == *id)
    }

    #[must_use]
    pub fn contains(&self, id: &ScenarioId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn position(&self, id: &ScenarioId) -> Option<usize> {
        self.scenarios.iter().position(|scenario| scenario.id == *id)
    }

    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Scenario> {
        self.scenarios.get(index)
    }

    #[must_use]
    pub fn first(&self) -> &Scenario {
        &self.scenarios[0]
    }

    /// The scenario after `id`, or `None` for the last entry or an unknown id.
    #[must_use]
    pub fn successor(&self, id: &ScenarioId) -> Option<&Scenario> {
        self.position(id).and_then(|index| self.at(index + 1))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    #[must_use]
    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }
}
