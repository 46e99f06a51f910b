//! Scenario progression: which ticket is open, in which phase, and what the
//! user has typed so far.
//!
//! ```text
//! NotStarted ──start──▶ Active(Briefing ─▶ Diagnosis ─▶ Workbench ─▶ Completed)
//!                          ▲                                             │
//!                          └──────────── next_scenario ◀─────────────────┘
//!                                              │ (last ticket)
//!                                              ▼
//!                                          Exhausted
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;

use crate::catalog::Catalog;
use crate::model::{Phase, Scenario, ScenarioId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("unknown scenario: {0}")]
    UnknownScenario(ScenarioId),

    #[error("no scenario is active")]
    NoActiveScenario,

    #[error("cannot move from {from} to {to}")]
    InvalidTransition { from: Phase, to: Phase },
}

/// The scenario currently being worked on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveScenario {
    scenario_id: ScenarioId,
    phase: Phase,
    furthest_phase: Phase,
    user_css: String,
}

impl ActiveScenario {
    fn start(scenario: &Scenario) -> Self {
        Self {
            scenario_id: scenario.id.clone(),
            phase: Phase::Briefing,
            furthest_phase: Phase::Briefing,
            user_css: scenario.solution.initial_css.clone(),
        }
    }

    #[must_use]
    pub fn scenario_id(&self) -> &ScenarioId {
        &self.scenario_id
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The latest phase reached since this scenario started.
    #[must_use]
    pub fn furthest_phase(&self) -> Phase {
        self.furthest_phase
    }

    #[must_use]
    pub fn user_css(&self) -> &str {
        &self.user_css
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.furthest_phase = self.furthest_phase.max(phase);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressStatus {
    /// No scenario has been opened yet.
    NotStarted,
    Active(ActiveScenario),
    /// `next_scenario` ran past the last catalog entry.
    Exhausted,
}

/// Result of `Progress::next_scenario`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextScenario {
    Started(ScenarioId),
    Exhausted,
}

/// Session state for one user. Created once with no active scenario.
#[derive(Debug, Clone)]
pub struct Progress {
    catalog: Arc<Catalog>,
    status: ProgressStatus,
    completed: BTreeSet<ScenarioId>,
    mistakes: u32,
}

impl PartialEq for Progress {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.catalog, &other.catalog)
            && self.status == other.status
            && self.completed == other.completed
            && self.mistakes == other.mistakes
    }
}

impl Progress {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            status: ProgressStatus::NotStarted,
            completed: BTreeSet::new(),
            mistakes: 0,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn status(&self) -> &ProgressStatus {
        &self.status
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveScenario> {
        match &self.status {
            ProgressStatus::Active(active) => Some(active),
            ProgressStatus::NotStarted | ProgressStatus::Exhausted => None,
        }
    }

    #[must_use]
    pub fn current_scenario_id(&self) -> Option<&ScenarioId> {
        self.active().map(ActiveScenario::scenario_id)
    }

    #[must_use]
    pub fn current_scenario(&self) -> Option<&Scenario> {
        self.current_scenario_id().and_then(|id| self.catalog.get(id))
    }

    /// Phase of the active scenario; `Briefing` when none is active.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.active().map_or(Phase::Briefing, ActiveScenario::phase)
    }

    #[must_use]
    pub fn user_css(&self) -> &str {
        self.active().map_or("", ActiveScenario::user_css)
    }

    #[must_use]
    pub fn completed(&self) -> &BTreeSet<ScenarioId> {
        &self.completed
    }

    #[must_use]
    pub fn is_completed(&self, id: &ScenarioId) -> bool {
        self.completed.contains(id)
    }

    #[must_use]
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self.status, ProgressStatus::Exhausted)
    }

    /// Tabs already reached, which the user may switch back and forth between.
    #[must_use]
    pub fn unlocked_phases(&self) -> Vec<Phase> {
        let Some(active) = self.active() else {
            return Vec::new();
        };
        if active.phase == Phase::Completed {
            return Vec::new();
        }
        Phase::TABS
            .into_iter()
            .filter(|tab| *tab <= active.furthest_phase)
            .collect()
    }

    /// Opens a scenario at its briefing with a fresh stylesheet buffer.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownScenario` and leaves the state untouched
    /// when `id` is not in the catalog.
    pub fn start_scenario(&mut self, id: &ScenarioId) -> Result<(), ProgressError> {
        let scenario = self
            .catalog
            .get(id)
            .ok_or_else(|| ProgressError::UnknownScenario(id.clone()))?;
        self.status = ProgressStatus::Active(ActiveScenario::start(scenario));
        self.mistakes = 0;
        tracing::info!(scenario = %id, "scenario started");
        Ok(())
    }

    /// Moves the active scenario to `phase`.
    ///
    /// Allowed moves are one step forward along the natural order, or back and
    /// forth between tabs already reached. `Completed` is only entered through
    /// `complete_scenario`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::NoActiveScenario` without an active scenario and
    /// `ProgressError::InvalidTransition` for any other move.
    pub fn set_phase(&mut self, phase: Phase) -> Result<(), ProgressError> {
        let ProgressStatus::Active(active) = &mut self.status else {
            return Err(ProgressError::NoActiveScenario);
        };
        let from = active.phase;
        let allowed = from != Phase::Completed
            && phase != Phase::Completed
            && (phase <= active.furthest_phase || from.successor() == Some(phase));
        if !allowed {
            tracing::debug!(%from, to = %phase, "rejected phase transition");
            return Err(ProgressError::InvalidTransition { from, to: phase });
        }
        active.enter(phase);
        Ok(())
    }

    /// Replaces the stylesheet buffer verbatim. Ignored without an active scenario.
    pub fn update_user_css(&mut self, css: impl Into<String>) {
        if let ProgressStatus::Active(active) = &mut self.status {
            active.user_css = css.into();
        }
    }

    /// Marks `id` solved and moves the active scenario to `Completed`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownScenario` and leaves the state untouched
    /// when `id` is not in the catalog.
    pub fn complete_scenario(&mut self, id: &ScenarioId) -> Result<(), ProgressError> {
        if !self.catalog.contains(id) {
            return Err(ProgressError::UnknownScenario(id.clone()));
        }
        self.completed.insert(id.clone());
        if let ProgressStatus::Active(active) = &mut self.status {
            active.enter(Phase::Completed);
        }
        tracing::info!(scenario = %id, mistakes = self.mistakes, "scenario completed");
        Ok(())
    }

    pub fn add_mistake(&mut self) {
        self.mistakes = self.mistakes.saturating_add(1);
    }

    pub fn reset_mistakes(&mut self) {
        self.mistakes = 0;
    }

    /// Opens the scenario after the current one.
    ///
    /// After the last one the status becomes `Exhausted`. Without an active
    /// scenario the first catalog entry is opened.
    pub fn next_scenario(&mut self) -> NextScenario {
        let next = match self.current_scenario_id() {
            Some(current) => self.catalog.successor(current).map(|s| s.id.clone()),
            None => Some(self.catalog.first().id.clone()),
        };

        match next {
            Some(id) => {
                let scenario = self.catalog.get(&id).map(ActiveScenario::start);
                if let Some(active) = scenario {
                    self.status = ProgressStatus::Active(active);
                    self.mistakes = 0;
                    tracing::info!(scenario = %id, "scenario started");
                }
                NextScenario::Started(id)
            }
            None => {
                self.status = ProgressStatus::Exhausted;
                tracing::info!(completed = self.completed.len(), "catalog exhausted");
                NextScenario::Exhausted
            }
        }
    }
}
