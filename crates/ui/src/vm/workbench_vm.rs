use werkstatt_core::Verdict;
use werkstatt_core::model::{Hint, Scenario, ScenarioId};

pub const CHECK_LABEL: &str = "EINGABE PRÜFEN";
pub const CHECKING_LABEL: &str = "Prüfe...";

/// Workbench-local state. Lives only as long as one scenario is on the bench.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkbenchVm {
    scenario_id: ScenarioId,
    hint_count: usize,
    hints_revealed: usize,
    show_help: bool,
    validating: bool,
    feedback: Option<String>,
}

impl WorkbenchVm {
    #[must_use]
    pub fn new(scenario: &Scenario) -> Self {
        Self {
            scenario_id: scenario.id.clone(),
            hint_count: scenario.hints.len(),
            hints_revealed: 0,
            show_help: false,
            validating: false,
            feedback: None,
        }
    }

    #[must_use]
    pub fn scenario_id(&self) -> &ScenarioId {
        &self.scenario_id
    }

    /// Starts over when a different scenario is shown. Returns whether it did.
    pub fn sync(&mut self, scenario: &Scenario) -> bool {
        if self.scenario_id == scenario.id {
            return false;
        }
        *self = Self::new(scenario);
        true
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    #[must_use]
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn reveal_next_hint(&mut self) -> bool {
        if self.hints_revealed >= self.hint_count {
            return false;
        }
        self.hints_revealed += 1;
        true
    }

    #[must_use]
    pub fn hints_revealed(&self) -> usize {
        self.hints_revealed
    }

    #[must_use]
    pub fn revealed_hints<'a>(&self, scenario: &'a Scenario) -> &'a [Hint] {
        let end = self.hints_revealed.min(scenario.hints.len());
        &scenario.hints[..end]
    }

    /// Label for the reveal button, `None` once every hint is shown.
    #[must_use]
    pub fn reveal_label(&self) -> Option<&'static str> {
        if self.hints_revealed >= self.hint_count {
            None
        } else if self.hints_revealed == 0 {
            Some("Ersten Hinweis anzeigen")
        } else {
            Some("Nächsten Hinweis anzeigen")
        }
    }

    /// Marks a check as running. Returns `false` if one already is.
    pub fn begin_validation(&mut self) -> bool {
        if self.validating {
            return false;
        }
        self.validating = true;
        self.feedback = None;
        true
    }

    pub fn finish_validation(&mut self, verdict: &Verdict) {
        self.validating = false;
        self.feedback = if verdict.passed {
            None
        } else {
            Some(verdict.display_hint().to_string())
        };
    }

    /// Ends a check that produced no verdict.
    pub fn abort_validation(&mut self, message: impl Into<String>) {
        self.validating = false;
        self.feedback = Some(message.into());
    }

    #[must_use]
    pub fn is_validating(&self) -> bool {
        self.validating
    }

    pub fn clear_feedback(&mut self) {
        self.feedback = None;
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    #[must_use]
    pub fn check_label(&self) -> &'static str {
        if self.validating { CHECKING_LABEL } else { CHECK_LABEL }
    }
}
