//! Heuristic solution checks.
//!
//! A rule is an ordered list of literal substrings that must all appear in the
//! user's stylesheet. This is text matching, not CSS parsing: `display:flex`
//! does not satisfy a rule asking for `display: flex`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Scenario, ScenarioId};

/// Hint returned when the stylesheet still equals the scenario's starting CSS.
pub const NO_CHANGES_HINT: &str = "Du hast noch nichts geändert!";

/// Shown when a failed verdict carries no hint of its own.
pub const FALLBACK_HINT: &str = "Das sieht noch nicht ganz richtig aus.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub required: Vec<String>,
    pub hint: String,
}

impl Rule {
    #[must_use]
    pub fn new<I, S>(required: I, hint: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
            hint: hint.into(),
        }
    }

    #[must_use]
    pub fn is_satisfied_by(&self, css: &str) -> bool {
        self.required.iter().all(|needle| css.contains(needle.as_str()))
    }
}

/// Pass/fail plus the corrective hint for a failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
    pub hint: String,
}

impl Verdict {
    #[must_use]
    pub fn pass() -> Self {
        Self {
            passed: true,
            hint: String::new(),
        }
    }

    #[must_use]
    pub fn fail(hint: impl Into<String>) -> Self {
        Self {
            passed: false,
            hint: hint.into(),
        }
    }

    /// The hint to show the user; never empty for a failed verdict.
    #[must_use]
    pub fn display_hint(&self) -> &str {
        if self.hint.is_empty() && !self.passed {
            FALLBACK_HINT
        } else {
            &self.hint
        }
    }
}

/// Validation rules keyed by scenario id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleBook {
    rules: HashMap<ScenarioId, Rule>,
}

impl RuleBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rule(mut self, id: ScenarioId, rule: Rule) -> Self {
        self.insert(id, rule);
        self
    }

    /// Registers a rule, returning the one it replaced.
    pub fn insert(&mut self, id: ScenarioId, rule: Rule) -> Option<Rule> {
        self.rules.insert(id, rule)
    }

    #[must_use]
    pub fn get(&self, id: &ScenarioId) -> Option<&Rule> {
        self.rules.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ScenarioId) -> bool {
        self.rules.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &ScenarioId> {
        self.rules.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Checks `css` against the scenario's rule. Pure.
    #[must_use]
    pub fn validate(&self, scenario: &Scenario, css: &str) -> Verdict {
        if css.trim() == scenario.solution.initial_css.trim() {
            return Verdict::fail(NO_CHANGES_HINT);
        }

        let Some(rule) = self.rules.get(&scenario.id) else {
            tracing::warn!(scenario = %scenario.id, "no validation rule registered");
            return Verdict::fail(String::new());
        };

        if rule.is_satisfied_by(css) {
            Verdict::pass()
        } else {
            Verdict::fail(rule.hint.clone())
        }
    }
}
