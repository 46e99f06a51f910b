use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::ids::{OptionId, ScenarioId};

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Junior,
    Mid,
    Senior,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Junior => "Junior",
            Difficulty::Mid => "Mid",
            Difficulty::Senior => "Senior",
        }
    }
}

//
// ─── BRIEFING ──────────────────────────────────────────────────────────────────
//

/// The "email" that opens a ticket. Opaque text to the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Briefing {
    pub sender: String,
    pub role: String,
    pub subject: String,
    pub message: String,
    pub goals: Vec<String>,
}

//
// ─── DIAGNOSIS ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisOption {
    pub id: OptionId,
    pub text: String,
    pub is_correct: bool,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub question: String,
    pub options: Vec<DiagnosisOption>,
}

impl Diagnosis {
    #[must_use]
    pub fn option(&self, id: &OptionId) -> Option<&DiagnosisOption> {
        self.options.iter().find(|option| option.id == *id)
    }

    /// First option flagged as correct.
    #[must_use]
    pub fn correct_option(&self) -> Option<&DiagnosisOption> {
        self.options.iter().find(|option| option.is_correct)
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|option| option.is_correct).count()
    }
}

//
// ─── SOLUTION ──────────────────────────────────────────────────────────────────
//

/// Selector → property → expected value. Descriptive only.
pub type TargetCssProperties = BTreeMap<String, BTreeMap<String, String>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// The broken markup shown in every preview of the scenario.
    pub initial_html: String,
    /// The broken starting stylesheet; seeds the user's buffer.
    pub initial_css: String,
    #[serde(default)]
    pub required_selectors: Vec<String>,
    /// Not consulted by validation.
    #[serde(default)]
    pub target_css_properties: TargetCssProperties,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub title: String,
    pub text: String,
}

//
// ─── SCENARIO ──────────────────────────────────────────────────────────────────
//

/// One self-contained CSS debugging ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub title: String,
    pub difficulty: Difficulty,
    pub briefing: Briefing,
    pub diagnosis: Diagnosis,
    pub solution: Solution,
    #[serde(default)]
    pub hints: Vec<Hint>,
}

impl Scenario {
    /// Short ticket number shown in the inbox header, e.g. `#192`.
    #[must_use]
    pub fn ticket_label(&self) -> String {
        let prefix = self
            .id
            .as_str()
            .split('-')
            .next()
            .unwrap_or_default()
            .to_uppercase();
        format!("#{prefix}92")
    }

    #[must_use]
    pub fn hint(&self, index: usize) -> Option<&Hint> {
        self.hints.get(index)
    }
}
