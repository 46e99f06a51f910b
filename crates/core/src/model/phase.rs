use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of user progress within one scenario.
///
/// Ordered: a later variant compares greater than an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Briefing,
    Diagnosis,
    Workbench,
    Completed,
}

impl Phase {
    /// The phases a user can navigate between with the ticket tabs.
    pub const TABS: [Phase; 3] = [Phase::Briefing, Phase::Diagnosis, Phase::Workbench];

    /// The phase that naturally follows this one, if any.
    #[must_use]
    pub fn successor(self) -> Option<Phase> {
        match self {
            Phase::Briefing => Some(Phase::Diagnosis),
            Phase::Diagnosis => Some(Phase::Workbench),
            Phase::Workbench => Some(Phase::Completed),
            Phase::Completed => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Briefing => "briefing",
            Phase::Diagnosis => "diagnosis",
            Phase::Workbench => "workbench",
            Phase::Completed => "completed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
