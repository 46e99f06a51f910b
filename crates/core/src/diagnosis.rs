//! Answer state of a scenario's diagnosis question.

use crate::model::{Diagnosis, OptionId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DiagnosisFlow {
    #[default]
    Unanswered,
    Answered { option: OptionId, correct: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosisOutcome {
    /// The question is now locked; the caller schedules the move to the workbench.
    Correct { feedback: String },
    /// The caller records a mistake; `retry` reopens the question.
    Incorrect { feedback: String },
    /// Nothing changed: already answered, or an unknown option.
    Ignored,
}

impl DiagnosisFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submits an option. Only an unanswered question accepts submissions.
    pub fn submit(&mut self, diagnosis: &Diagnosis, option_id: &OptionId) -> DiagnosisOutcome {
        if !matches!(self, DiagnosisFlow::Unanswered) {
            return DiagnosisOutcome::Ignored;
        }
        let Some(option) = diagnosis.option(option_id) else {
            return DiagnosisOutcome::Ignored;
        };

        *self = DiagnosisFlow::Answered {
            option: option.id.clone(),
            correct: option.is_correct,
        };
        if option.is_correct {
            DiagnosisOutcome::Correct {
                feedback: option.feedback.clone(),
            }
        } else {
            DiagnosisOutcome::Incorrect {
                feedback: option.feedback.clone(),
            }
        }
    }

    /// Reopens the question after a wrong answer. Returns whether it did.
    pub fn retry(&mut self) -> bool {
        match self {
            DiagnosisFlow::Answered { correct: false, .. } => {
                *self = DiagnosisFlow::Unanswered;
                true
            }
            DiagnosisFlow::Answered { correct: true, .. } | DiagnosisFlow::Unanswered => false,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&OptionId> {
        match self {
            DiagnosisFlow::Answered { option, .. } => Some(option),
            DiagnosisFlow::Unanswered => None,
        }
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        matches!(self, DiagnosisFlow::Answered { .. })
    }

    /// True once the correct option was submitted.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        matches!(self, DiagnosisFlow::Answered { correct: true, .. })
    }

    /// Feedback text for `option_id` if it is the submitted option.
    #[must_use]
    pub fn feedback_for<'a>(&self, diagnosis: &'a Diagnosis, option_id: &OptionId) -> Option<&'a str> {
        (self.selected() == Some(option_id))
            .then(|| diagnosis.option(option_id))
            .flatten()
            .map(|option| option.feedback.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::ScenarioId;

    fn diagnosis() -> Diagnosis {
        Catalog::builtin()
            .get(&ScenarioId::new("1-invisible-button"))
            .unwrap()
            .diagnosis
            .clone()
    }

    #[test]
    fn correct_answer_locks_the_question() {
        let diagnosis = diagnosis();
        let mut flow = DiagnosisFlow::new();
        let outcome = flow.submit(&diagnosis, &OptionId::new("opt2"));
        assert!(matches!(outcome, DiagnosisOutcome::Correct { .. }));
        assert!(flow.is_locked());

        for _ in 0..3 {
            assert_eq!(
                flow.submit(&diagnosis, &OptionId::new("opt2")),
                DiagnosisOutcome::Ignored
            );
        }
        assert!(!flow.retry());
        assert!(flow.is_locked());
    }

    #[test]
    fn wrong_answer_requires_explicit_retry() {
        let diagnosis = diagnosis();
        let mut flow = DiagnosisFlow::new();
        let outcome = flow.submit(&diagnosis, &OptionId::new("opt1"));
        assert_eq!(
            outcome,
            DiagnosisOutcome::Incorrect {
                feedback: "Nein, er ist da, nur weiß auf weiß.".to_string()
            }
        );
        assert_eq!(
            flow.submit(&diagnosis, &OptionId::new("opt3")),
            DiagnosisOutcome::Ignored
        );

        assert!(flow.retry());
        assert_eq!(flow, DiagnosisFlow::Unanswered);
        assert!(matches!(
            flow.submit(&diagnosis, &OptionId::new("opt3")),
            DiagnosisOutcome::Incorrect { .. }
        ));
    }

    #[test]
    fn unknown_option_is_ignored() {
        let diagnosis = diagnosis();
        let mut flow = DiagnosisFlow::new();
        assert_eq!(
            flow.submit(&diagnosis, &OptionId::new("opt9")),
            DiagnosisOutcome::Ignored
        );
        assert!(!flow.is_answered());
    }

    #[test]
    fn feedback_only_for_selected_option() {
        let diagnosis = diagnosis();
        let mut flow = DiagnosisFlow::new();
        flow.submit(&diagnosis, &OptionId::new("opt2"));
        assert_eq!(
            flow.feedback_for(&diagnosis, &OptionId::new("opt2")),
            Some("Korrekt! Weiße Schrift braucht dunklen Hintergrund.")
        );
        assert_eq!(flow.feedback_for(&diagnosis, &OptionId::new("opt1")), None);
    }
}
