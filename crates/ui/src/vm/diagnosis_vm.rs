use werkstatt_core::DiagnosisFlow;
use werkstatt_core::model::{Diagnosis, OptionId, Scenario};

const NO_HINT_TIP: &str = "Schau dir das Bild genau an.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Open,
    Correct,
    Incorrect,
    /// Another option was picked.
    Dimmed,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionState::Open => "diagnosis-option",
            OptionState::Correct => "diagnosis-option diagnosis-option--correct",
            OptionState::Incorrect => "diagnosis-option diagnosis-option--incorrect",
            OptionState::Dimmed => "diagnosis-option diagnosis-option--dimmed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosisOptionVm {
    pub id: OptionId,
    pub text: String,
    pub state: OptionState,
    /// Feedback for the picked option only.
    pub feedback: Option<String>,
    pub disabled: bool,
    /// Whether the retry link belongs under this option.
    pub can_retry: bool,
}

#[must_use]
pub fn map_diagnosis_options(diagnosis: &Diagnosis, flow: &DiagnosisFlow) -> Vec<DiagnosisOptionVm> {
    let answered = flow.is_answered();
    diagnosis
        .options
        .iter()
        .map(|option| {
            let selected = flow.selected() == Some(&option.id);
            let state = match (answered, selected, option.is_correct) {
                (false, _, _) => OptionState::Open,
                (true, true, true) => OptionState::Correct,
                (true, true, false) => OptionState::Incorrect,
                (true, false, _) => OptionState::Dimmed,
            };
            DiagnosisOptionVm {
                id: option.id.clone(),
                text: option.text.clone(),
                state,
                feedback: flow
                    .feedback_for(diagnosis, &option.id)
                    .map(str::to_string),
                disabled: answered,
                can_retry: state == OptionState::Incorrect,
            }
        })
        .collect()
}

/// Text of the analysis tip: the first workbench hint, or a generic nudge.
#[must_use]
pub fn analysis_tip(scenario: &Scenario) -> &str {
    scenario.hint(0).map_or(NO_HINT_TIP, |hint| hint.text.as_str())
}
