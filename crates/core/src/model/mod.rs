mod ids;
mod phase;
mod scenario;

pub use ids::{OptionId, ParseIdError, ScenarioId};
pub use phase::Phase;
pub use scenario::{
    Briefing, Diagnosis, DiagnosisOption, Difficulty, Hint, Scenario, Solution,
    TargetCssProperties,
};
