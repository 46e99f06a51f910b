#![forbid(unsafe_code)]

pub mod catalog;
pub mod diagnosis;
pub mod error;
pub mod model;
pub mod preview;
pub mod progress;
pub mod validation;

pub use catalog::{Catalog, CatalogError};
pub use diagnosis::{DiagnosisFlow, DiagnosisOutcome};
pub use error::Error;
pub use progress::{ActiveScenario, NextScenario, Progress, ProgressError, ProgressStatus};
pub use validation::{FALLBACK_HINT, NO_CHANGES_HINT, Rule, RuleBook, Verdict};
