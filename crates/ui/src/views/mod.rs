mod briefing;
mod desk;
mod diagnosis;
mod preview;
mod progress;
mod success;
mod workbench;

#[cfg(test)]
pub(crate) mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use briefing::BriefingView;
pub use desk::DeskView;
pub use diagnosis::DiagnosisView;
pub use preview::ShadowPreview;
pub use progress::ProgressView;
pub use success::{FinishedView, SuccessView};
pub use workbench::WorkbenchView;
