use std::sync::Arc;

use dioxus::prelude::*;
use services::{Timings, ValidationService};
use werkstatt_core::{Catalog, Progress, model::ScenarioId};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn validation(&self) -> Arc<ValidationService>;
    fn timings(&self) -> Timings;
    fn start_scenario(&self) -> ScenarioId;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    validation: Arc<ValidationService>,
    timings: Timings,
    start_scenario: ScenarioId,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            validation: app.validation(),
            timings: app.timings(),
            start_scenario: app.start_scenario(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn validation(&self) -> Arc<ValidationService> {
        Arc::clone(&self.validation)
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Ticket opened when the desk first mounts.
    #[must_use]
    pub fn start_scenario(&self) -> &ScenarioId {
        &self.start_scenario
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Installs the session's `Signal<Progress>` below the current component and
/// opens the configured start ticket.
pub fn use_progress_provider() -> Signal<Progress> {
    let ctx = use_context::<AppContext>();
    use_context_provider(move || {
        let mut progress = Progress::new(ctx.catalog());
        if let Err(err) = progress.start_scenario(ctx.start_scenario()) {
            tracing::warn!(%err, "start ticket could not be opened");
        }
        Signal::new(progress)
    })
}

/// The session state installed by [`use_progress_provider`].
#[must_use]
pub fn use_progress() -> Signal<Progress> {
    use_context::<Signal<Progress>>()
}
