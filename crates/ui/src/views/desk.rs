use dioxus::prelude::*;
use werkstatt_core::model::Phase;

use crate::context::use_progress;
use crate::views::{BriefingView, DiagnosisView, FinishedView, SuccessView, WorkbenchView};
use crate::vm::map_phase_tabs;

/// The ticket desk: phase tabs over the view for the current phase.
#[component]
pub fn DeskView() -> Element {
    let mut progress = use_progress();

    let (scenario, phase, tabs, exhausted) = {
        let state = progress.read();
        (
            state.current_scenario().cloned(),
            state.phase(),
            map_phase_tabs(&state),
            state.is_exhausted(),
        )
    };

    if exhausted {
        return rsx! { FinishedView {} };
    }
    let Some(scenario) = scenario else {
        return rsx! {
            div { class: "page page--empty", "Lade Szenarien..." }
        };
    };

    rsx! {
        div { class: "desk",
            nav { class: "desk__tabs",
                for tab in tabs {
                    button {
                        key: "{tab.phase}",
                        class: if tab.active { "tab tab--active" } else { "tab" },
                        r#type: "button",
                        disabled: !tab.unlocked,
                        onclick: move |_| {
                            if let Err(err) = progress.write().set_phase(tab.phase) {
                                tracing::debug!(%err, "tab switch rejected");
                            }
                        },
                        "{tab.label}"
                    }
                }
            }
            div { class: "desk__phase",
                match phase {
                    Phase::Briefing => rsx! { BriefingView { scenario } },
                    Phase::Diagnosis => rsx! { DiagnosisView { scenario } },
                    Phase::Workbench => rsx! { WorkbenchView { scenario } },
                    Phase::Completed => rsx! { SuccessView {} },
                }
            }
        }
    }
}
