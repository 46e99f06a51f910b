use dioxus::prelude::*;
use werkstatt_core::model::{Phase, Scenario};

use crate::context::use_progress;
use crate::views::ShadowPreview;

#[component]
pub fn BriefingView(scenario: Scenario) -> Element {
    let mut progress = use_progress();
    let briefing = &scenario.briefing;
    let ticket = scenario.ticket_label();

    rsx! {
        article { class: "briefing",
            header { class: "briefing__bar",
                span { class: "briefing__inbox", "Posteingang" }
                span { class: "briefing__ticket", "ticket-id: {ticket}" }
            }
            div { class: "briefing__body",
                h2 { "{briefing.subject}" }
                p { class: "briefing__meta",
                    "Von: "
                    strong { "{briefing.sender}" }
                    " • An: "
                    strong { "{briefing.role}" }
                }
                div { class: "briefing__message", "{briefing.message}" }
                if !briefing.goals.is_empty() {
                    ul { class: "briefing__goals",
                        for goal in briefing.goals.iter() {
                            li { "{goal}" }
                        }
                    }
                }
                section { class: "panel",
                    div { class: "panel__title", "Aktueller Stand (Fehlerhaft)" }
                    div { class: "panel__preview",
                        ShadowPreview {
                            html: scenario.solution.initial_html.clone(),
                            css: scenario.solution.initial_css.clone(),
                        }
                    }
                }
                button {
                    class: "btn btn--primary btn--wide",
                    r#type: "button",
                    onclick: move |_| {
                        if let Err(err) = progress.write().set_phase(Phase::Diagnosis) {
                            tracing::debug!(%err, "briefing could not advance");
                        }
                    },
                    "Problemanalyse starten"
                }
            }
        }
    }
}
