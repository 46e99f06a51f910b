use dioxus::prelude::*;
use werkstatt_core::NextScenario;

use crate::context::use_progress;

#[component]
pub fn SuccessView() -> Element {
    let mut progress = use_progress();

    rsx! {
        div { class: "success",
            div { class: "success__card",
                h2 { "Fantastisch!" }
                p { "Du hast das Problem gelöst und den Bug gefixt. Der Kunde ist happy!" }
                button {
                    class: "btn btn--light",
                    r#type: "button",
                    onclick: move |_| {
                        let next = progress.write().next_scenario();
                        tracing::debug!(?next, "next ticket requested");
                    },
                    "Nächstes Ticket →"
                }
            }
        }
    }
}

/// Shown once every ticket has been worked through.
#[component]
pub fn FinishedView() -> Element {
    let mut progress = use_progress();
    let (completed, total, mistakes) = {
        let state = progress.read();
        (state.completed().len(), state.catalog().len(), state.mistakes())
    };

    rsx! {
        div { class: "success success--finished",
            div { class: "success__card",
                h2 { "Alle Tickets erledigt" }
                p { "{completed} von {total} Tickets gelöst." }
                if mistakes > 0 {
                    p { class: "success__note", "Fehlversuche im letzten Ticket: {mistakes}" }
                }
                button {
                    class: "btn btn--light",
                    r#type: "button",
                    onclick: move |_| {
                        if let NextScenario::Started(id) = progress.write().next_scenario() {
                            tracing::info!(scenario = %id, "restarted from the top");
                        }
                    },
                    "Von vorne beginnen"
                }
            }
        }
    }
}
