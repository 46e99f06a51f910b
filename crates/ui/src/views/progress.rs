use dioxus::prelude::*;

use crate::context::use_progress;
use crate::vm::map_progress_report;

#[component]
pub fn ProgressView() -> Element {
    let progress = use_progress();
    let report = map_progress_report(&progress.read());

    rsx! {
        div { class: "page",
            h2 { "Fortschritt" }
            p { "Erledigt: {report.completed} / {report.total}" }
            p { "Fehlversuche (aktuelles Ticket): {report.mistakes}" }
            ul { class: "progress-list",
                for row in report.rows {
                    li { key: "{row.ticket}",
                        class: if row.completed { "progress-row progress-row--done" } else { "progress-row" },
                        span { class: "progress-row__ticket", "{row.ticket}" }
                        span { "{row.title}" }
                        if row.completed {
                            span { class: "progress-row__state", "gelöst" }
                        } else {
                            span { class: "progress-row__state", "offen" }
                        }
                    }
                }
            }
        }
    }
}
