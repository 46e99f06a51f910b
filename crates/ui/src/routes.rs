use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};

use crate::context::use_progress;
use crate::views::{DeskView, ProgressView};
use crate::vm::map_ticket_list;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DeskView)] Desk {},
        #[route("/progress", ProgressView)] Progress {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let mut progress = use_progress();
    let navigator = use_navigator();
    let tickets = map_ticket_list(&progress.read());

    rsx! {
        nav { class: "sidebar",
            h1 { "CSS Werkstatt" }
            div { class: "sidebar__label", "Tickets" }
            ul { class: "ticket-list",
                for ticket in tickets {
                    li { key: "{ticket.id}",
                        button {
                            class: if ticket.active { "ticket ticket--active" } else { "ticket" },
                            r#type: "button",
                            onclick: {
                                let id = ticket.id.clone();
                                move |_| {
                                    if let Err(err) = progress.write().start_scenario(&id) {
                                        tracing::warn!(%err, "ticket could not be opened");
                                        return;
                                    }
                                    let _ = navigator.push(Route::Desk {});
                                }
                            },
                            span { class: ticket.marker_class() }
                            span { class: "ticket__body",
                                span { class: "ticket__title", "{ticket.title}" }
                                span { class: "ticket__meta",
                                    "{ticket.difficulty}"
                                    if ticket.completed {
                                        " ✓"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            ul { class: "sidebar__nav",
                li { Link { to: Route::Desk {}, "Arbeitsplatz" } }
                li { Link { to: Route::Progress {}, "Fortschritt" } }
            }
            div { class: "sidebar__footer", "Simulierte Umgebung v1.0" }
        }
    }
}
