use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::use_progress_provider;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    use_progress_provider();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Ticket titles are rendered inside the desk.
        document::Title { "CSS Werkstatt" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Etwas ist schiefgelaufen" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
