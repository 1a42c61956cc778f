use dioxus::prelude::*;

use crate::routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ErrorBoundary {
            handle_error: |errors: ErrorContext| {
                tracing::error!("Render failed: {:?}", errors);
                rsx! {
                    div { class: "error-panel",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                        a { class: "nav-link", href: "/dashboard", "Back to dashboard" }
                    }
                }
            },
            Router::<Route> {}
        }
    }
}
