use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "not-found",
            h1 { "404 - Not Found" }
            p { "Nothing lives at /{path}" }
            Link { to: Route::Overview {}, class: "nav-link", "Back to dashboard" }
        }
    }
}
