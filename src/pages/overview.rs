use dioxus::prelude::*;

use crate::components::layout::ContentArea;

#[component]
pub fn Overview() -> Element {
    rsx! {
        ContentArea { title: "Overview",
            div { class: "panel",
                p { "Welcome back. Pick a section from the sidebar to get started." }
            }
        }
    }
}
