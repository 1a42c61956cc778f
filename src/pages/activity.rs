use dioxus::prelude::*;

use crate::components::layout::ContentArea;

#[component]
pub fn Activity() -> Element {
    rsx! {
        ContentArea { title: "Activity",
            div { class: "panel",
                p { class: "text-muted", "No recent activity." }
            }
        }
    }
}
