use dioxus::prelude::*;

/// Page body placed to the right of the sidebar
#[component]
pub fn ContentArea(#[props(into)] title: String, children: Element) -> Element {
    rsx! {
        main { class: "content-area",
            header { class: "content-header",
                h2 { "{title}" }
            }
            div { class: "content-body",
                {children}
            }
        }
    }
}
