use dioxus::prelude::*;

/// Titled group of sidebar links. Open by default; the header folds it away.
#[component]
pub fn NavSection(#[props(into)] title: String, children: Element) -> Element {
    let mut is_open = use_signal(|| true);
    let hint = if is_open() {
        format!("Hide {title}")
    } else {
        format!("Show {title}")
    };

    rsx! {
        section {
            class: if is_open() { "nav-section" } else { "nav-section collapsed" },

            button {
                class: "nav-section-header",
                r#type: "button",
                title: "{hint}",
                "aria-expanded": if is_open() { "true" } else { "false" },
                onclick: move |_| is_open.set(!is_open()),

                h4 { class: "nav-section-title", "{title}" }
                span { class: "nav-section-toggle", if is_open() { "▾" } else { "▸" } }
            }

            if is_open() {
                div { class: "nav-section-content", {children} }
            }
        }
    }
}
