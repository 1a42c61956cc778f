use dioxus::prelude::*;

/// A single sidebar entry. Plain anchor, so it works with or without a router.
#[component]
pub fn NavLink(#[props(into)] label: String, #[props(into)] href: String) -> Element {
    rsx! {
        a { class: "nav-link", href: "{href}", "{label}" }
    }
}
