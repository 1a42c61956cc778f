use dioxus::prelude::*;

use crate::components::navigation::{NavLink, NavSection};
use crate::config::SidebarConfig;
use crate::hooks::use_sidebar_state;

#[component]
pub fn Sidebar() -> Element {
    let config = use_hook(SidebarConfig::load);
    let mut state = use_sidebar_state();

    rsx! {
        aside {
            class: if state.is_expanded() { "sidebar" } else { "sidebar sidebar-collapsed" },

            if state.is_expanded() {
                div { class: "sidebar-header",
                    div { class: "sidebar-brand",
                        span { "{config.brand}" }
                    }
                    button {
                        class: "btn-collapse",
                        title: "Collapse navigation",
                        onclick: move |_| state.toggle(),
                        "‹"
                    }
                }

                nav { class: "sidebar-content",
                    for section in config.sections.iter() {
                        NavSection {
                            key: "{section.title}",
                            title: section.title.clone(),
                            for item in section.items.iter() {
                                NavLink {
                                    key: "{item.href}",
                                    label: item.label.clone(),
                                    href: item.href.clone(),
                                }
                            }
                        }
                    }
                }
            } else {
                div { class: "sidebar-collapsed-content",
                    button {
                        class: "btn-expand",
                        title: "Expand navigation",
                        onclick: move |_| state.toggle(),
                        "›"
                    }
                }
            }
        }
    }
}
