use dioxus::prelude::*;

use crate::components::layout::ContentArea;
use crate::config::SidebarConfig;

/// Read-only view of the navigation the sidebar was built from
#[component]
pub fn Settings() -> Element {
    let config = use_hook(SidebarConfig::load);

    rsx! {
        ContentArea { title: "Settings",
            div { class: "panel",
                h3 { "Navigation" }
                table { class: "settings-table",
                    thead {
                        tr {
                            th { "Label" }
                            th { "Path" }
                        }
                    }
                    tbody {
                        for item in config.items() {
                            tr { key: "{item.href}",
                                td { "{item.label}" }
                                td { code { "{item.href}" } }
                            }
                        }
                    }
                }
            }
        }
    }
}
