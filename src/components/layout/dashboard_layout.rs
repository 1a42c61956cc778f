use dioxus::prelude::*;

use crate::components::layout::Sidebar;

/// Full-height dark frame: horizontal flex row, light text.
pub const LAYOUT_CLASS: &str = "dashboard-layout flex h-screen bg-gray-900 text-white";

/// Places the sidebar and the page content side by side.
///
/// `children` is rendered as given, right after the sidebar.
#[component]
pub fn DashboardLayout(children: Element) -> Element {
    rsx! {
        div { class: LAYOUT_CLASS,
            Sidebar {}
            {children}
        }
    }
}
