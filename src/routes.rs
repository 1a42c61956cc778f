use dioxus::prelude::*;

use crate::components::layout::DashboardLayout;
use crate::pages::{Activity, NotFound, Overview, Settings};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(DashboardFrame)]
        #[route("/dashboard")]
        Overview {},
        #[route("/dashboard/activity")]
        Activity {},
        #[route("/dashboard/settings")]
        Settings {},
    #[end_layout]
    #[redirect("/", || Route::Overview {})]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Every `/dashboard` route renders inside the dashboard layout
#[component]
fn DashboardFrame() -> Element {
    rsx! {
        DashboardLayout {
            Outlet::<Route> {}
        }
    }
}
