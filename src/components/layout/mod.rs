pub mod content_area;
pub mod dashboard_layout;
pub mod sidebar;

pub use content_area::ContentArea;
pub use dashboard_layout::{DashboardLayout, LAYOUT_CLASS};
pub use sidebar::Sidebar;
