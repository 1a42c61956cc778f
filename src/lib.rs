pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod pages;
pub mod routes;

pub use app::App;
pub use components::layout::{DashboardLayout, Sidebar};
pub use routes::Route;
