pub mod activity;
pub mod not_found;
pub mod overview;
pub mod settings;

pub use activity::Activity;
pub use not_found::NotFound;
pub use overview::Overview;
pub use settings::Settings;
