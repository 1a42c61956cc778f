pub mod nav_link;
pub mod nav_section;

pub use nav_link::NavLink;
pub use nav_section::NavSection;
