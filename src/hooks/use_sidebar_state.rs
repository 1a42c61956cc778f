use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub expanded: Signal<bool>,
}

/// Sidebar state for the calling component.
///
/// A host that provides its own `SidebarState` context keeps it across sidebar
/// remounts; otherwise the state is local and starts expanded.
pub fn use_sidebar_state() -> SidebarState {
    use_hook(|| try_consume_context::<SidebarState>().unwrap_or_else(|| SidebarState::new(true)))
}

impl SidebarState {
    /// Must be called inside a component or runtime; the signal belongs to the current scope
    pub fn new(expanded: bool) -> Self {
        Self {
            expanded: Signal::new(expanded),
        }
    }

    pub fn is_expanded(&self) -> bool {
        *self.expanded.read()
    }

    /// Flip between expanded and collapsed
    pub fn toggle(&mut self) {
        let current = *self.expanded.read();
        self.expanded.set(!current);
        tracing::debug!("Sidebar {}", if current { "collapsed" } else { "expanded" });
    }
}
