//! Sidebar open/closed state for the navigation shell.

/// Whether the mobile sidebar is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
}

impl SidebarState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Tailwind translate class for the sliding panel
    pub fn panel_class(&self) -> &'static str {
        if self.open {
            "translate-x-0"
        } else {
            "-translate-x-full"
        }
    }
}
