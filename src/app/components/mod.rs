//! Shared UI components for the site shell.

pub mod layout;
pub mod nav;
pub mod theme;

pub use layout::Shell;
pub use nav::Navigation;
pub use theme::ThemeSelect;
