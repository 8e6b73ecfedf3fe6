//! State Management
//!
//! Page-wide contexts: the theme flag and the shared site resources.

pub mod site;
pub mod theme;

pub use site::{provide_site_state, SiteState};
pub use theme::{provide_theme_state, ThemeState};
