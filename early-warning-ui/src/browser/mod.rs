//! Browser Bindings
//!
//! Browser halves of the seams the site library defines: frame scheduling
//! on `requestAnimationFrame`, canvas rendering and layout measurement.

pub mod canvas;
pub mod scheduler;
pub mod viewport;

pub use canvas::CanvasRenderer;
pub use scheduler::BrowserScheduler;
pub use viewport::{element_rect, viewport_geometry};
