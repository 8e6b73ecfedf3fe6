//! UI Components
//!
//! Reusable Leptos components for the landing page.

pub mod alert_card;
pub mod charts;
pub mod data_sphere;
pub mod heading;
pub mod nav;
pub mod reveal;
pub mod theme_toggle;
pub mod tilt;

pub use alert_card::AlertCard;
pub use charts::DataCharts;
pub use data_sphere::DataSphere;
pub use heading::{IconBadge, SectionHeading};
pub use nav::Header;
pub use reveal::{replay_reveal, use_reveal};
pub use theme_toggle::ThemeToggle;
pub use tilt::{TiltContainer, TiltItem};
