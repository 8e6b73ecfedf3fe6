//! Page Sections
//!
//! One component per section, in page order.

pub mod about;
pub mod features;
pub mod footer;
pub mod hero;
pub mod workflow;

pub use about::About;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use workflow::Workflow;
