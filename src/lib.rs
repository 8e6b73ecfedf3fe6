//! # Early Warning System site
//!
//! Everything behind the Early Warning System landing page that does not
//! need a browser: the copy, the chart datasets and their geometry, the
//! decorative 3D scene, entrance animation timing, the card tilt and the
//! theme flag. The `early-warning-ui` crate renders these with Leptos.
//!
//! ## Modules
//!
//! - [`theme`]: Light/dark flag
//! - [`charts`]: Datasets, scales and pie/bar/area layouts
//! - [`scene`]: Decorative scene model, projection, frame loop and guard
//! - [`reveal`]: Scroll-triggered entrance animations
//! - [`tilt`]: Pointer tilt for the alert card
//! - [`content`]: Static marketing copy
//! - [`page`]: Section order and page outline
//! - [`export`]: JSON and CSV export of the datasets
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use early_warning::config::SceneConfig;
//! use early_warning::scene::*;
//!
//! let guard = SceneGuard::new();
//! let scheduler = Rc::new(ManualScheduler::new());
//! let renderer = RecordingRenderer::new();
//! let stats = renderer.stats();
//!
//! let scene = mount_scene(
//!     &guard,
//!     scheduler.clone(),
//!     Rc::new(RefCell::new(renderer)),
//!     800.0,
//!     600.0,
//!     &SceneConfig::default(),
//! )
//! .expect("first mount succeeds");
//!
//! scheduler.tick(16.0);
//! assert_eq!(stats.borrow().frames, 2);
//!
//! scene.unmount();
//! assert!(!guard.has_instance());
//! ```

pub mod charts;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod geometry;
pub mod page;
pub mod reveal;
pub mod scene;
pub mod theme;
pub mod tilt;

// Re-export top-level types for convenience
pub use charts::{
    AreaLayout, BarLayout, Carousel, CarouselSpeed, ChartCard, ChartKind, PieLayout,
    ScrollDirection, Tooltip,
};

pub use config::{generate_default_config, Config, ConfigError};

pub use content::{FeatureTab, Icon};

pub use error::{SiteError, SiteResult};

pub use geometry::{Point, Rect};

pub use page::{outline, SectionId, SectionOutline};

pub use reveal::{Entrance, RevealTrigger, TriggerStart, ViewportGeometry};

pub use scene::{
    mount_scene, AnimationTask, FrameScheduler, ManualScheduler, MountedScene, RecordingRenderer,
    Renderer, SceneGuard, SceneLease, SceneModel,
};

pub use theme::Theme;

pub use tilt::TiltCard;
