//! Decorative 3D Scene
//!
//! A rotating "data sphere" surrounded by books and documents, rendered as
//! flat-shaded 2D draw commands.
//!
//! ## Architecture
//!
//! ```text
//! SceneModel::update(t) ──► compose_frame ──► Frame ──► dyn Renderer
//!        ▲                                                  ▲
//!        └──── AnimationTask (dyn FrameScheduler) ──────────┘
//!                         owned by SceneGuard via SceneLease
//! ```
//!
//! At most one scene is active per [`SceneGuard`]. Everything that touches a
//! browser sits behind [`FrameScheduler`] and [`Renderer`], so the whole
//! lifecycle runs headless under [`ManualScheduler`] and
//! [`RecordingRenderer`].

pub mod camera;
pub mod guard;
pub mod math;
pub mod model;
pub mod mount;
pub mod render;
pub mod task;

pub use camera::{PerspectiveCamera, Projected};
pub use guard::{SceneGuard, SceneId, SceneLease};
pub use math::{Transform, Vec3};
pub use model::{Book, Connector, DataPoint, Document, Light, SceneModel, WireSphere};
pub use mount::{canvas_size, mount_scene, MountedScene};
pub use render::{
    compose_frame, DrawCommand, Frame, RecordingRenderer, RenderStats, Renderer, Rgba,
    SharedRenderer,
};
pub use task::{AnimationTask, FrameCallback, FrameClock, FrameRequestId, FrameScheduler, ManualScheduler};
