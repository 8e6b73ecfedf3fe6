//! Scene mounting
//!
//! Ties the model, renderer, frame loop and guard together for one mount of
//! the decorative scene.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::SceneConfig;

use super::camera::PerspectiveCamera;
use super::guard::{SceneGuard, SceneId, SceneLease};
use super::model::SceneModel;
use super::render::{compose_frame, SharedRenderer};
use super::task::{AnimationTask, FrameClock, FrameScheduler};

/// Square canvas edge for a container, or `None` if it has not been laid out
pub fn canvas_size(width: f64, height: f64, max: f64) -> Option<f64> {
    let size = width.min(height).min(max);
    if size.is_finite() && size > 0.0 {
        Some(size)
    } else {
        None
    }
}

/// A running scene. Dropping it (or calling [`unmount`]) tears it down.
///
/// [`unmount`]: MountedScene::unmount
pub struct MountedScene {
    lease: SceneLease,
    renderer: SharedRenderer,
    model: Rc<RefCell<SceneModel>>,
    size: Rc<Cell<f64>>,
    max_size: f64,
}

/// Build and start the decorative scene inside a `width` x `height` container
///
/// Returns `None` without side effects when the container is unmeasured or
/// the guard already holds a scene.
pub fn mount_scene(
    guard: &SceneGuard,
    scheduler: Rc<dyn FrameScheduler>,
    renderer: SharedRenderer,
    width: f64,
    height: f64,
    config: &SceneConfig,
) -> Option<MountedScene> {
    let Some(size) = canvas_size(width, height, config.max_canvas_size) else {
        tracing::debug!("Scene container not measured ({}x{}), skipping", width, height);
        return None;
    };

    let lease = guard.try_acquire()?;
    tracing::info!(
        "Creating 3D scene {} ({} books, {} documents, {} data points) at {}px",
        lease.id(),
        config.book_count,
        config.document_count,
        config.data_point_count,
        size
    );

    let camera = PerspectiveCamera::default();
    let model = Rc::new(RefCell::new(SceneModel::build(config)));
    let size_cell = Rc::new(Cell::new(size));

    renderer.borrow_mut().resize(size);
    lease.set_instance(Rc::clone(&renderer));

    // First frame right away so the canvas is never blank
    {
        let mut scene = model.borrow_mut();
        scene.update(0.0);
        renderer.borrow_mut().render(&compose_frame(&scene, &camera, size));
    }

    let frame_model = Rc::clone(&model);
    let frame_renderer = Rc::clone(&renderer);
    let frame_size = Rc::clone(&size_cell);
    let mut clock = FrameClock::new();
    let task = AnimationTask::spawn(scheduler, move |timestamp| {
        let elapsed = clock.elapsed(timestamp);
        let mut scene = frame_model.borrow_mut();
        scene.update(elapsed);
        let frame = compose_frame(&scene, &camera, frame_size.get());
        frame_renderer.borrow_mut().render(&frame);
    });
    lease.set_animation(task);

    Some(MountedScene {
        lease,
        renderer,
        model,
        size: size_cell,
        max_size: config.max_canvas_size,
    })
}

impl std::fmt::Debug for MountedScene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedScene")
            .field("id", &self.lease.id())
            .field("size", &self.size.get())
            .finish()
    }
}

impl MountedScene {
    pub fn id(&self) -> SceneId {
        self.lease.id()
    }

    /// Current canvas edge in CSS pixels
    pub fn size(&self) -> f64 {
        self.size.get()
    }

    /// Seconds of animation shown by the latest frame
    pub fn elapsed(&self) -> f64 {
        self.model.borrow().elapsed
    }

    /// Follow a container resize. Unmeasured sizes are ignored.
    pub fn resize(&self, width: f64, height: f64) {
        if let Some(size) = canvas_size(width, height, self.max_size) {
            if size != self.size.get() {
                self.size.set(size);
                self.renderer.borrow_mut().resize(size);
            }
        }
    }

    /// Stop the loop, dispose the renderer and free the guard
    pub fn unmount(self) {
        tracing::info!("Unmounting 3D scene {}", self.lease.id());
        self.lease.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::render::{RecordingRenderer, RenderStats};
    use crate::scene::task::ManualScheduler;

    struct Harness {
        guard: SceneGuard,
        manual: Rc<ManualScheduler>,
        stats: Rc<RefCell<RenderStats>>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                guard: SceneGuard::new(),
                manual: Rc::new(ManualScheduler::new()),
                stats: Rc::default(),
            }
        }

        fn mount(&mut self, width: f64, height: f64) -> Option<MountedScene> {
            let recording = RecordingRenderer::new();
            self.stats = recording.stats();
            let renderer: SharedRenderer = Rc::new(RefCell::new(recording));
            let scheduler: Rc<dyn FrameScheduler> = self.manual.clone();
            mount_scene(&self.guard, scheduler, renderer, width, height, &SceneConfig::default())
        }
    }

    #[test]
    fn test_canvas_size() {
        assert_eq!(canvas_size(800.0, 500.0, 600.0), Some(500.0));
        assert_eq!(canvas_size(900.0, 900.0, 600.0), Some(600.0));
        assert_eq!(canvas_size(0.0, 500.0, 600.0), None);
    }

    #[test]
    fn test_mount_renders_and_animates() {
        let mut h = Harness::new();
        let scene = h.mount(480.0, 640.0).unwrap();
        assert!(h.guard.has_instance());
        assert_eq!(scene.size(), 480.0);
        assert_eq!(h.stats.borrow().frames, 1);

        h.manual.tick(16.0);
        h.manual.tick(1000.0);
        assert_eq!(h.stats.borrow().frames, 3);
        assert!((scene.elapsed() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unmount_stops_frames() {
        let mut h = Harness::new();
        let scene = h.mount(600.0, 600.0).unwrap();
        scene.unmount();

        assert_eq!(h.manual.pending_count(), 0);
        assert_eq!(h.manual.tick(16.0), 0);
        let stats = h.stats.borrow();
        assert_eq!(stats.frames, 1);
        assert_eq!(stats.late_renders, 0);
        assert!(stats.disposed);
        assert!(!h.guard.has_instance());
        assert!(!h.guard.is_creating());
    }

    #[test]
    fn test_second_mount_is_skipped() {
        let mut h = Harness::new();
        let first = h.mount(600.0, 600.0).unwrap();
        let first_stats = Rc::clone(&h.stats);

        assert!(h.mount(600.0, 600.0).is_none());
        // The skipped attempt never touched its renderer
        assert_eq!(h.stats.borrow().resizes, 0);
        assert_eq!(h.manual.pending_count(), 1);

        drop(first);
        assert!(first_stats.borrow().disposed);
        assert!(h.mount(600.0, 600.0).is_some());
    }

    #[test]
    fn test_unmeasured_container_aborts() {
        let mut h = Harness::new();
        assert!(h.mount(0.0, 0.0).is_none());
        assert!(!h.guard.has_instance());
        assert!(!h.guard.is_creating());
        assert_eq!(h.manual.pending_count(), 0);
    }

    #[test]
    fn test_resize_follows_container() {
        let mut h = Harness::new();
        let scene = h.mount(600.0, 600.0).unwrap();
        scene.resize(300.0, 400.0);
        assert_eq!(scene.size(), 300.0);
        assert_eq!(h.stats.borrow().size, 300.0);

        scene.resize(0.0, 400.0);
        assert_eq!(scene.size(), 300.0);

        h.manual.tick(16.0);
        assert_eq!(h.stats.borrow().frames, 2);
    }
}
