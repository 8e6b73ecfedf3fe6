//! Scene Guard
//!
//! Owns the single active decorative scene. A page holds one guard and hands
//! clones of it to whatever mounts the scene. Mounting asks the guard for a
//! [`SceneLease`]; while a lease is outstanding, or a scene is registered,
//! further attempts are skipped. Releasing the lease (explicitly or by
//! dropping it) runs [`SceneGuard::cleanup`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::render::SharedRenderer;
use super::task::AnimationTask;

/// Identity of one construction attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneId(pub u64);

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scene-{}", self.0)
    }
}

#[derive(Default)]
struct GuardState {
    next_id: u64,
    /// Attempt that currently holds the guard
    owner: Option<SceneId>,
    creating: bool,
    instance: Option<SceneId>,
    renderer: Option<SharedRenderer>,
    animation: Option<AnimationTask>,
}

/// Shared handle to the scene slot
#[derive(Clone, Default)]
pub struct SceneGuard {
    inner: Rc<RefCell<GuardState>>,
}

impl SceneGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scene is registered and running
    pub fn has_instance(&self) -> bool {
        self.inner.borrow().instance.is_some()
    }

    /// A construction is under way but not registered yet
    pub fn is_creating(&self) -> bool {
        self.inner.borrow().creating
    }

    /// Mark a construction as started
    pub fn start_creating(&self) {
        self.inner.borrow_mut().creating = true;
    }

    /// Register the constructed scene and its renderer
    ///
    /// A different renderer already registered is disposed.
    pub fn set_instance(&self, id: SceneId, renderer: SharedRenderer) {
        let replaced = {
            let mut state = self.inner.borrow_mut();
            state.instance = Some(id);
            state.creating = false;
            state.renderer.replace(Rc::clone(&renderer))
        };
        if let Some(old) = replaced.filter(|old| !Rc::ptr_eq(old, &renderer)) {
            old.borrow_mut().dispose();
            tracing::debug!("Disposed renderer replaced by scene {}", id);
        }
    }

    /// Hand the running frame loop to the guard
    pub fn set_animation(&self, task: AnimationTask) {
        // Replace outside the borrow so the old task's cancel runs unborrowed
        let previous = self.inner.borrow_mut().animation.replace(task);
        drop(previous);
    }

    /// Id of the registered scene, if any
    pub fn instance(&self) -> Option<SceneId> {
        self.inner.borrow().instance
    }

    /// Whether the registered frame loop is still running
    pub fn is_animating(&self) -> bool {
        self.inner
            .borrow()
            .animation
            .as_ref()
            .is_some_and(|task| task.is_active())
    }

    /// Stop the frame loop, dispose the renderer and reset every flag
    ///
    /// Does nothing harmful when no scene is active.
    pub fn cleanup(&self) {
        let (instance, renderer, animation) = {
            let mut state = self.inner.borrow_mut();
            state.owner = None;
            state.creating = false;
            (
                state.instance.take(),
                state.renderer.take(),
                state.animation.take(),
            )
        };

        if let Some(task) = animation {
            task.cancel();
        }
        if let Some(renderer) = renderer {
            renderer.borrow_mut().dispose();
        }
        if let Some(id) = instance {
            tracing::info!("Cleaned up 3D scene {}", id);
        }
    }

    /// Claim the guard for a new scene
    ///
    /// Returns `None`, and logs, when a scene exists or is being created.
    pub fn try_acquire(&self) -> Option<SceneLease> {
        let mut state = self.inner.borrow_mut();
        if state.instance.is_some() || state.creating {
            tracing::debug!("Scene already exists or is being created, skipping");
            return None;
        }
        state.next_id += 1;
        let id = SceneId(state.next_id);
        state.owner = Some(id);
        state.creating = true;
        Some(SceneLease {
            guard: self.clone(),
            id,
            released: false,
        })
    }

    fn is_owner(&self, id: SceneId) -> bool {
        self.inner.borrow().owner == Some(id)
    }

    /// Cleanup on behalf of a lease, unless a newer attempt owns the guard
    fn release(&self, id: SceneId) {
        if self.is_owner(id) {
            self.cleanup();
        } else {
            tracing::debug!("Ignoring release of stale lease {}", id);
        }
    }
}

impl fmt::Debug for SceneGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("SceneGuard")
            .field("instance", &state.instance)
            .field("creating", &state.creating)
            .field("animating", &state.animation.is_some())
            .finish()
    }
}

/// Exclusive claim on a [`SceneGuard`]; cleans the guard up when released
#[derive(Debug)]
pub struct SceneLease {
    guard: SceneGuard,
    id: SceneId,
    released: bool,
}

impl SceneLease {
    pub fn id(&self) -> SceneId {
        self.id
    }

    /// Whether this lease still owns the guard
    pub fn is_current(&self) -> bool {
        self.guard.is_owner(self.id)
    }

    /// Register the renderer; ignored once a newer attempt owns the guard
    pub fn set_instance(&self, renderer: SharedRenderer) {
        if !self.is_current() {
            tracing::warn!("Stale lease {} tried to register a renderer, ignoring", self.id);
            return;
        }
        self.guard.set_instance(self.id, renderer);
    }

    /// Hand over the frame loop; a stale lease's task is cancelled instead
    pub fn set_animation(&self, task: AnimationTask) {
        if !self.is_current() {
            tracing::warn!("Stale lease {} tried to register a frame loop, ignoring", self.id);
            task.cancel();
            return;
        }
        self.guard.set_animation(task);
    }

    /// Release now instead of on drop
    pub fn release(mut self) {
        self.released = true;
        self.guard.release(self.id);
    }
}

impl Drop for SceneLease {
    fn drop(&mut self) {
        if !self.released {
            self.guard.release(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::render::{RecordingRenderer, Renderer};
    use crate::scene::task::{FrameScheduler, ManualScheduler};

    fn renderer() -> (SharedRenderer, Rc<RefCell<crate::scene::render::RenderStats>>) {
        let recording = RecordingRenderer::new();
        let stats = recording.stats();
        let shared: Rc<RefCell<dyn Renderer>> = Rc::new(RefCell::new(recording));
        (shared, stats)
    }

    #[test]
    fn test_cleanup_with_nothing_active() {
        let guard = SceneGuard::new();
        guard.cleanup();
        guard.cleanup();
        assert!(!guard.has_instance());
        assert!(!guard.is_creating());
    }

    #[test]
    fn test_flags_follow_lifecycle() {
        let guard = SceneGuard::new();
        guard.start_creating();
        assert!(guard.is_creating());
        assert!(guard.try_acquire().is_none());

        let (shared, stats) = renderer();
        guard.set_instance(SceneId(9), shared);
        assert!(guard.has_instance());
        assert!(!guard.is_creating());

        guard.cleanup();
        assert!(!guard.has_instance());
        assert!(stats.borrow().disposed);
    }

    #[test]
    fn test_second_acquire_is_skipped() {
        let guard = SceneGuard::new();
        let lease = guard.try_acquire().unwrap();
        assert!(guard.is_creating());
        assert!(guard.try_acquire().is_none());

        let (shared, _) = renderer();
        lease.set_instance(shared);
        assert!(guard.try_acquire().is_none());
        drop(lease);
        assert!(!guard.has_instance());
    }

    #[test]
    fn test_cleanup_then_reacquire() {
        let guard = SceneGuard::new();
        let lease = guard.try_acquire().unwrap();
        let (shared, _) = renderer();
        lease.set_instance(shared);

        guard.cleanup();
        assert!(!guard.has_instance());

        let again = guard.try_acquire();
        assert!(again.is_some());
        assert_ne!(again.unwrap().id(), lease.id());
    }

    #[test]
    fn test_stale_lease_leaves_new_scene_alone() {
        let guard = SceneGuard::new();
        let old = guard.try_acquire().unwrap();
        guard.cleanup();

        let current = guard.try_acquire().unwrap();
        let (shared, stats) = renderer();
        current.set_instance(shared);

        old.release();
        assert!(guard.has_instance());
        assert!(!stats.borrow().disposed);
        drop(current);
        assert!(stats.borrow().disposed);
    }

    #[test]
    fn test_stale_lease_cannot_replace_scene() {
        let guard = SceneGuard::new();
        let manual = Rc::new(ManualScheduler::new());
        let scheduler: Rc<dyn FrameScheduler> = manual.clone();

        let old = guard.try_acquire().unwrap();
        guard.cleanup();
        assert!(!old.is_current());

        let current = guard.try_acquire().unwrap();
        let (live, live_stats) = renderer();
        current.set_instance(live);

        let (stale, stale_stats) = renderer();
        old.set_instance(stale);
        old.set_animation(AnimationTask::spawn(scheduler, |_| {}));
        assert_eq!(guard.instance(), Some(current.id()));
        assert!(!guard.is_animating());
        assert_eq!(manual.pending_count(), 0);
        assert!(!stale_stats.borrow().disposed);

        drop(current);
        assert!(live_stats.borrow().disposed);
        assert!(!guard.has_instance());
    }

    #[test]
    fn test_set_instance_disposes_replaced_renderer() {
        let guard = SceneGuard::new();
        let (first, first_stats) = renderer();
        let (second, second_stats) = renderer();

        guard.set_instance(SceneId(1), Rc::clone(&first));
        guard.set_instance(SceneId(1), first);
        assert!(!first_stats.borrow().disposed);

        guard.set_instance(SceneId(2), second);
        assert!(first_stats.borrow().disposed);
        assert!(!second_stats.borrow().disposed);

        guard.cleanup();
        assert!(second_stats.borrow().disposed);
    }

    #[test]
    fn test_cleanup_cancels_animation() {
        let guard = SceneGuard::new();
        let manual = Rc::new(ManualScheduler::new());
        let scheduler: Rc<dyn FrameScheduler> = manual.clone();

        let lease = guard.try_acquire().unwrap();
        let (shared, _) = renderer();
        lease.set_instance(shared);
        lease.set_animation(AnimationTask::spawn(scheduler, |_| {}));
        assert!(guard.is_animating());
        assert_eq!(manual.pending_count(), 1);

        lease.release();
        assert!(!guard.is_animating());
        assert_eq!(manual.pending_count(), 0);
    }
}
