//! Frame Loop
//!
//! A cancellable per-frame task on top of a [`FrameScheduler`]. The
//! scheduler abstracts `requestAnimationFrame`; the browser build provides
//! one backed by the window, and [`ManualScheduler`] drives frames by hand.
//!
//! The task owns its pending request. Cancelling (or dropping the handle)
//! cancels that request synchronously, so no frame callback can run after
//! the owner has torn down.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Identifier of a pending frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequestId(pub i64);

/// Callback run once on the next frame with a timestamp in milliseconds
pub type FrameCallback = Box<dyn FnOnce(f64)>;

pub trait FrameScheduler {
    /// Schedule `callback` for the next frame
    ///
    /// Returns `None` when no frame can be scheduled.
    fn request(&self, callback: FrameCallback) -> Option<FrameRequestId>;

    /// Cancel a pending request. Unknown or spent ids are ignored.
    fn cancel(&self, id: FrameRequestId);
}

#[derive(Debug, Default)]
struct TaskState {
    active: bool,
    pending: Option<FrameRequestId>,
    frames: u64,
}

type FrameFn = Rc<RefCell<dyn FnMut(f64)>>;

/// Handle to a running frame loop
pub struct AnimationTask {
    state: Rc<RefCell<TaskState>>,
    scheduler: Rc<dyn FrameScheduler>,
}

impl AnimationTask {
    /// Start calling `on_frame` once per frame until cancelled
    pub fn spawn<F>(scheduler: Rc<dyn FrameScheduler>, on_frame: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        let state = Rc::new(RefCell::new(TaskState {
            active: true,
            ..TaskState::default()
        }));
        let on_frame: FrameFn = Rc::new(RefCell::new(on_frame));
        schedule_next(&scheduler, &state, on_frame);
        Self { state, scheduler }
    }

    /// Stop the loop and cancel the pending frame. Safe to call repeatedly.
    pub fn cancel(&self) {
        let pending = {
            let mut state = self.state.borrow_mut();
            state.active = false;
            state.pending.take()
        };
        if let Some(id) = pending {
            self.scheduler.cancel(id);
            tracing::debug!("Cancelled frame request {:?}", id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.borrow().active
    }

    /// Frames delivered so far
    pub fn frames(&self) -> u64 {
        self.state.borrow().frames
    }

    /// Whether a frame request is outstanding
    pub fn has_pending(&self) -> bool {
        self.state.borrow().pending.is_some()
    }
}

impl Drop for AnimationTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for AnimationTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("AnimationTask")
            .field("active", &state.active)
            .field("pending", &state.pending)
            .field("frames", &state.frames)
            .finish()
    }
}

fn schedule_next(scheduler: &Rc<dyn FrameScheduler>, state: &Rc<RefCell<TaskState>>, on_frame: FrameFn) {
    let weak_state: Weak<RefCell<TaskState>> = Rc::downgrade(state);
    let weak_scheduler: Weak<dyn FrameScheduler> = Rc::downgrade(scheduler);

    let id = scheduler.request(Box::new(move |timestamp| {
        let (Some(state), Some(scheduler)) = (weak_state.upgrade(), weak_scheduler.upgrade()) else {
            return;
        };
        {
            let mut s = state.borrow_mut();
            s.pending = None;
            if !s.active {
                return;
            }
            s.frames += 1;
        }

        {
            let mut frame_fn = on_frame.borrow_mut();
            (&mut *frame_fn)(timestamp);
        }

        if state.borrow().active {
            schedule_next(&scheduler, &state, on_frame);
        }
    }));

    let mut s = state.borrow_mut();
    match id {
        Some(id) => s.pending = Some(id),
        None => {
            tracing::warn!("Frame request refused, stopping animation");
            s.active = false;
        }
    }
}

#[derive(Default)]
struct ManualQueue {
    next_id: i64,
    now: f64,
    pending: Vec<(FrameRequestId, FrameCallback)>,
}

/// Scheduler that only runs frames when told to
///
/// Timestamps start at zero and advance by the step given to [`tick`].
///
/// [`tick`]: ManualScheduler::tick
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<ManualQueue>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by `step_ms` and run every callback that was
    /// pending before the call. Returns how many ran.
    pub fn tick(&self, step_ms: f64) -> usize {
        let (now, due) = {
            let mut queue = self.queue.borrow_mut();
            queue.now += step_ms;
            (queue.now, std::mem::take(&mut queue.pending))
        };
        let count = due.len();
        for (_, callback) in due {
            callback(now);
        }
        count
    }

    pub fn pending_count(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Current clock in milliseconds
    pub fn now(&self) -> f64 {
        self.queue.borrow().now
    }
}

impl FrameScheduler for ManualScheduler {
    fn request(&self, callback: FrameCallback) -> Option<FrameRequestId> {
        let mut queue = self.queue.borrow_mut();
        queue.next_id += 1;
        let id = FrameRequestId(queue.next_id);
        queue.pending.push((id, callback));
        Some(id)
    }

    fn cancel(&self, id: FrameRequestId) {
        // Drop the callback outside the borrow; it may own other handles
        let removed = {
            let mut queue = self.queue.borrow_mut();
            let (gone, kept): (Vec<_>, Vec<_>) =
                std::mem::take(&mut queue.pending).into_iter().partition(|(p, _)| *p == id);
            queue.pending = kept;
            gone
        };
        drop(removed);
    }
}

/// Converts frame timestamps into seconds since the first frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    start: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&mut self, timestamp_ms: f64) -> f64 {
        let start = *self.start.get_or_insert(timestamp_ms);
        ((timestamp_ms - start) / 1000.0).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn scheduler() -> (Rc<ManualScheduler>, Rc<dyn FrameScheduler>) {
        let manual = Rc::new(ManualScheduler::new());
        let dynamic: Rc<dyn FrameScheduler> = manual.clone();
        (manual, dynamic)
    }

    #[test]
    fn test_runs_once_per_tick() {
        let (manual, dynamic) = scheduler();
        let seen = Rc::new(Cell::new(0));
        let counter = Rc::clone(&seen);
        let task = AnimationTask::spawn(dynamic, move |_| counter.set(counter.get() + 1));

        assert_eq!(manual.pending_count(), 1);
        for _ in 0..3 {
            manual.tick(16.0);
        }
        assert_eq!(seen.get(), 3);
        assert_eq!(task.frames(), 3);
        assert_eq!(manual.pending_count(), 1);
    }

    #[test]
    fn test_cancel_removes_pending_request() {
        let (manual, dynamic) = scheduler();
        let task = AnimationTask::spawn(dynamic, |_| {});
        task.cancel();
        task.cancel();

        assert!(!task.is_active());
        assert_eq!(manual.pending_count(), 0);
        assert_eq!(manual.tick(16.0), 0);
        assert_eq!(task.frames(), 0);
    }

    #[test]
    fn test_drop_cancels() {
        let (manual, dynamic) = scheduler();
        let seen = Rc::new(Cell::new(0));
        let counter = Rc::clone(&seen);
        let task = AnimationTask::spawn(dynamic, move |_| counter.set(counter.get() + 1));
        manual.tick(16.0);
        drop(task);

        assert_eq!(manual.pending_count(), 0);
        manual.tick(16.0);
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn test_timestamps_advance() {
        let (manual, dynamic) = scheduler();
        let stamps = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&stamps);
        let _task = AnimationTask::spawn(dynamic, move |ts| sink.borrow_mut().push(ts));
        manual.tick(10.0);
        manual.tick(20.0);
        assert_eq!(*stamps.borrow(), vec![10.0, 30.0]);
    }

    #[test]
    fn test_refused_request_stops_task() {
        struct Refusing;
        impl FrameScheduler for Refusing {
            fn request(&self, _: FrameCallback) -> Option<FrameRequestId> {
                None
            }
            fn cancel(&self, _: FrameRequestId) {}
        }

        let task = AnimationTask::spawn(Rc::new(Refusing), |_| {});
        assert!(!task.is_active());
        assert!(!task.has_pending());
    }

    #[test]
    fn test_frame_clock() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.elapsed(1500.0), 0.0);
        assert_eq!(clock.elapsed(2500.0), 1.0);
    }
}
