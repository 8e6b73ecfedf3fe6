//! `requestAnimationFrame` scheduler
//!
//! Each request keeps its [`AnimationFrame`] handle until the frame fires or
//! is cancelled. Dropping the handle cancels the browser request and frees
//! the JS closure along with whatever the callback captured.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

use early_warning::scene::{FrameCallback, FrameRequestId, FrameScheduler};

pub struct BrowserScheduler {
    available: bool,
    next_id: Cell<i64>,
    frames: Rc<RefCell<HashMap<FrameRequestId, AnimationFrame>>>,
}

impl BrowserScheduler {
    pub fn new() -> Self {
        let available = web_sys::window().is_some();
        if !available {
            tracing::warn!("No window, frame requests will be refused");
        }
        Self {
            available,
            next_id: Cell::new(0),
            frames: Rc::default(),
        }
    }
}

impl Default for BrowserScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for BrowserScheduler {
    fn request(&self, callback: FrameCallback) -> Option<FrameRequestId> {
        if !self.available {
            return None;
        }
        let id = FrameRequestId(self.next_id.get() + 1);
        self.next_id.set(id.0);

        let frames = Rc::downgrade(&self.frames);
        let handle = request_animation_frame(move |timestamp| {
            // Spent handle; the frame already fired so dropping it cancels nothing
            if let Some(frames) = frames.upgrade() {
                let spent = frames.borrow_mut().remove(&id);
                drop(spent);
            }
            callback(timestamp);
        });
        self.frames.borrow_mut().insert(id, handle);
        Some(id)
    }

    fn cancel(&self, id: FrameRequestId) {
        let handle = self.frames.borrow_mut().remove(&id);
        if handle.is_some() {
            tracing::trace!("Cancelled animation frame {:?}", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_cancel_drops_callback() {
        let scheduler = BrowserScheduler::new();
        let captured = Rc::new(());
        let held = Rc::clone(&captured);

        let id = scheduler
            .request(Box::new(move |_| drop(held)))
            .expect("window available in browser tests");
        assert_eq!(Rc::strong_count(&captured), 2);
        assert_eq!(scheduler.frames.borrow().len(), 1);

        scheduler.cancel(id);
        assert!(scheduler.frames.borrow().is_empty());
        assert_eq!(Rc::strong_count(&captured), 1);

        // Unknown ids are ignored
        scheduler.cancel(id);
    }

    #[wasm_bindgen_test]
    fn test_ids_are_distinct() {
        let scheduler = BrowserScheduler::new();
        let a = scheduler.request(Box::new(|_| {}));
        let b = scheduler.request(Box::new(|_| {}));
        assert!(a.is_some());
        assert_ne!(a, b);
        assert_eq!(scheduler.frames.borrow().len(), 2);
    }
}
