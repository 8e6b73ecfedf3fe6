//! Scroll Reveal
//!
//! Hook that plays an [`Entrance`] the first time a block scrolls into
//! view. Items read their inline style from the returned trigger.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use leptos::*;

use early_warning::reveal::{Entrance, RevealTrigger};

use crate::browser::viewport_geometry;
use crate::state::SiteState;

/// Watch `target` and fire `entrance` once it crosses its start line
///
/// Window scroll and resize listeners are removed when the calling
/// component unmounts. With animations disabled the trigger starts shown
/// and nothing is registered.
pub fn use_reveal(target: NodeRef<html::Div>, entrance: Entrance) -> RwSignal<RevealTrigger> {
    let site = use_context::<SiteState>().expect("SiteState not found");
    let trigger = create_rw_signal(RevealTrigger::with_enabled(
        entrance,
        site.animations_enabled(),
    ));
    if trigger.with_untracked(RevealTrigger::is_shown) {
        return trigger;
    }

    let check = move || check_reveal(trigger, target);

    let window = window();
    let listeners: Rc<RefCell<Vec<EventListener>>> = Rc::new(RefCell::new(
        ["scroll", "resize"]
            .into_iter()
            .map(|event| EventListener::new(&window, event, move |_| check()))
            .collect(),
    ));

    // Blocks already past their start line when the page loads
    request_animation_frame(check);

    on_cleanup(move || listeners.borrow_mut().clear());
    trigger
}

/// Play the entrance again for a freshly swapped set of items
///
/// The hidden state is painted for one frame before the check, so the
/// transition runs. A block scrolled out of view waits for the scroll
/// listeners as on first load.
pub fn replay_reveal(trigger: RwSignal<RevealTrigger>, target: NodeRef<html::Div>) {
    let rearmed = trigger
        .try_update(RevealTrigger::rearm)
        .unwrap_or(false);
    if rearmed {
        request_animation_frame(move || {
            request_animation_frame(move || check_reveal(trigger, target));
        });
    }
}

fn check_reveal(trigger: RwSignal<RevealTrigger>, target: NodeRef<html::Div>) {
    // Disposed along with its component
    let Some(mut next) = trigger.try_get_untracked() else {
        return;
    };
    if next.is_shown() {
        return;
    }
    let Some(element) = target.get_untracked() else {
        return;
    };
    let Some(geometry) = viewport_geometry(&element) else {
        return;
    };
    if next.observe(&geometry).is_some() {
        trigger.set(next);
    }
}
