//! Data Sphere
//!
//! Hosts the decorative 3D scene in the hero. The scene is mounted one
//! frame after the container loads, follows window resizes and is torn down
//! with the component.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use leptos::*;

use early_warning::scene::{mount_scene, MountedScene, Renderer, SharedRenderer};

use crate::browser::{element_rect, CanvasRenderer};
use crate::state::SiteState;

#[derive(Default)]
struct SceneSlot {
    scene: Option<MountedScene>,
    on_resize: Option<EventListener>,
}

#[component]
pub fn DataSphere() -> impl IntoView {
    let site = use_context::<SiteState>().expect("SiteState not found");
    let container = create_node_ref::<html::Div>();
    let slot: Rc<RefCell<SceneSlot>> = Rc::default();
    let unmounted = Rc::new(Cell::new(false));

    container.on_load({
        let slot = Rc::clone(&slot);
        let unmounted = Rc::clone(&unmounted);
        move |element| {
            let element: &web_sys::Element = &element;
            let element = element.clone();
            // Measure once the container has been laid out
            request_animation_frame(move || {
                if !unmounted.get() {
                    start_scene(&site, &element, &slot);
                }
            });
        }
    });

    on_cleanup(move || {
        unmounted.set(true);
        let SceneSlot { scene, on_resize } = std::mem::take(&mut *slot.borrow_mut());
        drop(on_resize);
        if let Some(scene) = scene {
            scene.unmount();
        }
    });

    view! { <div node_ref=container class="data-sphere mx-auto" aria-hidden="true" /> }
}

fn start_scene(site: &SiteState, element: &web_sys::Element, slot: &Rc<RefCell<SceneSlot>>) {
    let rect = element_rect(element);
    let Some(canvas) = CanvasRenderer::attach(element) else {
        return;
    };
    let renderer: SharedRenderer = Rc::new(RefCell::new(canvas));

    let Some(scene) = mount_scene(
        &site.scene_guard,
        Rc::clone(&site.scheduler),
        Rc::clone(&renderer),
        rect.width,
        rect.height,
        &site.config.scene,
    ) else {
        // Unmeasured container or another scene is live; drop our canvas
        renderer.borrow_mut().dispose();
        return;
    };

    let on_resize = {
        let element = element.clone();
        let slot = Rc::downgrade(slot);
        EventListener::new(&window(), "resize", move |_| {
            let Some(slot) = slot.upgrade() else {
                return;
            };
            if let Some(scene) = slot.borrow().scene.as_ref() {
                let rect = element_rect(&element);
                scene.resize(rect.width, rect.height);
            }
        })
    };

    let mut slot = slot.borrow_mut();
    slot.scene = Some(scene);
    slot.on_resize = Some(on_resize);
}
