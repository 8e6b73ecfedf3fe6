//! Tilt Card
//!
//! Wrapper that rotates towards the pointer, and items inside it that lift
//! by their own depth while the card is hovered.

use leptos::*;

use early_warning::{Point, TiltCard};

use crate::browser::element_rect;

#[derive(Clone, Copy)]
struct TiltContext(RwSignal<TiltCard>);

#[component]
pub fn TiltContainer(
    /// Classes for the tilting body
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let tilt = create_rw_signal(TiltCard::new());
    provide_context(TiltContext(tilt));
    let body = create_node_ref::<html::Div>();

    let on_move = move |ev: ev::MouseEvent| {
        let Some(element) = body.get_untracked() else {
            return;
        };
        let rect = element_rect(&element);
        let pointer = Point::new(ev.client_x() as f64, ev.client_y() as f64);
        tilt.update(|t| t.pointer_move(pointer, rect));
    };

    view! {
        <div class="flex items-center justify-center py-10" style=TiltCard::container_style()>
            <div
                node_ref=body
                class=format!("tilt-body relative {}", class)
                style=move || format!("transform: {};", tilt.with(TiltCard::transform))
                on:mouseenter=move |_| tilt.update(TiltCard::enter)
                on:mousemove=on_move
                on:mouseleave=move |_| tilt.update(TiltCard::leave)
            >
                {children()}
            </div>
        </div>
    }
}

/// Block inside a [`TiltContainer`] lifted by `depth` pixels on hover
#[component]
pub fn TiltItem(
    depth: f64,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let TiltContext(tilt) = use_context::<TiltContext>().expect("TiltItem outside TiltContainer");

    view! {
        <div
            class=format!("tilt-item {}", class)
            style=move || format!("transform: {};", tilt.with(|t| t.item_transform(depth)))
        >
            {children()}
        </div>
    }
}
