//! Layout measurement

use leptos::window;

use early_warning::reveal::ViewportGeometry;
use early_warning::Rect;

/// Bounding rect of an element relative to the viewport
pub fn element_rect(element: &web_sys::Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Where an element sits relative to the viewport, or `None` when the
/// window size cannot be read
pub fn viewport_geometry(element: &web_sys::Element) -> Option<ViewportGeometry> {
    let viewport_height = window().inner_height().ok()?.as_f64()?;
    let rect = element_rect(element);
    Some(ViewportGeometry {
        element_top: rect.y,
        element_height: rect.height,
        viewport_height,
    })
}
