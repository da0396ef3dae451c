//! Reading viewport and pointer data out of browser events.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, MouseEvent, Window};

/// Viewport size in CSS pixels, or zero when the window cannot report it.
pub fn viewport_size(window: &Window) -> (f32, f32) {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Pointer position from a mouse event, in viewport coordinates.
pub fn pointer_position(event: &Event) -> Option<(f32, f32)> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some((mouse.client_x() as f32, mouse.client_y() as f32))
}

/// `mouseout` bubbles from every element; only a null related target means
/// the pointer actually left the page.
pub fn left_viewport(event: &Event) -> bool {
    event
        .dyn_ref::<MouseEvent>()
        .is_some_and(|mouse| mouse.related_target().is_none())
}
