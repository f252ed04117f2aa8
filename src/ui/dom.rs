//! web-sys helpers for the browser build

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::core::viewport::{SectionBounds, anchor_scroll_top, anchor_target};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

/// Current vertical scroll offset of the page
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smoothly scroll `element` horizontally by `delta` pixels
pub fn smooth_scroll_by_x(element: &web_sys::Element, delta: f64) {
    let options = ScrollToOptions::new();
    options.set_left(delta);
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_by_with_scroll_to_options(&options);
}

/// Scroll to the element an in-page link points at, leaving room for the navbar.
///
/// Returns false when the link has no target on the page.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(target) = anchor_target(href)
        .and_then(|id| document()?.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };

    smooth_scroll_to(anchor_scroll_top(f64::from(target.offset_top())));
    true
}

/// Attach `handler` to `event` on `target` for the lifetime of the page
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut() + 'static) {
    let closure = Closure::<dyn FnMut()>::new(handler);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::warn!("Could not attach {} listener", event);
    }
    // Leak the closure to keep the listener alive
    closure.forget();
}

pub fn on_window(event: &str, handler: impl FnMut() + 'static) {
    if let Some(window) = window() {
        listen(&window, event, handler);
    }
}

/// All elements matching `selector` that can be cast to `T`
pub fn query_all<T: JsCast>(selector: &str) -> Vec<T> {
    let Some(nodes) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Bounds of every `section[id]` in document order
pub fn section_bounds() -> Vec<SectionBounds> {
    query_all::<HtmlElement>("section[id]")
        .into_iter()
        .map(|section| {
            SectionBounds::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            )
        })
        .collect()
}

/// `content` attribute of `<meta name="{name}">`
pub fn meta_content(name: &str) -> Option<String> {
    document()?
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()?
        .get_attribute("content")
}
