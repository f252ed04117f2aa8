//! Fade-in on scroll for cards, timeline items and contact items

/// Hide every element matching the reveal selector and fade each one in the
/// first time it enters the viewport. Call once, after the page has mounted.
#[cfg(feature = "hydrate")]
pub fn reveal_on_scroll() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{
        HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    use crate::core::viewport::{
        REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD, reveal_transition,
    };
    use crate::ui::dom;

    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(|entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
                set_style(&target, &[("opacity", "1"), ("transform", "translateY(0)")]);
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&REVEAL_THRESHOLD.into());
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                tracing::warn!("IntersectionObserver unavailable: {:?}", e);
                return;
            }
        };
    callback.forget();

    for (index, element) in dom::query_all::<HtmlElement>(REVEAL_SELECTOR)
        .into_iter()
        .enumerate()
    {
        let transition = reveal_transition(index);
        set_style(
            &element,
            &[
                ("opacity", "0"),
                ("transform", "translateY(30px)"),
                ("transition", &transition),
            ],
        );
        observer.observe(&element);
    }
}

#[cfg(feature = "hydrate")]
fn set_style(element: &web_sys::HtmlElement, properties: &[(&str, &str)]) {
    let style = element.style();
    for (name, value) in properties {
        if style.set_property(name, value).is_err() {
            tracing::warn!("Could not set {} on revealed element", name);
        }
    }
}
