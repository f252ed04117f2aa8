use leptos::prelude::*;

const BUTTON_BASE_STYLE: &str = "position: fixed; bottom: 30px; right: 30px; width: 50px; \
    height: 50px; border-radius: 50%; border: none; color: white; font-size: 24px; \
    cursor: pointer; box-shadow: 0 4px 15px rgba(233, 69, 96, 0.4); \
    transition: all 0.3s ease; z-index: 999;";

/// Floating "back to top" button, shown once the page is scrolled down
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let visible = RwSignal::new(false);
    let hovered = RwSignal::new(false);

    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::core::viewport::scroll_top_visible;
            use crate::ui::dom;

            dom::on_window("scroll", move || {
                visible.set(scroll_top_visible(dom::scroll_y()));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = visible;
        }
    });

    let style = move || {
        let (background, scale) = if hovered.get() {
            ("#d63447", "1.1")
        } else {
            ("#e94560", "1")
        };
        let display = if visible.get() { "flex" } else { "none" };
        format!(
            "{BUTTON_BASE_STYLE} display: {display}; align-items: center; justify-content: center; \
             background: {background}; transform: scale({scale});"
        )
    };

    view! {
        <button
            type="button"
            class="scroll-to-top"
            aria-label="Scroll to top"
            style=style
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
            on:click=move |_| {
                #[cfg(feature = "hydrate")]
                crate::ui::dom::smooth_scroll_to(0.0);
            }
        >
            "↑"
        </button>
    }
}
