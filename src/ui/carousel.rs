//! Services carousel
//!
//! A horizontally scrolling row of [`ServiceCard`]s with left and right
//! arrows that only show while there is something to scroll to.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::carousel::{ArrowVisibility, ScrollDirection};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn ServicesCarousel(children: Children) -> impl IntoView {
    let grid_ref = NodeRef::<Div>::new();
    let arrows = RwSignal::new(ArrowVisibility::default());

    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::core::carousel::OVERFLOW_CHECK_DELAY_MS;
            use crate::ui::dom;

            let Some(grid) = grid_ref.get() else {
                return;
            };

            let update = move || {
                if let Some(grid) = grid_ref.get_untracked() {
                    arrows.set(read_metrics(&grid).arrows());
                }
            };

            dom::listen(&grid, "scroll", update);
            dom::on_window("resize", update);
            update();

            // layout may still be settling on first paint
            gloo_timers::callback::Timeout::new(OVERFLOW_CHECK_DELAY_MS, move || {
                if let Some(grid) = grid_ref.get_untracked() {
                    arrows.set(read_metrics(&grid).settled_arrows());
                }
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (grid_ref, arrows);
        }
    });

    let scroll = move |direction: ScrollDirection| {
        #[cfg(feature = "hydrate")]
        {
            use crate::core::carousel::scroll_step;
            use wasm_bindgen::JsCast;

            let Some(grid) = grid_ref.get_untracked() else {
                return;
            };
            let card_width = grid
                .query_selector(".service-card")
                .ok()
                .flatten()
                .and_then(|card| card.dyn_into::<web_sys::HtmlElement>().ok())
                .map(|card| f64::from(card.offset_width()))
                .unwrap_or(0.0);

            crate::ui::dom::smooth_scroll_by_x(&grid, scroll_step(card_width, direction));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = direction;
        }
    };

    let arrow_style = |shown: bool| {
        if shown { "display: flex;" } else { "display: none;" }
    };

    view! {
        <div class="services-carousel">
            <button
                type="button"
                id="scrollLeft"
                class="scroll-arrow scroll-arrow-left"
                aria-label="Scroll services left"
                style=move || arrow_style(arrows.get().left)
                on:click=move |_| scroll(ScrollDirection::Left)
            >
                <Icon name=icons::CHEVRON_LEFT />
            </button>

            <div class="services-grid" id="servicesGrid" node_ref=grid_ref>
                {children()}
            </div>

            <button
                type="button"
                id="scrollRight"
                class="scroll-arrow scroll-arrow-right"
                aria-label="Scroll services right"
                style=move || arrow_style(arrows.get().right)
                on:click=move |_| scroll(ScrollDirection::Right)
            >
                <Icon name=icons::CHEVRON_RIGHT />
            </button>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn read_metrics(grid: &web_sys::HtmlDivElement) -> crate::core::carousel::CarouselMetrics {
    crate::core::carousel::CarouselMetrics {
        scroll_left: f64::from(grid.scroll_left()),
        scroll_width: f64::from(grid.scroll_width()),
        client_width: f64::from(grid.client_width()),
    }
}

/// Card with a title, summary and a collapsible review
#[component]
pub fn ServiceCard(
    title: &'static str,
    summary: &'static str,
    /// Client review shown when the card is expanded
    review: &'static str,
    icon: &'static str,
) -> impl IntoView {
    let expanded = RwSignal::new(false);

    view! {
        <div class="service-card">
            <div class="service-icon">
                <Icon name=icon />
            </div>
            <h3>{title}</h3>
            <div class="service-content" class:expanded=move || expanded.get()>
                <p>{summary}</p>
                <blockquote class="service-review">{review}</blockquote>
            </div>
            <button
                type="button"
                class="review-arrow"
                class:expanded=move || expanded.get()
                aria-label="Toggle review"
                on:click=move |_| expanded.update(|e| *e = !*e)
            >
                <Icon name=icons::CHEVRON_DOWN />
            </button>
        </div>
    }
}
