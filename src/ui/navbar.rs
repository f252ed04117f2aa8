//! Fixed navigation bar
//!
//! - Gains the `scrolled` class past the scroll threshold
//! - Hamburger toggles the mobile menu; following a link closes it
//! - Highlights the link of the section currently in view

use leptos::prelude::*;

/// `(section id, href, label)` of every navbar entry
pub const NAV_LINKS: [(&str, &str, &str); 4] = [
    ("home", "#home", "Home"),
    ("services", "#services", "Services"),
    ("process", "#process", "Process"),
    ("contact", "#contact", "Contact"),
];

/// In-page link that scrolls smoothly, leaving room for the fixed navbar
#[component]
pub fn AnchorLink(
    href: &'static str,
    #[prop(optional)] class: &'static str,
    /// Adds the `active` class while true
    #[prop(optional, into)]
    active: Option<Signal<bool>>,
    /// Runs after the scroll has started
    #[prop(optional)]
    on_follow: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            ev.prevent_default();
            if !crate::ui::dom::scroll_to_anchor(href) {
                tracing::debug!("No element for anchor {}", href);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }

        if let Some(cb) = on_follow {
            cb.run(());
        }
    };

    view! {
        <a
            href=href
            class=class
            class:active=move || active.is_some_and(|a| a.get())
            on:click=on_click
        >
            {children()}
        </a>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let menu_open = RwSignal::new(false);
    let active = RwSignal::new(String::new());

    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::core::viewport::{active_section, navbar_scrolled};
            use crate::ui::dom;

            let update = move || {
                let y = dom::scroll_y();
                scrolled.set(navbar_scrolled(y));
                if let Some(id) = active_section(y, &dom::section_bounds()) {
                    if active.get_untracked() != id {
                        active.set(id.to_string());
                    }
                }
            };

            update();
            dom::on_window("scroll", update);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (scrolled, active);
        }
    });

    let close_menu = Callback::new(move |_| menu_open.set(false));

    view! {
        <nav class="navbar" class:scrolled=move || scrolled.get()>
            <div class="nav-container">
                <AnchorLink href="#home" class="nav-logo">"Studio"</AnchorLink>

                <ul class="nav-menu" class:active=move || menu_open.get()>
                    {NAV_LINKS
                        .iter()
                        .map(|&(id, href, label)| {
                            let is_active = Signal::derive(move || active.with(|a| a == id));
                            view! {
                                <li class="nav-item">
                                    <AnchorLink
                                        href=href
                                        class="nav-link"
                                        active=is_active
                                        on_follow=close_menu
                                    >
                                        {label}
                                    </AnchorLink>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <button
                    type="button"
                    class="hamburger"
                    class:active=move || menu_open.get()
                    aria-label="Toggle navigation"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
