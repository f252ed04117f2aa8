use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::config::SITE_CONFIG_META;
use crate::ui::pages::{LandingPage, NotFoundPage};
use crate::ui::{provide_notice_context, use_site_config};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // The browser build reads this back before hydrating
    let site_config = use_site_config().to_meta_content().unwrap_or_else(|e| {
        tracing::error!("Failed to serialize site config: {}", e);
        String::new()
    });

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=SITE_CONFIG_META content=site_config/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = use_site_config();
    provide_notice_context(config.notice_display_ms);

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/studio-landing.css"/>

        <Title text="Studio"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>
    }
}
