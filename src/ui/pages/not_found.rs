//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <section class="not-found">
            <div class="container">
                // Error code
                <h1 class="not-found-code">"404"</h1>

                <h2>"Page Not Found"</h2>
                <p>"The page you're looking for doesn't exist or has been moved."</p>

                <A href="/" attr:class="btn btn-primary">"Back to Home"</A>
            </div>
        </section>
    }
}
