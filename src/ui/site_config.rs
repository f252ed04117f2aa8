//! Site configuration context
//!
//! The server provides the [`SiteConfig`] through the route context and
//! renders it into the document head. In the browser, `hydrate()` reads it
//! back with [`site_config_from_document`] before mounting the app.

use leptos::prelude::*;

use crate::core::SiteConfig;

/// Provide the site configuration to the component tree
pub fn provide_site_config(config: SiteConfig) {
    provide_context(config);
}

/// Site configuration, or the defaults when none was provided
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

/// Read the configuration the server embedded in the page
#[cfg(feature = "hydrate")]
pub fn site_config_from_document() -> SiteConfig {
    use crate::core::config::SITE_CONFIG_META;
    use crate::ui::dom;

    let config = match dom::meta_content(SITE_CONFIG_META) {
        Some(content) => SiteConfig::from_meta_content(&content).unwrap_or_else(|e| {
            tracing::warn!("Invalid {} meta tag, using defaults: {}", SITE_CONFIG_META, e);
            SiteConfig::default()
        }),
        None => {
            tracing::warn!("No {} meta tag found, using defaults", SITE_CONFIG_META);
            SiteConfig::default()
        }
    };

    if !config.has_contact_endpoint() {
        tracing::warn!(
            "Contact endpoint is not configured; the contact form will report a configuration error"
        );
    }

    config
}
