//! Site configuration.
//!
//! The server loads a [`SiteConfig`] from environment variables using
//! `SiteConfig::from_env()` after calling `dotenvy::dotenv()`, then embeds it
//! as JSON in a `<meta name="site-config">` tag. The hydrating client parses
//! that tag back with [`SiteConfig::from_meta_content`], so both sides work
//! from the same explicit value.

use serde::{Deserialize, Serialize};

/// Name of the `<meta>` tag carrying the serialized config
pub const SITE_CONFIG_META: &str = "site-config";

/// Default cooldown before the submit button returns to neutral (ms)
pub const DEFAULT_COOLDOWN_MS: u32 = 3000;

/// Default time a notification stays on screen (ms)
pub const DEFAULT_NOTICE_DISPLAY_MS: u32 = 5000;

/// Duration of the notification slide transition (ms)
pub const NOTICE_TRANSITION_MS: u32 = 300;

/// Default delay between typed characters of the hero title (ms)
pub const DEFAULT_TYPING_SPEED_MS: u32 = 50;

/// How the contact delivery call treats the endpoint's response
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// `no-cors` fetch: any completed request counts as delivered
    #[default]
    Opaque,
    /// CORS fetch: non-2xx responses are delivery failures
    Verified,
}

impl DeliveryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMode::Opaque => "opaque",
            DeliveryMode::Verified => "verified",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "opaque" => Some(DeliveryMode::Opaque),
            "verified" => Some(DeliveryMode::Verified),
            _ => None,
        }
    }
}

/// Configuration errors raised while reading the environment
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a whole number of milliseconds, got {value:?}")]
    InvalidDuration { name: &'static str, value: String },

    #[error("{name} must be true or false, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },

    #[error("CONTACT_DELIVERY_MODE must be \"opaque\" or \"verified\", got {0:?}")]
    InvalidDeliveryMode(String),
}

/// Everything the page needs to know at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Spreadsheet script URL receiving contact form submissions
    /// Example: https://script.google.com/macros/s/<id>/exec
    pub contact_endpoint: Option<String>,

    /// Whether the endpoint's response can be inspected
    pub delivery_mode: DeliveryMode,

    /// Cooldown shared by the success and failure button states
    pub cooldown_ms: u32,

    /// How long a notification is displayed before it slides out
    pub notice_display_ms: u32,

    /// Type the hero title out character by character
    pub typing_effect: bool,

    pub typing_speed_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: None,
            delivery_mode: DeliveryMode::default(),
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            notice_display_ms: DEFAULT_NOTICE_DISPLAY_MS,
            typing_effect: false,
            typing_speed_ms: DEFAULT_TYPING_SPEED_MS,
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();

        let delivery_mode = match get("CONTACT_DELIVERY_MODE") {
            Some(raw) => {
                DeliveryMode::parse(&raw).ok_or(ConfigError::InvalidDeliveryMode(raw))?
            }
            None => defaults.delivery_mode,
        };

        Ok(Self {
            contact_endpoint: get("CONTACT_ENDPOINT_URL"),
            delivery_mode,
            cooldown_ms: parse_millis("CONTACT_COOLDOWN_MS", get("CONTACT_COOLDOWN_MS"))?
                .unwrap_or(defaults.cooldown_ms),
            notice_display_ms: parse_millis("NOTICE_DISPLAY_MS", get("NOTICE_DISPLAY_MS"))?
                .unwrap_or(defaults.notice_display_ms),
            typing_effect: parse_flag("HERO_TYPING_EFFECT", get("HERO_TYPING_EFFECT"))?
                .unwrap_or(defaults.typing_effect),
            typing_speed_ms: parse_millis("HERO_TYPING_SPEED_MS", get("HERO_TYPING_SPEED_MS"))?
                .unwrap_or(defaults.typing_speed_ms),
        })
    }

    /// Check if a contact endpoint is configured (not whether it is valid)
    pub fn has_contact_endpoint(&self) -> bool {
        self.contact_endpoint.is_some()
    }

    /// Serialize for the `<meta name="site-config">` tag
    pub fn to_meta_content(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse the content of the `<meta name="site-config">` tag
    pub fn from_meta_content(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

fn parse_millis(name: &'static str, raw: Option<String>) -> Result<Option<u32>, ConfigError> {
    raw.map(|value| {
        value
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidDuration { name, value })
    })
    .transpose()
}

fn parse_flag(name: &'static str, raw: Option<String>) -> Result<Option<bool>, ConfigError> {
    raw.map(|value| match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value }),
    })
    .transpose()
}
