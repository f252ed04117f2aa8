//! Page logic that doesn't touch the DOM: configuration, the contact form
//! submission workflow, notifications and the scroll/carousel rules

pub mod carousel;
pub mod config;
pub mod contact;
pub mod notice;
#[cfg(test)]
mod tests;
mod typewriter;
pub mod viewport;

pub use config::{DeliveryMode, SiteConfig};
pub use notice::{Notice, NoticeKind, NoticeSlot};
pub use typewriter::Typewriter;
