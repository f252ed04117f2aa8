pub mod carousel;
pub mod common;
pub mod contact_form;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod icon;
pub mod navbar;
pub mod notifications;
pub mod pages;
pub mod reveal;
pub mod scroll_top;
pub mod site_config;
pub mod timers;

pub use contact_form::ContactForm;
pub use icon::{Icon, icons};
pub use navbar::NavBar;
pub use notifications::{NoticeContext, NoticeHost, provide_notice_context, use_notice_context};
pub use site_config::{provide_site_config, use_site_config};
