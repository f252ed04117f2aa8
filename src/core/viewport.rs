//! Scroll-position rules for the landing page
//!
//! Pure functions over numbers read from the DOM, so the browser glue in
//! `ui` stays a thin listener layer.

/// Scroll offset after which the navbar switches to its compact style
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

/// Scroll offset after which the scroll-to-top button appears
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Height of the fixed navbar, subtracted when jumping to an anchor
pub const ANCHOR_OFFSET: f64 = 80.0;

/// How far above a section's top it already counts as active
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;

/// Selector of the elements that fade in on first appearance
pub const REVEAL_SELECTOR: &str = ".service-card, .timeline-item, .contact-item";

/// Fraction of an element that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// Scroll target for an anchor whose element sits at `offset_top`
pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - ANCHOR_OFFSET
}

/// Extract the element id from an in-page link, `"#contact"` -> `"contact"`
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Position of a `section[id]` on the page
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, scroll_y: f64) -> bool {
        let top = self.top - ACTIVE_SECTION_OFFSET;
        scroll_y > top && scroll_y <= top + self.height
    }
}

/// The section whose nav link should be highlighted.
///
/// Sections are checked in document order and the last match wins. `None`
/// means no section matched and the current highlight should stay as is.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.contains(scroll_y))
        .map(|section| section.id.as_str())
}

/// Staggered transition for the `index`-th revealed element
pub fn reveal_transition(index: usize) -> String {
    let delay = index as f64 * 0.1;
    format!("opacity 0.6s ease {delay:.1}s, transform 0.6s ease {delay:.1}s")
}
