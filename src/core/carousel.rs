//! Horizontal card carousel arithmetic

/// Gap between cards in the services grid (px), must match the stylesheet
pub const CARD_GAP: f64 = 15.0;

/// Scroll slack before an arrow is considered useful (px)
pub const ARROW_EDGE_TOLERANCE: f64 = 10.0;

/// Delay before the first overflow check, lets layout settle (ms)
pub const OVERFLOW_CHECK_DELAY_MS: u32 = 100;

/// Scroll metrics of the carousel element
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarouselMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl CarouselMetrics {
    pub fn max_scroll(&self) -> f64 {
        self.scroll_width - self.client_width
    }

    /// Whether the content is wider than the visible area
    pub fn overflows(&self) -> bool {
        self.scroll_width > self.client_width
    }

    pub fn arrows(&self) -> ArrowVisibility {
        ArrowVisibility {
            left: self.scroll_left > ARROW_EDGE_TOLERANCE,
            right: self.scroll_left < self.max_scroll() - ARROW_EDGE_TOLERANCE,
        }
    }

    /// Arrows after layout has settled: none at all if nothing overflows
    pub fn settled_arrows(&self) -> ArrowVisibility {
        if self.overflows() {
            self.arrows()
        } else {
            ArrowVisibility::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArrowVisibility {
    pub left: bool,
    pub right: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Horizontal scroll delta that moves the carousel by one card
pub fn scroll_step(card_width: f64, direction: ScrollDirection) -> f64 {
    let step = card_width + CARD_GAP;
    match direction {
        ScrollDirection::Left => -step,
        ScrollDirection::Right => step,
    }
}
