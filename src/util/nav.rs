//! Header scroll tracking.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Vertical offset, in CSS pixels, past which the header is "scrolled".
pub const SCROLL_THRESHOLD_PX: f64 = 40.0;

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD_PX
}

/// Current vertical scroll offset of the window (0 off-browser).
pub fn read_scroll_offset() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}
