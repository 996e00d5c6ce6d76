//! Keyboard shortcuts for the lightbox.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

use crate::state::portfolio::{Direction, PortfolioEvent};

/// Map a `KeyboardEvent.key` value to a lightbox event.
///
/// Keys only act while the lightbox is open; everything else is `None` so the
/// browser keeps its default handling.
pub fn lightbox_key_event(key: &str, lightbox_open: bool) -> Option<PortfolioEvent> {
    if !lightbox_open {
        return None;
    }
    match key {
        "Escape" | "Esc" => Some(PortfolioEvent::CloseLightbox),
        "ArrowLeft" | "Left" => Some(PortfolioEvent::StepLightbox(Direction::Previous)),
        "ArrowRight" | "Right" => Some(PortfolioEvent::StepLightbox(Direction::Next)),
        _ => None,
    }
}
