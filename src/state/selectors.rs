//! Memoized views of the portfolio state for components.
//!
//! DESIGN
//! ======
//! Components read these instead of the whole `RwSignal<PortfolioState>`, so
//! an event only re-renders the DOM whose slice actually changed. Opening or
//! stepping the lightbox leaves the card grid and tag buttons in place, which
//! keeps the remembered focus target attached to the document.

#[cfg(test)]
#[path = "selectors_test.rs"]
mod selectors_test;

use leptos::prelude::*;

use super::portfolio::{GridState, PortfolioState, StatusMessage};
use crate::net::types::PortfolioItem;

/// Items currently shown in the grid.
pub fn visible_items(portfolio: RwSignal<PortfolioState>) -> Memo<Vec<PortfolioItem>> {
    Memo::new(move |_| portfolio.with(|s| s.filtered.clone()))
}

/// Tags for the generated filter buttons.
pub fn tag_list(portfolio: RwSignal<PortfolioState>) -> Memo<Vec<String>> {
    Memo::new(move |_| portfolio.with(|s| s.tags.clone()))
}

/// Item displayed by the lightbox, `None` while closed.
pub fn lightbox_item(portfolio: RwSignal<PortfolioState>) -> Memo<Option<PortfolioItem>> {
    Memo::new(move |_| portfolio.with(|s| s.current_item().cloned()))
}

pub fn lightbox_open(portfolio: RwSignal<PortfolioState>) -> Memo<bool> {
    Memo::new(move |_| portfolio.with(PortfolioState::is_lightbox_open))
}

/// Value of the grid's `data-state` marker.
pub fn grid_state(portfolio: RwSignal<PortfolioState>) -> Memo<GridState> {
    Memo::new(move |_| portfolio.with(PortfolioState::grid_state))
}

/// Content of the status region.
pub fn status(portfolio: RwSignal<PortfolioState>) -> Memo<StatusMessage> {
    Memo::new(move |_| portfolio.with(PortfolioState::status))
}
