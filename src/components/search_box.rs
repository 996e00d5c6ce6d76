//! Free-text project search.

use leptos::prelude::*;

use crate::state::portfolio::{PortfolioEvent, PortfolioState};

/// Search input. Every keystroke re-filters the gallery.
#[component]
pub fn SearchBox() -> impl IntoView {
    let portfolio = expect_context::<RwSignal<PortfolioState>>();

    view! {
        <label class="search-box">
            <span class="visually-hidden">"Search projects"</span>
            <input
                class="search-box__input"
                type="search"
                placeholder="Search projects\u{2026}"
                autocomplete="off"
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    portfolio.update(|s| s.apply(PortfolioEvent::SetQuery(raw)));
                }
            />
        </label>
    }
}
