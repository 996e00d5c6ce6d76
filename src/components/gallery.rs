//! Project gallery: filter controls, status line and card grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! The status text and the grid's `data-state` marker are derived from the
//! portfolio state alone, so loading, error, empty and ready presentations can
//! never disagree with the cards actually rendered.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::components::search_box::SearchBox;
use crate::components::tag_filters::TagFilters;
use crate::state::portfolio::{GridState, PortfolioState, StatusMessage};
use crate::state::selectors;
use crate::util::text::aria_flag;

#[component]
pub fn Gallery() -> impl IntoView {
    let portfolio = expect_context::<RwSignal<PortfolioState>>();

    let status = selectors::status(portfolio);
    let grid_state = selectors::grid_state(portfolio);
    let visible = selectors::visible_items(portfolio);

    view! {
        <section id="projects" class="gallery">
            <h2 class="gallery__heading">"Projects"</h2>
            <div class="gallery__controls">
                <TagFilters/>
                <SearchBox/>
            </div>
            <p class="gallery__status" role="status" aria-live="polite">
                {move || status.with(StatusMessage::text)}
            </p>
            <div
                class="gallery__grid"
                data-state=move || grid_state.get().as_str()
                aria-busy=move || aria_flag(grid_state.get() == GridState::Loading)
            >
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(position, item)| view! { <ProjectCard item=item position=position/> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
