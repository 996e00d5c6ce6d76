//! Tag filter buttons derived from the loaded items.

use leptos::prelude::*;

use crate::state::portfolio::{PortfolioEvent, PortfolioState, TagFilter};
use crate::state::selectors;
use crate::util::text::aria_flag;

/// Permanent "All" control followed by one button per distinct tag.
///
/// The generated buttons are rebuilt whenever the tag list changes; "All" is
/// never replaced.
#[component]
pub fn TagFilters() -> impl IntoView {
    let portfolio = expect_context::<RwSignal<PortfolioState>>();
    let tags = selectors::tag_list(portfolio);

    view! {
        <div class="tag-filters" role="group" aria-label="Filter projects by tag">
            <TagButton tag=TagFilter::All label="All".to_owned()/>
            {move || {
                tags.get()
                    .into_iter()
                    .map(|tag| view! { <TagButton label=tag.clone() tag=TagFilter::Tag(tag)/> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn TagButton(tag: TagFilter, label: String) -> impl IntoView {
    let portfolio = expect_context::<RwSignal<PortfolioState>>();
    let value = tag.as_str().to_owned();
    let active_tag = tag.clone();
    let is_active = Memo::new(move |_| portfolio.with(|s| s.is_tag_active(&active_tag)));

    view! {
        <button
            type="button"
            class="tag-filter"
            class:is-active=move || is_active.get()
            aria-pressed=move || aria_flag(is_active.get())
            data-tag=value
            on:click=move |_| portfolio.update(|s| s.apply(PortfolioEvent::SelectTag(tag.clone())))
        >
            {label}
        </button>
    }
}
