//! Card for one project in the gallery grid.

use leptos::prelude::*;

use crate::net::types::PortfolioItem;
use crate::state::portfolio::{PortfolioEvent, PortfolioState};
use crate::util::text::{entrance_style, tag_label, truncate_description};

/// A project card. `position` is the card's index in the filtered list and is
/// what "View details" opens the lightbox at.
#[component]
pub fn ProjectCard(item: PortfolioItem, position: usize) -> impl IntoView {
    let portfolio = expect_context::<RwSignal<PortfolioState>>();
    let description = truncate_description(&item.description);
    let PortfolioItem { title, image, tags, .. } = item;

    let on_details = move |_| portfolio.update(|s| s.apply(PortfolioEvent::OpenLightbox(position)));

    view! {
        <article class="project-card" style=entrance_style(position)>
            <img class="project-card__image" src=image alt=title.clone() loading="lazy" decoding="async"/>
            <div class="project-card__body">
                <h3 class="project-card__title">{title}</h3>
                <p class="project-card__description">{description}</p>
                <ul class="project-card__tags">
                    {tags
                        .iter()
                        .map(|tag| view! { <li class="project-card__tag">{tag_label(tag)}</li> })
                        .collect_view()}
                </ul>
                <button type="button" class="btn project-card__details" on:click=on_details>
                    "View details"
                </button>
            </div>
        </article>
    }
}
