//! Modal project detail view with keyboard and button navigation.
//!
//! The modal stays mounted and toggles `aria-hidden`; its content follows the
//! lightbox index in `PortfolioState`. Opening locks background scroll and
//! moves focus to the close button; closing undoes both and returns focus to
//! whatever had it before the modal opened.

use leptos::prelude::*;

use crate::state::portfolio::{Direction, PortfolioEvent, PortfolioState};
use crate::state::selectors;
use crate::util::document::{self, ModalTransition};
use crate::util::text::{aria_flag, tag_label};

#[component]
pub fn ProjectLightbox() -> impl IntoView {
    let portfolio = expect_context::<RwSignal<PortfolioState>>();
    let close_ref = NodeRef::<leptos::html::Button>::new();

    let open = selectors::lightbox_open(portfolio);
    let shown = selectors::lightbox_item(portfolio);
    let is_open = move || open.get();
    let current = move || shown.get();
    let dispatch = move |event: PortfolioEvent| portfolio.update(|s| s.apply(event));

    // Only closed<->open transitions touch focus and scroll; stepping while
    // open keeps the originally focused element.
    Effect::new(move |was_open: Option<bool>| {
        let now_open = is_open();
        match document::modal_transition(was_open, now_open) {
            Some(ModalTransition::Opened) => {
                document::remember_focus();
                document::set_scroll_locked(true);
                #[cfg(feature = "csr")]
                request_animation_frame(move || {
                    if let Some(button) = close_ref.get_untracked() {
                        let _ = button.focus();
                    }
                });
            }
            Some(ModalTransition::Closed) => {
                document::set_scroll_locked(false);
                document::restore_focus();
            }
            None => {}
        }
        now_open
    });

    view! {
        <div
            class="lightbox"
            class:is-open=is_open
            role="dialog"
            aria-modal="true"
            aria-labelledby="lightbox-title"
            aria-hidden=move || aria_flag(!is_open())
            on:click=move |_| dispatch(PortfolioEvent::CloseLightbox)
        >
            <div class="lightbox__content" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                <button
                    type="button"
                    class="lightbox__close"
                    node_ref=close_ref
                    aria-label="Close details"
                    on:click=move |_| dispatch(PortfolioEvent::CloseLightbox)
                >
                    "✕"
                </button>
                <button
                    type="button"
                    class="lightbox__nav lightbox__nav--prev"
                    aria-label="Previous project"
                    on:click=move |_| dispatch(PortfolioEvent::StepLightbox(Direction::Previous))
                >
                    "‹"
                </button>
                <button
                    type="button"
                    class="lightbox__nav lightbox__nav--next"
                    aria-label="Next project"
                    on:click=move |_| dispatch(PortfolioEvent::StepLightbox(Direction::Next))
                >
                    "›"
                </button>
                <img
                    class="lightbox__image"
                    src=move || current().map(|item| item.image)
                    alt=move || current().map(|item| item.title)
                />
                <h2 id="lightbox-title" class="lightbox__title">
                    {move || current().map(|item| item.title)}
                </h2>
                <p class="lightbox__description">{move || current().map(|item| item.description)}</p>
                <ul class="lightbox__tags">
                    {move || {
                        current()
                            .map(|item| item.tags)
                            .unwrap_or_default()
                            .iter()
                            .map(|tag| view! { <li class="lightbox__tag">{tag_label(tag)}</li> })
                            .collect_view()
                    }}
                </ul>
                {move || {
                    current()
                        .and_then(|item| item.link().map(str::to_owned))
                        .map(|href| {
                            view! {
                                <a class="btn lightbox__link" href=href target="_blank" rel="noopener noreferrer">
                                    "View project"
                                </a>
                            }
                        })
                }}
            </div>
        </div>
    }
}
