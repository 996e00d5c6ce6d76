//! Root application component and page-lifetime wiring.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    gallery::Gallery, lightbox::ProjectLightbox, site_footer::SiteFooter, site_header::SiteHeader,
};
use crate::config::PortfolioConfig;
use crate::state::portfolio::PortfolioState;
use crate::state::ui::UiState;
use crate::util::{nav, theme};

/// Root application component.
///
/// Provides the shared state contexts, applies the preferred theme, installs
/// the window scroll/keyboard listeners and starts the one portfolio load.
#[component]
pub fn App(config: PortfolioConfig) -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState {
        theme: theme::read_preference(),
        scrolled: nav::is_scrolled(nav::read_scroll_offset()),
        ..UiState::default()
    });
    let portfolio = RwSignal::new(PortfolioState::default());
    theme::apply(ui.get_untracked().theme);

    provide_context(ui);
    provide_context(portfolio);
    provide_context(config.clone());

    #[cfg(feature = "csr")]
    {
        use crate::state::portfolio::PortfolioEvent;

        let scroll = window_event_listener(leptos::ev::scroll, move |_| {
            let scrolled = nav::is_scrolled(nav::read_scroll_offset());
            if ui.with_untracked(|u| u.scrolled) != scrolled {
                ui.update(|u| u.scrolled = scrolled);
            }
        });
        let keys = window_event_listener(leptos::ev::keydown, move |ev| {
            let open = portfolio.with_untracked(PortfolioState::is_lightbox_open);
            if let Some(event) = crate::util::keys::lightbox_key_event(&ev.key(), open) {
                ev.prevent_default();
                portfolio.update(|s| s.apply(event));
            }
        });
        on_cleanup(move || {
            scroll.remove();
            keys.remove();
        });

        leptos::task::spawn_local(async move {
            log::info!("loading portfolio from {}", config.data_path);
            let result = crate::net::api::load_portfolio(&config).await;
            portfolio.update(|s| s.apply(PortfolioEvent::from_load(result)));
        });
    }

    view! {
        <Title text="Portfolio"/>
        <SiteHeader/>
        <main id="top" class="site-main">
            <section id="about" class="intro">
                <h1 class="intro__heading">"Selected work"</h1>
                <p class="intro__lede">
                    "Projects, experiments and tools. Filter by tag or search to narrow the list."
                </p>
            </section>
            <Gallery/>
            <section id="contact" class="contact">
                <h2 class="contact__heading">"Contact"</h2>
                <p class="contact__body">"Open to collaborations and interesting problems."</p>
            </section>
        </main>
        <ProjectLightbox/>
        <SiteFooter/>
    }
}
