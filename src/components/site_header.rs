//! Sticky site header with collapsible navigation and the theme toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::text::aria_flag;

const NAV_LINKS: &[(&str, &str)] = &[("About", "#about"), ("Projects", "#projects"), ("Contact", "#contact")];

/// Header bar. Reflects the scroll marker, menu state and active theme.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_theme = move |_| {
        let current = ui.get_untracked().theme;
        let next = crate::util::theme::toggle(current);
        ui.update(|u| u.theme = next);
    };

    view! {
        <header class="site-header" class:scrolled=move || ui.get().scrolled>
            <a class="site-header__brand" href="#top">"Portfolio"</a>
            <button
                type="button"
                class="site-header__nav-toggle"
                aria-controls="site-nav"
                aria-label="Toggle navigation"
                aria-expanded=move || aria_flag(ui.get().nav_open)
                on:click=move |_| ui.update(UiState::toggle_nav)
            >
                <span class="site-header__nav-icon" aria-hidden="true"></span>
            </button>
            <nav id="site-nav" class="site-nav" class:is-open=move || ui.get().nav_open>
                <ul class="site-nav__links">
                    {NAV_LINKS
                        .iter()
                        .map(|&(label, href)| {
                            view! {
                                <li>
                                    <a class="site-nav__link" href=href on:click=move |_| ui.update(UiState::close_nav)>
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
            <button
                type="button"
                class="btn site-header__theme-toggle"
                title="Toggle dark mode"
                aria-pressed=move || aria_flag(ui.get().theme.is_dark())
                on:click=on_theme
            >
                {move || ui.get().theme.label()}
            </button>
        </header>
    }
}
