//! Page footer.

use leptos::prelude::*;

use crate::util::document::current_year;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let notice = match current_year() {
        Some(year) => format!("\u{a9} {year} Portfolio"),
        None => "\u{a9} Portfolio".to_owned(),
    };

    view! {
        <footer class="site-footer">
            <p class="site-footer__notice">{notice}</p>
            <a class="site-footer__top" href="#top">"Back to top"</a>
        </footer>
    }
}
