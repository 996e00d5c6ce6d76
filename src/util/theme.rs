//! Theme preference storage and application.
//!
//! Reads the visitor's explicit choice from `localStorage`, falling back to
//! the OS `prefers-color-scheme` signal, and applies it to the `<html>`
//! element as a `dark-theme` class plus a `data-theme` attribute. Toggling
//! writes the new choice back. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: when storage is unavailable the toggle still
//! applies for the current session and a warning is logged.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::ui::Theme;

/// `localStorage` key holding `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "portfolio-theme";

/// Class toggled on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark-theme";

/// Pick a theme: stored choice first, then the OS signal, then light.
///
/// Unrecognized stored values are ignored as if nothing were stored.
pub fn resolve_theme(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    if let Some(theme) = stored.and_then(Theme::parse) {
        return theme;
    }
    if system_prefers_dark { Theme::Dark } else { Theme::Light }
}

/// Read the preferred theme from the browser.
pub fn read_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        let system_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        resolve_theme(stored.as_deref(), system_dark)
    }
    #[cfg(not(feature = "csr"))]
    {
        resolve_theme(None, false)
    }
}

/// Reflect `theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the explicit choice.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    if let Err(reason) = persist(next) {
        log::warn!("theme preference not saved: {reason}");
    }
    next
}

fn persist(theme: Theme) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| "localStorage unavailable".to_owned())?;
        storage
            .set_item(STORAGE_KEY, theme.as_str())
            .map_err(|e| format!("{e:?}"))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
        Ok(())
    }
}
