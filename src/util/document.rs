//! Document-level side effects the lightbox and footer need.
//!
//! SYSTEM CONTEXT
//! ==============
//! Focus restoration and background scroll suppression touch the live DOM and
//! have no host equivalent, so they no-op outside the browser build.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast as _;

/// Class added to `<body>` while a modal suppresses background scrolling.
pub const SCROLL_LOCK_CLASS: &str = "modal-open";

/// Change in modal visibility between two observations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalTransition {
    Opened,
    Closed,
}

/// Classify a visibility change. Open-to-open (stepping) and the initial
/// closed state are not transitions.
pub fn modal_transition(was_open: Option<bool>, open: bool) -> Option<ModalTransition> {
    match (was_open.unwrap_or(false), open) {
        (false, true) => Some(ModalTransition::Opened),
        (true, false) => Some(ModalTransition::Closed),
        _ => None,
    }
}

// Holds a JS handle only between open and close; `restore_focus` takes it back
// out, so the slot never keeps an element alive past the modal. A removed
// element is skipped rather than refocused.
#[cfg(feature = "csr")]
thread_local! {
    static LAST_FOCUSED: std::cell::RefCell<Option<web_sys::HtmlElement>> = const { std::cell::RefCell::new(None) };
}

/// Suppress or restore background scrolling.
pub fn set_scroll_locked(locked: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().toggle_with_force(SCROLL_LOCK_CLASS, locked);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = locked;
    }
}

/// Remember whichever element currently has focus.
pub fn remember_focus() {
    #[cfg(feature = "csr")]
    {
        let active = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.active_element())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        LAST_FOCUSED.with(|slot| *slot.borrow_mut() = active);
    }
}

/// Move focus back to the remembered element, if one was captured.
pub fn restore_focus() {
    #[cfg(feature = "csr")]
    {
        let previous = LAST_FOCUSED.with(|slot| slot.borrow_mut().take());
        if let Some(el) = previous.filter(|el| el.is_connected()) {
            let _ = el.focus();
        }
    }
}

/// Current calendar year from the browser clock.
pub fn current_year() -> Option<u32> {
    #[cfg(feature = "csr")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
