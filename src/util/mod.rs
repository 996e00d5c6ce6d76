//! Utility helpers shared across the site's components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers (filtering, text, key mapping) sit next to the thin browser
//! wrappers (theme storage, scroll, focus) so components stay declarative.

pub mod document;
pub mod filter;
pub mod keys;
pub mod nav;
pub mod text;
pub mod theme;
