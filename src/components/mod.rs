//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome, gallery and lightbox. They read shared
//! state from Leptos context and change it only by applying events.

pub mod gallery;
pub mod lightbox;
pub mod project_card;
pub mod search_box;
pub mod site_footer;
pub mod site_header;
pub mod tag_filters;
