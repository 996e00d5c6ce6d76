//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `portfolio` holds the loaded items and everything derived from them;
//! `ui` holds page chrome (theme, menu, header) that never touches item data.
//! `selectors` narrows the portfolio signal into memos for rendering.

pub mod portfolio;
pub mod selectors;
pub mod ui;
