//! Networking for the portfolio document.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the one fetch the site makes and `types` defines the wire
//! schema it decodes into.

pub mod api;
pub mod types;
