//! Tag and text filtering over the loaded portfolio.
//!
//! DESIGN
//! ======
//! Filtering is a pure function of `(items, tag, query)`. The visible list is
//! always recomputed from scratch; there is no incremental diffing to keep in
//! sync with the item list.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::collections::BTreeSet;

use crate::net::types::PortfolioItem;
use crate::state::portfolio::TagFilter;

/// Whether `item` passes the active tag and the normalized `query`.
pub fn matches(item: &PortfolioItem, tag: &TagFilter, query: &str) -> bool {
    let tag_ok = match tag {
        TagFilter::All => true,
        TagFilter::Tag(t) => item.has_tag(t),
    };
    if !tag_ok {
        return false;
    }
    if query.is_empty() {
        return true;
    }
    let haystack = format!("{} {}", item.title, item.description).to_lowercase();
    haystack.contains(query)
}

/// Order-preserving subset of `items` matching the active selections.
pub fn apply_filters(items: &[PortfolioItem], tag: &TagFilter, query: &str) -> Vec<PortfolioItem> {
    items
        .iter()
        .filter(|item| matches(item, tag, query))
        .cloned()
        .collect()
}

/// Distinct tags across all items, sorted ascending (case-sensitive).
pub fn derive_tags(items: &[PortfolioItem]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.tags.iter())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Search box contents as used for matching: trimmed and lowercased.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}
