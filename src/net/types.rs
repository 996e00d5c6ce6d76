//! Wire types for the portfolio JSON document.
//!
//! The document is a top-level array of items. Items are trusted as-is once
//! they decode; missing `tags` or `link` mean "none", never an error.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// One project entry from the portfolio document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl PortfolioItem {
    /// External link, treating an empty string as absent.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref().map(str::trim).filter(|l| !l.is_empty())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Failure to obtain a usable portfolio document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("portfolio request failed: {0}")]
    Network(String),
    #[error("portfolio request returned status {0}")]
    Status(u16),
    #[error("portfolio payload is not a JSON array")]
    NotArray,
    #[error("portfolio payload is malformed: {0}")]
    Malformed(String),
}
