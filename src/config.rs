//! Site configuration injected at startup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page can be opened straight from disk (`file:`) or served from an HTTP
//! origin. The data path differs between the two, so the choice is made once
//! in `start()` and handed to `App` instead of being sniffed at fetch time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Portfolio document path relative to the page, used from the filesystem.
pub const RELATIVE_DATA_PATH: &str = "data/portfolio.json";
/// Portfolio document path from the site root, used over HTTP.
pub const ABSOLUTE_DATA_PATH: &str = "/data/portfolio.json";

/// Where the page was loaded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    Filesystem,
    Http,
}

impl DataSource {
    /// Classify a `location.protocol` value such as `"file:"` or `"https:"`.
    pub fn from_protocol(protocol: &str) -> Self {
        if protocol.trim().eq_ignore_ascii_case("file:") {
            Self::Filesystem
        } else {
            Self::Http
        }
    }

    pub fn default_data_path(self) -> &'static str {
        match self {
            Self::Filesystem => RELATIVE_DATA_PATH,
            Self::Http => ABSOLUTE_DATA_PATH,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortfolioConfig {
    pub data_path: String,
}

impl PortfolioConfig {
    pub fn for_source(source: DataSource) -> Self {
        Self { data_path: source.default_data_path().to_owned() }
    }

    /// Override the document path, e.g. for a site hosted under a sub-path.
    #[must_use]
    pub fn with_data_path(mut self, path: impl Into<String>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Build the config from the current `window.location`.
    ///
    /// Outside the browser there is no location, so the HTTP layout is used.
    pub fn from_location() -> Self {
        #[cfg(feature = "csr")]
        {
            let protocol = web_sys::window()
                .and_then(|w| w.location().protocol().ok())
                .unwrap_or_default();
            Self::for_source(DataSource::from_protocol(&protocol))
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::for_source(DataSource::Http)
        }
    }
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self::for_source(DataSource::Http)
    }
}
