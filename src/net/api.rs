//! Portfolio document loader.
//!
//! Client-side (`csr`): a real HTTP request via `gloo-net`, bypassing the
//! browser cache so every page load sees the latest served document.
//! Host builds: the request is unavailable and reports a network error.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a `LoadError`. Callers log it and switch the page to
//! its fallback state; no partial data is ever returned.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoadError, PortfolioItem};
use crate::config::PortfolioConfig;

/// Fetch and decode the portfolio document named by `config`.
///
/// # Errors
///
/// Returns `LoadError` when the request fails, the response status is not
/// successful, or the body is not an array of portfolio items.
pub async fn load_portfolio(config: &PortfolioConfig) -> Result<Vec<PortfolioItem>, LoadError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&config.data_path)
            .cache(web_sys::RequestCache::NoStore)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        let status = resp.status();
        let body = if resp.ok() {
            resp.text().await.map_err(|e| LoadError::Network(e.to_string()))?
        } else {
            String::new()
        };
        decode_response(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(LoadError::Network(format!("{} is only reachable from the browser", config.data_path)))
    }
}

/// Turn a settled response into items.
///
/// # Errors
///
/// `Status` for any non-2xx status, `NotArray` when the top-level JSON value
/// is not an array, `Malformed` when the body or an element does not decode.
pub fn decode_response(status: u16, body: &str) -> Result<Vec<PortfolioItem>, LoadError> {
    if !(200..300).contains(&status) {
        return Err(LoadError::Status(status));
    }
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| LoadError::Malformed(e.to_string()))?;
    if !value.is_array() {
        return Err(LoadError::NotArray);
    }
    serde_json::from_value(value).map_err(|e| LoadError::Malformed(e.to_string()))
}
