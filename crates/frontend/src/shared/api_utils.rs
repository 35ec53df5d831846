//! API utilities for talking to the collection endpoints
//!
//! [`ApiConfig`] holds the base URL and optional token, [`HttpCollectionFetcher`]
//! is the `gloo-net` implementation of [`CollectionFetcher`].

use crate::shared::list_query::{CollectionFetcher, FetchError, FetchFuture};
use contracts::shared::list_query::{ListPage, QueryParams};
use futures::FutureExt;
use gloo_net::http::Request;

/// Get the base URL for API requests
///
/// A base baked in at compile time through `GO_API_BASE` wins; otherwise the
/// API is expected on the same origin as the page.
///
/// # Returns
/// - API base URL like "https://goadmin.ifrc.org" or "http://localhost:8080"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("GO_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Where and how to reach the API. Provided as context by the app root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub auth_token: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token: None,
        }
    }

    pub fn from_window() -> Self {
        Self::new(api_base())
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// `base/endpoint?query`, query keys in sorted order
    pub fn collection_url(&self, endpoint: &str, query: &QueryParams) -> Result<String, FetchError> {
        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        if query.is_empty() {
            return Ok(url);
        }
        let qs = serde_qs::to_string(query).map_err(|e| FetchError::InvalidRequest(e.to_string()))?;
        Ok(format!("{}?{}", url, qs))
    }
}

/// `CollectionFetcher` over `fetch`, one GET per call.
#[derive(Debug, Clone)]
pub struct HttpCollectionFetcher {
    config: ApiConfig,
}

impl HttpCollectionFetcher {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl CollectionFetcher for HttpCollectionFetcher {
    fn fetch_collection(&self, endpoint: &str, query: &QueryParams) -> FetchFuture {
        let url = self.config.collection_url(endpoint, query);
        let token = self.config.auth_token.clone();
        async move {
            let url = url?;
            let mut request = Request::get(&url).header("Accept", "application/json");
            if let Some(token) = token {
                request = request.header("Authorization", &format!("Token {}", token));
            }

            let response = request
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            if !response.ok() {
                let status = response.status();
                let message = match response.text().await {
                    Ok(body) if !body.trim().is_empty() => body,
                    _ => response.status_text(),
                };
                return Err(FetchError::Http { status, message });
            }

            response
                .json::<ListPage<serde_json::Value>>()
                .await
                .map_err(|e| FetchError::Decode(e.to_string()))
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::QueryValue;

    #[test]
    fn test_collection_url_joins_base_and_endpoint() {
        let config = ApiConfig::new("https://goadmin.ifrc.org/");
        let url = config
            .collection_url("/api/v2/appeal/", &QueryParams::new())
            .unwrap();
        assert_eq!(url, "https://goadmin.ifrc.org/api/v2/appeal/");
    }

    #[test]
    fn test_collection_url_serializes_query_in_key_order() {
        let config = ApiConfig::new("http://localhost:8000");
        let query: QueryParams = [
            ("ordering", QueryValue::from("-start_date")),
            ("limit", QueryValue::from(10i64)),
            ("offset", QueryValue::from(20i64)),
        ]
        .into_iter()
        .collect();
        let url = config.collection_url("api/v2/appeal/", &query).unwrap();
        assert_eq!(
            url,
            "http://localhost:8000/api/v2/appeal/?limit=10&offset=20&ordering=-start_date"
        );
    }

    #[test]
    fn test_token_is_optional() {
        let config = ApiConfig::new("http://localhost:8000");
        assert!(config.auth_token.is_none());
        assert_eq!(config.with_token("abc").auth_token.as_deref(), Some("abc"));
    }
}
