//! HTTP client for the iTunes lookup API.
//!
//! Wraps `reqwest` with typed error handling, a bounded in-process
//! response cache, and decoding into normalized [`AppListing`] records.
//! The lookup endpoint returns a `{"resultCount": N, "results": [...]}`
//! envelope; an empty result array surfaces as [`LookupError::NotFound`].

use std::time::Duration;

use appshelf_core::{AppConfig, AppManifest};
use moka::future::Cache;
use reqwest::{Client, StatusCode, Url};

use crate::error::LookupError;
use crate::extract::extract_app_id;
use crate::normalize::{normalize_app, AppListing};
use crate::types::LookupResponse;

const DEFAULT_LOOKUP_URL: &str = "https://itunes.apple.com/lookup";

/// Client for the iTunes lookup API.
///
/// Manages the HTTP client, the lookup base URL, and a bounded cache of
/// resolved listings keyed by app id. Use [`ItunesClient::new`] for
/// production or [`ItunesClient::with_base_url`] to point at a mock
/// server in tests.
pub struct ItunesClient {
    client: Client,
    base_url: Url,
    cache: Cache<String, AppListing>,
}

impl ItunesClient {
    /// Creates a new client pointed at the production lookup endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        cache_capacity: u64,
    ) -> Result<Self, LookupError> {
        Self::with_base_url(timeout_secs, user_agent, cache_capacity, DEFAULT_LOOKUP_URL)
    }

    /// Creates a new client from loaded application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`ItunesClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, LookupError> {
        Self::with_base_url(
            config.request_timeout_secs,
            &config.user_agent,
            config.cache_capacity,
            &config.lookup_base_url,
        )
    }

    /// Creates a new client with a custom lookup base URL (for testing
    /// with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`LookupError::MalformedUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        cache_capacity: u64,
        base_url: &str,
    ) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| LookupError::MalformedUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            cache: Cache::new(cache_capacity),
        })
    }

    /// Looks up one app by its numeric store identifier.
    ///
    /// Cached listings are served without a network round-trip; a miss
    /// populates the cache on success.
    ///
    /// # Errors
    ///
    /// - [`LookupError::UnexpectedStatus`] on any HTTP status other than 200.
    /// - [`LookupError::NotFound`] when the envelope carries zero results.
    /// - [`LookupError::Deserialize`] if the body does not match the
    ///   expected shape.
    /// - [`LookupError::Http`] on network failure.
    pub async fn lookup_by_id(&self, id: &str) -> Result<AppListing, LookupError> {
        if let Some(hit) = self.cache.get(id).await {
            tracing::debug!(id, "lookup served from cache");
            return Ok(hit);
        }

        let url = self.build_lookup_url(id);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(LookupError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let envelope: LookupResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::Deserialize {
                context: format!("lookup(id={id})"),
                source: e,
            })?;

        let raw = envelope
            .results
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::NotFound { id: id.to_owned() })?;

        let listing = normalize_app(&raw);
        self.cache.insert(id.to_owned(), listing.clone()).await;
        Ok(listing)
    }

    /// Looks up one app by its store product URL.
    ///
    /// # Errors
    ///
    /// - [`LookupError::InvalidStoreUrl`] if no identifier can be
    ///   extracted from `store_url`.
    /// - Anything [`ItunesClient::lookup_by_id`] returns.
    pub async fn lookup_by_url(&self, store_url: &str) -> Result<AppListing, LookupError> {
        let id = extract_app_id(store_url)?;
        self.lookup_by_id(&id).await
    }

    /// Fetches and decodes a caller-hosted manifest document.
    ///
    /// # Errors
    ///
    /// - [`LookupError::MalformedUrl`] if `manifest_url` does not parse.
    /// - [`LookupError::Http`] on network failure or non-2xx status.
    /// - [`LookupError::Deserialize`] if the document does not match the
    ///   manifest shape.
    pub async fn fetch_manifest(&self, manifest_url: &str) -> Result<AppManifest, LookupError> {
        let url = Url::parse(manifest_url).map_err(|e| LookupError::MalformedUrl {
            url: manifest_url.to_owned(),
            reason: e.to_string(),
        })?;

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| LookupError::Deserialize {
            context: format!("manifest from {manifest_url}"),
            source: e,
        })
    }

    /// Builds the lookup request URL for an app id, percent-encoding via
    /// [`Url::query_pairs_mut`].
    fn build_lookup_url(&self, id: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("id", id);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> ItunesClient {
        ItunesClient::with_base_url(30, "appshelf-test/0.1", 16, base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn build_lookup_url_appends_id() {
        let client = test_client("https://itunes.apple.com/lookup");
        let url = client.build_lookup_url("6747951776");
        assert_eq!(
            url.as_str(),
            "https://itunes.apple.com/lookup?id=6747951776"
        );
    }

    #[test]
    fn with_base_url_rejects_invalid_url() {
        let result = ItunesClient::with_base_url(30, "appshelf-test/0.1", 16, "not a url");
        assert!(matches!(result, Err(LookupError::MalformedUrl { .. })));
    }
}
