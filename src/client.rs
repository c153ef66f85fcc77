//! The news API client and its transport seam.
//!
//! This module provides the public surface of the crate:
//! - [`FetchPage`]: the transport trait, one GET per call
//! - [`HttpFetcher`]: the reqwest-backed implementation
//! - [`NewsClient`]: the client exposing the three public operations
//!
//! # Failure policy
//!
//! The transport can fail in exactly one externally observable way:
//! "upstream unavailable or malformed". Network errors, non-success HTTP
//! statuses, and payload-shape mismatches are all absorbed at the fetch
//! boundary, logged, and converted into an empty [`NewsPage`]. The public
//! operations return `NewsPage` rather than `Result`, so the contract that
//! they never fail outward is visible in the signatures. A caller cannot
//! distinguish "service down" from "zero articles"; the rendering layer is
//! expected to substitute placeholder content when results are empty.

use crate::filter::filter_home_country_sources;
use crate::models::NewsPage;
use crate::query::QueryIntent;
use crate::utils::truncate_for_log;
use std::env;
use std::error::Error;
use std::time::Instant;
use tracing::{error, info, instrument, warn};
use url::Url;

/// Default base endpoint of the news aggregation service.
pub const DEFAULT_BASE_URL: &str = "https://newsdata.io/api/1";

/// Environment variable consulted for the API key.
pub const API_KEY_ENV: &str = "NEWSDATA_API_KEY";

/// Placeholder key used when no real key is configured. Requests made with
/// it are rejected by the service, which degrades to the empty page.
pub const PLACEHOLDER_API_KEY: &str = "Your_API_Key_here";

/// Connection settings for the news service.
#[derive(Debug, Clone)]
pub struct NewsClientConfig {
    /// Base endpoint, e.g. `https://newsdata.io/api/1`.
    pub base_url: String,
    /// API key sent as the `apikey` query parameter on every request.
    pub api_key: String,
}

impl NewsClientConfig {
    /// Build a config from explicit values.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a config from the environment, falling back to the default
    /// endpoint and the placeholder key.
    pub fn from_env() -> Self {
        let api_key =
            env::var(API_KEY_ENV).unwrap_or_else(|_| PLACEHOLDER_API_KEY.to_string());
        if api_key == PLACEHOLDER_API_KEY {
            warn!(
                env_var = API_KEY_ENV,
                "No API key configured; requests will be rejected upstream"
            );
        }
        Self::new(DEFAULT_BASE_URL, api_key)
    }
}

/// Trait for the transport collaborator.
///
/// Implementors perform exactly one outbound GET against the `/news`
/// endpoint with the given query parameters and return the parsed page.
/// Timeouts, TLS, and connection pooling are the implementor's concern.
/// This seam exists so tests can inject doubles in place of the network.
pub trait FetchPage {
    /// Issue one GET with the given query parameters.
    ///
    /// # Arguments
    ///
    /// * `params` - Flat key/value pairs to URL-encode into the query string
    ///
    /// # Returns
    ///
    /// The parsed payload, or an error for any transport, status, or
    /// parse failure.
    async fn fetch_page(
        &self,
        params: &[(&'static str, String)],
    ) -> Result<NewsPage, Box<dyn Error>>;
}

/// The reqwest-backed [`FetchPage`] implementation.
///
/// Appends the API key to every request and treats any non-success HTTP
/// status as an error. No retries and no backoff: a single failed attempt
/// is reported to the caller, which degrades to the empty page.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl HttpFetcher {
    /// Build a fetcher for the `/news` endpoint under the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse.
    pub fn new(config: &NewsClientConfig) -> Result<Self, Box<dyn Error>> {
        // Url::join drops the last path segment of a base without a
        // trailing slash, so /api/1 would become /api/news.
        let base = Url::parse(&format!("{}/", config.base_url.trim_end_matches('/')))?;
        let endpoint = base.join("news")?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
            api_key: config.api_key.clone(),
        })
    }
}

impl FetchPage for HttpFetcher {
    #[instrument(level = "info", skip_all)]
    async fn fetch_page(
        &self,
        params: &[(&'static str, String)],
    ) -> Result<NewsPage, Box<dyn Error>> {
        let t0 = Instant::now();
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        let status = response.status();
        let body = response.text().await?;
        let dt = t0.elapsed();

        match serde_json::from_str::<NewsPage>(&body) {
            Ok(page) => {
                info!(
                    status = %status,
                    elapsed_ms = dt.as_millis() as u64,
                    results = page.results.len(),
                    "Fetched news page"
                );
                Ok(page)
            }
            Err(e) => {
                warn!(
                    status = %status,
                    elapsed_ms = dt.as_millis() as u64,
                    error = %e,
                    body_preview = %truncate_for_log(&body, 300),
                    "Response body did not parse as a news page"
                );
                Err(Box::new(e))
            }
        }
    }
}

/// Client for the news aggregation API.
///
/// Stateless per call: each operation builds its own parameters and result
/// page, so concurrent invocations are safe without locking. Generic over
/// the transport so tests can swap in a fake.
#[derive(Debug, Clone)]
pub struct NewsClient<F> {
    fetcher: F,
}

impl NewsClient<HttpFetcher> {
    /// Build a client backed by a real HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL does not parse.
    pub fn new(config: &NewsClientConfig) -> Result<Self, Box<dyn Error>> {
        Ok(Self::with_fetcher(HttpFetcher::new(config)?))
    }
}

impl<F> NewsClient<F>
where
    F: FetchPage,
{
    /// Build a client around an arbitrary transport, typically a test double.
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetch the latest headlines for a country, optionally restricted to
    /// a category.
    ///
    /// A category of `"top"` or `None` means the service default feed.
    /// Never fails: any upstream problem yields an empty page.
    #[instrument(level = "info", skip(self))]
    pub async fn latest_news(&self, country: &str, category: Option<&str>) -> NewsPage {
        self.dispatch(QueryIntent::latest(country, category)).await
    }

    /// Search articles by free text for a country.
    ///
    /// Never fails: any upstream problem yields an empty page.
    #[instrument(level = "info", skip(self))]
    pub async fn search_news(&self, query: &str, country: &str) -> NewsPage {
        self.dispatch(QueryIntent::search(query, country)).await
    }

    /// Fetch headlines for a specific category and country.
    ///
    /// Never fails: any upstream problem yields an empty page.
    #[instrument(level = "info", skip(self))]
    pub async fn news_by_category(&self, category: &str, country: &str) -> NewsPage {
        self.dispatch(QueryIntent::by_category(category, country))
            .await
    }

    /// Shared path for all three operations: build parameters, issue one
    /// GET, filter home-country results, and absorb every failure into the
    /// empty page.
    async fn dispatch(&self, intent: QueryIntent) -> NewsPage {
        let params = intent.to_params();

        match self.fetcher.fetch_page(&params).await {
            Ok(mut page) => {
                let received = page.results.len();
                if intent.is_home_country() {
                    page.results = filter_home_country_sources(page.results);
                    info!(
                        received,
                        kept = page.results.len(),
                        filtered = received - page.results.len(),
                        "Filtered home-country sources"
                    );
                } else {
                    info!(received, "Returning unfiltered worldwide results");
                }
                page
            }
            Err(e) => {
                error!(error = %e, "News fetch failed; returning empty results");
                NewsPage::empty()
            }
        }
    }
}
