//! # newshub_client
//!
//! Client library for a newsdata.io-style news aggregation API. It builds
//! parameterized `/news` requests, normalizes the JSON payload into a
//! result page, and applies a fixed source-name denylist to results for
//! the designated home country (Philippines).
//!
//! ## Behavior
//!
//! - Every request carries `language=en` and a `country` constraint. Any
//!   country other than `ph` collapses to a fixed five-country worldwide
//!   basket.
//! - The three public operations — latest headlines, free-text search, and
//!   category feeds — never fail outward: any transport, status, or parse
//!   error degrades to an empty result page.
//! - The HTTP transport sits behind the [`FetchPage`] trait so tests can
//!   inject doubles.
//!
//! ## Example
//!
//! ```no_run
//! use newshub_client::{NewsClient, NewsClientConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = NewsClientConfig::from_env();
//! let client = NewsClient::new(&config)?;
//! let page = client.latest_news("ph", Some("business")).await;
//! for article in &page.results {
//!     println!("{}", article.title.as_deref().unwrap_or("(untitled)"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod filter;
pub mod models;
pub mod query;
pub mod utils;

pub use client::{
    FetchPage, HttpFetcher, NewsClient, NewsClientConfig, API_KEY_ENV, DEFAULT_BASE_URL,
    PLACEHOLDER_API_KEY,
};
pub use models::{Article, NewsPage};
pub use query::{QueryIntent, HOME_COUNTRY, TOP_CATEGORY, WORLDWIDE_COUNTRIES};
