//! Data models for articles and the API's result page.
//!
//! This module defines the structures deserialized from the remote
//! news API's JSON payload:
//! - [`Article`]: a single news item as returned by the service
//! - [`NewsPage`]: the top-level response object wrapping a `results` array
//!
//! Both types are deliberately loose: every field is optional and unknown
//! fields are captured verbatim, because this client never constructs or
//! mutates articles. It only filters a sequence of them and passes the
//! rest of the payload through unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single news article as returned by the remote API.
///
/// All known fields are optional because the service omits fields freely.
/// Any field this client does not model is preserved in `extra` so the
/// payload survives a round-trip intact.
///
/// # Fields
///
/// Only `source_name` carries semantics in this crate: it is the input to
/// the home-country denylist filter. The service has historically used
/// both `source_name` and `sourceName` spellings, so both are accepted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Article {
    /// Stable identifier assigned by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<String>,
    /// The article headline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Canonical URL of the article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Short description or teaser text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Publication timestamp as reported by the service.
    #[serde(rename = "pubDate", skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,
    /// Service-internal source identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// Human-readable publisher name. Input to the denylist filter.
    #[serde(alias = "sourceName", skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    /// Publisher homepage URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Categories the service assigned to the article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<String>>,
    /// Countries the article is associated with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Vec<String>>,
    /// Every payload field this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Article {
    /// The publisher name, or the empty string when the service omitted it.
    ///
    /// Articles without a `source_name` never match the denylist, so empty
    /// is the correct neutral value here.
    pub fn source_name_or_empty(&self) -> &str {
        self.source_name.as_deref().unwrap_or("")
    }
}

/// The top-level response payload for a `/news` request.
///
/// `results` defaults to an empty vector when the field is absent, which
/// the remote service treats as a legitimate zero-article response. All
/// other top-level fields pass through: the common ones are typed, the
/// rest land in `extra`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewsPage {
    /// Request status string reported by the service (e.g. `"success"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Total number of matching articles across all pages.
    #[serde(rename = "totalResults", skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
    /// The articles on this page. Absent in the payload means empty.
    #[serde(default)]
    pub results: Vec<Article>,
    /// Opaque cursor for the next page, when the service provides one.
    #[serde(rename = "nextPage", skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    /// Every top-level payload field this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewsPage {
    /// The degraded fallback page: an empty `results` sequence and nothing
    /// else. Returned whenever the upstream is unavailable or malformed,
    /// indistinguishable by design from a legitimate zero-article response.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_accepts_both_source_name_spellings() {
        let snake: Article = serde_json::from_str(r#"{"source_name": "BBC"}"#).unwrap();
        assert_eq!(snake.source_name.as_deref(), Some("BBC"));

        let camel: Article = serde_json::from_str(r#"{"sourceName": "BBC"}"#).unwrap();
        assert_eq!(camel.source_name.as_deref(), Some("BBC"));
    }

    #[test]
    fn test_article_missing_source_name_is_empty() {
        let article: Article = serde_json::from_str(r#"{"title": "Headline"}"#).unwrap();
        assert_eq!(article.source_name_or_empty(), "");
    }

    #[test]
    fn test_article_preserves_unknown_fields() {
        let article: Article =
            serde_json::from_str(r#"{"title": "T", "image_url": "https://example.com/i.jpg"}"#)
                .unwrap();
        assert_eq!(
            article.extra.get("image_url").and_then(Value::as_str),
            Some("https://example.com/i.jpg")
        );

        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(
            json.get("image_url").and_then(Value::as_str),
            Some("https://example.com/i.jpg")
        );
    }

    #[test]
    fn test_news_page_missing_results_is_empty() {
        let page: NewsPage = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert_eq!(page.status.as_deref(), Some("success"));
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_news_page_passthrough_fields() {
        let page: NewsPage = serde_json::from_str(
            r#"{
                "status": "success",
                "totalResults": 42,
                "nextPage": "17000000-abcdef",
                "results": [{"source_name": "BBC"}],
                "plan": "free"
            }"#,
        )
        .unwrap();

        assert_eq!(page.total_results, Some(42));
        assert_eq!(page.next_page.as_deref(), Some("17000000-abcdef"));
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.extra.get("plan").and_then(Value::as_str), Some("free"));
    }

    #[test]
    fn test_empty_page_has_no_other_fields() {
        let page = NewsPage::empty();
        assert!(page.results.is_empty());
        assert!(page.status.is_none());
        assert!(page.total_results.is_none());
        assert!(page.next_page.is_none());
        assert!(page.extra.is_empty());

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json, serde_json::json!({ "results": [] }));
    }
}
