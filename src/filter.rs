//! Source denylist filtering for home-country requests.
//!
//! A handful of wire-service and syndication outlets flood the Philippines
//! feed with press releases and regional reposts. Requests targeting the
//! home country drop every article whose publisher name contains one of
//! the denylisted substrings, case-insensitively. Worldwide requests are
//! never filtered.

use crate::models::Article;
use once_cell::sync::Lazy;
use tracing::{debug, instrument};

/// Case-folded substrings matched against each article's `source_name`.
/// Substring match, not exact: "MENAFN Asia" is dropped by `menafn`.
static DENYLISTED_SOURCES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "menafn",
        "pr newswire apac",
        "ign southeast asia",
        "channel newsasia",
        "reuters",
    ]
});

/// Whether an article's publisher matches the denylist.
///
/// A missing `source_name` is treated as the empty string and never
/// matches.
pub fn is_denylisted(article: &Article) -> bool {
    let source_name = article.source_name_or_empty().to_lowercase();
    DENYLISTED_SOURCES
        .iter()
        .any(|unwanted| source_name.contains(unwanted))
}

/// Remove denylisted sources from a result sequence.
///
/// Surviving articles keep their relative order; the operation only
/// removes elements, so applying it twice yields the same sequence.
///
/// # Arguments
///
/// * `articles` - The articles to filter, typically a page of results
///
/// # Returns
///
/// The articles whose publisher does not match the denylist.
#[instrument(level = "debug", skip_all)]
pub fn filter_home_country_sources(articles: Vec<Article>) -> Vec<Article> {
    let before = articles.len();
    let kept: Vec<Article> = articles
        .into_iter()
        .filter(|article| !is_denylisted(article))
        .collect();
    debug!(
        before,
        after = kept.len(),
        removed = before - kept.len(),
        "Applied home-country source filter"
    );
    kept
}
