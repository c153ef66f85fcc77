//! Query-parameter construction for the `/news` endpoint.
//!
//! A [`QueryIntent`] captures what the caller asked for (country, optional
//! category, optional search term) and deterministically maps to the flat
//! key/value pairs sent on the wire.
//!
//! # Country handling
//!
//! The service is only ever queried two ways: for the home country
//! (Philippines, `ph`) or for a fixed "worldwide" basket of five English
//! speaking regions. Any country code other than `ph` collapses to the
//! worldwide basket; the caller's original value is discarded.

use tracing::debug;

/// The designated home country code. Requests for this country get the
/// source denylist applied to their results.
pub const HOME_COUNTRY: &str = "ph";

/// Comma-joined country list used for every non-home request.
pub const WORLDWIDE_COUNTRIES: &str = "us,gb,au,in,ca";

/// Category value that means "use the service default feed". It is never
/// sent on the wire.
pub const TOP_CATEGORY: &str = "top";

/// The language constraint applied to every request.
const LANGUAGE: &str = "en";

/// What the caller asked for. Transient: one intent per call, never stored.
#[derive(Debug, Clone)]
pub struct QueryIntent {
    /// Requested country code. Anything other than [`HOME_COUNTRY`] maps
    /// to the worldwide basket.
    pub country: String,
    /// Optional category tag. `None` or [`TOP_CATEGORY`] means the service
    /// default feed.
    pub category: Option<String>,
    /// Optional free-text search term.
    pub search_term: Option<String>,
}

impl QueryIntent {
    /// Intent for the latest-headlines feed.
    pub fn latest(country: &str, category: Option<&str>) -> Self {
        Self {
            country: country.to_string(),
            category: category.map(str::to_string),
            search_term: None,
        }
    }

    /// Intent for a free-text search.
    pub fn search(query: &str, country: &str) -> Self {
        Self {
            country: country.to_string(),
            category: None,
            search_term: Some(query.to_string()),
        }
    }

    /// Intent for a category feed.
    pub fn by_category(category: &str, country: &str) -> Self {
        Self {
            country: country.to_string(),
            category: Some(category.to_string()),
            search_term: None,
        }
    }

    /// Whether this intent targets the home country and therefore gets the
    /// source denylist applied to its results.
    pub fn is_home_country(&self) -> bool {
        self.country == HOME_COUNTRY
    }

    /// Map this intent to the wire query parameters.
    ///
    /// The output always carries `language` and `country`. `category` is
    /// included only when supplied and not the `"top"` sentinel; `q` only
    /// when a search term is present. There are no error conditions:
    /// absent or odd inputs degrade silently to the defaults.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params: Vec<(&'static str, String)> =
            vec![("language", LANGUAGE.to_string())];

        if self.is_home_country() {
            params.push(("country", HOME_COUNTRY.to_string()));
        } else {
            params.push(("country", WORLDWIDE_COUNTRIES.to_string()));
        }

        match self.category.as_deref() {
            Some(category) if !category.is_empty() && category != TOP_CATEGORY => {
                params.push(("category", category.to_string()));
            }
            _ => {}
        }

        if let Some(ref term) = self.search_term {
            params.push(("q", term.clone()));
        }

        debug!(?params, "Built query parameters");
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_home_country_is_preserved() {
        let params = QueryIntent::latest("ph", None).to_params();
        assert_eq!(param(&params, "country"), Some("ph"));
    }

    #[test]
    fn test_other_countries_collapse_to_worldwide_basket() {
        for code in ["us", "gb", "de", "jp", "worldwide-other", ""] {
            let params = QueryIntent::latest(code, None).to_params();
            assert_eq!(
                param(&params, "country"),
                Some("us,gb,au,in,ca"),
                "country code {code:?} should map to the worldwide basket"
            );
        }
    }

    #[test]
    fn test_language_is_always_english() {
        assert_eq!(
            param(&QueryIntent::latest("ph", None).to_params(), "language"),
            Some("en")
        );
        assert_eq!(
            param(&QueryIntent::search("typhoon", "us").to_params(), "language"),
            Some("en")
        );
    }

    #[test]
    fn test_top_category_is_omitted() {
        let params = QueryIntent::latest("ph", Some("top")).to_params();
        assert_eq!(param(&params, "category"), None);
    }

    #[test]
    fn test_absent_category_is_omitted() {
        let params = QueryIntent::latest("ph", None).to_params();
        assert_eq!(param(&params, "category"), None);
    }

    #[test]
    fn test_empty_category_is_omitted() {
        let params = QueryIntent::latest("ph", Some("")).to_params();
        assert_eq!(param(&params, "category"), None);
    }

    #[test]
    fn test_real_category_is_sent_verbatim() {
        let params = QueryIntent::by_category("business", "ph").to_params();
        assert_eq!(param(&params, "category"), Some("business"));
    }

    #[test]
    fn test_search_term_is_sent_under_q() {
        let params = QueryIntent::search("typhoon signal", "ph").to_params();
        assert_eq!(param(&params, "q"), Some("typhoon signal"));
        assert_eq!(param(&params, "country"), Some("ph"));
    }

    #[test]
    fn test_latest_has_no_q() {
        let params = QueryIntent::latest("ph", Some("sports")).to_params();
        assert_eq!(param(&params, "q"), None);
    }

    #[test]
    fn test_is_home_country() {
        assert!(QueryIntent::latest("ph", None).is_home_country());
        assert!(!QueryIntent::latest("us", None).is_home_country());
        assert!(!QueryIntent::search("news", "gb").is_home_country());
    }
}
