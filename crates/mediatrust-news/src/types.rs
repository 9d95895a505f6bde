//! NewsAPI response types for the `/v2/everything` search endpoint.
//!
//! ## Observed shape
//!
//! ### Envelope
//! `{"status": "ok", "totalResults": 123, "articles": [...]}` on success.
//! Errors come back as `{"status": "error", "code": "...", "message": "..."}`,
//! usually with a 4xx status but occasionally with 200.
//!
//! ### Missing vs `null`
//! The provider omits some keys entirely and sends others as explicit `null`
//! (`description` and `author` are the usual `null` offenders). A missing key
//! becomes the `"N/A"` sentinel; an explicit `null` title or description stays
//! absent so the cleaner can drop the record. A `null` source name, URL or
//! timestamp carries no cleaning meaning and is folded into `"N/A"` as well.
//!
//! ### `publishedAt`
//! ISO-8601 with a trailing `Z` (e.g. `"2025-03-14T09:30:00Z"`). Kept as the
//! provider's string; nothing downstream parses it.

use serde::{Deserialize, Serialize};

/// Value substituted for fields the provider did not send.
pub const NOT_AVAILABLE: &str = "N/A";

fn not_available() -> Option<String> {
    Some(NOT_AVAILABLE.to_owned())
}

/// Top-level response from `GET /v2/everything`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "totalResults")]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<WireArticle>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireArticle {
    #[serde(default)]
    pub source: Option<WireSource>,
    #[serde(default = "not_available")]
    pub title: Option<String>,
    #[serde(default = "not_available")]
    pub description: Option<String>,
    #[serde(default = "not_available")]
    pub url: Option<String>,
    #[serde(default = "not_available", rename = "publishedAt")]
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSource {
    #[serde(default = "not_available")]
    pub name: Option<String>,
}

/// One article as returned by the search provider, in received order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub source_name: String,
    pub url: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
}

impl From<WireArticle> for ArticleRecord {
    fn from(article: WireArticle) -> Self {
        let or_na = |value: Option<String>| value.unwrap_or_else(|| NOT_AVAILABLE.to_owned());
        Self {
            title: article.title,
            description: article.description,
            source_name: or_na(article.source.and_then(|s| s.name)),
            url: or_na(article.url),
            published_at: or_na(article.published_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_from(json: &str) -> ArticleRecord {
        let wire: WireArticle = serde_json::from_str(json).expect("wire article");
        ArticleRecord::from(wire)
    }

    #[test]
    fn full_article_maps_every_field() {
        let record = record_from(
            r#"{
                "source": {"id": "reuters", "name": "Reuters"},
                "author": "Jane Doe",
                "title": "Tesla recalls vehicles",
                "description": "The recall covers 2M cars.",
                "url": "https://reuters.com/a",
                "urlToImage": null,
                "publishedAt": "2025-03-14T09:30:00Z",
                "content": "..."
            }"#,
        );
        assert_eq!(record.title.as_deref(), Some("Tesla recalls vehicles"));
        assert_eq!(
            record.description.as_deref(),
            Some("The recall covers 2M cars.")
        );
        assert_eq!(record.source_name, "Reuters");
        assert_eq!(record.url, "https://reuters.com/a");
        assert_eq!(record.published_at, "2025-03-14T09:30:00Z");
    }

    #[test]
    fn missing_keys_default_to_not_available() {
        let record = record_from("{}");
        assert_eq!(record.title.as_deref(), Some(NOT_AVAILABLE));
        assert_eq!(record.description.as_deref(), Some(NOT_AVAILABLE));
        assert_eq!(record.source_name, NOT_AVAILABLE);
        assert_eq!(record.url, NOT_AVAILABLE);
        assert_eq!(record.published_at, NOT_AVAILABLE);
    }

    #[test]
    fn explicit_null_title_and_description_stay_absent() {
        let record = record_from(
            r#"{"source": {"name": null}, "title": null, "description": null, "url": null}"#,
        );
        assert!(record.title.is_none());
        assert!(record.description.is_none());
        assert_eq!(record.source_name, NOT_AVAILABLE);
        assert_eq!(record.url, NOT_AVAILABLE);
    }

    #[test]
    fn error_envelope_deserializes() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"status": "error", "code": "apiKeyInvalid", "message": "Your API key is invalid."}"#,
        )
        .expect("error envelope");
        assert_eq!(response.status, "error");
        assert_eq!(response.code.as_deref(), Some("apiKeyInvalid"));
        assert!(response.articles.is_empty());
        assert_eq!(response.total_results, 0);
    }
}
