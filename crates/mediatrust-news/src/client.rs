use std::time::Duration;

use chrono::{Days, NaiveDate, Utc};
use reqwest::{Client, StatusCode};

use mediatrust_core::AppConfig;

use crate::error::NewsError;
use crate::types::{ArticleRecord, SearchResponse};

/// Upper bound on the TCP connect phase, independent of the request timeout.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Search parameters and credentials for the news provider.
#[derive(Clone)]
pub struct NewsSettings {
    pub base_url: String,
    pub api_key: String,
    pub sort_by: String,
    pub page_size: u32,
    pub lookback_days: u32,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl NewsSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.news_base_url.clone(),
            api_key: config.news_api_key.clone(),
            sort_by: config.news_sort_by.clone(),
            page_size: config.news_page_size,
            lookback_days: config.news_lookback_days,
            timeout_secs: config.news_timeout_secs,
            user_agent: config.user_agent.clone(),
        }
    }
}

impl std::fmt::Debug for NewsSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &"[redacted]")
            .field("sort_by", &self.sort_by)
            .field("page_size", &self.page_size)
            .field("lookback_days", &self.lookback_days)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Returns the inclusive `(from, to)` search window ending on `today`.
#[must_use]
pub fn date_window(today: NaiveDate, lookback_days: u32) -> (NaiveDate, NaiveDate) {
    let from = today
        .checked_sub_days(Days::new(u64::from(lookback_days)))
        .unwrap_or(NaiveDate::MIN);
    (from, today)
}

/// HTTP client for the NewsAPI `everything` search.
///
/// One search per call, no paging and no retries. The API key travels in the
/// `X-Api-Key` header so request URLs stay safe to log.
#[derive(Debug)]
pub struct NewsClient {
    client: Client,
    settings: NewsSettings,
}

impl NewsClient {
    /// Creates a `NewsClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(settings: NewsSettings) -> Result<Self, NewsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(
                CONNECT_TIMEOUT_SECS.min(settings.timeout_secs.max(1)),
            ))
            .user_agent(settings.user_agent.as_str())
            .build()?;
        Ok(Self { client, settings })
    }

    #[must_use]
    pub fn settings(&self) -> &NewsSettings {
        &self.settings
    }

    /// Searches for articles about `topic` published in the lookback window
    /// ending today (UTC).
    ///
    /// # Errors
    ///
    /// See [`NewsClient::fetch_articles_as_of`].
    pub async fn fetch_articles(&self, topic: &str) -> Result<Vec<ArticleRecord>, NewsError> {
        self.fetch_articles_as_of(topic, Utc::now().date_naive())
            .await
    }

    /// Searches for articles about `topic` in the window ending on `today`.
    ///
    /// Returns an empty `Vec` when the provider reports zero results.
    ///
    /// # Errors
    ///
    /// - [`NewsError::EmptyTopic`]: blank topic; no request is made.
    /// - [`NewsError::Http`]: transport failure or timeout.
    /// - [`NewsError::UnexpectedStatus`]: any status other than 200.
    /// - [`NewsError::Provider`]: 200 with an `"error"` envelope.
    /// - [`NewsError::Deserialize`]: 200 with a body that is not a search response.
    /// - [`NewsError::InvalidEndpoint`]: configured base URL does not parse.
    pub async fn fetch_articles_as_of(
        &self,
        topic: &str,
        today: NaiveDate,
    ) -> Result<Vec<ArticleRecord>, NewsError> {
        let topic = topic.trim();
        if topic.is_empty() {
            tracing::warn!("topic needs to be passed in; skipping news search");
            return Err(NewsError::EmptyTopic);
        }

        let url = self.search_url(topic, today)?;

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.settings.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(topic, error = %e, "news search request failed");
                NewsError::Http(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(topic, status = status.as_u16(), "news provider returned an error status");
            return Err(NewsError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<SearchResponse>(&body).map_err(|e| {
            NewsError::Deserialize {
                context: format!("search response for \"{topic}\""),
                source: e,
            }
        })?;

        if parsed.status == "error" {
            let code = parsed.code.unwrap_or_else(|| "unknown".to_owned());
            let message = parsed.message.unwrap_or_default();
            tracing::warn!(topic, code = %code, message = %message, "news provider rejected search");
            return Err(NewsError::Provider { code, message });
        }

        if parsed.total_results == 0 {
            tracing::info!(topic, "news provider returned no results");
            return Ok(Vec::new());
        }

        let articles: Vec<ArticleRecord> = parsed
            .articles
            .into_iter()
            .map(ArticleRecord::from)
            .collect();

        tracing::debug!(
            topic,
            total_results = parsed.total_results,
            count = articles.len(),
            "fetched articles"
        );

        Ok(articles)
    }

    /// Builds the search URL for `topic`; the API key is not part of it.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::InvalidEndpoint`] if the base URL cannot be parsed.
    fn search_url(&self, topic: &str, today: NaiveDate) -> Result<String, NewsError> {
        let base_url = &self.settings.base_url;
        let mut url = reqwest::Url::parse(base_url).map_err(|e| NewsError::InvalidEndpoint {
            base_url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let (from, to) = date_window(today, self.settings.lookback_days);

        url.query_pairs_mut()
            .append_pair("q", topic)
            .append_pair("from", &from.format("%Y-%m-%d").to_string())
            .append_pair("to", &to.format("%Y-%m-%d").to_string())
            .append_pair("sortBy", &self.settings.sort_by)
            .append_pair("pageSize", &self.settings.page_size.to_string());

        Ok(url.to_string())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
