//! Topic analysis orchestration.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use mediatrust_core::AppConfig;
use mediatrust_news::{NewsClient, NewsError, NewsSettings};

use crate::bias::annotate_bias;
use crate::clean::clean_articles;
use crate::error::AnalysisError;
use crate::extremity::rank_extremity;
use crate::scorer::{score_sentiment, PolarityScorer, VaderScorer};
use crate::summarizer::{summarize_articles, summarizer_from_config, Summarizer};
use crate::types::{AnalysisOutcome, AnalysisSettings};

/// Runs the fetch → clean → score → bias → rank → summarize pipeline.
///
/// Holds no per-request state; one `Analyzer` serves any number of
/// concurrent topics.
pub struct Analyzer {
    news: NewsClient,
    scorer: Arc<dyn PolarityScorer>,
    summarizer: Arc<dyn Summarizer>,
    settings: AnalysisSettings,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("news", &self.news)
            .field("summarizer", &self.summarizer.name())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    #[must_use]
    pub fn new(
        news: NewsClient,
        scorer: Arc<dyn PolarityScorer>,
        summarizer: Arc<dyn Summarizer>,
        settings: AnalysisSettings,
    ) -> Self {
        Self {
            news,
            scorer,
            summarizer,
            settings,
        }
    }

    /// Wires the default scorer, the configured summarizer and a news client.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::News`] or [`AnalysisError::SummarizerSetup`]
    /// if an HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, AnalysisError> {
        let news = NewsClient::new(NewsSettings::from_app_config(config))?;
        let summarizer = summarizer_from_config(config).map_err(AnalysisError::SummarizerSetup)?;
        Ok(Self::new(
            news,
            Arc::new(VaderScorer::new()),
            summarizer,
            AnalysisSettings::from_app_config(config),
        ))
    }

    #[must_use]
    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    #[must_use]
    pub fn summarizer_name(&self) -> &str {
        self.summarizer.name()
    }

    /// Analyzes `topic` over the lookback window ending today (UTC).
    ///
    /// # Errors
    ///
    /// See [`Analyzer::analyze_as_of`].
    pub async fn analyze(&self, topic: &str) -> Result<AnalysisOutcome, AnalysisError> {
        self.analyze_as_of(topic, Utc::now().date_naive()).await
    }

    /// Analyzes `topic` over the lookback window ending on `today`.
    ///
    /// Unreachable or failing providers are reported as
    /// [`AnalysisOutcome::NoArticles`], never as an error.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::News`] when the provider answers 200 with a
    /// body that is not a search response, or the endpoint is misconfigured.
    pub async fn analyze_as_of(
        &self,
        topic: &str,
        today: NaiveDate,
    ) -> Result<AnalysisOutcome, AnalysisError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Ok(AnalysisOutcome::NoInput);
        }

        let records = match self.news.fetch_articles_as_of(topic, today).await {
            Ok(records) => records,
            Err(NewsError::EmptyTopic) => return Ok(AnalysisOutcome::NoInput),
            Err(e) if e.is_fetch_failure() => {
                tracing::warn!(topic, error = %e, "news fetch failed; treating as no results");
                return Ok(AnalysisOutcome::NoArticles);
            }
            Err(e) => return Err(e.into()),
        };
        if records.is_empty() {
            return Ok(AnalysisOutcome::NoArticles);
        }
        let fetched = records.len();

        let mut articles = clean_articles(records);
        score_sentiment(&mut articles, self.scorer.as_ref());
        annotate_bias(&mut articles);
        let ranked = rank_extremity(articles, self.settings.top_n);
        let summarized = summarize_articles(
            ranked,
            self.summarizer.as_ref(),
            self.settings.summary_max_tokens,
            self.settings.summary_concurrency,
        )
        .await;

        tracing::info!(
            topic,
            fetched,
            analyzed = summarized.len(),
            "topic analysis complete"
        );
        Ok(AnalysisOutcome::Analyzed(summarized))
    }
}
