//! Per-article summary stage.
//!
//! The summarization capability itself is behind [`Summarizer`]; this module
//! only computes the length band, invokes it and applies the fallback when a
//! call fails. A failed article never affects the rest of the batch.

mod extractive;
mod inference;

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use mediatrust_core::{AppConfig, SummarizerBackend};

pub use extractive::ExtractiveSummarizer;
pub use inference::{InferenceSettings, InferenceSummarizer};

use crate::bias::lean_for_source;
use crate::error::SummarizeError;
use crate::types::{BiasLean, EnrichedArticle};

/// Summary text used when summarization fails.
pub const SUMMARY_UNAVAILABLE: &str = "Summary unavailable";
/// Source value used when summarization fails.
pub const UNKNOWN_SOURCE: &str = "unknown";

/// Texts with fewer words than this get a proportionally shorter summary.
const SHORT_TEXT_WORDS: usize = 40;
/// Smallest summary band the model is asked for.
const MIN_SUMMARY_WORDS: usize = 10;
/// Gap between the lower and upper bound of the band.
const LENGTH_GAP: usize = 10;

#[async_trait]
pub trait Summarizer: Send + Sync {
    fn name(&self) -> &str;

    /// Produces a summary of `text` between `min_length` and `max_length`
    /// units long.
    async fn summarize(
        &self,
        text: &str,
        min_length: usize,
        max_length: usize,
    ) -> Result<String, SummarizeError>;
}

/// Target length band for one summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLength {
    pub min_length: usize,
    pub max_length: usize,
}

/// Computes the summary band from the word count of `text`.
///
/// Short texts (under 40 words) get `max(10, words / 2)`; longer ones get
/// `min(words - 10, max_tokens)`. The lower bound trails by 10 with a floor
/// of 10, and never exceeds the upper bound.
#[must_use]
pub fn summary_length(text: &str, max_tokens: usize) -> SummaryLength {
    let words = text.split_whitespace().count();
    let max_length = if words < SHORT_TEXT_WORDS {
        MIN_SUMMARY_WORDS.max(words / 2)
    } else {
        (words - LENGTH_GAP).min(max_tokens)
    };
    let min_length = MIN_SUMMARY_WORDS
        .max(max_length.saturating_sub(LENGTH_GAP))
        .min(max_length);
    SummaryLength {
        min_length,
        max_length,
    }
}

/// Builds the configured summarizer.
///
/// # Errors
///
/// Returns [`SummarizeError::Http`] if the inference HTTP client cannot be
/// constructed.
pub fn summarizer_from_config(config: &AppConfig) -> Result<Arc<dyn Summarizer>, SummarizeError> {
    match config.summarizer {
        SummarizerBackend::Inference => Ok(Arc::new(InferenceSummarizer::new(
            InferenceSettings::from_app_config(config),
        )?)),
        SummarizerBackend::Extractive => Ok(Arc::new(ExtractiveSummarizer)),
    }
}

async fn summarize_one(
    summarizer: &dyn Summarizer,
    text: &str,
    max_tokens: usize,
) -> Result<String, SummarizeError> {
    if text.trim().is_empty() {
        return Err(SummarizeError::EmptyText);
    }
    let band = summary_length(text, max_tokens);
    let summary = summarizer
        .summarize(text, band.min_length, band.max_length)
        .await?;
    if summary.trim().is_empty() {
        return Err(SummarizeError::EmptySummary);
    }
    Ok(summary)
}

/// Summarizes every article, at most `concurrency` at a time.
///
/// Output order matches input order. On success the article gets the summary,
/// a lean re-derived from its source name and `source = source_name`. On
/// failure it gets [`SUMMARY_UNAVAILABLE`], [`BiasLean::Unknown`] and
/// [`UNKNOWN_SOURCE`].
pub async fn summarize_articles(
    articles: Vec<EnrichedArticle>,
    summarizer: &dyn Summarizer,
    max_tokens: usize,
    concurrency: usize,
) -> Vec<EnrichedArticle> {
    stream::iter(articles)
        .map(|mut article| async move {
            match summarize_one(summarizer, &article.text, max_tokens).await {
                Ok(summary) => {
                    article.summary = summary;
                    article.summary_bias = lean_for_source(&article.source_name);
                    article.source.clone_from(&article.source_name);
                }
                Err(e) => {
                    tracing::warn!(
                        url = %article.url,
                        summarizer = summarizer.name(),
                        error = %e,
                        "error summarising article"
                    );
                    article.summary = SUMMARY_UNAVAILABLE.to_owned();
                    article.summary_bias = BiasLean::Unknown;
                    article.source = UNKNOWN_SOURCE.to_owned();
                }
            }
            article
        })
        .buffered(concurrency.max(1))
        .collect()
        .await
}
