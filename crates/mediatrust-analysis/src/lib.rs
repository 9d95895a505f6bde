//! Article enrichment pipeline for MediaTrust.
//!
//! Fetches articles for a topic, drops incomplete and duplicate records,
//! scores sentiment, annotates each source's political lean, ranks by
//! extremity and attaches a summary to every article.

pub mod bias;
pub mod clean;
pub mod error;
pub mod extremity;
pub mod pipeline;
pub mod scorer;
pub mod summarizer;
pub mod types;

pub use bias::{annotate_bias, lean_for_source, SOURCE_BIAS};
pub use clean::clean_articles;
pub use error::{AnalysisError, SummarizeError};
pub use extremity::rank_extremity;
pub use pipeline::Analyzer;
pub use scorer::{label_sentiment, score_sentiment, PolarityScorer, VaderScorer};
pub use summarizer::{
    summarize_articles, summarizer_from_config, summary_length, ExtractiveSummarizer,
    InferenceSettings, InferenceSummarizer, Summarizer, SummaryLength, SUMMARY_UNAVAILABLE,
};
pub use types::{
    AnalysisOutcome, AnalysisSettings, BiasLean, EnrichedArticle, PolarityScores, SentimentLabel,
};
