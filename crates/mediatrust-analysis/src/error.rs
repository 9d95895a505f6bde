use thiserror::Error;

use mediatrust_news::NewsError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("news provider: {0}")]
    News(#[from] NewsError),

    #[error("summarizer setup failed: {0}")]
    SummarizerSetup(#[source] SummarizeError),
}

/// Failure of a single summarization call. Never aborts a batch.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("nothing to summarize")]
    EmptyText,

    #[error("summarizer returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("summarizer returned no summary text")]
    EmptySummary,

    #[error("summarizer response parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
