use serde::{Deserialize, Serialize};

use mediatrust_core::AppConfig;

/// VADER-style polarity breakdown for one text.
///
/// `neg`, `neu` and `pos` are proportions in `[0.0, 1.0]`; `compound` is the
/// normalized overall polarity in `[-1.0, 1.0]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub compound: f64,
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl SentimentLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Political lean of a news source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BiasLean {
    Left,
    CenterLeft,
    Center,
    CenterRight,
    Right,
    #[default]
    Unknown,
}

impl BiasLean {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BiasLean::Left => "left",
            BiasLean::CenterLeft => "center-left",
            BiasLean::Center => "center",
            BiasLean::CenterRight => "center-right",
            BiasLean::Right => "right",
            BiasLean::Unknown => "unknown",
        }
    }

    /// Numeric lean: `-1.0` (left) through `1.0` (right). Unknown is `0.0`.
    #[must_use]
    pub fn score(self) -> f64 {
        match self {
            BiasLean::Left => -1.0,
            BiasLean::CenterLeft => -0.5,
            BiasLean::Center | BiasLean::Unknown => 0.0,
            BiasLean::CenterRight => 0.5,
            BiasLean::Right => 1.0,
        }
    }
}

impl std::fmt::Display for BiasLean {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An article carried through every pipeline stage.
///
/// Fields after `text` are zero/unknown until their stage has run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedArticle {
    pub title: String,
    pub description: String,
    pub source_name: String,
    pub url: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    /// Title followed by the lower-cased description, no separator.
    pub text: String,
    #[serde(flatten)]
    pub sentiment: PolarityScores,
    pub sentiment_label: SentimentLabel,
    /// Lean assigned by the bias annotation stage.
    pub bias_label: BiasLean,
    /// Numeric value of `bias_label`.
    pub bias_score: f64,
    pub extremity_score: f64,
    pub extremity_pct: f64,
    pub extreme: bool,
    pub summary: String,
    /// Lean re-derived while summarizing; `Unknown` when summarization failed.
    pub summary_bias: BiasLean,
    /// Source name as reported with the summary; `"unknown"` on failure.
    pub source: String,
}

impl EnrichedArticle {
    pub(crate) fn new(
        title: String,
        description: String,
        source_name: String,
        url: String,
        published_at: String,
    ) -> Self {
        let text = format!("{title}{}", description.to_lowercase());
        Self {
            title,
            description,
            source_name,
            url,
            published_at,
            text,
            sentiment: PolarityScores::default(),
            sentiment_label: SentimentLabel::default(),
            bias_label: BiasLean::default(),
            bias_score: 0.0,
            extremity_score: 0.0,
            extremity_pct: 0.0,
            extreme: false,
            summary: String::new(),
            summary_bias: BiasLean::default(),
            source: String::new(),
        }
    }
}

/// Result of analyzing one topic.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// The topic was empty; nothing was fetched.
    NoInput,
    /// The provider returned nothing, or could not be reached.
    NoArticles,
    /// Ranked, summarized articles (possibly empty after cleaning).
    Analyzed(Vec<EnrichedArticle>),
}

/// Tuning knobs for the ranking and summary stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisSettings {
    pub top_n: usize,
    pub summary_max_tokens: usize,
    pub summary_concurrency: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_n: 5,
            summary_max_tokens: 512,
            summary_concurrency: 1,
        }
    }
}

impl AnalysisSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            top_n: config.top_n,
            summary_max_tokens: config.summary_max_tokens,
            summary_concurrency: config.summary_concurrency.max(1),
        }
    }
}
