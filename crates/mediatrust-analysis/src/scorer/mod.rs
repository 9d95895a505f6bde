//! Sentiment scoring stage.

mod lexicon;
mod vader;

pub use vader::VaderScorer;

use crate::types::{EnrichedArticle, PolarityScores, SentimentLabel};

/// Compound score at or above which text is positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which text is negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Anything that can turn text into polarity scores.
pub trait PolarityScorer: Send + Sync {
    fn score(&self, text: &str) -> PolarityScores;
}

/// Buckets a compound score into a sentiment label.
#[must_use]
pub fn label_sentiment(compound: f64) -> SentimentLabel {
    if compound >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Scores each article's `text` and sets its sentiment fields.
pub fn score_sentiment(articles: &mut [EnrichedArticle], scorer: &dyn PolarityScorer) {
    for article in articles.iter_mut() {
        article.sentiment = scorer.score(&article.text);
        article.sentiment_label = label_sentiment(article.sentiment.compound);
    }
}
