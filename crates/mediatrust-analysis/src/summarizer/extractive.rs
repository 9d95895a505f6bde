use async_trait::async_trait;

use super::Summarizer;
use crate::error::SummarizeError;

/// Offline summarizer: the leading `max_length` words of the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractiveSummarizer;

#[async_trait]
impl Summarizer for ExtractiveSummarizer {
    fn name(&self) -> &str {
        "extractive"
    }

    async fn summarize(
        &self,
        text: &str,
        _min_length: usize,
        max_length: usize,
    ) -> Result<String, SummarizeError> {
        let words: Vec<&str> = text.split_whitespace().take(max_length).collect();
        if words.is_empty() {
            return Err(SummarizeError::EmptyText);
        }
        Ok(words.join(" "))
    }
}
