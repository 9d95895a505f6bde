//! Client for a Hugging Face inference-style summarization endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use mediatrust_core::AppConfig;

use super::Summarizer;
use crate::error::SummarizeError;

const CONNECT_TIMEOUT_SECS: u64 = 10;
/// Response bodies longer than this are truncated in error messages.
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Clone)]
pub struct InferenceSettings {
    pub url: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl InferenceSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            url: config.summarizer_url.clone(),
            token: config.summarizer_token.clone(),
            timeout_secs: config.summarizer_timeout_secs,
            user_agent: config.user_agent.clone(),
        }
    }
}

impl std::fmt::Debug for InferenceSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceSettings")
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "[redacted]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[derive(Serialize)]
struct SummarizeRequest<'a> {
    inputs: &'a str,
    parameters: SummarizeParameters,
}

#[derive(Serialize)]
struct SummarizeParameters {
    min_length: usize,
    max_length: usize,
    do_sample: bool,
}

#[derive(Deserialize)]
struct SummaryCandidate {
    summary_text: String,
}

/// Abstractive summarizer backed by a remote model.
///
/// Sends greedy (non-sampled) requests and keeps the first candidate.
#[derive(Debug)]
pub struct InferenceSummarizer {
    client: Client,
    settings: InferenceSettings,
}

impl InferenceSummarizer {
    /// # Errors
    ///
    /// Returns [`SummarizeError::Http`] if the `reqwest::Client` cannot be
    /// constructed.
    pub fn new(settings: InferenceSettings) -> Result<Self, SummarizeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(
                CONNECT_TIMEOUT_SECS.min(settings.timeout_secs.max(1)),
            ))
            .user_agent(settings.user_agent.as_str())
            .build()?;
        Ok(Self { client, settings })
    }
}

#[async_trait]
impl Summarizer for InferenceSummarizer {
    fn name(&self) -> &str {
        "inference"
    }

    async fn summarize(
        &self,
        text: &str,
        min_length: usize,
        max_length: usize,
    ) -> Result<String, SummarizeError> {
        let request = SummarizeRequest {
            inputs: text,
            parameters: SummarizeParameters {
                min_length,
                max_length,
                do_sample: false,
            },
        };

        let mut builder = self.client.post(&self.settings.url).json(&request);
        if let Some(token) = &self.settings.token {
            builder = builder.bearer_auth(token);
        }
        let response = builder.send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SummarizeError::UnexpectedStatus {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let candidates: Vec<SummaryCandidate> = serde_json::from_str(&body)?;
        let first = candidates
            .into_iter()
            .next()
            .ok_or(SummarizeError::EmptySummary)?;

        tracing::debug!(
            min_length,
            max_length,
            chars = first.summary_text.len(),
            "received summary"
        );
        Ok(first.summary_text)
    }
}
