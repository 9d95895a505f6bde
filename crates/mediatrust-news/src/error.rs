use thiserror::Error;

#[derive(Debug, Error)]
pub enum NewsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("topic is empty; no request made")]
    EmptyTopic,

    #[error("unexpected HTTP status {status} from news provider")]
    UnexpectedStatus { status: u16 },

    #[error("news provider error ({code}): {message}")]
    Provider { code: String, message: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid news endpoint \"{base_url}\": {reason}")]
    InvalidEndpoint { base_url: String, reason: String },
}

impl NewsError {
    /// Returns `true` when the provider could not be reached or refused the
    /// search. Callers treat these as "no results" rather than a failure.
    ///
    /// Undecodable 200 responses, empty topics and bad endpoint configuration
    /// are not fetch failures.
    #[must_use]
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            NewsError::Http(_) | NewsError::UnexpectedStatus { .. } | NewsError::Provider { .. }
        )
    }
}
