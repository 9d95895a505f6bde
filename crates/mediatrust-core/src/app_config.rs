use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which summarization capability the pipeline is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarizerBackend {
    /// Remote abstractive model behind a Hugging Face inference-style endpoint.
    Inference,
    /// Local leading-words summary; needs no network.
    Extractive,
}

impl std::fmt::Display for SummarizerBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummarizerBackend::Inference => write!(f, "inference"),
            SummarizerBackend::Extractive => write!(f, "extractive"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub news_api_key: String,
    pub news_base_url: String,
    pub news_sort_by: String,
    pub news_page_size: u32,
    pub news_lookback_days: u32,
    pub news_timeout_secs: u64,
    pub user_agent: String,
    pub top_n: usize,
    pub summary_max_tokens: usize,
    pub summary_concurrency: usize,
    pub summarizer: SummarizerBackend,
    pub summarizer_url: String,
    pub summarizer_token: Option<String>,
    pub summarizer_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("news_api_key", &"[redacted]")
            .field("news_base_url", &self.news_base_url)
            .field("news_sort_by", &self.news_sort_by)
            .field("news_page_size", &self.news_page_size)
            .field("news_lookback_days", &self.news_lookback_days)
            .field("news_timeout_secs", &self.news_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("top_n", &self.top_n)
            .field("summary_max_tokens", &self.summary_max_tokens)
            .field("summary_concurrency", &self.summary_concurrency)
            .field("summarizer", &self.summarizer)
            .field("summarizer_url", &self.summarizer_url)
            .field(
                "summarizer_token",
                &self.summarizer_token.as_ref().map(|_| "[redacted]"),
            )
            .field("summarizer_timeout_secs", &self.summarizer_timeout_secs)
            .finish()
    }
}
