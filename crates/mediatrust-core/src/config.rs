use crate::app_config::{AppConfig, Environment, SummarizerBackend};
use crate::ConfigError;

const DEFAULT_NEWS_BASE_URL: &str = "https://newsapi.org/v2/everything";
const DEFAULT_SUMMARIZER_URL: &str =
    "https://api-inference.huggingface.co/models/sshleifer/distilbart-cnn-12-6";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let news_api_key = require("NEWS_API_KEY")?;

    let env = parse_environment(&or_default("MEDIATRUST_ENV", "development"))?;

    let bind_addr = or_default("MEDIATRUST_BIND_ADDR", "0.0.0.0:5001")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("MEDIATRUST_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("MEDIATRUST_LOG_LEVEL", "info");

    let news_base_url = or_default("MEDIATRUST_NEWS_BASE_URL", DEFAULT_NEWS_BASE_URL);
    let news_sort_by = or_default("MEDIATRUST_NEWS_SORT_BY", "popularity");
    let news_page_size = parse_u32("MEDIATRUST_NEWS_PAGE_SIZE", "10")?;
    let news_lookback_days = parse_u32("MEDIATRUST_NEWS_LOOKBACK_DAYS", "7")?;
    let news_timeout_secs = parse_u64("MEDIATRUST_NEWS_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("MEDIATRUST_USER_AGENT", "mediatrust/0.1 (news-analysis)");

    let top_n = parse_usize("MEDIATRUST_TOP_N", "5")?;
    let summary_max_tokens = parse_usize("MEDIATRUST_SUMMARY_MAX_TOKENS", "512")?;
    let summary_concurrency = parse_usize("MEDIATRUST_SUMMARY_CONCURRENCY", "1")?;
    if summary_concurrency == 0 {
        return Err(invalid(
            "MEDIATRUST_SUMMARY_CONCURRENCY",
            "must be at least 1".to_string(),
        ));
    }

    let summarizer = parse_summarizer_backend(&or_default("MEDIATRUST_SUMMARIZER", "inference"))?;
    let summarizer_url = or_default("MEDIATRUST_SUMMARIZER_URL", DEFAULT_SUMMARIZER_URL);
    let summarizer_token = lookup("MEDIATRUST_SUMMARIZER_TOKEN")
        .ok()
        .filter(|t| !t.trim().is_empty());
    let summarizer_timeout_secs = parse_u64("MEDIATRUST_SUMMARIZER_TIMEOUT_SECS", "60")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        news_api_key,
        news_base_url,
        news_sort_by,
        news_page_size,
        news_lookback_days,
        news_timeout_secs,
        user_agent,
        top_n,
        summary_max_tokens,
        summary_concurrency,
        summarizer,
        summarizer_url,
        summarizer_token,
        summarizer_timeout_secs,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MEDIATRUST_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

fn parse_summarizer_backend(s: &str) -> Result<SummarizerBackend, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "inference" => Ok(SummarizerBackend::Inference),
        "extractive" => Ok(SummarizerBackend::Extractive),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MEDIATRUST_SUMMARIZER".to_string(),
            reason: format!("expected \"inference\" or \"extractive\", got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
