use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use mediatrust_analysis::{AnalysisOutcome, BiasLean, EnrichedArticle, SentimentLabel};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

pub(super) const MISSING_TOPIC: &str = "Missing 'topic' in request";
pub(super) const NO_ARTICLES: &str = "No articles found";

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeRequest {
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct AnalyzeResultItem {
    pub title: String,
    pub summary: String,
    pub sentiment_label: SentimentLabel,
    pub bias_label: BiasLean,
    pub extremity_pct: f64,
    pub url: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
}

impl From<EnrichedArticle> for AnalyzeResultItem {
    fn from(article: EnrichedArticle) -> Self {
        Self {
            title: article.title,
            summary: article.summary,
            sentiment_label: article.sentiment_label,
            bias_label: article.bias_label,
            extremity_pct: article.extremity_pct,
            url: article.url,
            published_at: article.published_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(super) enum AnalyzeResponse {
    Message { message: &'static str },
    Results { results: Vec<AnalyzeResultItem> },
}

pub(super) async fn analyze_topic(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let topic = match payload {
        Ok(Json(AnalyzeRequest { topic: Some(topic) })) if !topic.trim().is_empty() => topic,
        Ok(_) => return Err(ApiError::bad_request(MISSING_TOPIC)),
        Err(rejection) => {
            tracing::debug!(request_id = %req_id.0, error = %rejection, "unreadable analyze body");
            return Err(ApiError::bad_request(MISSING_TOPIC));
        }
    };

    let outcome = state.analyzer.analyze(&topic).await.map_err(|e| {
        tracing::error!(request_id = %req_id.0, topic = %topic, error = %e, "analysis failed");
        ApiError::internal(e.to_string())
    })?;

    match outcome {
        AnalysisOutcome::NoInput => Err(ApiError::bad_request(MISSING_TOPIC)),
        AnalysisOutcome::NoArticles => Ok(Json(AnalyzeResponse::Message {
            message: NO_ARTICLES,
        })),
        AnalysisOutcome::Analyzed(articles) => {
            tracing::info!(
                request_id = %req_id.0,
                topic = %topic,
                count = articles.len(),
                "analysis served"
            );
            Ok(Json(AnalyzeResponse::Results {
                results: articles.into_iter().map(AnalyzeResultItem::from).collect(),
            }))
        }
    }
}
