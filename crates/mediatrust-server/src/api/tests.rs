use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mediatrust_analysis::{
    AnalysisSettings, Analyzer, SummarizeError, Summarizer, VaderScorer, SUMMARY_UNAVAILABLE,
};
use mediatrust_news::{NewsClient, NewsSettings};

use super::analyze::{MISSING_TOPIC, NO_ARTICLES};
use super::form::escape_html;
use super::{build_app, AppState};

const SEARCH_PATH: &str = "/v2/everything";

struct StubSummarizer;

#[async_trait]
impl Summarizer for StubSummarizer {
    fn name(&self) -> &str {
        "stub"
    }

    async fn summarize(
        &self,
        text: &str,
        _min_length: usize,
        _max_length: usize,
    ) -> Result<String, SummarizeError> {
        if text.contains("unsummarizable") {
            return Err(SummarizeError::EmptySummary);
        }
        Ok(format!("Summary of {}", text.split_whitespace().next().unwrap_or("")))
    }
}

fn app(server: &MockServer) -> Router {
    let news = NewsClient::new(NewsSettings {
        base_url: format!("{}{SEARCH_PATH}", server.uri()),
        api_key: "test-key".to_owned(),
        sort_by: "popularity".to_owned(),
        page_size: 10,
        lookback_days: 7,
        timeout_secs: 5,
        user_agent: "mediatrust-test/0.1".to_owned(),
    })
    .expect("news client");
    let analyzer = Analyzer::new(
        news,
        Arc::new(VaderScorer::new()),
        Arc::new(StubSummarizer),
        AnalysisSettings::default(),
    );
    build_app(AppState {
        analyzer: Arc::new(analyzer),
    })
}

async fn mount_search(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}

fn search_body(articles: &Value) -> Value {
    let total = articles.as_array().map_or(0, Vec::len);
    json!({"status": "ok", "totalResults": total, "articles": articles})
}

fn post_analyze(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("json parse")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

// -------------------------------------------------------------------------
// Status and middleware
// -------------------------------------------------------------------------

#[tokio::test]
async fn root_reports_live() {
    let server = MockServer::start().await;
    let response = app(&server).oneshot(get("/")).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"status": "ok", "message": "MediaTrust API is live"})
    );
}

#[tokio::test]
async fn request_id_is_echoed_or_generated() {
    let server = MockServer::start().await;

    let echoed = app(&server)
        .oneshot(
            Request::builder()
                .uri("/")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(
        echoed.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("req-42")
    );

    let generated = app(&server).oneshot(get("/")).await.expect("response");
    let id = generated
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("generated id");
    assert!(uuid::Uuid::parse_str(id).is_ok(), "not a uuid: {id}");
}

#[test]
fn api_error_bad_request_maps_to_400() {
    use axum::response::IntoResponse;
    let response = super::ApiError::bad_request("nope").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// -------------------------------------------------------------------------
// POST /analyze: input validation
// -------------------------------------------------------------------------

#[tokio::test]
async fn empty_topic_is_bad_request_without_fetching() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    for body in [r#"{"topic": ""}"#, r#"{"topic": "   "}"#, "{}", r#"{"topic": null}"#] {
        let response = app(&server)
            .oneshot(post_analyze(body))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(body_json(response).await, json!({"error": MISSING_TOPIC}));
    }
}

#[tokio::test]
async fn unparseable_body_is_bad_request() {
    let server = MockServer::start().await;
    let response = app(&server)
        .oneshot(post_analyze("topic=Tesla"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": MISSING_TOPIC}));
}

// -------------------------------------------------------------------------
// POST /analyze: outcomes
// -------------------------------------------------------------------------

#[tokio::test]
async fn zero_results_reports_no_articles() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        ResponseTemplate::new(200).set_body_json(search_body(&json!([]))),
    )
    .await;

    let response = app(&server)
        .oneshot(post_analyze(r#"{"topic": "Tesla"}"#))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"message": NO_ARTICLES}));
}

#[tokio::test]
async fn provider_failure_reports_no_articles() {
    let server = MockServer::start().await;
    mount_search(&server, ResponseTemplate::new(500)).await;

    let response = app(&server)
        .oneshot(post_analyze(r#"{"topic": "Tesla"}"#))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"message": NO_ARTICLES}));
}

#[tokio::test]
async fn malformed_provider_body_is_internal_error() {
    let server = MockServer::start().await;
    mount_search(&server, ResponseTemplate::new(200).set_body_string("<html>")).await;

    let response = app(&server)
        .oneshot(post_analyze(r#"{"topic": "Tesla"}"#))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn success_returns_ranked_results_with_public_fields() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        ResponseTemplate::new(200).set_body_json(search_body(&json!([
            {
                "source": {"id": null, "name": "Reuters"},
                "title": "Plant opens",
                "description": "Production starts",
                "url": "https://reuters.com/1",
                "publishedAt": "2025-03-13T08:00:00Z"
            },
            {
                "source": {"id": null, "name": "Fox News"},
                "title": "Terrible crash",
                "description": "Disaster strikes",
                "url": "https://fox.com/2",
                "publishedAt": "2025-03-12T08:00:00Z"
            },
            {
                "source": {"id": null, "name": "CNN"},
                "title": "Missing description",
                "description": null,
                "url": "https://cnn.com/3",
                "publishedAt": "2025-03-12T08:00:00Z"
            }
        ]))),
    )
    .await;

    let response = app(&server)
        .oneshot(post_analyze(r#"{"topic": "Tesla"}"#))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let results = json["results"].as_array().expect("results array");
    assert_eq!(results.len(), 2);

    let first = &results[0];
    assert_eq!(first["url"], "https://fox.com/2");
    assert_eq!(first["title"], "Terrible crash");
    assert_eq!(first["summary"], "Summary of Terrible");
    assert_eq!(first["sentiment_label"], "negative");
    assert_eq!(first["bias_label"], "right");
    assert_eq!(first["publishedAt"], "2025-03-12T08:00:00Z");
    assert!(first["extremity_pct"].as_f64().is_some_and(|p| p > 50.0));

    let keys: Vec<&str> = first
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys.len(), 7, "unexpected fields: {keys:?}");

    assert_eq!(results[1]["bias_label"], "center");
    assert_eq!(results[1]["extremity_pct"], 0.0);
}

#[tokio::test]
async fn summarizer_failure_yields_sentinel_summary() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        ResponseTemplate::new(200).set_body_json(search_body(&json!([{
            "source": {"id": null, "name": "NPR"},
            "title": "Story",
            "description": "unsummarizable text",
            "url": "https://npr.org/1",
            "publishedAt": "2025-03-13T08:00:00Z"
        }]))),
    )
    .await;

    let response = app(&server)
        .oneshot(post_analyze(r#"{"topic": "Tesla"}"#))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["results"][0]["summary"], SUMMARY_UNAVAILABLE);
    assert_eq!(json["results"][0]["bias_label"], "center-left");
}

// -------------------------------------------------------------------------
// GET /ui
// -------------------------------------------------------------------------

#[tokio::test]
async fn form_without_topic_renders_input_only() {
    let server = MockServer::start().await;
    let response = app(&server).oneshot(get("/ui")).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("name=\"topic\""));
    assert!(!html.contains("<table>"));
}

#[tokio::test]
async fn form_renders_escaped_results_table() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        ResponseTemplate::new(200).set_body_json(search_body(&json!([{
            "source": {"id": null, "name": "CNN"},
            "title": "<script>alert(1)</script>",
            "description": "Markets & more",
            "url": "https://cnn.com/x",
            "publishedAt": "2025-03-13T08:00:00Z"
        }]))),
    )
    .await;

    let response = app(&server)
        .oneshot(get("/ui?topic=Tesla%20%3Cb%3E"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    for column in ["Title", "Summary", "Bias", "Extremity %", "Source"] {
        assert!(html.contains(&format!("<th>{column}</th>")), "missing {column}");
    }
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("value=\"Tesla &lt;b&gt;\""));
    assert!(html.contains("<td>left</td>"));
    assert!(html.contains("<td>CNN</td>"));
}

#[tokio::test]
async fn form_reports_no_articles() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        ResponseTemplate::new(200).set_body_json(search_body(&json!([]))),
    )
    .await;

    let response = app(&server)
        .oneshot(get("/ui?topic=Tesla"))
        .await
        .expect("response");
    let html = body_text(response).await;
    assert!(html.contains(NO_ARTICLES));
}

#[test]
fn escape_html_covers_markup_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}
