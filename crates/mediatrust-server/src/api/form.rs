//! Single-input HTML form over the analysis pipeline.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Extension,
};
use serde::Deserialize;

use mediatrust_analysis::{AnalysisOutcome, EnrichedArticle};

use crate::middleware::RequestId;

use super::analyze::NO_ARTICLES;
use super::AppState;

const COLUMNS: [&str; 5] = ["Title", "Summary", "Bias", "Extremity %", "Source"];

#[derive(Debug, Deserialize)]
pub(super) struct FormQuery {
    #[serde(default)]
    pub topic: Option<String>,
}

pub(super) async fn render_form(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<FormQuery>,
) -> (StatusCode, Html<String>) {
    let topic = query.topic.unwrap_or_default();
    if topic.trim().is_empty() {
        return (StatusCode::OK, Html(page(&topic, "")));
    }

    match state.analyzer.analyze(&topic).await {
        Ok(AnalysisOutcome::Analyzed(articles)) => {
            (StatusCode::OK, Html(page(&topic, &results_table(&articles))))
        }
        Ok(AnalysisOutcome::NoArticles | AnalysisOutcome::NoInput) => (
            StatusCode::OK,
            Html(page(&topic, &format!("<p>{NO_ARTICLES}</p>"))),
        ),
        Err(e) => {
            tracing::error!(request_id = %req_id.0, topic = %topic, error = %e, "form analysis failed");
            let notice = format!("<p class=\"error\">{}</p>", escape_html(&e.to_string()));
            (StatusCode::INTERNAL_SERVER_ERROR, Html(page(&topic, &notice)))
        }
    }
}

/// Escapes text for use in HTML element content and quoted attributes.
pub(super) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(topic: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>MediaTrust</title>\n</head>\n<body>\n<h1>MediaTrust</h1>\n\
         <form method=\"get\" action=\"/ui\">\n\
         <label for=\"topic\">Enter a topic</label>\n\
         <input id=\"topic\" name=\"topic\" type=\"text\" placeholder=\"e.g., Tesla\" value=\"{}\">\n\
         </form>\n{body}\n</body>\n</html>\n",
        escape_html(topic)
    )
}

fn results_table(articles: &[EnrichedArticle]) -> String {
    let mut html = String::from("<table>\n<thead><tr>");
    for column in COLUMNS {
        html.push_str(&format!("<th>{column}</th>"));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for article in articles {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td><td>{}</td></tr>\n",
            escape_html(&article.title),
            escape_html(&article.summary),
            article.summary_bias,
            article.extremity_pct,
            escape_html(&article.source),
        ));
    }
    html.push_str("</tbody>\n</table>");
    html
}
