//! `analyze` command: run the pipeline for one topic and print the result.

use mediatrust_analysis::{AnalysisOutcome, Analyzer, EnrichedArticle};
use mediatrust_core::AppConfig;

const TITLE_WIDTH: usize = 48;
const SOURCE_WIDTH: usize = 22;
const SUMMARY_WIDTH: usize = 72;

/// One printed line of the results table.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TableRow {
    pub extreme: bool,
    pub title: String,
    pub bias: String,
    pub extremity_pct: f64,
    pub source: String,
    pub summary: String,
}

impl From<&EnrichedArticle> for TableRow {
    fn from(article: &EnrichedArticle) -> Self {
        Self {
            extreme: article.extreme,
            title: article.title.clone(),
            bias: article.summary_bias.to_string(),
            extremity_pct: article.extremity_pct,
            source: article.source.clone(),
            summary: article.summary.clone(),
        }
    }
}

/// Runs the analysis for `topic` and prints a table, or JSON when `json` is set.
///
/// # Errors
///
/// Returns an error if the topic is blank, the HTTP clients cannot be built,
/// or the provider answers with an unreadable body.
pub(crate) async fn run_analyze(config: &AppConfig, topic: &str, json: bool) -> anyhow::Result<()> {
    let analyzer = Analyzer::from_config(config)?;
    tracing::info!(topic, summarizer = analyzer.summarizer_name(), "starting analysis");

    let articles = match analyzer.analyze(topic).await? {
        AnalysisOutcome::NoInput => anyhow::bail!("topic must not be empty"),
        AnalysisOutcome::NoArticles => {
            if json {
                println!("{}", serde_json::json!({ "message": "No articles found" }));
            } else {
                println!("No articles found for \"{}\"", topic.trim());
            }
            return Ok(());
        }
        AnalysisOutcome::Analyzed(articles) => articles,
    };

    if json {
        let body = serde_json::json!({ "results": articles });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    if articles.is_empty() {
        println!("No usable articles for \"{}\" after cleaning", topic.trim());
        return Ok(());
    }

    let rows: Vec<TableRow> = articles.iter().map(TableRow::from).collect();
    print!("{}", format_table(&rows));
    Ok(())
}

/// Renders rows as a fixed-width table; `*` marks articles flagged extreme.
pub(crate) fn format_table(rows: &[TableRow]) -> String {
    let mut out = format!(
        "  {:<TITLE_WIDTH$}  {:<12}  {:>11}  {:<SOURCE_WIDTH$}  SUMMARY\n",
        "TITLE", "BIAS", "EXTREMITY %", "SOURCE"
    );
    for row in rows {
        out.push_str(&format!(
            "{} {:<TITLE_WIDTH$}  {:<12}  {:>11.1}  {:<SOURCE_WIDTH$}  {}\n",
            if row.extreme { '*' } else { ' ' },
            truncate(&row.title, TITLE_WIDTH),
            row.bias,
            row.extremity_pct,
            truncate(&row.source, SOURCE_WIDTH),
            truncate(&row.summary, SUMMARY_WIDTH),
        ));
    }
    out
}

/// Shortens `text` to at most `width` characters, ending in `...` when cut.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}
