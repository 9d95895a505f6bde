//! Record cleaning ahead of scoring.

use std::collections::HashSet;

use mediatrust_news::ArticleRecord;

use crate::types::EnrichedArticle;

/// Drops records without a usable title or description and removes
/// duplicate `(title, url)` pairs, keeping the first occurrence.
///
/// Surviving records keep their relative order. Title and description are
/// kept as sent; only the emptiness check trims.
#[must_use]
pub fn clean_articles(records: Vec<ArticleRecord>) -> Vec<EnrichedArticle> {
    let total = records.len();
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(total);

    let cleaned: Vec<EnrichedArticle> = records
        .into_iter()
        .filter_map(|record| {
            let title = record.title.filter(|t| !t.trim().is_empty())?;
            let description = record.description.filter(|d| !d.trim().is_empty())?;
            if !seen.insert((title.clone(), record.url.clone())) {
                return None;
            }
            Some(EnrichedArticle::new(
                title,
                description,
                record.source_name,
                record.url,
                record.published_at,
            ))
        })
        .collect();

    if cleaned.len() < total {
        tracing::debug!(
            total,
            kept = cleaned.len(),
            "dropped incomplete or duplicate articles"
        );
    }

    cleaned
}
