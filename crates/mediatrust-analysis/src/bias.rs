//! Source political-lean lookup.

use crate::types::{BiasLean, EnrichedArticle};

/// Known sources, keyed by lower-cased name.
pub const SOURCE_BIAS: &[(&str, BiasLean)] = &[
    ("fox news", BiasLean::Right),
    ("breitbart", BiasLean::Right),
    ("new york post", BiasLean::Right),
    ("the wall street journal", BiasLean::CenterRight),
    ("reuters", BiasLean::Center),
    ("associated press", BiasLean::Center),
    ("bloomberg", BiasLean::Center),
    ("npr", BiasLean::CenterLeft),
    ("cnn", BiasLean::Left),
    ("msnbc", BiasLean::Left),
    ("the new york times", BiasLean::Left),
    ("the washington post", BiasLean::Left),
    ("the guardian", BiasLean::Left),
    ("bbc news", BiasLean::Center),
    ("sky news", BiasLean::CenterRight),
    ("the telegraph", BiasLean::Right),
    ("the times", BiasLean::CenterRight),
    ("daily mail", BiasLean::Right),
    ("the independent", BiasLean::CenterLeft),
    ("the sun", BiasLean::Right),
    ("financial times", BiasLean::Center),
];

/// Looks up a source's lean. Matching is exact after trimming and
/// lower-casing; anything else is [`BiasLean::Unknown`].
#[must_use]
pub fn lean_for_source(source_name: &str) -> BiasLean {
    let key = source_name.trim().to_lowercase();
    SOURCE_BIAS
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(BiasLean::Unknown, |&(_, lean)| lean)
}

/// Sets `bias_label` on every article from its source name.
pub fn annotate_bias(articles: &mut [EnrichedArticle]) {
    for article in articles.iter_mut() {
        article.bias_label = lean_for_source(&article.source_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_twenty_one_unique_sources() {
        let mut names: Vec<&str> = SOURCE_BIAS.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 21);
    }

    #[test]
    fn table_keys_are_lowercase_and_trimmed() {
        for (name, _) in SOURCE_BIAS {
            assert_eq!(*name, name.trim().to_lowercase());
        }
    }

    #[test]
    fn lookup_is_case_and_whitespace_insensitive() {
        assert_eq!(lean_for_source(" CNN "), BiasLean::Left);
        assert_eq!(lean_for_source("Fox News"), BiasLean::Right);
        assert_eq!(lean_for_source("\tThe Wall Street Journal\n"), BiasLean::CenterRight);
        assert_eq!(lean_for_source("NPR"), BiasLean::CenterLeft);
        assert_eq!(lean_for_source("BBC News"), BiasLean::Center);
    }

    #[test]
    fn unknown_and_partial_names_map_to_unknown() {
        assert_eq!(lean_for_source("TechCrunch"), BiasLean::Unknown);
        assert_eq!(lean_for_source("CNN Business"), BiasLean::Unknown);
        assert_eq!(lean_for_source("Times"), BiasLean::Unknown);
        assert_eq!(lean_for_source(""), BiasLean::Unknown);
        assert_eq!(lean_for_source("N/A"), BiasLean::Unknown);
    }

    #[test]
    fn annotate_sets_every_label() {
        let mut articles = vec![
            EnrichedArticle::new(
                "a".into(),
                "d".into(),
                "Breitbart".into(),
                "1".into(),
                "p".into(),
            ),
            EnrichedArticle::new("b".into(), "d".into(), "Wired".into(), "2".into(), "p".into()),
        ];
        annotate_bias(&mut articles);
        assert_eq!(articles[0].bias_label, BiasLean::Right);
        assert_eq!(articles[1].bias_label, BiasLean::Unknown);
    }
}
