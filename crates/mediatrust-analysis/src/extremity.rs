//! Extremity ranking: sentiment magnitude plus lean magnitude.

use crate::types::EnrichedArticle;

/// Rounds to one decimal place, halves to the even neighbour.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Extremity in `[0.0, 2.0]` from a compound sentiment and a numeric lean.
#[must_use]
pub fn extremity_score(compound: f64, bias_score: f64) -> f64 {
    compound.abs() + bias_score.abs()
}

/// Converts an extremity score to a percentage of the maximum, one decimal.
#[must_use]
pub fn extremity_pct(score: f64) -> f64 {
    round_one_decimal(score / 2.0 * 100.0)
}

/// Scores, sorts and flags articles.
///
/// Fills `bias_score`, `extremity_score` and `extremity_pct`, then sorts by
/// descending `extremity_score`. The sort is stable, so equal scores keep
/// their incoming (fetch) order. The first `top_n` articles get
/// `extreme = true`.
#[must_use]
pub fn rank_extremity(mut articles: Vec<EnrichedArticle>, top_n: usize) -> Vec<EnrichedArticle> {
    for article in &mut articles {
        article.bias_score = article.bias_label.score();
        article.extremity_score = extremity_score(article.sentiment.compound, article.bias_score);
        article.extremity_pct = extremity_pct(article.extremity_score);
    }

    articles.sort_by(|a, b| b.extremity_score.total_cmp(&a.extremity_score));

    for (rank, article) in articles.iter_mut().enumerate() {
        article.extreme = rank < top_n;
    }

    articles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BiasLean;

    fn article(url: &str, compound: f64, lean: BiasLean) -> EnrichedArticle {
        let mut a = EnrichedArticle::new(
            format!("title {url}"),
            "desc".into(),
            "src".into(),
            url.into(),
            "p".into(),
        );
        a.sentiment.compound = compound;
        a.bias_label = lean;
        a
    }

    #[test]
    fn maximum_extremity_is_one_hundred_percent() {
        let ranked = rank_extremity(vec![article("a", 1.0, BiasLean::Right)], 5);
        assert_eq!(ranked[0].bias_score, 1.0);
        assert_eq!(ranked[0].extremity_score, 2.0);
        assert_eq!(ranked[0].extremity_pct, 100.0);
    }

    #[test]
    fn neutral_center_is_zero_percent() {
        let ranked = rank_extremity(vec![article("a", 0.0, BiasLean::Center)], 5);
        assert_eq!(ranked[0].extremity_pct, 0.0);
    }

    #[test]
    fn negative_values_use_magnitude() {
        let ranked = rank_extremity(vec![article("a", -0.5, BiasLean::Left)], 5);
        assert_eq!(ranked[0].bias_score, -1.0);
        assert_eq!(ranked[0].extremity_score, 1.5);
        assert_eq!(ranked[0].extremity_pct, 75.0);
    }

    #[test]
    fn pct_rounds_to_one_decimal() {
        assert_eq!(extremity_pct(0.6249), 31.2);
        assert_eq!(extremity_pct(0.4404), 22.0);
        assert_eq!(extremity_pct(1.2345), 61.7);
    }

    #[test]
    fn pct_rounds_exact_halves_to_even() {
        assert_eq!(extremity_pct(0.441), 22.0);
        assert_eq!(extremity_pct(0.001), 0.0);
        assert_eq!(extremity_pct(0.089), 4.4);
        assert_eq!(extremity_pct(0.025), 1.2);
    }

    #[test]
    fn pct_is_monotonic_in_score() {
        let mut previous = extremity_pct(0.0);
        for step in 1..=200 {
            let pct = extremity_pct(f64::from(step) / 100.0);
            assert!(pct >= previous, "pct decreased at step {step}");
            previous = pct;
        }
    }

    #[test]
    fn sorts_descending_and_flags_top_n() {
        let ranked = rank_extremity(
            vec![
                article("low", 0.1, BiasLean::Center),
                article("high", 0.9, BiasLean::Right),
                article("mid", 0.2, BiasLean::CenterLeft),
            ],
            2,
        );
        let urls: Vec<&str> = ranked.iter().map(|a| a.url.as_str()).collect();
        assert_eq!(urls, ["high", "mid", "low"]);
        assert!(ranked[0].extreme);
        assert!(ranked[1].extreme);
        assert!(!ranked[2].extreme);
    }

    #[test]
    fn flags_exactly_min_of_top_n_and_count() {
        for (count, top_n) in [(0, 5), (3, 5), (5, 5), (8, 5), (8, 0)] {
            let articles = (0..count)
                .map(|i| article(&i.to_string(), f64::from(i) / 10.0, BiasLean::Unknown))
                .collect();
            let ranked = rank_extremity(articles, top_n);
            let flagged = ranked.iter().filter(|a| a.extreme).count();
            assert_eq!(flagged, top_n.min(count as usize), "count={count} top_n={top_n}");

            let min_flagged = ranked
                .iter()
                .filter(|a| a.extreme)
                .map(|a| a.extremity_score)
                .fold(f64::INFINITY, f64::min);
            let max_unflagged = ranked
                .iter()
                .filter(|a| !a.extreme)
                .map(|a| a.extremity_score)
                .fold(f64::NEG_INFINITY, f64::max);
            assert!(min_flagged >= max_unflagged);
        }
    }

    #[test]
    fn ties_keep_fetch_order() {
        let ranked = rank_extremity(
            vec![
                article("first", 0.5, BiasLean::Center),
                article("top", 0.9, BiasLean::Center),
                article("second", -0.5, BiasLean::Center),
                article("third", 0.0, BiasLean::CenterRight),
            ],
            2,
        );
        let urls: Vec<&str> = ranked.iter().map(|a| a.url.as_str()).collect();
        assert_eq!(urls, ["top", "first", "second", "third"]);
        assert!(ranked[1].extreme);
        assert!(!ranked[2].extreme);
    }
}
