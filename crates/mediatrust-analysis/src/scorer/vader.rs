//! Rule-based polarity scorer in the style of VADER.
//!
//! Each token with a lexicon valence is adjusted for nearby boosters,
//! negations, ALL-CAPS emphasis and a contrastive "but", then the sum is
//! amplified by `!`/`?` punctuation and normalized into `[-1.0, 1.0]`.

use std::collections::HashMap;

use super::lexicon::{BOOSTERS, C_INCR, LEXICON, NEGATE, N_SCALAR};
use super::PolarityScorer;
use crate::types::PolarityScores;

/// Normalization constant approximating the maximum expected raw sum.
const ALPHA: f64 = 15.0;

#[derive(Debug, Clone)]
pub struct VaderScorer {
    lexicon: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl VaderScorer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
        }
    }

    /// Scores one text.
    #[must_use]
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return PolarityScores::default();
        }
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_diff = allcap_differential(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for (i, word) in lowered.iter().enumerate() {
            let word = word.as_str();
            let kind_of = word == "kind" && lowered.get(i + 1).is_some_and(|next| next == "of");
            if self.boosters.contains_key(word) || kind_of {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.valence_at(&tokens, &lowered, i, cap_diff));
        }

        but_check(&lowered, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn in_lexicon(&self, word: &str) -> bool {
        self.lexicon.contains_key(word)
    }

    fn valence_at(&self, tokens: &[&str], lowered: &[String], i: usize, cap_diff: bool) -> f64 {
        let Some(&base) = self.lexicon.get(lowered[i].as_str()) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" directly before another sentiment word acts as a negator only.
        if lowered[i] == "no" && lowered.get(i + 1).is_some_and(|next| self.in_lexicon(next)) {
            valence = 0.0;
        }
        let preceded_by_no = (i > 0 && lowered[i - 1] == "no")
            || (i > 1 && lowered[i - 2] == "no")
            || (i > 2 && lowered[i - 3] == "no" && matches!(lowered[i - 1].as_str(), "or" | "nor"));
        if preceded_by_no {
            valence = base * N_SCALAR;
        }

        if cap_diff && is_upper(tokens[i]) {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for distance in 0..3 {
            if i <= distance {
                break;
            }
            let prior = i - (distance + 1);
            if self.in_lexicon(&lowered[prior]) {
                continue;
            }
            let mut scalar = self.scalar_inc_dec(tokens[prior], &lowered[prior], valence, cap_diff);
            if distance == 1 {
                scalar *= 0.95;
            } else if distance == 2 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = negation_check(valence, lowered, distance, i);
        }

        least_check(valence, lowered, i, |w| self.in_lexicon(w))
    }

    /// Booster contribution of `token` toward a word with `valence`.
    fn scalar_inc_dec(&self, token: &str, lowered: &str, valence: f64, cap_diff: bool) -> f64 {
        let Some(&boost) = self.boosters.get(lowered) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -boost } else { boost };
        if cap_diff && is_upper(token) {
            if valence > 0.0 {
                scalar += C_INCR;
            } else {
                scalar -= C_INCR;
            }
        }
        scalar
    }
}

impl PolarityScorer for VaderScorer {
    fn score(&self, text: &str) -> PolarityScores {
        self.polarity_scores(text)
    }
}

/// Splits on whitespace and strips surrounding ASCII punctuation, unless
/// stripping would leave two characters or fewer (keeps emoticons like `:)`).
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                token
            } else {
                stripped
            }
        })
        .collect()
}

fn is_upper(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}

/// True when some, but not all, tokens are ALL CAPS.
fn allcap_differential(tokens: &[&str]) -> bool {
    let caps = tokens.iter().filter(|t| is_upper(t)).count();
    caps > 0 && caps < tokens.len()
}

fn is_negated(word: &str) -> bool {
    NEGATE.contains(&word) || word.contains("n't")
}

fn negation_check(valence: f64, lowered: &[String], distance: usize, i: usize) -> f64 {
    let at = |back: usize| lowered[i - back].as_str();
    match distance {
        0 => {
            if is_negated(at(1)) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if at(2) == "never" && matches!(at(1), "so" | "this") {
                return valence * 1.25;
            }
            if at(2) == "without" && at(1) == "doubt" {
                return valence;
            }
            if is_negated(at(2)) {
                return valence * N_SCALAR;
            }
        }
        _ => {
            if at(3) == "never" && (matches!(at(2), "so" | "this") || matches!(at(1), "so" | "this"))
            {
                return valence * 1.25;
            }
            if at(3) == "without" && (at(2) == "doubt" || at(1) == "doubt") {
                return valence;
            }
            if is_negated(at(3)) {
                return valence * N_SCALAR;
            }
        }
    }
    valence
}

/// "least" before a sentiment word flips it, except in "at least"/"very least".
fn least_check(valence: f64, lowered: &[String], i: usize, in_lexicon: impl Fn(&str) -> bool) -> f64 {
    if i == 0 {
        return valence;
    }
    let prev = lowered[i - 1].as_str();
    if prev != "least" || in_lexicon(prev) {
        return valence;
    }
    if i > 1 && matches!(lowered[i - 2].as_str(), "at" | "very") {
        return valence;
    }
    valence * N_SCALAR
}

/// Halves sentiment before the first "but" and boosts it after.
fn but_check(lowered: &[String], sentiments: &mut [f64]) {
    let Some(but) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (index, sentiment) in sentiments.iter_mut().enumerate() {
        if index < but {
            *sentiment *= 0.5;
        } else if index > but {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4);
    let questions = text.matches('?').count();
    #[allow(clippy::cast_precision_loss)]
    let ep = exclamations as f64 * 0.292;
    #[allow(clippy::cast_precision_loss)]
    let qm = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * 0.18,
        _ => 0.96,
    };
    ep + qm
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    let emphasis = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    PolarityScores {
        compound: round_to(compound, 4),
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
    }
}

#[cfg(test)]
#[path = "vader_test.rs"]
mod tests;
