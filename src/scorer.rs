//! Window-based lexicon scorer
//!
//! # Scoring Formula
//!
//! ```text
//! tokens   = split_whitespace(lowercase(text) with non-alphanumerics -> ' ')
//! modifier = product of intensifier factors at positions i-2 and i-1
//! sum      = Σ base(tokᵢ) × modifierᵢ      over lexicon tokens
//! tally    = count of lexicon tokens       (neutral words included)
//! score    = clamp(sum / tally, -1, 1)     (0 when tally = 0)
//! ```
//!
//! Labels: `score > 0.1` positive, `score < -0.1` negative, otherwise neutral.
//!
//! # Example
//!
//! `"not very good"` → `good` (+1) sees `not` (-1) and `very` (1.5) in its
//! window, so sum = -1.5, tally = 1, score = clamp(-1.5) = -1 (negative).

use crate::lexicon::{IntensifierTable, Lexicon, Polarity};
use crate::models::ScoreResult;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// Number of preceding tokens inspected for intensifiers
pub const LOOKBACK: usize = 2;

lazy_static! {
    /// Anything that is not a letter, combining mark, digit or whitespace
    static ref NON_WORD_PATTERN: Regex = Regex::new(r"[^\p{L}\p{M}\p{N}\s]").unwrap();
}

/// Lower-case `text` and turn punctuation into spaces.
///
/// Every stripped character becomes its own space, so adjacent words are
/// never merged (`"good,bad"` → `"good bad"`).
#[must_use]
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();

    // Fast path: nothing to strip
    if !NON_WORD_PATTERN.is_match(&lower) {
        return lower;
    }

    NON_WORD_PATTERN.replace_all(&lower, " ").into_owned()
}

/// Split normalized text into non-empty tokens, preserving order.
#[must_use]
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// One lexicon hit found while scanning
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenMatch {
    /// Index in the token sequence
    pub position: usize,
    pub token: String,
    pub polarity: Polarity,
    pub modifier: f64,
    /// `polarity.weight() * modifier`
    pub contribution: f64,
}

/// Full trace of a scoring run, for `--explain` style output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub result: ScoreResult,
    pub tokens: usize,
    pub matches: Vec<TokenMatch>,
    /// Sum of contributions before normalization
    pub raw_sum: f64,
    /// Number of lexicon tokens, neutral words included
    pub tally: usize,
}

/// Scores text against an injected lexicon and intensifier table
#[derive(Debug, Clone, Default)]
pub struct SentimentScorer {
    lexicon: Lexicon,
    intensifiers: IntensifierTable,
}

impl SentimentScorer {
    pub fn new(lexicon: Lexicon, intensifiers: IntensifierTable) -> Self {
        Self {
            lexicon,
            intensifiers,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn intensifiers(&self) -> &IntensifierTable {
        &self.intensifiers
    }

    /// Score a single text. Total over all inputs.
    pub fn analyze(&self, text: &str) -> ScoreResult {
        if text.trim().is_empty() {
            return ScoreResult::neutral();
        }

        let normalized = normalize(text);
        let tokens = tokenize(&normalized);

        let mut sum = 0.0;
        let mut tally = 0usize;
        self.scan(&tokens, |_, polarity, modifier| {
            sum += polarity.weight() * modifier;
            tally += 1;
        });

        ScoreResult::from_score(normalized_score(sum, tally))
    }

    /// Score a single text and keep every intermediate value.
    pub fn analyze_detailed(&self, text: &str) -> ScoreBreakdown {
        if text.trim().is_empty() {
            return ScoreBreakdown {
                result: ScoreResult::neutral(),
                tokens: 0,
                matches: Vec::new(),
                raw_sum: 0.0,
                tally: 0,
            };
        }

        let normalized = normalize(text);
        let tokens = tokenize(&normalized);

        let mut matches = Vec::new();
        self.scan(&tokens, |position, polarity, modifier| {
            matches.push(TokenMatch {
                position,
                token: tokens[position].to_string(),
                polarity,
                modifier,
                contribution: polarity.weight() * modifier,
            });
        });

        let raw_sum: f64 = matches.iter().map(|m| m.contribution).sum();
        let tally = matches.len();

        ScoreBreakdown {
            result: ScoreResult::from_score(normalized_score(raw_sum, tally)),
            tokens: tokens.len(),
            matches,
            raw_sum,
            tally,
        }
    }

    /// Visit every lexicon token with its position, polarity and modifier.
    fn scan<F>(&self, tokens: &[&str], mut visit: F)
    where
        F: FnMut(usize, Polarity, f64),
    {
        for (i, token) in tokens.iter().enumerate() {
            let Some(polarity) = self.lexicon.polarity(token) else {
                continue;
            };
            // Saturate so huge factors can never produce inf - inf
            let modifier = self.modifier_at(tokens, i).clamp(f64::MIN, f64::MAX);
            visit(i, polarity, modifier);
        }
    }

    /// Product of intensifier factors in the window before `index`.
    fn modifier_at(&self, tokens: &[&str], index: usize) -> f64 {
        let start = index.saturating_sub(LOOKBACK);
        tokens[start..index]
            .iter()
            .filter_map(|t| self.intensifiers.factor(t))
            .product()
    }
}

fn normalized_score(sum: f64, tally: usize) -> f64 {
    if tally == 0 || sum.is_nan() {
        0.0
    } else {
        sum / tally as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconBuilder;
    use crate::models::Sentiment;

    fn scorer() -> SentimentScorer {
        SentimentScorer::default()
    }

    #[test]
    fn test_normalize_strips_punctuation_without_merging() {
        assert_eq!(normalize("Good,BAD!"), "good bad ");
        assert_eq!(normalize("plain words"), "plain words");
        assert_eq!(normalize("snake_case"), "snake case");
        assert_eq!(normalize("Café 42"), "café 42");
    }

    #[test]
    fn test_normalize_keeps_combining_marks() {
        // U+093E is a spacing combining mark, part of the word
        assert_eq!(normalize("नाम"), "नाम");
        assert_eq!(normalize("नाम!"), "नाम ");
    }

    #[test]
    fn test_trailing_punctuation_does_not_change_score() {
        let mut builder = LexiconBuilder::new();
        builder.insert("नाम", Polarity::Positive).unwrap();
        let scorer = SentimentScorer::new(builder.build(), IntensifierTable::empty());

        assert_eq!(scorer.analyze("नाम").score, 1.0);
        assert_eq!(scorer.analyze("नाम!"), scorer.analyze("नाम"));
        assert_eq!(scorer.analyze("Café!"), scorer.analyze("Café"));
    }

    #[test]
    fn test_huge_factors_stay_in_range() {
        let scorer = SentimentScorer::new(
            Lexicon::default(),
            IntensifierTable::with_overrides([("super", 1e200)]).unwrap(),
        );

        let result = scorer.analyze("super super good super super bad");
        assert_eq!(result, ScoreResult::neutral());

        let result = scorer.analyze("super super good");
        assert_eq!(result.score, 1.0);

        let breakdown = scorer.analyze_detailed("super super good super super bad");
        assert!(breakdown.matches.iter().all(|m| m.contribution.is_finite()));
        assert_eq!(breakdown.result, ScoreResult::neutral());
    }

    #[test]
    fn test_tokenize_drops_empty_tokens() {
        assert_eq!(tokenize("  not   good \n"), vec!["not", "good"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_empty_input_is_neutral() {
        assert_eq!(scorer().analyze(""), ScoreResult::neutral());
        assert_eq!(scorer().analyze("   \t\n"), ScoreResult::neutral());
    }

    #[test]
    fn test_single_positive_word() {
        let result = scorer().analyze("great");
        assert_eq!(result.label, Sentiment::Positive);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_negation_flips_sign() {
        let result = scorer().analyze("not good");
        assert_eq!(result.label, Sentiment::Negative);
        assert_eq!(result.score, -1.0);
    }

    #[test]
    fn test_intensifiers_multiply_then_clamp() {
        let breakdown = scorer().analyze_detailed("very very good");
        assert_eq!(breakdown.matches.len(), 1);
        assert!((breakdown.matches[0].modifier - 2.25).abs() < 1e-12);
        assert_eq!(breakdown.result.score, 1.0);
        assert_eq!(breakdown.result.label, Sentiment::Positive);
    }

    #[test]
    fn test_lookback_is_two_tokens() {
        // "not" sits three tokens before "good" and is out of the window
        let result = scorer().analyze("not the app good");
        assert_eq!(result.score, 1.0);

        let result = scorer().analyze("not app good");
        assert_eq!(result.score, -1.0);
    }

    #[test]
    fn test_lookback_clipped_at_start() {
        let breakdown = scorer().analyze_detailed("good");
        assert_eq!(breakdown.matches[0].modifier, 1.0);
    }

    #[test]
    fn test_dampening_factor() {
        // somewhat (0.8) × hardly (-0.6) = -0.48
        let result = scorer().analyze("somewhat hardly helpful");
        assert!((result.score + 0.48).abs() < 1e-12);
        assert_eq!(result.label, Sentiment::Negative);
    }

    #[test]
    fn test_neutral_words_count_toward_tally() {
        // sum = 1, tally = 2
        let result = scorer().analyze("great, okay");
        assert!((result.score - 0.5).abs() < 1e-12);
        assert_eq!(result.label, Sentiment::Positive);

        let result = scorer().analyze("ok fine maybe");
        assert_eq!(result, ScoreResult::neutral());
    }

    #[test]
    fn test_mixed_text_averages() {
        // helpful +1, slow -1 → 0
        let result = scorer().analyze("Helpful docs but the UI is slow.");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.label, Sentiment::Neutral);
    }

    #[test]
    fn test_intensifier_applies_to_lexicon_words_only() {
        let breakdown = scorer().analyze_detailed("very banana");
        assert_eq!(breakdown.tally, 0);
        assert_eq!(breakdown.result, ScoreResult::neutral());
    }

    #[test]
    fn test_phrase_intensifier_never_matches_single_token() {
        let result = scorer().analyze("kind of good");
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_detailed_matches_plain_analysis() {
        let texts = [
            "",
            "Absolutely not what I expected, really disappointing",
            "The new dashboard is extremely useful!!! Thanks",
            "meh",
            "no bugs, no crashes, never slow",
        ];
        for text in texts {
            assert_eq!(scorer().analyze_detailed(text).result, scorer().analyze(text));
        }
    }

    #[test]
    fn test_custom_lexicon_is_used() {
        let mut builder = LexiconBuilder::new();
        builder.insert("stellar", Polarity::Positive).unwrap();
        let scorer = SentimentScorer::new(builder.build(), IntensifierTable::empty());

        assert_eq!(scorer.analyze("stellar").score, 1.0);
        assert_eq!(scorer.analyze("great").score, 0.0);
        // No intensifiers configured
        assert_eq!(scorer.analyze("not stellar").score, 1.0);
    }
}
