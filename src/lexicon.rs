//! Word lists and intensifier factors
//!
//! Both tables are built once and then only read. The [`Lexicon`] maps each
//! word to exactly one [`Polarity`], which keeps the positive, negative and
//! neutral sets disjoint by construction; [`LexiconBuilder`] reports an
//! attempt to put a word in two sets instead of silently moving it.

use crate::error::LexiconError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

const POSITIVE_WORDS: &[&str] = &[
    "amazing", "awesome", "brilliant", "excellent", "fantastic", "great", "incredible",
    "love", "wonderful", "perfect", "outstanding", "superb", "terrific", "magnificent",
    "good", "nice", "helpful", "useful", "clear", "easy", "simple", "beautiful",
    "impressed", "satisfied", "happy", "pleased", "delighted", "thrilled", "excited",
    "recommend", "best", "favorite", "appreciate", "thank", "thanks", "grateful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "awful", "terrible", "horrible", "disgusting", "hate", "worst", "bad", "poor",
    "disappointing", "frustrated", "annoying", "confusing", "difficult", "hard",
    "broken", "bug", "error", "problem", "issue", "fail", "failed", "wrong",
    "slow", "laggy", "crash", "crashed", "useless", "pointless", "waste",
    "angry", "upset", "sad", "unhappy", "dissatisfied", "disappointed",
];

const NEUTRAL_WORDS: &[&str] = &[
    "okay", "ok", "fine", "average", "normal", "standard", "typical", "regular",
    "maybe", "perhaps", "possibly", "might", "could", "would", "should",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("really", 1.4),
    ("extremely", 1.8),
    ("incredibly", 1.7),
    ("absolutely", 1.6),
    ("totally", 1.5),
    ("completely", 1.6),
    ("quite", 1.2),
    ("pretty", 1.1),
    ("somewhat", 0.8),
    ("kind of", 0.7),
    ("sort of", 0.7),
    ("not", -1.0),
    ("never", -1.0),
    ("no", -0.8),
    ("hardly", -0.6),
    ("barely", -0.6),
];

/// Base polarity of a lexicon word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

impl Polarity {
    /// Contribution of one unmodified occurrence
    pub fn weight(self) -> f64 {
        match self {
            Polarity::Positive => 1.0,
            Polarity::Neutral => 0.0,
            Polarity::Negative => -1.0,
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Neutral => write!(f, "neutral"),
            Polarity::Negative => write!(f, "negative"),
        }
    }
}

fn normalize_word(word: &str) -> Result<String, LexiconError> {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return Err(LexiconError::EmptyWord);
    }
    Ok(word)
}

/// Case-normalized words tagged with a base polarity
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    words: FxHashMap<String, Polarity>,
}

impl Default for Lexicon {
    fn default() -> Self {
        let mut words = FxHashMap::default();
        let tables = [
            (POSITIVE_WORDS, Polarity::Positive),
            (NEGATIVE_WORDS, Polarity::Negative),
            (NEUTRAL_WORDS, Polarity::Neutral),
        ];
        for (list, polarity) in tables {
            for word in list {
                words.insert((*word).to_string(), polarity);
            }
        }
        Self { words }
    }
}

impl Lexicon {
    /// Polarity of an already-normalized token, if it is a lexicon word
    #[inline]
    pub fn polarity(&self, token: &str) -> Option<Polarity> {
        self.words.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words with the given polarity, sorted
    pub fn words(&self, polarity: Polarity) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .words
            .iter()
            .filter(|(_, p)| **p == polarity)
            .map(|(w, _)| w.as_str())
            .collect();
        words.sort_unstable();
        words
    }
}

/// Incremental construction of a [`Lexicon`]
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    words: FxHashMap<String, Polarity>,
}

impl LexiconBuilder {
    /// Start from an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the built-in word lists
    pub fn from_defaults() -> Self {
        Self {
            words: Lexicon::default().words,
        }
    }

    /// Drop a word from whichever set holds it. Unknown words are ignored.
    pub fn remove(&mut self, word: &str) -> &mut Self {
        self.words.remove(&word.trim().to_lowercase());
        self
    }

    /// Add a word. Re-adding with the same polarity is a no-op.
    pub fn insert(&mut self, word: &str, polarity: Polarity) -> Result<&mut Self, LexiconError> {
        let word = normalize_word(word)?;
        match self.words.get(&word) {
            Some(&existing) if existing != polarity => Err(LexiconError::Overlap {
                word,
                existing,
                requested: polarity,
            }),
            Some(_) => Ok(self),
            None => {
                self.words.insert(word, polarity);
                Ok(self)
            }
        }
    }

    pub fn extend<'a, I>(&mut self, words: I, polarity: Polarity) -> Result<&mut Self, LexiconError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for word in words {
            self.insert(word, polarity)?;
        }
        Ok(self)
    }

    pub fn build(&self) -> Lexicon {
        Lexicon {
            words: self.words.clone(),
        }
    }
}

/// Signed multiplicative factors for words that modify a nearby sentiment word
#[derive(Debug, Clone, PartialEq)]
pub struct IntensifierTable {
    factors: FxHashMap<String, f64>,
}

impl Default for IntensifierTable {
    fn default() -> Self {
        let factors = INTENSIFIERS
            .iter()
            .map(|(word, factor)| ((*word).to_string(), *factor))
            .collect();
        Self { factors }
    }
}

impl IntensifierTable {
    pub fn empty() -> Self {
        Self {
            factors: FxHashMap::default(),
        }
    }

    /// Built-in table with `overrides` applied on top. Factors must be
    /// finite and non-zero.
    pub fn with_overrides<'a, I>(overrides: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut table = Self::default();
        for (word, factor) in overrides {
            table.insert(word, factor)?;
        }
        Ok(table)
    }

    pub fn insert(&mut self, word: &str, factor: f64) -> Result<(), LexiconError> {
        let word = normalize_word(word)?;
        if !factor.is_finite() {
            return Err(LexiconError::NonFiniteFactor { word, factor });
        }
        if factor == 0.0 {
            return Err(LexiconError::ZeroFactor { word });
        }
        self.factors.insert(word, factor);
        Ok(())
    }

    /// Factor for a normalized token, if it is an intensifier
    #[inline]
    pub fn factor(&self, token: &str) -> Option<f64> {
        self.factors.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sets_are_disjoint() {
        let total = POSITIVE_WORDS.len() + NEGATIVE_WORDS.len() + NEUTRAL_WORDS.len();
        assert_eq!(Lexicon::default().len(), total);
    }

    #[test]
    fn test_default_polarities() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.polarity("great"), Some(Polarity::Positive));
        assert_eq!(lexicon.polarity("laggy"), Some(Polarity::Negative));
        assert_eq!(lexicon.polarity("okay"), Some(Polarity::Neutral));
        assert_eq!(lexicon.polarity("banana"), None);
        // Lookup expects normalized tokens
        assert_eq!(lexicon.polarity("Great"), None);
    }

    #[test]
    fn test_default_intensifiers_are_non_zero() {
        let table = IntensifierTable::default();
        assert_eq!(table.len(), INTENSIFIERS.len());
        assert!(INTENSIFIERS.iter().all(|(_, f)| *f != 0.0 && f.is_finite()));
        assert_eq!(table.factor("not"), Some(-1.0));
        assert_eq!(table.factor("kind of"), Some(0.7));
    }

    #[test]
    fn test_builder_rejects_overlap() {
        let mut builder = LexiconBuilder::from_defaults();
        let err = builder.insert("Great", Polarity::Negative).unwrap_err();
        assert_eq!(
            err,
            LexiconError::Overlap {
                word: "great".into(),
                existing: Polarity::Positive,
                requested: Polarity::Negative,
            }
        );
    }

    #[test]
    fn test_builder_remove_then_insert_moves_word() {
        let mut builder = LexiconBuilder::from_defaults();
        builder.remove("HARD");
        builder.insert("hard", Polarity::Neutral).unwrap();
        let lexicon = builder.build();
        assert_eq!(lexicon.polarity("hard"), Some(Polarity::Neutral));
    }

    #[test]
    fn test_builder_same_polarity_is_noop() {
        let mut builder = LexiconBuilder::new();
        builder
            .extend(["stellar", " Stellar "], Polarity::Positive)
            .unwrap();
        assert_eq!(builder.build().words(Polarity::Positive), vec!["stellar"]);
    }

    #[test]
    fn test_builder_rejects_empty_word() {
        let mut builder = LexiconBuilder::new();
        assert_eq!(
            builder.insert("   ", Polarity::Positive).unwrap_err(),
            LexiconError::EmptyWord
        );
    }

    #[test]
    fn test_intensifier_validation() {
        assert!(matches!(
            IntensifierTable::with_overrides([("meh", 0.0)]),
            Err(LexiconError::ZeroFactor { .. })
        ));
        assert!(matches!(
            IntensifierTable::with_overrides([("meh", f64::NAN)]),
            Err(LexiconError::NonFiniteFactor { .. })
        ));

        let table = IntensifierTable::with_overrides([("Super", 1.6), ("very", 2.0)]).unwrap();
        assert_eq!(table.factor("super"), Some(1.6));
        assert_eq!(table.factor("very"), Some(2.0));
    }
}
