//! Core data models for Sentiscore
//!
//! Labels, per-text results and the feedback records the aggregator reads.

use crate::error::ParseSentimentError;
use crate::scorer::SentimentScorer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Scores strictly above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Scores strictly below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Polarity label
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    /// All labels, in display order
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Classify a clamped score using the fixed thresholds.
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if score < NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Sentiment::Positive => "😊",
            Sentiment::Neutral => "😐",
            Sentiment::Negative => "😞",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = ParseSentimentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            _ => Err(ParseSentimentError(s.to_string())),
        }
    }
}

/// Outcome of scoring a single text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ScoreResult {
    pub label: Sentiment,
    /// Always within `[-1, 1]`
    pub score: f64,
}

impl ScoreResult {
    /// Result for empty input or text without sentiment words
    pub fn neutral() -> Self {
        Self {
            label: Sentiment::Neutral,
            score: 0.0,
        }
    }

    /// Clamp a normalized score and derive its label.
    pub fn from_score(score: f64) -> Self {
        let score = score.clamp(-1.0, 1.0);
        Self {
            label: Sentiment::from_score(score),
            score,
        }
    }
}

/// A stored feedback item, as handed over by the persistence layer.
///
/// Only `sentiment` and `sentiment_score` matter for aggregation; the other
/// fields are carried so records can be re-scored or bucketed by day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl FeedbackRecord {
    /// Build a labeled record from raw content.
    pub fn from_content(content: impl Into<String>, scorer: &SentimentScorer) -> Self {
        let content = content.into();
        let result = scorer.analyze(&content);
        Self {
            content: Some(content),
            sentiment: result.label,
            sentiment_score: Some(result.score),
            ..Default::default()
        }
    }

    /// Replace label and score with a fresh result.
    pub fn apply(&mut self, result: ScoreResult) {
        self.sentiment = result.label;
        self.sentiment_score = Some(result.score);
    }
}
