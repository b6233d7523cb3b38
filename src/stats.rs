//! Sentiment distribution statistics
//!
//! Counts per label, per-label percentages and the mean score over a
//! collection of labeled records.
//!
//! # Rounding
//!
//! Percentages are rounded to whole numbers one category at a time, so the
//! three values may add up to 99 or 101. The average is rounded to two
//! decimals. Both round half up (`floor(x + 0.5)`), which differs from
//! `f64::round` only for negative halves: an average of `-0.125` becomes
//! `-0.12`.

use crate::models::{FeedbackRecord, ScoreResult, Sentiment};
use serde::{Deserialize, Serialize};

/// Anything that carries a label and, optionally, a score.
pub trait Labeled {
    fn sentiment(&self) -> Sentiment;

    /// Missing scores count as 0 in the average
    fn score(&self) -> Option<f64>;
}

impl Labeled for FeedbackRecord {
    fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    fn score(&self) -> Option<f64> {
        self.sentiment_score
    }
}

impl Labeled for ScoreResult {
    fn sentiment(&self) -> Sentiment {
        self.label
    }

    fn score(&self) -> Option<f64> {
        Some(self.score)
    }
}

impl<T: Labeled + ?Sized> Labeled for &T {
    fn sentiment(&self) -> Sentiment {
        (**self).sentiment()
    }

    fn score(&self) -> Option<f64> {
        (**self).score()
    }
}

/// Per-label tallies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl LabelCounts {
    pub fn add(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Summary handed to presentation layers (metrics endpoints, dashboards)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentStats {
    pub total: usize,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub positive_percentage: u32,
    pub neutral_percentage: u32,
    pub negative_percentage: u32,
    pub average_score: f64,
}

impl SentimentStats {
    pub fn counts(&self) -> LabelCounts {
        LabelCounts {
            positive: self.positive,
            neutral: self.neutral,
            negative: self.negative,
        }
    }

    pub fn percentage(&self, sentiment: Sentiment) -> u32 {
        match sentiment {
            Sentiment::Positive => self.positive_percentage,
            Sentiment::Neutral => self.neutral_percentage,
            Sentiment::Negative => self.negative_percentage,
        }
    }
}

/// Summarize labeled records in a single pass.
pub fn summarize<R: Labeled>(records: &[R]) -> SentimentStats {
    if records.is_empty() {
        return SentimentStats::default();
    }

    let mut counts = LabelCounts::default();
    let mut score_sum = 0.0;
    for record in records {
        counts.add(record.sentiment());
        score_sum += record.score().unwrap_or(0.0);
    }

    let total = records.len();
    SentimentStats {
        total,
        positive: counts.positive,
        neutral: counts.neutral,
        negative: counts.negative,
        positive_percentage: percentage(counts.positive, total),
        neutral_percentage: percentage(counts.neutral, total),
        negative_percentage: percentage(counts.negative, total),
        average_score: round_half_up(score_sum / total as f64 * 100.0) / 100.0,
    }
}

fn percentage(count: usize, total: usize) -> u32 {
    round_half_up(count as f64 / total as f64 * 100.0) as u32
}

fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
