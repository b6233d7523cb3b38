//! Sentiscore - lexicon-based sentiment scoring for feedback
//!
//! A small, dependency-light scorer that turns free-form text into a
//! polarity label and a score in `[-1, 1]`, plus the batch and statistics
//! helpers needed to summarize a collection of scored records.
//!
//! # Example
//!
//! ```
//! use sentiscore::{summarize, Sentiment, SentimentScorer};
//!
//! let scorer = SentimentScorer::default();
//! let result = scorer.analyze("Really helpful, thanks!");
//! assert_eq!(result.label, Sentiment::Positive);
//!
//! let results = scorer.analyze_batch(&["not good", "great"]);
//! let stats = summarize(&results);
//! assert_eq!(stats.total, 2);
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod models;
pub mod reporters;
pub mod scorer;
pub mod shared;
pub mod stats;
pub mod trend;

pub use batch::annotate_batch;
pub use config::{load_config, load_config_file, ScorerConfig};
pub use error::{ConfigError, LexiconError, ParseSentimentError};
pub use lexicon::{IntensifierTable, Lexicon, LexiconBuilder, Polarity};
pub use models::{FeedbackRecord, ScoreResult, Sentiment};
pub use scorer::{ScoreBreakdown, SentimentScorer, TokenMatch};
pub use shared::SharedScorer;
pub use stats::{summarize, LabelCounts, Labeled, SentimentStats};
pub use trend::{daily_trend, DailyCounts, SentimentTrend};
