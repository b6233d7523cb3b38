//! Error types for lexicon construction and configuration loading
//!
//! Scoring and aggregation are total and never fail. Errors only show up
//! at the edges: building tables from user input and reading config files.

use crate::lexicon::Polarity;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`Lexicon`](crate::Lexicon) or
/// [`IntensifierTable`](crate::IntensifierTable).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexiconError {
    #[error("word '{word}' is already {existing}, cannot also be {requested}")]
    Overlap {
        word: String,
        existing: Polarity,
        requested: Polarity,
    },

    #[error("lexicon words must not be empty")]
    EmptyWord,

    #[error("intensifier '{word}' has a zero factor")]
    ZeroFactor { word: String },

    #[error("intensifier '{word}' has a non-finite factor: {factor}")]
    NonFiniteFactor { word: String, factor: f64 },
}

/// Errors raised while loading `sentiscore.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid lexicon configuration: {0}")]
    Lexicon(#[from] LexiconError),
}

/// A label string outside `positive | neutral | negative`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sentiment '{0}'. Valid labels: positive, neutral, negative")]
pub struct ParseSentimentError(pub String);
