//! Output reporters for scoring results
//!
//! Supports two output formats:
//! - `text` - Terminal output with colors and emoji
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::models::ScoreResult;
use crate::scorer::ScoreBreakdown;
use crate::stats::SentimentStats;
use crate::trend::SentimentTrend;
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Presentation switches shared by all reporters
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub emoji: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            emoji: true,
        }
    }
}

/// A scored input, as printed by `analyze` and `batch`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredText {
    pub text: String,
    #[serde(flatten)]
    pub result: ScoreResult,
}

/// A breakdown with the text it explains
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplainedText {
    pub text: String,
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
}

pub fn render_results(items: &[ScoredText], opts: RenderOptions) -> Result<String> {
    match opts.format {
        OutputFormat::Text => Ok(text::render_results(items, opts.emoji)),
        OutputFormat::Json => json::render(items),
    }
}

pub fn render_explained(items: &[ExplainedText], opts: RenderOptions) -> Result<String> {
    match opts.format {
        OutputFormat::Text => Ok(text::render_explained(items, opts.emoji)),
        OutputFormat::Json => json::render(items),
    }
}

pub fn render_stats(stats: &SentimentStats, opts: RenderOptions) -> Result<String> {
    match opts.format {
        OutputFormat::Text => Ok(text::render_stats(stats, opts.emoji)),
        OutputFormat::Json => json::render(stats),
    }
}

pub fn render_trend(trend: &SentimentTrend, opts: RenderOptions) -> Result<String> {
    match opts.format {
        OutputFormat::Text => Ok(text::render_trend(trend, opts.emoji)),
        OutputFormat::Json => json::render(trend),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("terminal".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("sarif".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_results_json_is_flat() {
        let items = vec![ScoredText {
            text: "great".into(),
            result: ScoreResult::from_score(1.0),
        }];
        let opts = RenderOptions {
            format: OutputFormat::Json,
            emoji: false,
        };
        let out = render_results(&items, opts).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["text"], "great");
        assert_eq!(parsed[0]["label"], "positive");
        assert_eq!(parsed[0]["score"], 1.0);
    }
}
