//! JSON reporter
//!
//! Pretty-printed JSON for piping to jq or a dashboard backend.

use anyhow::Result;
use serde::Serialize;

/// Pretty JSON terminated by a newline
pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::SentimentStats;

    #[test]
    fn test_stats_render_valid() {
        let stats = SentimentStats {
            total: 4,
            positive: 3,
            negative: 1,
            positive_percentage: 75,
            negative_percentage: 25,
            average_score: 0.5,
            ..Default::default()
        };
        let out = render(&stats).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("parse JSON");
        assert_eq!(parsed["total"], 4);
        assert_eq!(parsed["negativePercentage"], 25);
        assert!(out.ends_with("}\n"));
    }
}
