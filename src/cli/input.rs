//! Reading texts and records from files or stdin

use anyhow::{Context, Result};
use sentiscore::FeedbackRecord;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Whole file (or stdin for `-`) as one string
pub fn read_text(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// One text per line. Blank lines are kept so output lines up with input.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = read_text(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Feedback records from a JSON array or JSON lines.
///
/// JSON lines that fail to parse are skipped with a warning; a malformed
/// JSON array is an error.
pub fn read_records(path: &Path) -> Result<Vec<FeedbackRecord>> {
    let content = read_text(path)?;
    parse_records(&content).with_context(|| format!("Failed to parse records from {}", path.display()))
}

pub fn parse_records(content: &str) -> Result<Vec<FeedbackRecord>> {
    if content.trim_start().starts_with('[') {
        let records: Vec<FeedbackRecord> = serde_json::from_str(content)?;
        debug!("Parsed {} records from JSON array", records.len());
        return Ok(records);
    }

    let mut records = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<FeedbackRecord>(line) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping line {}: {}", i + 1, e),
        }
    }
    debug!("Parsed {} records from JSON lines", records.len());
    Ok(records)
}
