//! Text (terminal) reporter with colors and formatting

use super::{ExplainedText, ScoredText};
use crate::models::Sentiment;
use crate::stats::SentimentStats;
use crate::trend::SentimentTrend;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Label colors
fn sentiment_color(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "\x1b[32m", // Green
        Sentiment::Neutral => "\x1b[33m",  // Amber
        Sentiment::Negative => "\x1b[31m", // Red
    }
}

/// Label tag, with emoji or a plain ASCII marker
fn sentiment_tag(sentiment: Sentiment, emoji: bool) -> &'static str {
    if emoji {
        return sentiment.emoji();
    }
    match sentiment {
        Sentiment::Positive => "[+]",
        Sentiment::Neutral => "[~]",
        Sentiment::Negative => "[-]",
    }
}

fn label(sentiment: Sentiment, emoji: bool) -> String {
    let c = sentiment_color(sentiment);
    format!(
        "{} {c}{:<8}{RESET}",
        sentiment_tag(sentiment, emoji),
        sentiment.as_str()
    )
}

/// Shorten long inputs for one-line display
fn preview(text: &str) -> String {
    let line = text.lines().next().unwrap_or("");
    let short: String = line.chars().take(60).collect();
    if short.chars().count() < text.chars().count() {
        format!("{short}...")
    } else {
        short
    }
}

pub fn render_results(items: &[ScoredText], emoji: bool) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!(
            "{} {BOLD}{:>+5.2}{RESET}  {}\n",
            label(item.result.label, emoji),
            item.result.score,
            preview(&item.text)
        ));
    }
    out
}

pub fn render_explained(items: &[ExplainedText], emoji: bool) -> String {
    let mut out = String::new();
    for item in items {
        let b = &item.breakdown;
        out.push_str(&format!("\n{BOLD}\"{}\"{RESET}\n", preview(&item.text)));
        out.push_str(&format!(
            "  {} {BOLD}{:>+5.2}{RESET}\n",
            label(b.result.label, emoji),
            b.result.score
        ));
        out.push_str(&format!(
            "{DIM}  tokens: {}  sentiment words: {}  raw sum: {:+.2}{RESET}\n",
            b.tokens, b.tally, b.raw_sum
        ));
        for m in &b.matches {
            out.push_str(&format!(
                "    #{:<3} {:<14} {:<8} x {:>+5.2} = {:>+5.2}\n",
                m.position,
                m.token,
                m.polarity.to_string(),
                m.modifier,
                m.contribution
            ));
        }
    }
    out
}

pub fn render_stats(stats: &SentimentStats, emoji: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Sentiment Summary{RESET}\n"));
    out.push_str(&format!("{DIM}──────────────────────────────{RESET}\n"));
    out.push_str(&format!("  Total feedback: {BOLD}{}{RESET}\n", stats.total));

    let counts = stats.counts();
    for sentiment in Sentiment::ALL {
        out.push_str(&format!(
            "  {} {:>5} ({}%)\n",
            label(sentiment, emoji),
            counts.get(sentiment),
            stats.percentage(sentiment)
        ));
    }

    out.push_str(&format!(
        "  Average score: {BOLD}{:+.2}{RESET}\n",
        stats.average_score
    ));
    out
}

pub fn render_trend(trend: &SentimentTrend, emoji: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{BOLD}Sentiment Over Time{RESET} ({} days)\n",
        trend.days.len()
    ));
    out.push_str(&format!(
        "{DIM}  DATE        POS   NEU   NEG{RESET}\n"
    ));

    for day in &trend.days {
        out.push_str(&format!(
            "  {}  {}{:>4}{RESET}  {}{:>4}{RESET}  {}{:>4}{RESET}\n",
            day.date,
            sentiment_color(Sentiment::Positive),
            day.counts.positive,
            sentiment_color(Sentiment::Neutral),
            day.counts.neutral,
            sentiment_color(Sentiment::Negative),
            day.counts.negative,
        ));
    }

    out.push_str(&format!("\n{BOLD}Window total{RESET}\n"));
    for sentiment in Sentiment::ALL {
        out.push_str(&format!(
            "  {} {:>5}\n",
            label(sentiment, emoji),
            trend.summary.get(sentiment)
        ));
    }
    out
}
