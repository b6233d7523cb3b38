//! CLI command definitions and handlers

mod analyze;
mod init;
mod input;
mod summarize;

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use sentiscore::config::{load_config, load_config_file, ScorerConfig};
use sentiscore::reporters::{OutputFormat, RenderOptions};
use sentiscore::SentimentScorer;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Sentiscore - lexicon-based sentiment scoring for feedback
#[derive(Parser, Debug)]
#[command(name = "sentiscore")]
#[command(
    version,
    about = "Score feedback text as positive, neutral or negative and summarize the distribution",
    after_help = "\
Examples:
  sentiscore analyze \"not very good\"             Score one text
  sentiscore analyze \"really helpful\" --explain  Show matched words and modifiers
  sentiscore batch comments.txt --format json    Score one text per line
  sentiscore summarize feedback.jsonl            Counts, percentages and average score
  sentiscore trend feedback.json --days 30       Per-day counts for the last 30 days
  sentiscore init                                Write an example sentiscore.toml"
)]
pub struct Cli {
    /// Config file (default: ./sentiscore.toml, then the user config dir)
    #[arg(long, global = true, env = "SENTISCORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Output format: text, json (default: from config, else text)
    #[arg(long, short = 'f', global = true, value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Disable emoji in output
    #[arg(long, global = true)]
    pub no_emoji: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one or more texts (reads stdin when none are given)
    Analyze {
        /// Texts to score
        #[arg(value_name = "TEXT")]
        texts: Vec<String>,

        /// Show each matched word with its modifier and contribution
        #[arg(long)]
        explain: bool,
    },

    /// Score a file with one text per line ("-" for stdin)
    Batch {
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Summarize labeled feedback records (JSON array or JSON lines)
    #[command(after_help = "\
Record shape:
  {\"sentiment\": \"positive\", \"sentimentScore\": 0.8, \"content\": \"...\", \"createdAt\": \"2024-03-01T10:00:00Z\"}

Only `sentiment` is required. A missing score counts as 0 in the average.")]
    Summarize {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Re-score records from their `content` before summarizing
        #[arg(long)]
        rescore: bool,
    },

    /// Per-day sentiment counts over a trailing window
    Trend {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Number of days in the window (1-365)
        #[arg(long, default_value = "7", value_parser = clap::value_parser!(u32).range(1..=365))]
        days: u32,

        /// End of the window as an RFC 3339 timestamp (default: now)
        #[arg(long)]
        as_of: Option<DateTime<Utc>>,

        /// Re-score records from their `content` first
        #[arg(long)]
        rescore: bool,
    },

    /// Write an example sentiscore.toml
    Init {
        /// Directory to write into
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

/// Everything a scoring command needs, resolved from flags and config
pub struct Context {
    pub scorer: SentimentScorer,
    pub render: RenderOptions,
}

impl Context {
    fn resolve(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => load_config_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => load_config(Path::new(".")),
        };

        let scorer = config
            .build_scorer()
            .context("Invalid lexicon configuration")?;
        debug!(
            "Scorer ready: {} words, {} intensifiers",
            scorer.lexicon().len(),
            scorer.intensifiers().len()
        );

        Ok(Self {
            scorer,
            render: render_options(cli, &config)?,
        })
    }
}

fn render_options(cli: &Cli, config: &ScorerConfig) -> Result<RenderOptions> {
    let format: OutputFormat = cli
        .format
        .as_deref()
        .or(config.output.format.as_deref())
        .unwrap_or("text")
        .parse()?;
    let no_emoji = cli.no_emoji || config.output.no_emoji.unwrap_or(false);

    Ok(RenderOptions {
        format,
        emoji: !no_emoji,
    })
}

pub fn run(cli: Cli) -> Result<()> {
    if let Commands::Init { dir } = &cli.command {
        return init::run(dir);
    }

    let ctx = Context::resolve(&cli)?;
    match cli.command {
        Commands::Analyze { texts, explain } => analyze::run(&ctx, texts, explain),
        Commands::Batch { input } => analyze::run_batch(&ctx, &input),
        Commands::Summarize { input, rescore } => summarize::run(&ctx, &input, rescore),
        Commands::Trend {
            input,
            days,
            as_of,
            rescore,
        } => summarize::run_trend(&ctx, &input, days, as_of.unwrap_or_else(Utc::now), rescore),
        Commands::Init { .. } => Ok(()),
    }
}
