//! Analyze and batch commands - score texts

use super::input;
use super::Context;
use anyhow::Result;
use sentiscore::reporters::{render_explained, render_results, ExplainedText, ScoredText};
use std::path::Path;
use tracing::info;

/// Score texts given on the command line, or all of stdin as one text
pub fn run(ctx: &Context, texts: Vec<String>, explain: bool) -> Result<()> {
    let texts = if texts.is_empty() {
        vec![input::read_text(Path::new("-"))?]
    } else {
        texts
    };

    if explain {
        let items: Vec<ExplainedText> = texts
            .into_iter()
            .map(|text| ExplainedText {
                breakdown: ctx.scorer.analyze_detailed(&text),
                text,
            })
            .collect();
        print!("{}", render_explained(&items, ctx.render)?);
        return Ok(());
    }

    print!("{}", render_results(&score_all(ctx, texts), ctx.render)?);
    Ok(())
}

/// Score one text per line of `path`
pub fn run_batch(ctx: &Context, path: &Path) -> Result<()> {
    let texts = input::read_lines(path)?;
    info!("Scoring {} lines from {}", texts.len(), path.display());
    print!("{}", render_results(&score_all(ctx, texts), ctx.render)?);
    Ok(())
}

fn score_all(ctx: &Context, texts: Vec<String>) -> Vec<ScoredText> {
    let results = ctx.scorer.analyze_batch(&texts);
    texts
        .into_iter()
        .zip(results)
        .map(|(text, result)| ScoredText { text, result })
        .collect()
}
