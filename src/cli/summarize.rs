//! Summarize and trend commands - statistics over labeled records

use super::input;
use super::Context;
use anyhow::Result;
use chrono::{DateTime, Utc};
use sentiscore::reporters::{render_stats, render_trend};
use sentiscore::{annotate_batch, daily_trend, summarize, FeedbackRecord};
use std::path::Path;
use tracing::info;

fn load(ctx: &Context, path: &Path, rescore: bool) -> Result<Vec<FeedbackRecord>> {
    let mut records = input::read_records(path)?;
    if rescore {
        let rescored = annotate_batch(&mut records, &ctx.scorer);
        info!("Re-scored {} of {} records", rescored, records.len());
    }
    Ok(records)
}

pub fn run(ctx: &Context, path: &Path, rescore: bool) -> Result<()> {
    let records = load(ctx, path, rescore)?;
    let stats = summarize(&records);
    print!("{}", render_stats(&stats, ctx.render)?);
    Ok(())
}

pub fn run_trend(
    ctx: &Context,
    path: &Path,
    days: u32,
    now: DateTime<Utc>,
    rescore: bool,
) -> Result<()> {
    let records = load(ctx, path, rescore)?;
    let undated = records.iter().filter(|r| r.created_at.is_none()).count();
    if undated > 0 {
        info!("{} records have no createdAt and are left out", undated);
    }
    let trend = daily_trend(&records, days, now);
    print!("{}", render_trend(&trend, ctx.render)?);
    Ok(())
}
