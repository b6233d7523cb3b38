//! Parallel batch scoring
//!
//! Every text is scored independently, so batches fan out over rayon's
//! pool. `collect` on an indexed parallel iterator keeps input order.

use crate::models::{FeedbackRecord, ScoreResult};
use crate::scorer::SentimentScorer;
use rayon::prelude::*;
use tracing::debug;

/// Below this size the pool overhead outweighs the work.
const PARALLEL_THRESHOLD: usize = 64;

impl SentimentScorer {
    /// Score many texts. `result[i] == self.analyze(texts[i])`.
    #[must_use]
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<ScoreResult>
    where
        S: AsRef<str> + Sync,
    {
        debug!("Scoring batch of {} texts", texts.len());
        if texts.len() < PARALLEL_THRESHOLD {
            return texts.iter().map(|t| self.analyze(t.as_ref())).collect();
        }
        texts.par_iter().map(|t| self.analyze(t.as_ref())).collect()
    }
}

/// Re-label records that carry content. Records without content keep their
/// existing label and score. Returns how many records were re-scored.
pub fn annotate_batch(records: &mut [FeedbackRecord], scorer: &SentimentScorer) -> usize {
    let rescored = records
        .par_iter_mut()
        .filter_map(|record| {
            let result = scorer.analyze(record.content.as_deref()?);
            record.apply(result);
            Some(())
        })
        .count();
    debug!("Re-scored {} of {} records", rescored, records.len());
    rescored
}
