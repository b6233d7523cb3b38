//! Reloadable scorer handle
//!
//! Readers take an `Arc` snapshot under a short read lock and score against
//! it with the lock released. A reload swaps the `Arc`; calls already running
//! keep the tables they started with.

use crate::models::ScoreResult;
use crate::scorer::SentimentScorer;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

#[derive(Debug, Default)]
pub struct SharedScorer {
    current: RwLock<Arc<SentimentScorer>>,
}

impl SharedScorer {
    pub fn new(scorer: SentimentScorer) -> Self {
        Self {
            current: RwLock::new(Arc::new(scorer)),
        }
    }

    /// The scorer in effect right now
    pub fn snapshot(&self) -> Arc<SentimentScorer> {
        // The guarded value is a plain Arc, a poisoned lock cannot leave it torn
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn analyze(&self, text: &str) -> ScoreResult {
        self.snapshot().analyze(text)
    }

    /// Score a batch against a single snapshot.
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<ScoreResult>
    where
        S: AsRef<str> + Sync,
    {
        self.snapshot().analyze_batch(texts)
    }

    /// Install new tables. Returns the scorer that was replaced.
    pub fn reload(&self, scorer: SentimentScorer) -> Arc<SentimentScorer> {
        let next = Arc::new(scorer);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        info!(
            "Reloading lexicon ({} words, {} intensifiers)",
            next.lexicon().len(),
            next.intensifiers().len()
        );
        std::mem::replace(&mut *guard, next)
    }
}

impl From<SentimentScorer> for SharedScorer {
    fn from(scorer: SentimentScorer) -> Self {
        Self::new(scorer)
    }
}
