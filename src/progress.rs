use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::Store;

/// 单词在某一天的答题计数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub correct: u32,
    pub wrong: u32,
}

/// word → tally, created lazily the first time a word is scored on a date.
pub type DayRecord = BTreeMap<String, Tally>;

/// Full persisted shape: `{ "YYYY-MM-DD": { word: { correct, wrong } } }`.
/// `NaiveDate` keys serialize as the ISO date string.
pub type ProgressMap = BTreeMap<NaiveDate, DayRecord>;

/// Date-bucketed correct/wrong counters. Counts only grow; nothing is ever
/// deleted. After every scoring update the whole table is written back through
/// the sled [`Store`] and subscribers are notified.
pub struct ProgressStore {
    days: ProgressMap,
    store: Option<Arc<Store>>,
    subscribers: Vec<Box<dyn Fn()>>,
}

impl fmt::Debug for ProgressStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressStore")
            .field("days", &self.days)
            .field("persistent", &self.store.is_some())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressStore {
    /// In-memory only store, used by tests and by hosts without durable state.
    pub fn new() -> Self {
        Self {
            days: ProgressMap::new(),
            store: None,
            subscribers: Vec::new(),
        }
    }

    pub fn with_persistence(store: Arc<Store>) -> Self {
        Self {
            days: ProgressMap::new(),
            store: Some(store),
            subscribers: Vec::new(),
        }
    }

    /// Additive merge of a persisted table into the current one. A
    /// `(date, word)` pair present on both sides takes the incoming value
    /// (last-load-wins): summing instead would double the counts whenever the
    /// host activates twice without a restart.
    pub fn merge(&mut self, persisted: ProgressMap) {
        for (date, day) in persisted {
            let bucket = self.days.entry(date).or_default();
            for (word, tally) in day {
                bucket.insert(word, tally);
            }
        }
    }

    /// Bumps one counter for `(date, word)`, then attempts to write the full
    /// table back and notifies subscribers. A failed write is logged and
    /// otherwise ignored; the in-memory count is already updated.
    pub fn record(&mut self, date: NaiveDate, word: &str, is_correct: bool) {
        let tally = self
            .days
            .entry(date)
            .or_default()
            .entry(word.to_string())
            .or_default();
        if is_correct {
            tally.correct += 1;
        } else {
            tally.wrong += 1;
        }

        if let Some(store) = &self.store {
            if let Err(e) = store.save_progress(&self.days) {
                tracing::warn!(error = %e, %date, word, "Failed to persist progress");
            }
        }

        for subscriber in &self.subscribers {
            subscriber();
        }
    }

    pub fn snapshot(&self) -> &ProgressMap {
        &self.days
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.days.get(&date)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Change notification hook for the presentation layer. Fired after every
    /// [`record`](Self::record), once the write-back attempt completed.
    pub fn subscribe(&mut self, subscriber: impl Fn() + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }
}
