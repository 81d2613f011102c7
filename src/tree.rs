use chrono::NaiveDate;
use serde::Serialize;

use crate::progress::ProgressStore;

/// One word row under a date node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRow {
    pub word: String,
    pub correct: u32,
    pub wrong: u32,
}

impl WordRow {
    /// 树节点的说明文字，跟在单词后面显示。
    pub fn description(&self) -> String {
        format!("Correct: {}, Wrong: {}", self.correct, self.wrong)
    }
}

/// Per-date totals shown on the date node itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub attempts: u32,
    pub correct: u32,
    pub accuracy: f64,
}

/// Read-only date → word view over a [`ProgressStore`]. Carries no state of
/// its own: every call reads the store as it is right now. The host is
/// expected to rebuild its widget from this view whenever the store's change
/// notification fires.
#[derive(Debug, Clone, Copy)]
pub struct ProgressTree<'a> {
    store: &'a ProgressStore,
}

impl<'a> ProgressTree<'a> {
    pub fn new(store: &'a ProgressStore) -> Self {
        Self { store }
    }

    /// Date nodes in calendar order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.store.dates().collect()
    }

    /// Word rows under one date node, in word order.
    pub fn words_for_date(&self, date: NaiveDate) -> Vec<WordRow> {
        match self.store.day(date) {
            Some(day) => day
                .iter()
                .map(|(word, tally)| WordRow {
                    word: word.clone(),
                    correct: tally.correct,
                    wrong: tally.wrong,
                })
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn day_summary(&self, date: NaiveDate) -> Option<DaySummary> {
        let day = self.store.day(date)?;
        let mut attempts = 0u32;
        let mut correct = 0u32;
        for tally in day.values() {
            attempts += tally.correct + tally.wrong;
            correct += tally.correct;
        }
        let accuracy = if attempts > 0 {
            f64::from(correct) / f64::from(attempts)
        } else {
            0.0
        };
        Some(DaySummary {
            date,
            attempts,
            correct,
            accuracy,
        })
    }
}
