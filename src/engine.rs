use chrono::NaiveDate;

use crate::bank::{normalize, WordBank};
use crate::constants::WELL_DONE;
use crate::progress::ProgressStore;

/// Result of grading one submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No word is under test (empty bank or sequence finished). Nothing is
    /// scored.
    Exhausted,
    /// The answer matched the word under test; the cursor has advanced.
    /// `next_hint` is `None` once the bank is exhausted.
    Correct {
        translation: String,
        next_hint: Option<String>,
    },
    /// Anything else, including a correct answer for a *different* bank word.
    /// The cursor stays on the same word.
    Incorrect { expected_translation: String },
}

/// UI styling class for an outcome: 信息提示 vs 错误提示。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl Outcome {
    pub fn severity(&self) -> Severity {
        match self {
            Outcome::Incorrect { .. } => Severity::Error,
            _ => Severity::Info,
        }
    }
}

/// Sequential drill over a [`WordBank`]: one word is under test at a time and
/// only a correct answer for *that* word advances the cursor. Guessing another
/// valid bank word is graded wrong; the bank-wide lookup never picks a new
/// current word.
#[derive(Debug, Default)]
pub struct DrillEngine {
    bank: WordBank,
    current: Option<String>,
}

impl DrillEngine {
    pub fn new(bank: WordBank) -> Self {
        let mut engine = Self {
            bank,
            current: None,
        };
        engine.restart();
        engine
    }

    /// Replaces the bank wholesale and points the cursor at its first entry.
    pub fn start(&mut self, bank: WordBank) {
        self.bank = bank;
        self.restart();
    }

    pub fn restart(&mut self) {
        self.current = self.bank.first().map(str::to_string);
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    pub fn current_key(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }

    /// The hint for the word under test, or the completion banner.
    pub fn status_text(&self) -> String {
        match self.current.as_deref().and_then(|key| self.bank.entry(key)) {
            Some(entry) => entry.hint.clone(),
            None => WELL_DONE.to_string(),
        }
    }

    /// Grades `raw` against the word under test and scores it under `today`.
    pub fn submit(
        &mut self,
        raw: &str,
        today: NaiveDate,
        progress: &mut ProgressStore,
    ) -> Outcome {
        let Some(current) = self.current.clone() else {
            return Outcome::Exhausted;
        };
        let expected = match self.bank.entry(&current) {
            Some(entry) => entry.clone(),
            None => {
                // Cursor keys always come from the bank; a miss means the
                // bank was swapped without start().
                tracing::error!(key = %current, "Current word missing from bank");
                self.current = None;
                return Outcome::Exhausted;
            }
        };

        let answer = normalize(raw);
        if answer == current {
            progress.record(today, &current, true);
            self.current = self.bank.next(&current).map(str::to_string);
            let next_hint = self
                .current
                .as_deref()
                .and_then(|key| self.bank.entry(key))
                .map(|entry| entry.hint.clone());
            tracing::info!(word = %current, advanced = self.current.is_some(), "Correct answer");
            Outcome::Correct {
                translation: expected.translation,
                next_hint,
            }
        } else {
            if let Some(other) = self.bank.lookup(&answer) {
                tracing::debug!(expected = %current, answered = %other, "Answer matches a different bank word");
            }
            progress.record(today, &current, false);
            tracing::info!(word = %current, answer = %answer, "Wrong answer");
            Outcome::Incorrect {
                expected_translation: expected.translation,
            }
        }
    }
}
