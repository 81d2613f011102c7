use chrono::{Local, NaiveDate};

use crate::bank::WordBank;
use crate::buffer::{ScratchPad, TextEdit};
use crate::engine::{DrillEngine, Outcome, Severity};
use crate::progress::ProgressStore;
use crate::tree::ProgressTree;

/// Presentation instruction for one graded submission: the message to flash,
/// how to style it, and the new status-line text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub severity: Severity,
    pub status: String,
}

/// The owned drill aggregate: scratch pad, engine, and progress store behind a
/// single event entry point. The host constructs one per activation and drops
/// it on deactivation; nothing here is ambient state.
#[derive(Debug)]
pub struct DrillSession {
    pad: ScratchPad,
    engine: DrillEngine,
    progress: ProgressStore,
}

impl DrillSession {
    pub fn new(bank: WordBank, progress: ProgressStore) -> Self {
        Self {
            pad: ScratchPad::new(),
            engine: DrillEngine::new(bank),
            progress,
        }
    }

    /// The sole submission entry point: one document edit in, at most one
    /// graded line out. Scoring lands on the process-local calendar day.
    pub fn handle_edit(&mut self, edit: &TextEdit) -> Option<Feedback> {
        let line = self.pad.apply(edit)?;
        Some(self.grade(&line, Local::now().date_naive()))
    }

    /// Convenience for hosts that hand over whole lines (the terminal REPL):
    /// replays the line as type-then-newline edits through the same filter.
    pub fn type_line(&mut self, line: &str) -> Option<Feedback> {
        let at = self.pad.len();
        self.handle_edit(&TextEdit::insert(at, line));
        self.handle_edit(&TextEdit::insert(at + line.len(), "\n"))
    }

    fn grade(&mut self, line: &str, today: NaiveDate) -> Feedback {
        let outcome = self.engine.submit(line, today, &mut self.progress);
        let severity = outcome.severity();
        let message = match outcome {
            Outcome::Exhausted => self.engine.status_text(),
            Outcome::Correct { translation, .. } => format!("Correct! {translation}"),
            Outcome::Incorrect {
                expected_translation,
            } => format!("Incorrect! {expected_translation}"),
        };
        Feedback {
            message,
            severity,
            status: self.engine.status_text(),
        }
    }

    /// Wholesale bank replacement; the drill restarts from the first word.
    pub fn reload(&mut self, bank: WordBank) {
        self.engine.start(bank);
    }

    pub fn status_text(&self) -> String {
        self.engine.status_text()
    }

    pub fn engine(&self) -> &DrillEngine {
        &self.engine
    }

    pub fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut ProgressStore {
        &mut self.progress
    }

    pub fn tree(&self) -> ProgressTree<'_> {
        ProgressTree::new(&self.progress)
    }
}
