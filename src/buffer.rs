/// One text edit against the scratch document. `offset` and `deleted_len` are
/// byte positions and must fall on character boundaries; the host's change
/// events already arrive that way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub offset: usize,
    pub deleted_len: usize,
    pub inserted: String,
}

impl TextEdit {
    pub fn insert(offset: usize, inserted: impl Into<String>) -> Self {
        Self {
            offset,
            deleted_len: 0,
            inserted: inserted.into(),
        }
    }

    pub fn delete(offset: usize, deleted_len: usize) -> Self {
        Self {
            offset,
            deleted_len,
            inserted: String::new(),
        }
    }

    fn is_newline_insertion(&self) -> bool {
        self.deleted_len == 0 && self.inserted == "\n"
    }
}

/// The scratch document the user types answers into, with the submission
/// filter made explicit: of all incoming edits, only a single `"\n"` insertion
/// commits a line. The committed line is the one immediately above the
/// inserted newline; it is trimmed, removed from the document, and handed to
/// the caller. Every other edit just mutates the text.
#[derive(Debug, Default)]
pub struct ScratchPad {
    text: String,
}

impl ScratchPad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Applies `edit` and returns the committed line, if this edit was a line
    /// commit. Blank lines commit nothing and stay in the document.
    pub fn apply(&mut self, edit: &TextEdit) -> Option<String> {
        let start = edit.offset.min(self.text.len());
        let end = (start + edit.deleted_len).min(self.text.len());
        self.text.replace_range(start..end, &edit.inserted);

        if !edit.is_newline_insertion() {
            return None;
        }

        // The newline now sits at [start, start+1); the submitted line runs
        // from the previous newline (or document start) up to it.
        let line_start = self.text[..start].rfind('\n').map_or(0, |i| i + 1);
        let line = self.text[line_start..start].trim().to_string();
        if line.is_empty() {
            return None;
        }
        self.text.replace_range(line_start..start + 1, "");
        Some(line)
    }
}
