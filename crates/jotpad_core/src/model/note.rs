//! Note and note list domain model.
//!
//! # Responsibility
//! - Define the committed note record and its validation rule.
//! - Own positional mutation of the committed list (prepend, remove).
//!
//! # Invariants
//! - A `Note` always holds trimmed, non-empty text.
//! - Index 0 is always the most recently committed note.
//! - Identity is positional; indices are not stable across mutations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation errors for note construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Input was empty or whitespace-only after trimming.
    Empty,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "note text must not be empty after trimming"),
        }
    }
}

impl Error for NoteValidationError {}

/// One committed note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    text: String,
}

impl Note {
    /// Creates a note from raw input, trimming surrounding whitespace.
    ///
    /// # Errors
    /// - Returns `NoteValidationError::Empty` for empty or whitespace-only input.
    pub fn new(text: impl AsRef<str>) -> Result<Self, NoteValidationError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(NoteValidationError::Empty);
        }
        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Ordered list of committed notes, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteList {
    notes: Vec<Note>,
}

impl NoteList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends one note so it becomes index 0.
    pub fn insert_front(&mut self, note: Note) {
        self.notes.insert(0, note);
    }

    /// Inserts at `index`, clamped to the current length.
    ///
    /// Used only to put back a note whose edit was abandoned.
    pub(crate) fn insert_at(&mut self, index: usize, note: Note) -> usize {
        let index = index.min(self.notes.len());
        self.notes.insert(index, note);
        index
    }

    /// Removes the note at `index`; later notes shift down by one.
    ///
    /// Returns `None` without mutating when `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<Note> {
        if index < self.notes.len() {
            Some(self.notes.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    /// Snapshot of note texts in list order.
    pub fn texts(&self) -> Vec<&str> {
        self.notes.iter().map(Note::text).collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for NoteList {
    /// Builds a list in iteration order, silently skipping blank entries.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            notes: iter.into_iter().filter_map(|s| Note::new(s).ok()).collect(),
        }
    }
}
