//! Edit surface controller: commit, edit and cancel rules.
//!
//! # Responsibility
//! - Translate raw surface events (text change, key press, pointer-down)
//!   into draft and note list mutations.
//! - Load an existing note back into the surface for editing, or delete it.
//!
//! # Invariants
//! - Only Enter without Shift commits; the draft is cleared only after a
//!   successful insert.
//! - Whitespace-only drafts are never committed and are left untouched.
//! - Out-of-range indices never mutate state.
//! - Under `AbandonPolicy::Discard` an edited note is removed before the
//!   replacement is committed, and an outside pointer-down clears the draft
//!   but not the visible surface text.

use crate::model::draft::DraftBuffer;
use crate::model::note::{Note, NoteList};
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Pointer location in frontend coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub column: u16,
    pub row: u16,
}

impl Position {
    pub fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }
}

/// Key identity as seen by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

/// What happens to an edited note when the edit is abandoned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbandonPolicy {
    /// The note is lost and the visible surface keeps its stale text.
    #[default]
    Discard,
    /// The note is put back at its original index and the surface is cleared.
    Restore,
}

/// Frontend-owned editable region.
pub trait EditSurface {
    /// Replaces the visible content.
    fn set_content(&mut self, text: &str);
    /// Moves input focus to the surface.
    fn focus(&mut self);
    /// Returns whether `position` lies inside the surface's rendered region.
    fn contains(&self, position: Position) -> bool;

    fn clear(&mut self) {
        self.set_content("");
    }
}

/// Controller-level failures. Only stale or out-of-range indices qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerError {
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "note index {index} out of range for list of {len}")
            }
        }
    }
}

impl Error for ControllerError {}

/// Result of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Draft was committed as the new first note.
    Committed,
    /// Enter was suppressed but the draft was blank; nothing changed.
    IgnoredBlank,
    /// Not a commit key; the surface should handle it natively.
    Native,
}

/// Result of a document-level pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Pointer landed inside the surface; the surface takes focus.
    Inside,
    /// Draft was discarded.
    Discarded,
    /// Draft was discarded and an abandoned edit was put back at `index`.
    Restored { index: usize },
}

/// Note removed by an in-progress edit, remembered under `AbandonPolicy::Restore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEdit {
    pub index: usize,
    pub note: Note,
}

/// State machine mediating surface events, the draft and the note list.
#[derive(Debug, Clone, Default)]
pub struct EditSurfaceController {
    policy: AbandonPolicy,
    pending: Option<PendingEdit>,
}

impl EditSurfaceController {
    pub fn new(policy: AbandonPolicy) -> Self {
        Self {
            policy,
            pending: None,
        }
    }

    pub fn pending_edit(&self) -> Option<&PendingEdit> {
        self.pending.as_ref()
    }

    /// Mirrors live surface content into the draft, verbatim.
    pub fn text_changed(&mut self, draft: &mut DraftBuffer, text: impl Into<String>) {
        draft.set(text);
    }

    /// Applies the commit-key rule.
    pub fn key_pressed(
        &mut self,
        key: Key,
        shift_held: bool,
        notes: &mut NoteList,
        draft: &mut DraftBuffer,
        surface: &mut impl EditSurface,
    ) -> KeyOutcome {
        if key != Key::Enter || shift_held {
            return KeyOutcome::Native;
        }

        let Ok(note) = Note::new(draft.read()) else {
            debug!("event=note_commit module=controller status=ignored reason=blank");
            return KeyOutcome::IgnoredBlank;
        };

        let len = note.text().chars().count();
        notes.insert_front(note);
        draft.clear();
        surface.clear();
        self.pending = None;
        debug!(
            "event=note_commit module=controller status=ok chars={} notes={}",
            len,
            notes.len()
        );
        KeyOutcome::Committed
    }

    /// Applies the outside-interaction rule for a document-level pointer-down.
    pub fn pointer_down(
        &mut self,
        position: Position,
        notes: &mut NoteList,
        draft: &mut DraftBuffer,
        surface: &mut impl EditSurface,
    ) -> PointerOutcome {
        if surface.contains(position) {
            surface.focus();
            return PointerOutcome::Inside;
        }

        draft.clear();
        match self.policy {
            AbandonPolicy::Discard => {
                debug!("event=draft_discard module=controller status=ok");
                PointerOutcome::Discarded
            }
            AbandonPolicy::Restore => {
                surface.clear();
                match self.pending.take() {
                    Some(pending) => {
                        let index = notes.insert_at(pending.index, pending.note);
                        debug!(
                            "event=edit_restore module=controller status=ok index={}",
                            index
                        );
                        PointerOutcome::Restored { index }
                    }
                    None => {
                        debug!("event=draft_discard module=controller status=ok");
                        PointerOutcome::Discarded
                    }
                }
            }
        }
    }

    /// Loads the note at `index` into the draft and surface, removing it
    /// from the list.
    pub fn edit_existing(
        &mut self,
        index: usize,
        notes: &mut NoteList,
        draft: &mut DraftBuffer,
        surface: &mut impl EditSurface,
    ) -> Result<(), ControllerError> {
        check_index(index, notes)?;

        let mut index = index;
        if let Some(pending) = self.pending.take() {
            let restored_at = notes.insert_at(pending.index, pending.note);
            if restored_at <= index {
                index += 1;
            }
        }

        let note = notes
            .remove_at(index)
            .ok_or(ControllerError::IndexOutOfRange {
                index,
                len: notes.len(),
            })?;
        draft.set(note.text());
        surface.set_content(note.text());
        surface.focus();
        debug!(
            "event=edit_load module=controller status=ok index={} notes={}",
            index,
            notes.len()
        );

        if self.policy == AbandonPolicy::Restore {
            self.pending = Some(PendingEdit { index, note });
        }
        Ok(())
    }

    /// Removes the note at `index`. Irreversible.
    pub fn delete_existing(
        &mut self,
        index: usize,
        notes: &mut NoteList,
    ) -> Result<Note, ControllerError> {
        check_index(index, notes)?;
        let removed = notes
            .remove_at(index)
            .ok_or(ControllerError::IndexOutOfRange {
                index,
                len: notes.len(),
            })?;
        if let Some(pending) = self.pending.as_mut() {
            if index < pending.index {
                pending.index -= 1;
            }
        }
        debug!(
            "event=note_delete module=controller status=ok index={} notes={}",
            index,
            notes.len()
        );
        Ok(removed)
    }
}

fn check_index(index: usize, notes: &NoteList) -> Result<(), ControllerError> {
    if index >= notes.len() {
        debug!(
            "event=index_check module=controller status=rejected index={} notes={}",
            index,
            notes.len()
        );
        return Err(ControllerError::IndexOutOfRange {
            index,
            len: notes.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Key;

    #[test]
    fn key_wire_format_is_snake_case() {
        let json = serde_json::to_value(Key::Enter).unwrap();
        assert_eq!(json, "enter");
        let decoded: Key = serde_json::from_value(serde_json::json!({"char": "x"})).unwrap();
        assert_eq!(decoded, Key::Char('x'));
    }
}
