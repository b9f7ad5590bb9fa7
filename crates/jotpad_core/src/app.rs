//! Application state container and event dispatch.
//!
//! # Responsibility
//! - Own the note list, draft, theme and controller explicitly.
//! - Route one user action at a time to the controller or theme.
//! - Project the current state into a `ViewModel`.
//!
//! # Invariants
//! - Every dispatch runs to completion before the next one starts.
//! - Theme changes never touch note or draft state.

use crate::controller::{
    AbandonPolicy, ControllerError, EditSurface, EditSurfaceController, Key, KeyOutcome,
    PointerOutcome, Position,
};
use crate::model::draft::DraftBuffer;
use crate::model::note::NoteList;
use crate::theme::ThemeState;
use crate::view::{EntryView, ViewModel, PLACEHOLDER_HINT, TITLE};
use serde::{Deserialize, Serialize};

/// One user gesture forwarded by a frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    TextChanged {
        text: String,
    },
    Key {
        key: Key,
        #[serde(default)]
        shift: bool,
    },
    PointerDown {
        position: Position,
    },
    Edit {
        index: usize,
    },
    Delete {
        index: usize,
    },
    ToggleTheme,
}

/// Observable effect of one dispatched action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    DraftChanged,
    Committed,
    /// Commit key pressed on a blank draft.
    Ignored,
    /// Key left to the surface's native handling.
    Native,
    SurfaceFocused,
    DraftDiscarded,
    Restored { index: usize },
    EditLoaded,
    Deleted,
    ThemeToggled,
}

/// Explicit application state passed to dispatch and render.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    notes: NoteList,
    draft: DraftBuffer,
    theme: ThemeState,
    controller: EditSurfaceController,
}

impl AppState {
    pub fn new(policy: AbandonPolicy, theme: ThemeState) -> Self {
        Self {
            notes: NoteList::new(),
            draft: DraftBuffer::new(),
            theme,
            controller: EditSurfaceController::new(policy),
        }
    }

    pub fn notes(&self) -> &NoteList {
        &self.notes
    }

    pub fn draft(&self) -> &DraftBuffer {
        &self.draft
    }

    pub fn theme(&self) -> ThemeState {
        self.theme
    }

    pub fn controller(&self) -> &EditSurfaceController {
        &self.controller
    }

    /// Applies one action.
    ///
    /// # Errors
    /// - `ControllerError::IndexOutOfRange` for edit/delete on a stale index;
    ///   state is left unchanged.
    pub fn dispatch(
        &mut self,
        action: Action,
        surface: &mut impl EditSurface,
    ) -> Result<Outcome, ControllerError> {
        let outcome = match action {
            Action::TextChanged { text } => {
                self.controller.text_changed(&mut self.draft, text);
                Outcome::DraftChanged
            }
            Action::Key { key, shift } => {
                match self.controller.key_pressed(
                    key,
                    shift,
                    &mut self.notes,
                    &mut self.draft,
                    surface,
                ) {
                    KeyOutcome::Committed => Outcome::Committed,
                    KeyOutcome::IgnoredBlank => Outcome::Ignored,
                    KeyOutcome::Native => Outcome::Native,
                }
            }
            Action::PointerDown { position } => {
                match self.controller.pointer_down(
                    position,
                    &mut self.notes,
                    &mut self.draft,
                    surface,
                ) {
                    PointerOutcome::Inside => Outcome::SurfaceFocused,
                    PointerOutcome::Discarded => Outcome::DraftDiscarded,
                    PointerOutcome::Restored { index } => Outcome::Restored { index },
                }
            }
            Action::Edit { index } => {
                self.controller
                    .edit_existing(index, &mut self.notes, &mut self.draft, surface)?;
                Outcome::EditLoaded
            }
            Action::Delete { index } => {
                self.controller.delete_existing(index, &mut self.notes)?;
                Outcome::Deleted
            }
            Action::ToggleTheme => {
                self.theme.toggle();
                Outcome::ThemeToggled
            }
        };
        Ok(outcome)
    }

    /// Projects the current state for rendering.
    pub fn render(&self) -> ViewModel {
        ViewModel {
            title: TITLE,
            theme: self.theme.mode(),
            surface_text: self.draft.read().to_string(),
            show_placeholder: self.notes.is_empty() && self.draft.is_empty(),
            placeholder: PLACEHOLDER_HINT,
            entries: self
                .notes
                .iter()
                .enumerate()
                .map(|(index, note)| EntryView {
                    index,
                    text: note.text().to_string(),
                })
                .collect(),
        }
    }
}
