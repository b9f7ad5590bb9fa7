//! Render contract projected from application state.
//!
//! Frontends draw exclusively from a `ViewModel`; entry indices are taken
//! from the same snapshot so edit/delete affordances never go stale within
//! one render pass.

use crate::theme::ThemeMode;
use serde::Serialize;

/// Header title.
pub const TITLE: &str = "Notes App";
/// Hint shown while there are no notes and no draft.
pub const PLACEHOLDER_HINT: &str = "Type to add notes";

/// One rendered note with the index its affordances act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub index: usize,
    pub text: String,
}

/// Full render snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub title: &'static str,
    pub theme: ThemeMode,
    /// Draft content bound to the editable surface.
    pub surface_text: String,
    pub show_placeholder: bool,
    pub placeholder: &'static str,
    pub entries: Vec<EntryView>,
}

impl ViewModel {
    /// Texts of all entries, in display order.
    pub fn entry_texts(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.text.as_str()).collect()
    }
}
