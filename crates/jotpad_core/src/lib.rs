//! Core state machine for the Jotpad note widget.
//! Frontends render from `AppState::render` and feed gestures to
//! `AppState::dispatch`; all note invariants live here.

pub mod app;
pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod subscription;
pub mod theme;
pub mod view;

pub use app::{Action, AppState, Outcome};
pub use config::{AppConfig, ConfigError, ConfigOverrides, ConfigResult};
pub use controller::{
    AbandonPolicy, ControllerError, EditSurface, EditSurfaceController, Key, KeyOutcome,
    PendingEdit, PointerOutcome, Position,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::draft::DraftBuffer;
pub use model::note::{Note, NoteList, NoteValidationError};
pub use subscription::{PointerSource, PointerSubscription};
pub use theme::{ThemeMode, ThemeState};
pub use view::{EntryView, ViewModel, PLACEHOLDER_HINT, TITLE};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
