//! Headless replay of a newline-delimited JSON action script.
//!
//! The headless surface occupies rows `0..SURFACE_ROWS` of a virtual
//! document, so `pointer_down` actions with a larger `row` count as outside
//! interactions.

use anyhow::{Context, Result};
use jotpad_core::{Action, AppState, EditSurface, Position, ViewModel};
use log::info;
use std::io::BufRead;
use std::path::Path;

pub const SURFACE_ROWS: u16 = 5;

/// Surface stand-in without a terminal.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    content: String,
}

impl EditSurface for HeadlessSurface {
    fn set_content(&mut self, text: &str) {
        self.content = text.to_string();
    }

    fn focus(&mut self) {}

    fn contains(&self, position: Position) -> bool {
        position.row < SURFACE_ROWS
    }
}

/// Applies every action in `path` to `state` and returns the final view.
pub fn run_file(path: &Path, state: AppState) -> Result<ViewModel> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open replay script `{}`", path.display()))?;
    run_reader(std::io::BufReader::new(file), state)
}

/// Applies actions read line by line. Blank lines and `#` comments are skipped.
pub fn run_reader(reader: impl BufRead, mut state: AppState) -> Result<ViewModel> {
    let mut surface = HeadlessSurface::default();
    let mut applied = 0usize;

    for (offset, line) in reader.lines().enumerate() {
        let line_no = offset + 1;
        let line = line.with_context(|| format!("failed to read line {line_no}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let action: Action = serde_json::from_str(trimmed)
            .with_context(|| format!("line {line_no}: invalid action"))?;
        // Text changes land on the surface first, as typing would.
        if let Action::TextChanged { text } = &action {
            surface.set_content(text);
        }
        state
            .dispatch(action, &mut surface)
            .with_context(|| format!("line {line_no}: action rejected"))?;
        applied += 1;
    }

    info!(
        "event=replay_done module=cli status=ok actions={} notes={} surface_chars={}",
        applied,
        state.notes().len(),
        surface.content.chars().count()
    );
    Ok(state.render())
}
