#![allow(dead_code)]

use jotpad_core::{EditSurface, Position};

/// In-memory surface occupying rows `0..height` at every column.
#[derive(Debug, Default)]
pub struct FakeSurface {
    pub content: String,
    pub focused: bool,
    pub height: u16,
    pub set_calls: usize,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self {
            height: 3,
            ..Self::default()
        }
    }

    /// Simulates the user typing: content changes natively first.
    pub fn type_text(&mut self, text: &str) -> String {
        self.content = text.to_string();
        self.content.clone()
    }
}

impl EditSurface for FakeSurface {
    fn set_content(&mut self, text: &str) {
        self.content = text.to_string();
        self.set_calls += 1;
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn contains(&self, position: Position) -> bool {
        position.row < self.height
    }
}

pub fn inside() -> Position {
    Position::new(4, 1)
}

pub fn outside() -> Position {
    Position::new(4, 20)
}
