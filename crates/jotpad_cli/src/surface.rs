//! Terminal editable surface.
//!
//! # Responsibility
//! - Hold the visible composition text and cursor.
//! - Apply native key handling (insert, newline, deletion, cursor motion).
//! - Answer hit-tests against the area it was last drawn into.

use jotpad_core::{EditSurface, Position};
use ratatui::layout::{Position as CellPosition, Rect};
use ratatui::text::Line;

/// Native edit the surface performs when the controller leaves a key alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeEdit {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

#[derive(Debug, Default)]
pub struct TextSurface {
    content: String,
    /// Byte offset, always on a char boundary.
    cursor: usize,
    focused: bool,
    area: Rect,
}

impl TextSurface {
    pub fn new() -> Self {
        Self {
            focused: true,
            ..Self::default()
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Records where the surface was drawn, for hit-testing.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Applies one native edit. Returns whether the content changed.
    pub fn apply(&mut self, edit: NativeEdit) -> bool {
        match edit {
            NativeEdit::Insert(ch) => {
                self.content.insert(self.cursor, ch);
                self.cursor += ch.len_utf8();
                true
            }
            NativeEdit::Newline => self.apply(NativeEdit::Insert('\n')),
            NativeEdit::Backspace => match self.prev_boundary() {
                Some(prev) => {
                    self.content.replace_range(prev..self.cursor, "");
                    self.cursor = prev;
                    true
                }
                None => false,
            },
            NativeEdit::Delete => match self.next_boundary() {
                Some(next) => {
                    self.content.replace_range(self.cursor..next, "");
                    true
                }
                None => false,
            },
            NativeEdit::Left => {
                if let Some(prev) = self.prev_boundary() {
                    self.cursor = prev;
                }
                false
            }
            NativeEdit::Right => {
                if let Some(next) = self.next_boundary() {
                    self.cursor = next;
                }
                false
            }
            NativeEdit::Home => {
                self.cursor = self.line_start();
                false
            }
            NativeEdit::End => {
                self.cursor = self.content[self.cursor..]
                    .find('\n')
                    .map_or(self.content.len(), |offset| self.cursor + offset);
                false
            }
        }
    }

    /// Terminal cell of the cursor inside a borderless `inner` area.
    pub fn cursor_cell(&self, inner: Rect) -> CellPosition {
        let before = &self.content[..self.cursor];
        let row = u16::try_from(before.matches('\n').count()).unwrap_or(u16::MAX);
        let column =
            u16::try_from(Line::raw(&before[self.line_start()..]).width()).unwrap_or(u16::MAX);
        CellPosition::new(
            inner.x.saturating_add(column).min(inner.right().saturating_sub(1)),
            inner.y.saturating_add(row).min(inner.bottom().saturating_sub(1)),
        )
    }

    fn line_start(&self) -> usize {
        self.content[..self.cursor].rfind('\n').map_or(0, |idx| idx + 1)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.content[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(idx, _)| idx)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.content[self.cursor..]
            .chars()
            .next()
            .map(|ch| self.cursor + ch.len_utf8())
    }
}

impl EditSurface for TextSurface {
    fn set_content(&mut self, text: &str) {
        self.content = text.to_string();
        self.cursor = self.content.len();
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn contains(&self, position: Position) -> bool {
        self.area
            .contains(CellPosition::new(position.column, position.row))
    }
}
