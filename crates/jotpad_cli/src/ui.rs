//! Drawing of the view model and affordance hit regions.
//!
//! # Invariants
//! - Every hit region is computed from the same `ViewModel` that is drawn,
//!   so entry indices match the current render pass.

use crate::surface::TextSurface;
use jotpad_core::{ThemeMode, ViewModel};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

const SURFACE_HEIGHT: u16 = 7;
const EDIT_LABEL: &str = "[edit]";
const DELETE_LABEL: &str = "[del]";

/// Colors for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                background: Color::White,
                foreground: Color::Rgb(17, 24, 39),
                muted: Color::Gray,
                border: Color::Rgb(209, 213, 219),
                accent: Color::Rgb(229, 231, 235),
            },
            ThemeMode::Dark => Self {
                background: Color::Rgb(17, 24, 39),
                foreground: Color::White,
                muted: Color::Rgb(156, 163, 175),
                border: Color::Rgb(75, 85, 99),
                accent: Color::Rgb(55, 65, 81),
            },
        }
    }

    fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }
}

/// Label of the theme toggle: offers the mode it switches to.
pub fn theme_toggle_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "[☾ dark]",
        ThemeMode::Dark => "[☀ light]",
    }
}

/// Clickable regions of one drawn entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryHit {
    pub index: usize,
    pub body: Rect,
    /// Present only while the affordances are shown.
    pub edit: Option<Rect>,
    pub delete: Option<Rect>,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    ThemeToggle,
    Edit(usize),
    Delete(usize),
    Entry(usize),
}

impl HitTarget {
    /// Re-targets entry indices after a note was inserted at `at`.
    pub fn after_insert(self, at: usize) -> Self {
        let shift = |index: usize| if index >= at { index + 1 } else { index };
        match self {
            Self::ThemeToggle => Self::ThemeToggle,
            Self::Edit(index) => Self::Edit(shift(index)),
            Self::Delete(index) => Self::Delete(shift(index)),
            Self::Entry(index) => Self::Entry(shift(index)),
        }
    }
}

/// Hit regions produced by the last draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    pub theme_toggle: Rect,
    pub entries: Vec<EntryHit>,
}

impl HitMap {
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        if self.theme_toggle.contains(position) {
            return Some(HitTarget::ThemeToggle);
        }
        self.entries.iter().find_map(|entry| {
            if entry.edit.is_some_and(|rect| rect.contains(position)) {
                Some(HitTarget::Edit(entry.index))
            } else if entry.delete.is_some_and(|rect| rect.contains(position)) {
                Some(HitTarget::Delete(entry.index))
            } else if entry.body.contains(position) {
                Some(HitTarget::Entry(entry.index))
            } else {
                None
            }
        })
    }
}

/// Per-frame presentation inputs that are not part of the view model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlight {
    /// Entry under the mouse pointer.
    pub hovered: Option<usize>,
    /// Entry selected from the keyboard while the list has focus.
    pub selected: Option<usize>,
}

impl Highlight {
    fn shows_affordances(&self, index: usize) -> bool {
        self.hovered == Some(index) || self.selected == Some(index)
    }
}

/// Draws one frame and returns the hit regions it produced.
pub fn draw(
    frame: &mut Frame<'_>,
    view: &ViewModel,
    surface: &mut TextSurface,
    highlight: Highlight,
) -> HitMap {
    let palette = Palette::for_mode(view.theme);
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(SURFACE_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let theme_toggle = draw_header(frame, chunks[0], view, &palette);
    draw_surface(frame, chunks[2], view, surface, &palette);
    let entries = draw_entries(frame, chunks[3], view, highlight, &palette);
    draw_footer(frame, chunks[4], surface.is_focused(), &palette);

    HitMap {
        theme_toggle,
        entries,
    }
}

fn draw_header(frame: &mut Frame<'_>, area: Rect, view: &ViewModel, palette: &Palette) -> Rect {
    let title = Paragraph::new(Span::styled(
        view.title,
        palette.base().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, area);

    let label = theme_toggle_label(view.theme);
    let width = (Line::raw(label).width() as u16).min(area.width);
    let toggle = Rect::new(area.right().saturating_sub(width), area.y, width, 1);
    frame.render_widget(
        Paragraph::new(label).style(palette.base().bg(palette.accent)),
        toggle,
    );
    toggle
}

fn draw_surface(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &ViewModel,
    surface: &mut TextSurface,
    palette: &Palette,
) {
    let border = if surface.is_focused() {
        palette.foreground
    } else {
        palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(palette.base());
    let inner = block.inner(area);
    surface.set_area(area);

    frame.render_widget(
        Paragraph::new(surface.content().to_string()).block(block),
        area,
    );

    if view.show_placeholder {
        let middle = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
        frame.render_widget(
            Paragraph::new(view.placeholder)
                .alignment(Alignment::Center)
                .style(Style::default().fg(palette.muted)),
            middle,
        );
    }

    if surface.is_focused() && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position(surface.cursor_cell(inner));
    }
}

fn draw_entries(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &ViewModel,
    highlight: Highlight,
    palette: &Palette,
) -> Vec<EntryHit> {
    let mut hits = Vec::with_capacity(view.entries.len());
    let mut y = area.y;
    let inner_width = area.width.saturating_sub(2).max(1);

    for (drawn, entry) in view.entries.iter().enumerate() {
        let height = wrapped_height(&entry.text, inner_width).saturating_add(2);
        let remaining = area.bottom().saturating_sub(y);
        if height > remaining {
            let hidden = view.entries.len() - drawn;
            if remaining > 0 {
                frame.render_widget(
                    Paragraph::new(format!("… {hidden} more"))
                        .style(Style::default().fg(palette.muted)),
                    Rect::new(area.x, y, area.width, 1),
                );
            }
            break;
        }

        let body = Rect::new(area.x, y, area.width, height);
        let active = highlight.shows_affordances(entry.index);
        let border = if active { palette.foreground } else { palette.border };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .style(palette.base());
        frame.render_widget(
            Paragraph::new(entry.text.as_str())
                .wrap(Wrap { trim: false })
                .block(block),
            body,
        );

        let (edit, delete) = if active {
            draw_affordances(frame, body, palette)
        } else {
            (None, None)
        };
        hits.push(EntryHit {
            index: entry.index,
            body,
            edit,
            delete,
        });
        y += height;
    }
    hits
}

fn draw_affordances(
    frame: &mut Frame<'_>,
    body: Rect,
    palette: &Palette,
) -> (Option<Rect>, Option<Rect>) {
    let edit_width = EDIT_LABEL.len() as u16;
    let delete_width = DELETE_LABEL.len() as u16;
    let needed = edit_width + 1 + delete_width + 2;
    if body.width < needed + 2 {
        return (None, None);
    }

    let delete = Rect::new(body.right() - 2 - delete_width, body.y, delete_width, 1);
    let edit = Rect::new(delete.x - 1 - edit_width, body.y, edit_width, 1);
    let style = palette.base().bg(palette.accent);
    frame.render_widget(Paragraph::new(EDIT_LABEL).style(style), edit);
    frame.render_widget(Paragraph::new(DELETE_LABEL).style(style), delete);
    (Some(edit), Some(delete))
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect, surface_focused: bool, palette: &Palette) {
    let hint = if surface_focused {
        "Enter save · Shift/Alt+Enter newline · Tab notes · Ctrl+T theme · Esc quit"
    } else {
        "↑/↓ select · e edit · d delete · t theme · Tab compose · Esc quit"
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(palette.muted)),
        area,
    );
}

/// Rows `text` occupies when wrapped at `width` columns.
/// Saturates at `u16::MAX`.
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .split('\n')
        .map(|line| Line::raw(line).width().max(1).div_ceil(width))
        .fold(0, usize::saturating_add);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::{draw, wrapped_height, Highlight, HitTarget};
    use crate::surface::TextSurface;
    use jotpad_core::{AbandonPolicy, Action, AppState, Key, ThemeState};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn state_with(texts: &[&str], surface: &mut TextSurface) -> AppState {
        let mut state = AppState::new(AbandonPolicy::Discard, ThemeState::default());
        for text in texts.iter().rev() {
            state
                .dispatch(
                    Action::TextChanged {
                        text: (*text).to_string(),
                    },
                    surface,
                )
                .unwrap();
            state
                .dispatch(
                    Action::Key {
                        key: Key::Enter,
                        shift: false,
                    },
                    surface,
                )
                .unwrap();
        }
        state
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn wrapped_height_counts_explicit_and_soft_breaks() {
        assert_eq!(wrapped_height("", 10), 1);
        assert_eq!(wrapped_height("a\nb", 10), 2);
        assert_eq!(wrapped_height("abcdefghijk", 5), 3);
    }

    #[test]
    fn wrapped_height_saturates_for_huge_notes() {
        assert_eq!(wrapped_height(&"x\n".repeat(70_000), 40), u16::MAX);
        assert_eq!(wrapped_height(&"y".repeat(200_000), 1), u16::MAX);
    }

    #[test]
    fn huge_note_is_summarized_instead_of_drawn() {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let mut surface = TextSurface::new();
        let huge = "line\n".repeat(70_000);
        let state = state_with(&["short", huge.as_str()], &mut surface);

        let mut hits = None;
        terminal
            .draw(|frame| {
                hits = Some(draw(frame, &state.render(), &mut surface, Highlight::default()));
            })
            .unwrap();

        assert_eq!(hits.unwrap().entries.len(), 1);
        assert!(buffer_text(&terminal).contains("… 1 more"));
    }

    #[test]
    fn empty_state_draws_title_and_placeholder() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut surface = TextSurface::new();
        let state = AppState::default();

        let mut hits = None;
        terminal
            .draw(|frame| {
                hits = Some(draw(frame, &state.render(), &mut surface, Highlight::default()));
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Notes App"));
        assert!(text.contains("Type to add notes"));
        assert!(hits.unwrap().entries.is_empty());
    }

    #[test]
    fn affordances_appear_only_on_highlighted_entry() {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let mut surface = TextSurface::new();
        let state = state_with(&["first", "second"], &mut surface);

        let mut hits = None;
        terminal
            .draw(|frame| {
                let highlight = Highlight {
                    hovered: Some(1),
                    selected: None,
                };
                hits = Some(draw(frame, &state.render(), &mut surface, highlight));
            })
            .unwrap();
        let hits = hits.unwrap();

        assert_eq!(hits.entries.len(), 2);
        assert!(hits.entries[0].edit.is_none());
        let edit = hits.entries[1].edit.expect("hovered entry shows edit");
        let delete = hits.entries[1].delete.expect("hovered entry shows delete");
        assert_eq!(hits.target_at(edit.x, edit.y), Some(HitTarget::Edit(1)));
        assert_eq!(hits.target_at(delete.x, delete.y), Some(HitTarget::Delete(1)));
        let toggle = hits.theme_toggle;
        assert_eq!(hits.target_at(toggle.x, toggle.y), Some(HitTarget::ThemeToggle));
        assert!(!buffer_text(&terminal).contains("Type to add notes"));
    }
}
