//! Interactive terminal frontend.
//!
//! # Responsibility
//! - Own the terminal session (raw mode, alternate screen) and mouse capture.
//! - Map crossterm key and mouse events to core actions.
//! - Redraw from `AppState::render` after every event.
//!
//! # Invariants
//! - Every pointer-down is dispatched before the click it belongs to is
//!   resolved against the hit map, mirroring document-level listeners.
//! - Terminal state is restored on every exit path.

use crate::mouse::MouseCapture;
use crate::surface::{NativeEdit, TextSurface};
use crate::ui::{self, Highlight, HitMap, HitTarget};
use anyhow::{Context, Result};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    MouseButton, MouseEvent, MouseEventKind, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use jotpad_core::{Action, AppState, EditSurface, Key, Outcome, PointerSubscription, Position};
use log::{info, warn};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io::{self, Stdout};

/// Runs the interactive widget until the user quits.
pub fn run(state: AppState) -> Result<()> {
    let mut session = TerminalSession::enter().context("failed to prepare terminal")?;
    let _pointer = PointerSubscription::acquire(MouseCapture::new(io::stdout()))
        .context("failed to enable mouse capture")?;
    info!("event=ui_mount module=cli status=ok");

    let mut app = App::new(state);
    let result = app.event_loop(&mut session.terminal);
    info!("event=ui_unmount module=cli status=ok");
    result
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    keyboard_enhanced: bool,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        Self::setup().inspect_err(|_| {
            let _ = disable_raw_mode();
        })
    }

    fn setup() -> Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        // Without enhancement most terminals report Shift+Enter as plain Enter.
        let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);
        if keyboard_enhanced {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            keyboard_enhanced,
        })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let backend = self.terminal.backend_mut();
        if self.keyboard_enhanced {
            let _ = execute!(backend, PopKeyboardEnhancementFlags);
        }
        if let Err(err) = execute!(backend, LeaveAlternateScreen) {
            warn!(
                "event=terminal_restore module=cli status=error kind={:?}",
                err.kind()
            );
        }
        let _ = disable_raw_mode();
        let _ = self.terminal.show_cursor();
    }
}

struct App {
    state: AppState,
    surface: TextSurface,
    hits: HitMap,
    hovered: Option<usize>,
    selected: usize,
    quit: bool,
}

impl App {
    fn new(state: AppState) -> Self {
        Self {
            state,
            surface: TextSurface::new(),
            hits: HitMap::default(),
            hovered: None,
            selected: 0,
            quit: false,
        }
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.redraw(terminal)?;
            if self.quit {
                return Ok(());
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    fn redraw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let view = self.state.render();
        let highlight = self.highlight();
        let surface = &mut self.surface;
        let hits = &mut self.hits;
        terminal.draw(|frame| {
            *hits = ui::draw(frame, &view, surface, highlight);
        })?;
        Ok(())
    }

    fn highlight(&self) -> Highlight {
        Highlight {
            hovered: self.hovered,
            selected: (!self.surface.is_focused() && !self.state.notes().is_empty())
                .then_some(self.selected),
        }
    }

    fn apply(&mut self, action: Action) -> Option<Outcome> {
        match self.state.dispatch(action, &mut self.surface) {
            Ok(outcome) => {
                self.clamp_selection();
                Some(outcome)
            }
            Err(err) => {
                warn!("event=dispatch module=cli status=rejected error={err}");
                None
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.state.notes().len();
        self.selected = self.selected.min(len.saturating_sub(1));
        if self.hovered.is_some_and(|index| index >= len) {
            self.hovered = None;
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => self.quit = true,
            KeyCode::Char('t') if ctrl => {
                self.apply(Action::ToggleTheme);
            }
            _ if self.surface.is_focused() => self.handle_surface_key(key, ctrl),
            _ => self.handle_list_key(key),
        }
    }

    fn handle_surface_key(&mut self, key: KeyEvent, ctrl: bool) {
        if key.code == KeyCode::Tab {
            self.surface.blur();
            return;
        }

        let (pressed, native) = match key.code {
            KeyCode::Enter => (Key::Enter, Some(NativeEdit::Newline)),
            KeyCode::Char(ch) if !ctrl => (Key::Char(ch), Some(NativeEdit::Insert(ch))),
            KeyCode::Backspace => (Key::Other, Some(NativeEdit::Backspace)),
            KeyCode::Delete => (Key::Other, Some(NativeEdit::Delete)),
            KeyCode::Left => (Key::Other, Some(NativeEdit::Left)),
            KeyCode::Right => (Key::Other, Some(NativeEdit::Right)),
            KeyCode::Home => (Key::Other, Some(NativeEdit::Home)),
            KeyCode::End => (Key::Other, Some(NativeEdit::End)),
            _ => (Key::Other, None),
        };
        // Alt+Enter stands in for Shift+Enter on terminals that cannot tell them apart.
        let shift = key
            .modifiers
            .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT);

        let outcome = self.apply(Action::Key {
            key: pressed,
            shift,
        });
        if outcome != Some(Outcome::Native) {
            return;
        }
        if let Some(edit) = native {
            if self.surface.apply(edit) {
                let text = self.surface.content().to_string();
                self.apply(Action::TextChanged { text });
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let len = self.state.notes().len();
        match key.code {
            KeyCode::Tab | KeyCode::Char('i') => self.surface.focus(),
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') if self.selected + 1 < len => self.selected += 1,
            KeyCode::Char('e') if len > 0 => {
                self.apply(Action::Edit {
                    index: self.selected,
                });
            }
            KeyCode::Char('d') if len > 0 => {
                self.apply(Action::Delete {
                    index: self.selected,
                });
            }
            KeyCode::Char('t') => {
                self.apply(Action::ToggleTheme);
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let target = self.hits.target_at(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                self.hovered = match target {
                    Some(HitTarget::Entry(index))
                    | Some(HitTarget::Edit(index))
                    | Some(HitTarget::Delete(index)) => Some(index),
                    _ => None,
                };
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let position = Position::new(mouse.column, mouse.row);
                let pointer = self.apply(Action::PointerDown { position });
                if pointer != Some(Outcome::SurfaceFocused) {
                    self.surface.blur();
                }
                // The hit map predates a restored note; entries at or below it moved down.
                let target = match pointer {
                    Some(Outcome::Restored { index }) => target.map(|hit| hit.after_insert(index)),
                    _ => target,
                };
                match target {
                    Some(HitTarget::ThemeToggle) => {
                        self.apply(Action::ToggleTheme);
                    }
                    Some(HitTarget::Edit(index)) => {
                        self.apply(Action::Edit { index });
                    }
                    Some(HitTarget::Delete(index)) => {
                        self.apply(Action::Delete { index });
                    }
                    Some(HitTarget::Entry(index)) => self.selected = index,
                    None => {}
                }
            }
            _ => {}
        }
    }
}
