mod support;

use jotpad_core::{
    AbandonPolicy, Action, AppState, Key, Position, ThemeMode, ThemeState, PLACEHOLDER_HINT,
};
use support::FakeSurface;

#[test]
fn placeholder_shows_only_when_notes_and_draft_are_empty() {
    let mut surface = FakeSurface::new();
    let mut state = AppState::default();
    assert!(state.render().show_placeholder);
    assert_eq!(state.render().placeholder, PLACEHOLDER_HINT);

    state
        .dispatch(Action::TextChanged { text: "x".into() }, &mut surface)
        .unwrap();
    assert!(!state.render().show_placeholder);

    state
        .dispatch(
            Action::Key {
                key: Key::Enter,
                shift: false,
            },
            &mut surface,
        )
        .unwrap();
    let view = state.render();
    assert!(!view.show_placeholder);
    assert_eq!(view.surface_text, "");

    state.dispatch(Action::Delete { index: 0 }, &mut surface).unwrap();
    assert!(state.render().show_placeholder);
}

#[test]
fn entries_carry_their_render_time_index() {
    let mut surface = FakeSurface::new();
    let mut state = AppState::default();
    for text in ["one", "two", "three"] {
        state
            .dispatch(Action::TextChanged { text: text.into() }, &mut surface)
            .unwrap();
        state
            .dispatch(
                Action::Key {
                    key: Key::Enter,
                    shift: false,
                },
                &mut surface,
            )
            .unwrap();
    }

    let view = state.render();
    assert_eq!(view.entry_texts(), vec!["three", "two", "one"]);
    let indices: Vec<usize> = view.entries.iter().map(|entry| entry.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);

    let target = &view.entries[1];
    state
        .dispatch(Action::Delete { index: target.index }, &mut surface)
        .unwrap();
    assert_eq!(state.render().entry_texts(), vec!["three", "one"]);
}

#[test]
fn theme_toggles_independently_of_notes() {
    let mut surface = FakeSurface::new();
    let mut state = AppState::new(AbandonPolicy::Discard, ThemeState::default());
    state
        .dispatch(Action::TextChanged { text: "draft".into() }, &mut surface)
        .unwrap();

    state.dispatch(Action::ToggleTheme, &mut surface).unwrap();
    assert_eq!(state.render().theme, ThemeMode::Dark);
    assert_eq!(state.draft().read(), "draft");

    state.dispatch(Action::ToggleTheme, &mut surface).unwrap();
    assert_eq!(state.theme(), ThemeState::default());
    assert_eq!(state.render().theme, ThemeMode::Light);
}

#[test]
fn initial_theme_comes_from_caller() {
    let state = AppState::new(AbandonPolicy::Discard, ThemeState::new(true));
    assert_eq!(state.render().theme, ThemeMode::Dark);
}

#[test]
fn actions_decode_from_tagged_json() {
    let script = [
        r#"{"type":"text_changed","text":"hi"}"#,
        r#"{"type":"key","key":"enter"}"#,
        r#"{"type":"key","key":"enter","shift":true}"#,
        r#"{"type":"pointer_down","position":{"column":1,"row":20}}"#,
        r#"{"type":"edit","index":0}"#,
        r#"{"type":"delete","index":2}"#,
        r#"{"type":"toggle_theme"}"#,
    ];
    let actions: Vec<Action> = script
        .iter()
        .map(|line| serde_json::from_str(line).expect("valid action"))
        .collect();

    assert_eq!(
        actions,
        vec![
            Action::TextChanged { text: "hi".into() },
            Action::Key {
                key: Key::Enter,
                shift: false
            },
            Action::Key {
                key: Key::Enter,
                shift: true
            },
            Action::PointerDown {
                position: Position::new(1, 20)
            },
            Action::Edit { index: 0 },
            Action::Delete { index: 2 },
            Action::ToggleTheme,
        ]
    );
}

#[test]
fn view_model_serializes_for_snapshots() {
    let state = AppState::new(AbandonPolicy::Discard, ThemeState::new(true));
    let json = serde_json::to_value(state.render()).unwrap();
    assert_eq!(json["title"], "Notes App");
    assert_eq!(json["theme"], "dark");
    assert_eq!(json["show_placeholder"], true);
    assert_eq!(json["entries"], serde_json::json!([]));
}
