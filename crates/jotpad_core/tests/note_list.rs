use jotpad_core::{Note, NoteList, NoteValidationError};

fn list_of(texts: &[&str]) -> NoteList {
    texts.iter().copied().collect()
}

#[test]
fn insert_front_prepends_newest_first() {
    let mut list = NoteList::new();
    list.insert_front(Note::new("Buy milk").unwrap());
    list.insert_front(Note::new("Call Bob").unwrap());

    assert_eq!(list.texts(), vec!["Call Bob", "Buy milk"]);
    assert_eq!(list.get(0).map(Note::text), Some("Call Bob"));
}

#[test]
fn duplicate_text_is_permitted() {
    let mut list = NoteList::new();
    list.insert_front(Note::new("same").unwrap());
    list.insert_front(Note::new("same").unwrap());
    assert_eq!(list.len(), 2);
}

#[test]
fn remove_at_shrinks_by_one_and_keeps_relative_order() {
    let mut list = list_of(&["a", "b", "c", "d"]);

    let removed = list.remove_at(1).expect("index 1 exists");
    assert_eq!(removed.text(), "b");
    assert_eq!(list.len(), 3);
    assert_eq!(list.texts(), vec!["a", "c", "d"]);
}

#[test]
fn remove_at_out_of_range_leaves_list_untouched() {
    let mut list = list_of(&["a"]);
    assert!(list.remove_at(1).is_none());
    assert_eq!(list.texts(), vec!["a"]);
    assert!(list.get(5).is_none());
}

#[test]
fn blank_text_never_becomes_a_note() {
    assert_eq!(Note::new("   ").unwrap_err(), NoteValidationError::Empty);
    let list = list_of(&["x", " ", "\n\t", "y"]);
    assert_eq!(list.texts(), vec!["x", "y"]);
}
