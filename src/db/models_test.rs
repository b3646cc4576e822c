//! Tests for domain models.

use crate::db::{NewTodo, Todo};

#[test]
fn new_todo_decodes_missing_fields_as_zero_values() {
    let todo: NewTodo = serde_json::from_str("{}").unwrap();
    assert_eq!(todo, NewTodo::new("", false));
}

#[test]
fn new_todo_rejects_wrongly_typed_title() {
    let result = serde_json::from_str::<NewTodo>(r#"{"title": 123}"#);
    assert!(result.is_err());
}

#[test]
fn new_todo_ignores_unknown_fields() {
    let todo: NewTodo =
        serde_json::from_str(r#"{"id": "abc", "title": "x", "done": true, "extra": 1}"#).unwrap();
    assert_eq!(todo, NewTodo::new("x", true));
}

#[test]
fn into_todo_attaches_id() {
    let todo = NewTodo::new("buy milk", false).into_todo("65a1f0c2e4b0a1b2c3d4e5f6".to_string());
    assert_eq!(
        todo,
        Todo {
            id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            title: "buy milk".to_string(),
            done: false,
        }
    );
}
