//! Tests for SqliteTodoRepository.

use crate::db::{Database, DbError, NewTodo, SqliteDatabase, TodoRepository};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");
    db
}

#[tokio::test(flavor = "multi_thread")]
async fn list_all_on_empty_collection_returns_empty() {
    let db = setup_db().await;

    let todos = db.todos().list_all().await.expect("List should succeed");

    assert!(todos.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn insert_one_assigns_opaque_id() {
    let db = setup_db().await;

    let id = db
        .todos()
        .insert_one(&NewTodo::new("buy milk", false))
        .await
        .expect("Insert should succeed");

    assert_eq!(id.len(), 24);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[tokio::test(flavor = "multi_thread")]
async fn inserted_todo_is_listed_with_assigned_id() {
    let db = setup_db().await;
    let repo = db.todos();

    let id = repo
        .insert_one(&NewTodo::new("buy milk", false))
        .await
        .expect("Insert should succeed");

    let todos = repo.list_all().await.expect("List should succeed");
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, id);
    assert_eq!(todos[0].title, "buy milk");
    assert!(!todos[0].done);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_all_preserves_insertion_order() {
    let db = setup_db().await;
    let repo = db.todos();

    for (title, done) in [("first", false), ("second", true), ("third", false)] {
        repo.insert_one(&NewTodo::new(title, done))
            .await
            .expect("Insert should succeed");
    }

    let todos = repo.list_all().await.expect("List should succeed");
    let titles: Vec<&str> = todos.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
    assert!(todos[1].done);
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_titles_get_distinct_ids() {
    let db = setup_db().await;
    let repo = db.todos();

    let first = repo
        .insert_one(&NewTodo::new("same", false))
        .await
        .expect("Insert should succeed");
    let second = repo
        .insert_one(&NewTodo::new("same", false))
        .await
        .expect("Insert should succeed");

    assert_ne!(first, second);
    assert_eq!(repo.list_all().await.unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_title_is_accepted() {
    let db = setup_db().await;

    db.todos()
        .insert_one(&NewTodo::default())
        .await
        .expect("Insert should succeed");

    let todos = db.todos().list_all().await.unwrap();
    assert_eq!(todos[0].title, "");
}

#[tokio::test(flavor = "multi_thread")]
async fn undecodable_document_fails_whole_listing() {
    let db = setup_db().await;
    db.todos()
        .insert_one(&NewTodo::new("fine", true))
        .await
        .unwrap();

    sqlx::query("INSERT INTO todos (document) VALUES (?)")
        .bind(r#"{"title": 5, "done": false}"#)
        .execute(db.pool())
        .await
        .expect("Raw insert should succeed");

    let result = db.todos().list_all().await;

    match result {
        Err(DbError::InvalidData { message, .. }) => {
            assert!(message.contains("could not be decoded"), "got: {}", message)
        }
        other => panic!("Expected InvalidData, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn non_json_document_fails_listing() {
    let db = setup_db().await;

    sqlx::query("INSERT INTO todos (document) VALUES ('not json')")
        .execute(db.pool())
        .await
        .expect("Raw insert should succeed");

    let result = db.todos().list_all().await;

    assert!(matches!(result, Err(DbError::InvalidData { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn stored_document_omits_id() {
    let db = setup_db().await;
    let id = db
        .todos()
        .insert_one(&NewTodo::new("walk dog", true))
        .await
        .unwrap();

    let document: String = sqlx::query_scalar("SELECT document FROM todos WHERE id = ?")
        .bind(&id)
        .fetch_one(db.pool())
        .await
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&document).unwrap();
    assert_eq!(value, serde_json::json!({"title": "walk dog", "done": true}));
}

#[tokio::test(flavor = "multi_thread")]
async fn insert_on_closed_database_fails() {
    let db = setup_db().await;
    db.close().await;

    let result = db.todos().insert_one(&NewTodo::new("late", false)).await;

    assert!(matches!(result, Err(DbError::Database { .. })));
}
