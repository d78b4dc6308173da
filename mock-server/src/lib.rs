//! In-memory stand-in for the remote todo store.
//!
//! Implements the `/api/todos` REST contract the controller consumes:
//! camelCase JSON, store-assigned numeric ids starting at 1, 201 on
//! create, 204 on delete, 404 for unknown ids. List output is sorted by
//! id so repeated loads observe a stable order.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
}

/// Payload for create and update. Clients send the full record on update;
/// any `id` in the body is ignored in favor of the path parameter.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPayload {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Clone)]
pub struct Store {
    todos: Arc<RwLock<HashMap<u64, Todo>>>,
    next_id: Arc<AtomicU64>,
}

pub fn app() -> Router {
    let store = Store {
        todos: Arc::new(RwLock::new(HashMap::new())),
        // Ids start at 1, like the SQL sequence of the real backend.
        next_id: Arc::new(AtomicU64::new(1)),
    };
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(store): State<Store>) -> Json<Vec<Todo>> {
    let todos = store.todos.read().await;
    let mut all: Vec<Todo> = todos.values().cloned().collect();
    all.sort_by_key(|t| t.id);
    Json(all)
}

async fn create_todo(
    State(store): State<Store>,
    Json(input): Json<TodoPayload>,
) -> (StatusCode, Json<Todo>) {
    let todo = Todo {
        id: store.next_id.fetch_add(1, Ordering::Relaxed),
        title: input.title,
        description: input.description,
        due_date: input.due_date,
        completed: input.completed,
    };
    store.todos.write().await.insert(todo.id, todo.clone());
    log::debug!("created todo {}", todo.id);
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(store): State<Store>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, StatusCode> {
    let todos = store.todos.read().await;
    todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(store): State<Store>,
    Path(id): Path<u64>,
    Json(input): Json<TodoPayload>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = store.todos.write().await;
    let todo = todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    todo.title = input.title;
    todo.description = input.description;
    todo.due_date = input.due_date;
    todo.completed = input.completed;
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(store): State<Store>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut todos = store.todos.write().await;
    todos
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_camel_case_names() {
        let todo = Todo {
            id: 1,
            title: "Test".to_string(),
            description: String::new(),
            due_date: NaiveDate::from_ymd_opt(2026, 9, 1),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["dueDate"], "2026-09-01");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn payload_defaults_optional_fields() {
        let input: TodoPayload = serde_json::from_str(r#"{"title":"Only a title"}"#).unwrap();
        assert_eq!(input.title, "Only a title");
        assert_eq!(input.description, "");
        assert!(input.due_date.is_none());
        assert!(!input.completed);
    }

    #[test]
    fn payload_ignores_client_sent_id() {
        // Full-record PUT bodies carry the id; the path parameter wins.
        let input: TodoPayload =
            serde_json::from_str(r#"{"id":7,"title":"A","completed":true}"#).unwrap();
        assert_eq!(input.title, "A");
        assert!(input.completed);
    }

    #[test]
    fn payload_rejects_missing_title() {
        let result: Result<TodoPayload, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn payload_accepts_null_due_date() {
        let input: TodoPayload =
            serde_json::from_str(r#"{"title":"A","dueDate":null}"#).unwrap();
        assert!(input.due_date.is_none());
    }
}
