//! Domain DTOs for the todo API.
//!
//! # Design
//! Wire names are camelCase (`dueDate`) to match the store's JSON schema;
//! the mock-server crate defines its own copies of these types and the
//! integration tests catch schema drift between the two. The due date is a
//! typed calendar date — an absent date is `None` (JSON `null`), and an
//! invalid date cannot be represented at all.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single todo record as persisted by the remote store.
///
/// The `id` is assigned by the store at creation time; the client never
/// invents one. Every `Todo` held in controller state mirrors a record the
/// store returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
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

/// Create payload: a todo that does not exist yet, so it carries no id.
/// `completed` is always false on the create path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
}
