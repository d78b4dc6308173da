//! Controller state and the pure transition function over it.
//!
//! # Design
//! All of the controller's mutable state lives in one explicit value,
//! [`TodoListState`], and every mutation is a pure transition: old state
//! plus an [`Event`] yields the new state. The controller dispatches
//! events; nothing else writes to the state. This keeps every rule from
//! the sync design testable without any I/O:
//!
//! - a failed load clears the collection (never show stale data),
//! - a failed add keeps the draft so the user can retry,
//! - toggle and delete mutate local state only after the store confirmed,
//! - a settlement for an entry that no longer exists locally is a no-op,
//!   never a fault, so out-of-order completions and settlements arriving
//!   after teardown are tolerated.
//!
//! Only load and add drive `is_loading`; toggle and delete settle without
//! a loading indicator.

use chrono::NaiveDate;

use crate::types::Todo;

/// The in-progress form values bound to the creation inputs.
///
/// Cleared only after a successful create; a failed create leaves the
/// values in place for retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
}

/// Everything the presentation layer reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListState {
    pub todos: Vec<Todo>,
    pub draft: Draft,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// A state transition. Settlement events carry either the parsed success
/// payload or the user-facing failure message for the operation; the
/// underlying `ApiError` never reaches the state.
#[derive(Debug, Clone)]
pub enum Event {
    TitleChanged(String),
    DescriptionChanged(String),
    DueDateChanged(Option<NaiveDate>),
    /// A list request went out.
    LoadStarted,
    /// The list request settled. Success replaces the collection verbatim;
    /// failure clears it.
    LoadSettled(Result<Vec<Todo>, String>),
    /// A create request went out.
    AddStarted,
    /// The create request settled. Success appends the store-assigned
    /// record and resets the draft.
    AddSettled(Result<Todo, String>),
    /// A toggle or delete request went out. Clears the error; no loading
    /// indicator for these.
    MutationStarted,
    /// An update request settled. `completed` is the value the client
    /// computed before sending, applied only on success.
    ToggleSettled {
        id: u64,
        completed: bool,
        outcome: Result<(), String>,
    },
    /// A delete request settled.
    DeleteSettled {
        id: u64,
        outcome: Result<(), String>,
    },
}

impl TodoListState {
    /// Apply one event, consuming the old state and returning the new one.
    #[must_use]
    pub fn apply(mut self, event: Event) -> Self {
        match event {
            Event::TitleChanged(title) => self.draft.title = title,
            Event::DescriptionChanged(description) => self.draft.description = description,
            Event::DueDateChanged(due_date) => self.draft.due_date = due_date,

            Event::LoadStarted | Event::AddStarted => {
                self.is_loading = true;
                self.error = None;
            }
            Event::LoadSettled(outcome) => {
                match outcome {
                    Ok(todos) => self.todos = todos,
                    Err(message) => {
                        // Stale data after a failed refresh is worse than
                        // an empty list.
                        self.todos.clear();
                        self.error = Some(message);
                    }
                }
                self.is_loading = false;
            }
            Event::AddSettled(outcome) => {
                match outcome {
                    Ok(todo) => {
                        self.todos.push(todo);
                        self.draft = Draft::default();
                    }
                    Err(message) => self.error = Some(message),
                }
                self.is_loading = false;
            }

            Event::MutationStarted => self.error = None,
            Event::ToggleSettled { id, completed, outcome } => match outcome {
                Ok(()) => {
                    if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
                        todo.completed = completed;
                    }
                }
                Err(message) => self.error = Some(message),
            },
            Event::DeleteSettled { id, outcome } => match outcome {
                Ok(()) => self.todos.retain(|t| t.id != id),
                Err(message) => self.error = Some(message),
            },
        }
        self
    }
}
