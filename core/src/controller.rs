//! The todo list controller: local state plus its synchronization with the
//! remote store.
//!
//! # Design
//! `TodoListController` owns a [`TodoApi`] and the current
//! [`TodoListState`]. Action methods dispatch the "started" transition and
//! hand back a [`PendingRequest`]; the host executes the HTTP round-trip
//! and feeds the response into [`TodoListController::resolve`], which
//! parses it and dispatches the settlement transition. Nothing here blocks
//! or spawns — suspension is modeled as "return the request now, settle
//! whenever the response shows up".
//!
//! There is no cross-operation locking: several `PendingRequest`s may be
//! outstanding at once and may settle in any order. Failures never escape
//! `resolve`; they are logged with their cause and surfaced to the UI as a
//! generic per-operation message in `state.error`.

use chrono::NaiveDate;

use crate::api::TodoApi;
use crate::error::Operation;
use crate::http::{HttpRequest, HttpResponse};
use crate::state::{Event, TodoListState};
use crate::types::{NewTodo, Todo};

/// Identifies an in-flight operation so its settlement can be applied.
///
/// `Toggle` carries the flipped value computed at send time; the store's
/// response body is never consulted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingOp {
    Load,
    Add,
    Toggle { id: u64, completed: bool },
    Delete { id: u64 },
}

/// A request the host must execute, paired with the token to settle it.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub request: HttpRequest,
    pub op: PendingOp,
}

/// Owns the todo collection, the form draft, and the status flags, and
/// keeps them consistent with the remote store.
#[derive(Debug)]
pub struct TodoListController {
    api: TodoApi,
    state: TodoListState,
}

impl TodoListController {
    pub fn new(base_url: &str) -> Self {
        Self {
            api: TodoApi::new(base_url),
            state: TodoListState::default(),
        }
    }

    // --- read accessors for the presentation layer ---

    pub fn state(&self) -> &TodoListState {
        &self.state
    }

    pub fn todos(&self) -> &[Todo] {
        &self.state.todos
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    // --- draft field setters ---

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.dispatch(Event::TitleChanged(title.into()));
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.dispatch(Event::DescriptionChanged(description.into()));
    }

    pub fn set_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.dispatch(Event::DueDateChanged(due_date));
    }

    // --- operations ---

    /// Start a full refresh from the store. The collection is replaced
    /// wholesale on settlement; the store is the source of truth.
    pub fn load(&mut self) -> PendingRequest {
        self.dispatch(Event::LoadStarted);
        PendingRequest {
            request: self.api.build_list(),
            op: PendingOp::Load,
        }
    }

    /// Submit the current draft as a new todo.
    ///
    /// Returns `None` without issuing a request when the trimmed title is
    /// empty; the store never sees a blank title and no error is raised.
    pub fn add_todo(&mut self) -> Option<PendingRequest> {
        if self.state.draft.title.trim().is_empty() {
            return None;
        }
        let input = NewTodo {
            title: self.state.draft.title.clone(),
            description: self.state.draft.description.clone(),
            due_date: self.state.draft.due_date,
            completed: false,
        };
        let request = match self.api.build_create(&input) {
            Ok(request) => request,
            Err(err) => {
                log::error!("add request could not be built: {err}");
                self.dispatch(Event::AddSettled(Err(Operation::Add.failure_message())));
                return None;
            }
        };
        self.dispatch(Event::AddStarted);
        Some(PendingRequest {
            request,
            op: PendingOp::Add,
        })
    }

    /// Flip the completion flag of the todo with `id`.
    ///
    /// Returns `None` when the id is not in local state (there is nothing
    /// to flip). The flipped value is computed here and applied only after
    /// the store confirms; until then local state shows the old value.
    pub fn toggle_complete(&mut self, id: u64) -> Option<PendingRequest> {
        let current = self.state.todos.iter().find(|t| t.id == id)?;
        let mut flipped = current.clone();
        flipped.completed = !flipped.completed;
        let completed = flipped.completed;

        let request = match self.api.build_update(&flipped) {
            Ok(request) => request,
            Err(err) => {
                log::error!("update request could not be built: {err}");
                self.dispatch(Event::ToggleSettled {
                    id,
                    completed,
                    outcome: Err(Operation::Update.failure_message()),
                });
                return None;
            }
        };
        self.dispatch(Event::MutationStarted);
        Some(PendingRequest {
            request,
            op: PendingOp::Toggle { id, completed },
        })
    }

    /// Request deletion of the todo with `id`.
    ///
    /// The request is issued even when the id is absent from local state;
    /// settlement on a missing entry is a no-op.
    pub fn delete_todo(&mut self, id: u64) -> PendingRequest {
        self.dispatch(Event::MutationStarted);
        PendingRequest {
            request: self.api.build_delete(id),
            op: PendingOp::Delete { id },
        }
    }

    /// Settle an in-flight operation with the response the host received.
    ///
    /// A transport failure is represented as a response with a non-2xx
    /// status (conventionally 0 for "no response at all"). All failures
    /// are absorbed here; none propagate to the caller.
    pub fn resolve(&mut self, op: PendingOp, response: HttpResponse) {
        let event = match op {
            PendingOp::Load => match self.api.parse_list(response) {
                Ok(todos) => Event::LoadSettled(Ok(todos)),
                Err(err) => {
                    log::warn!("load failed: {err}");
                    Event::LoadSettled(Err(Operation::Load.failure_message()))
                }
            },
            PendingOp::Add => match self.api.parse_create(response) {
                Ok(todo) => Event::AddSettled(Ok(todo)),
                Err(err) => {
                    log::warn!("add failed: {err}");
                    Event::AddSettled(Err(Operation::Add.failure_message()))
                }
            },
            PendingOp::Toggle { id, completed } => {
                let outcome = match self.api.parse_update(response) {
                    Ok(()) => Ok(()),
                    Err(err) => {
                        log::warn!("update of todo {id} failed: {err}");
                        Err(Operation::Update.failure_message())
                    }
                };
                Event::ToggleSettled { id, completed, outcome }
            }
            PendingOp::Delete { id } => {
                let outcome = match self.api.parse_delete(response) {
                    Ok(()) => Ok(()),
                    Err(err) => {
                        log::warn!("delete of todo {id} failed: {err}");
                        Err(Operation::Delete.failure_message())
                    }
                };
                Event::DeleteSettled { id, outcome }
            }
        };
        self.dispatch(event);
    }

    fn dispatch(&mut self, event: Event) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
    }
}
