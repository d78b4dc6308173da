//! Client-side state and synchronization for a todo list backed by a
//! remote CRUD store.
//!
//! # Overview
//! [`TodoListController`] owns the todo collection, the creation-form
//! draft, and the loading/error status, and keeps them consistent with a
//! REST store at `/api/todos`. It never performs I/O itself
//! (host-does-IO pattern): action methods return [`PendingRequest`]
//! values describing the HTTP call to make, and the host settles each one
//! by passing the resulting [`HttpResponse`] to
//! [`TodoListController::resolve`].
//!
//! # Design
//! - All mutable state lives in [`TodoListState`]; every mutation is a
//!   pure transition driven by an [`Event`], so the synchronization rules
//!   are testable without a server.
//! - Local state changes only after the store confirms an operation; a
//!   failed refresh clears the collection rather than showing stale data.
//! - Every failure, HTTP or transport, surfaces as one generic retryable
//!   message per operation. Detail goes to the log, not the UI.
//! - Settlements may arrive in any order; one landing after its entry is
//!   gone is a no-op.

pub mod api;
pub mod controller;
pub mod error;
pub mod http;
pub mod state;
pub mod types;

pub use api::TodoApi;
pub use controller::{PendingOp, PendingRequest, TodoListController};
pub use error::{ApiError, Operation};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use state::{Draft, Event, TodoListState};
pub use types::{NewTodo, Todo};
