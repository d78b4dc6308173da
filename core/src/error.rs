//! Error types for the todo API client.
//!
//! # Design
//! The API layer reports what actually went wrong (`ApiError`), but none of
//! that detail survives past the controller: every failed operation
//! collapses into one generic, retryable message parameterized only by
//! which operation failed. The store contract makes no promise about error
//! bodies, so distinguishing 404 from 500 from garbage JSON buys nothing
//! at the UI level.

use std::fmt;

use thiserror::Error;

/// Errors produced while building requests or parsing responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a non-2xx status. Raw status and body are kept
    /// for logging only.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// The CRUD operation a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Add,
    Update,
    Delete,
}

impl Operation {
    /// The user-facing message shown when this operation fails. Retry is a
    /// manual user action, so every message asks for one.
    pub fn failure_message(self) -> String {
        let what = match self {
            Operation::Load => "load your todos",
            Operation::Add => "add the todo",
            Operation::Update => "update the todo",
            Operation::Delete => "delete the todo",
        };
        format!("Could not {what}. Please retry.")
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Load => "load",
            Operation::Add => "add",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}
