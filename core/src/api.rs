//! Stateless HTTP request builder and response parser for the todo store.
//!
//! # Design
//! `TodoApi` holds only a `base_url` and carries no mutable state between
//! calls. Each REST operation is split into a `build_*` method producing an
//! [`HttpRequest`] and a `parse_*` method consuming an [`HttpResponse`];
//! the host executes the round-trip in between. Any 2xx status counts as
//! success; any other status is a failure regardless of what the body says.
//!
//! The update path deliberately ignores whatever record the store echoes
//! back: the controller applies its own computed value, matching the
//! original client's behavior even though a store that stamps extra fields
//! on update could drift from local state.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTodo, Todo};

/// Stateless client for the `/api/todos` resource.
#[derive(Debug, Clone)]
pub struct TodoApi {
    base_url: String,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/api/todos/{id}", self.base_url)
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.collection_url())
    }

    pub fn build_create(&self, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest::json(HttpMethod::Post, self.collection_url(), body))
    }

    /// The update request carries the full record, flipped value included.
    pub fn build_update(&self, todo: &Todo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(todo)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest::json(HttpMethod::Put, self.item_url(todo.id), body))
    }

    pub fn build_delete(&self, id: u64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Delete, self.item_url(id))
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Body is optional and ignored on success; only the status matters.
    pub fn parse_update(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }
}

fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
