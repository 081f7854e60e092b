//! Stateless HTTP request builder and response parser for the todo service.
//!
//! # Design
//! `SyncClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`, keeping the I/O boundary explicit. The `list_todos` /
//! `create_todo` / … combinators run the full build → execute → parse
//! cycle through a [`Transport`] and tag every failure with the operation
//! that was in flight.
//!
//! A single failed attempt surfaces immediately: no retries, no timeout
//! beyond whatever the transport enforces.

use crate::error::{ErrorKind, Op, ServiceError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::{CompletionPatch, NewTodo, Todo, User};

/// Base URL of the remote todo service.
pub const API_URL: &str = "https://jsonplaceholder.typicode.com";

/// Page size for the initial todo load.
pub const TODOS_LIMIT: u32 = 15;

/// Page size for the initial user load.
pub const USERS_LIMIT: u32 = 5;

/// Synchronous, stateless client for the todo service.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network; the host executes the round-trip in between.
#[derive(Debug, Clone)]
pub struct SyncClient {
    base_url: String,
}

impl SyncClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos?_limit={TODOS_LIMIT}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_list_users(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/users?_limit={USERS_LIMIT}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &NewTodo) -> Result<HttpRequest, ServiceError> {
        let body = serde_json::to_string(input)
            .map_err(|e| ServiceError::new(Op::CreateTodo, ErrorKind::Serialization(e.to_string())))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_completion(&self, id: u64, completed: bool) -> Result<HttpRequest, ServiceError> {
        let body = serde_json::to_string(&CompletionPatch { completed })
            .map_err(|e| ServiceError::new(Op::UpdateTodo, ErrorKind::Serialization(e.to_string())))?;
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: format!("{}/todos/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ServiceError> {
        check_status(Op::LoadTodos, &response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ServiceError::new(Op::LoadTodos, ErrorKind::Deserialization(e.to_string())))
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ServiceError> {
        check_status(Op::LoadUsers, &response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ServiceError::new(Op::LoadUsers, ErrorKind::Deserialization(e.to_string())))
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ServiceError> {
        check_status(Op::CreateTodo, &response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ServiceError::new(Op::CreateTodo, ErrorKind::Deserialization(e.to_string())))
    }

    /// The PATCH response body is ignored; only the status matters.
    pub fn parse_update_completion(&self, response: HttpResponse) -> Result<(), ServiceError> {
        check_status(Op::UpdateTodo, &response)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ServiceError> {
        check_status(Op::DeleteTodo, &response)
    }

    pub fn list_todos(&self, transport: &mut dyn Transport) -> Result<Vec<Todo>, ServiceError> {
        let response = execute(transport, Op::LoadTodos, self.build_list_todos())?;
        self.parse_list_todos(response)
    }

    pub fn list_users(&self, transport: &mut dyn Transport) -> Result<Vec<User>, ServiceError> {
        let response = execute(transport, Op::LoadUsers, self.build_list_users())?;
        self.parse_list_users(response)
    }

    pub fn create_todo(&self, transport: &mut dyn Transport, input: &NewTodo) -> Result<Todo, ServiceError> {
        let request = self.build_create_todo(input)?;
        let response = execute(transport, Op::CreateTodo, request)?;
        self.parse_create_todo(response)
    }

    pub fn update_todo_completion(
        &self,
        transport: &mut dyn Transport,
        id: u64,
        completed: bool,
    ) -> Result<(), ServiceError> {
        let request = self.build_update_completion(id, completed)?;
        let response = execute(transport, Op::UpdateTodo, request)?;
        self.parse_update_completion(response)
    }

    pub fn delete_todo(&self, transport: &mut dyn Transport, id: u64) -> Result<(), ServiceError> {
        let response = execute(transport, Op::DeleteTodo, self.build_delete_todo(id))?;
        self.parse_delete_todo(response)
    }
}

fn execute(transport: &mut dyn Transport, op: Op, request: HttpRequest) -> Result<HttpResponse, ServiceError> {
    transport
        .execute(request)
        .map_err(|e| ServiceError::transport(op, e.0))
}

/// Any 2xx status counts as success; everything else becomes a
/// `ServiceError` carrying the raw status and body.
fn check_status(op: Op, response: &HttpResponse) -> Result<(), ServiceError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ServiceError::http(op, response.status, response.body.clone()))
}
