//! Domain DTOs for the remote todo service.
//!
//! # Design
//! These types mirror the service's JSON schema but are defined
//! independently from the mock-server crate; integration tests catch
//! schema drift. The wire format uses camelCase `userId`, so the owning
//! user field carries a serde rename.

use serde::{Deserialize, Serialize};

/// A single todo item as returned by the service.
///
/// `id` is server-assigned and unique. `user_id` should reference a loaded
/// [`User`](crate::types::User), but the store tolerates dangling
/// references at render time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

/// A named owner of todos. Loaded once at startup, read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
}

/// Request payload for creating a new todo. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// PATCH payload flipping exactly one field; omitted fields remain
/// unchanged on the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionPatch {
    pub completed: bool,
}
