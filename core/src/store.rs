//! In-memory state store for loaded todos and users.
//!
//! # Design
//! The store is a pure data container. Every mutation corresponds to a
//! server-confirmed operation — the controller calls `add_todo` only after
//! a create succeeded, `remove` only after a delete succeeded, and so on.
//! Todos keep server list order; display order (newest first) is the
//! renderer's concern.

use crate::types::{Todo, User};

/// Placeholder shown when a todo references a user that was never loaded.
pub const UNKNOWN_USER: &str = "Unknown user";

/// Derived counters, computed on demand from the todo sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub done: usize,
}

/// Owned snapshot of loaded todos and users.
#[derive(Debug, Default)]
pub struct Store {
    todos: Vec<Todo>,
    users: Vec<User>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire contents. Used once, after the startup loads.
    pub fn replace_all(&mut self, todos: Vec<Todo>, users: Vec<User>) {
        self.todos = todos;
        self.users = users;
    }

    /// Append a server-confirmed todo to the end of the sequence.
    pub fn add_todo(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Flip the completion flag of the todo with `id`. No-op when the id
    /// is not present.
    pub fn set_completed(&mut self, id: u64, completed: bool) {
        if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
            todo.completed = completed;
        }
    }

    /// Remove the todo with `id`. Idempotent: absent ids are a no-op.
    pub fn remove(&mut self, id: u64) {
        self.todos.retain(|t| t.id != id);
    }

    pub fn counts(&self) -> Counts {
        Counts {
            total: self.todos.len(),
            done: self.todos.iter().filter(|t| t.completed).count(),
        }
    }

    /// Display name for `user_id`, falling back to [`UNKNOWN_USER`] so the
    /// renderer never fails on a dangling reference.
    pub fn user_name(&self, user_id: u64) -> &str {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .map_or(UNKNOWN_USER, |u| u.name.as_str())
    }

    /// Todos in server list order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Users in load order.
    pub fn users(&self) -> &[User] {
        &self.users
    }
}
