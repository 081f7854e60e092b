//! Interaction controller: binds user actions to remote calls and store
//! mutations.
//!
//! # Design
//! The controller is the explicitly constructed application context — it
//! owns the [`SyncClient`], the [`Store`], the current status/hint
//! [`Messages`], and the [`Transport`] that executes requests. Each action
//! runs to completion (success or failure) before the next one can be
//! dispatched, so store mutations never interleave.
//!
//! Mutations are request-confirmed: the store changes only after the
//! server acknowledged the operation. On failure the store is left
//! untouched, the status line is overwritten with the error text, and the
//! error is returned so the host can raise its alert (and, for toggles,
//! revert the native checkbox). No failure is fatal.

use crate::client::SyncClient;
use crate::error::ServiceError;
use crate::http::Transport;
use crate::store::Store;
use crate::types::{NewTodo, Todo};
use crate::view::{self, Messages, View};

/// Outcome of a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submit {
    /// The todo was created; the host should clear the form fields.
    Created(Todo),
    /// Validation failed (empty trimmed title or no user selected); the
    /// submission is silently dropped and no request is made.
    Ignored,
}

pub struct Controller<T: Transport> {
    client: SyncClient,
    store: Store,
    messages: Messages,
    transport: T,
}

impl<T: Transport> Controller<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: SyncClient::new(base_url),
            store: Store::new(),
            messages: Messages::default(),
            transport,
        }
    }

    /// Initial load: both list requests must succeed before the store is
    /// populated. On failure the store stays empty and the UI remains in
    /// its unrendered state.
    pub fn startup(&mut self) -> Result<(), ServiceError> {
        let loaded = self
            .client
            .list_todos(&mut self.transport)
            .and_then(|todos| {
                let users = self.client.list_users(&mut self.transport)?;
                Ok((todos, users))
            });

        match loaded {
            Ok((todos, users)) => {
                self.store.replace_all(todos, users);
                if self.store.todos().is_empty() {
                    self.set_messages(view::MSG_EMPTY, view::HINT_EMPTY);
                } else {
                    self.set_messages(view::MSG_LOADED, view::HINT_LOADED);
                }
                Ok(())
            }
            Err(err) => Err(self.report(err)),
        }
    }

    /// Form submission. Whitespace-only titles and an unselected user
    /// (id 0) are silently ignored without touching the network.
    pub fn submit(&mut self, user_id: u64, title: &str) -> Result<Submit, ServiceError> {
        let title = title.trim();
        if title.is_empty() || user_id == 0 {
            return Ok(Submit::Ignored);
        }

        let input = NewTodo {
            user_id,
            title: title.to_string(),
            completed: false,
        };
        match self.client.create_todo(&mut self.transport, &input) {
            Ok(todo) => {
                self.store.add_todo(todo.clone());
                self.messages.status = format!("Task \"{title}\" added.");
                self.messages.hint = view::HINT_AFTER_ADD.to_string();
                Ok(Submit::Created(todo))
            }
            Err(err) => Err(self.report(err)),
        }
    }

    /// Completion toggle. The native checkbox has already flipped
    /// visually; the store commits only on server success. On failure the
    /// store is unchanged and the host must revert the checkbox to
    /// `!completed`.
    pub fn toggle(&mut self, id: u64, completed: bool) -> Result<(), ServiceError> {
        match self
            .client
            .update_todo_completion(&mut self.transport, id, completed)
        {
            Ok(()) => {
                self.store.set_completed(id, completed);
                self.messages.status = if completed {
                    view::MSG_COMPLETED.to_string()
                } else {
                    view::MSG_ACTIVE.to_string()
                };
                Ok(())
            }
            Err(err) => Err(self.report(err)),
        }
    }

    /// Removal. No optimistic deletion: the entry disappears only after
    /// the server confirmed it.
    pub fn remove(&mut self, id: u64) -> Result<(), ServiceError> {
        match self.client.delete_todo(&mut self.transport, id) {
            Ok(()) => {
                self.store.remove(id);
                self.messages.status = view::MSG_REMOVED.to_string();
                Ok(())
            }
            Err(err) => Err(self.report(err)),
        }
    }

    /// Render the current snapshot.
    pub fn view(&self) -> View {
        view::render(&self.store, &self.messages)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn set_messages(&mut self, status: &str, hint: &str) {
        self.messages.status = status.to_string();
        self.messages.hint = hint.to_string();
    }

    /// Overwrite the status line with the error text, then hand the error
    /// back for the host's alert.
    fn report(&mut self, err: ServiceError) -> ServiceError {
        self.messages.status = err.to_string();
        err
    }
}
