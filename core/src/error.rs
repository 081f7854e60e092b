//! The single error type for failed remote operations.
//!
//! # Design
//! Every failure is a `ServiceError` tagged with the operation that was in
//! flight ("load todos", "create todo", …) plus a kind describing what
//! went wrong. The UI surfaces all failures identically, so there is no
//! per-status taxonomy beyond keeping the raw status and body around for
//! debugging.

use std::fmt;

/// The remote operation a [`ServiceError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    LoadTodos,
    LoadUsers,
    CreateTodo,
    UpdateTodo,
    DeleteTodo,
}

impl Op {
    /// Human-readable tag used in status lines and alerts.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::LoadTodos => "load todos",
            Op::LoadUsers => "load users",
            Op::CreateTodo => "create todo",
            Op::UpdateTodo => "update todo",
            Op::DeleteTodo => "delete todo",
        }
    }
}

/// What went wrong during a remote operation.
#[derive(Debug, Clone)]
pub enum ErrorKind {
    /// The server answered with a non-2xx status.
    Http { status: u16, body: String },

    /// The request never produced a response (connection, DNS, I/O).
    Transport(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),
}

/// A failed remote call, tagged with the operation that failed.
#[derive(Debug, Clone)]
pub struct ServiceError {
    op: Op,
    kind: ErrorKind,
}

impl ServiceError {
    pub fn new(op: Op, kind: ErrorKind) -> Self {
        Self { op, kind }
    }

    pub fn http(op: Op, status: u16, body: String) -> Self {
        Self::new(op, ErrorKind::Http { status, body })
    }

    pub fn transport(op: Op, message: String) -> Self {
        Self::new(op, ErrorKind::Transport(message))
    }

    /// The operation that was in flight when the failure occurred.
    pub fn op(&self) -> Op {
        self.op
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to {}: ", self.op.as_str())?;
        match &self.kind {
            ErrorKind::Http { status, body } if body.is_empty() => {
                write!(f, "HTTP {status}")
            }
            ErrorKind::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ErrorKind::Transport(msg) => write!(f, "transport error: {msg}"),
            ErrorKind::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ErrorKind::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}
