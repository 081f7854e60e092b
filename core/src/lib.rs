//! Client core for the remote todo service UI.
//!
//! # Overview
//! Everything between the user's intent and the wire lives here: the
//! [`SyncClient`] builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network (host-does-IO pattern), the
//! [`Store`] holds the loaded todos and users, the view module renders
//! store snapshots into displayable [`View`] descriptions, and the
//! [`Controller`] ties user actions to confirmed server operations.
//!
//! # Design
//! - The core performs no I/O; hosts implement [`Transport`] to execute
//!   requests, making every path deterministic and testable.
//! - Store mutations are request-confirmed: they happen only after the
//!   server acknowledged the corresponding operation.
//! - DTOs are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod store;
pub mod types;
pub mod view;

pub use client::{SyncClient, API_URL, TODOS_LIMIT, USERS_LIMIT};
pub use controller::{Controller, Submit};
pub use error::{ErrorKind, Op, ServiceError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use store::{Counts, Store};
pub use types::{CompletionPatch, NewTodo, Todo, User};
pub use view::{render, Messages, View};
