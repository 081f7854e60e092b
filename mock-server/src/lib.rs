//! Local stand-in for the remote todo service.
//!
//! Implements the slice of the contract the UI consumes: listing todos and
//! users with a `_limit` query parameter, creating todos with
//! server-assigned integer ids, PATCH partial updates, and deletes. Users
//! are seeded fixture data; the service exposes no way to mutate them.
//! Todos keep insertion order because list order is the UI's display
//! contract.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

#[derive(Deserialize)]
pub struct NewTodo {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(rename = "_limit")]
    pub limit: Option<usize>,
}

#[derive(Debug)]
pub struct Db {
    todos: Vec<Todo>,
    users: Vec<User>,
    next_id: u64,
}

pub type SharedDb = Arc<RwLock<Db>>;

fn seed_users() -> Vec<User> {
    [
        "Leanne Graham",
        "Ervin Howell",
        "Clementine Bauch",
        "Patricia Lebsack",
        "Chelsey Dietrich",
    ]
    .iter()
    .enumerate()
    .map(|(i, name)| User {
        id: i as u64 + 1,
        name: (*name).to_string(),
    })
    .collect()
}

pub fn app() -> Router {
    let db: SharedDb = Arc::new(RwLock::new(Db {
        todos: Vec::new(),
        users: seed_users(),
        next_id: 1,
    }));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", patch(update_todo).delete(delete_todo))
        .route("/users", get(list_users))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<SharedDb>, Query(params): Query<ListParams>) -> Json<Vec<Todo>> {
    let db = db.read().await;
    let limit = params.limit.unwrap_or(db.todos.len());
    Json(db.todos.iter().take(limit).cloned().collect())
}

async fn list_users(State(db): State<SharedDb>, Query(params): Query<ListParams>) -> Json<Vec<User>> {
    let db = db.read().await;
    let limit = params.limit.unwrap_or(db.users.len());
    Json(db.users.iter().take(limit).cloned().collect())
}

async fn create_todo(
    State(db): State<SharedDb>,
    Json(input): Json<NewTodo>,
) -> (StatusCode, Json<Todo>) {
    let mut db = db.write().await;
    let todo = Todo {
        id: db.next_id,
        user_id: input.user_id,
        title: input.title,
        completed: input.completed,
    };
    db.next_id += 1;
    db.todos.push(todo.clone());
    (StatusCode::CREATED, Json(todo))
}

async fn update_todo(
    State(db): State<SharedDb>,
    Path(id): Path<u64>,
    Json(input): Json<TodoPatch>,
) -> Result<Json<Todo>, StatusCode> {
    let mut db = db.write().await;
    let todo = db
        .todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<SharedDb>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut db = db.write().await;
    let before = db.todos.len();
    db.todos.retain(|t| t.id != id);
    if db.todos.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(StatusCode::NO_CONTENT)
}
