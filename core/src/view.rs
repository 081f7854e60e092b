//! Pure view rendering: store snapshot in, view description out.
//!
//! # Design
//! `render` maps the current [`Store`] contents plus the controller's
//! status/hint lines to a [`View`] value and has no side effects. The host
//! decides how to display it (DOM, terminal, test assertion). All
//! interpolated text is escaped here, so hosts can interpolate labels into
//! markup directly.

use crate::store::Store;

// UI copy. Status and hint lines are overwritten on every state-affecting
// action, so only the latest message is ever visible.
pub const MSG_LOADED: &str = "Todos are loaded and ready.";
pub const HINT_LOADED: &str = "Use checkbox to complete task and × to remove it.";
pub const MSG_EMPTY: &str = "No tasks yet. Add your first todo.";
pub const HINT_EMPTY: &str = "Choose user, type task title, then click Add Todo.";
pub const HINT_AFTER_ADD: &str = "You can mark it done or remove it.";
pub const MSG_COMPLETED: &str = "Task marked as completed.";
pub const MSG_ACTIVE: &str = "Task moved back to active.";
pub const MSG_REMOVED: &str = "Task removed.";

/// Label of the explicit empty-state entry.
pub const EMPTY_NOTICE: &str = "No tasks yet";

/// Current status and hint lines, owned by the controller.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    pub status: String,
    pub hint: String,
}

/// A selectable user option, in user load order. `label` is escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOption {
    pub value: u64,
    pub label: String,
}

/// One displayed todo row. `title` and `owner` are escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: u64,
    pub checked: bool,
    pub title: String,
    pub owner: String,
}

/// Description of the desired UI, produced from a store snapshot.
#[derive(Debug, Clone)]
pub struct View {
    pub user_options: Vec<UserOption>,
    /// Newest first (reverse of store order).
    pub items: Vec<TodoItem>,
    /// Present exactly when there are zero todos.
    pub empty_notice: Option<&'static str>,
    pub total: usize,
    pub done: usize,
    pub status: String,
    pub hint: String,
}

/// Render the store snapshot and current messages into a [`View`].
pub fn render(store: &Store, messages: &Messages) -> View {
    let user_options = store
        .users()
        .iter()
        .map(|user| UserOption {
            value: user.id,
            label: escape(&user.name),
        })
        .collect();

    let items: Vec<TodoItem> = store
        .todos()
        .iter()
        .rev()
        .map(|todo| TodoItem {
            id: todo.id,
            checked: todo.completed,
            title: escape(&todo.title),
            owner: escape(store.user_name(todo.user_id)),
        })
        .collect();

    let counts = store.counts();

    View {
        user_options,
        empty_notice: items.is_empty().then_some(EMPTY_NOTICE),
        items,
        total: counts.total,
        done: counts.done,
        status: messages.status.clone(),
        hint: messages.hint.clone(),
    }
}

/// Escape text for interpolation into markup. Minimum escaped set:
/// ampersand, angle brackets, and both quote characters.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
