//! Global Todo State Store
//!
//! Uses Leptos reactive_stores so the table only re-renders when `rows` changes.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::Todo;

/// Shared state holding the most recently fetched rows
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Fetched todos, in server response order
    pub rows: Vec<Todo>,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Replace every row in one write.
///
/// Subscribers are notified once, after the new rows are in place.
pub fn store_set_data(store: &TodoStore, rows: Vec<Todo>) {
    *store.rows().write() = rows;
}
