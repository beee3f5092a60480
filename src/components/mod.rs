//! UI Components
//!
//! Leptos components.

mod todo_table;

pub use todo_table::TodoTable;
