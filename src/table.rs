//! Table Utilities
//!
//! Helper functions for turning todos into table cells.

use crate::models::Todo;

/// Column headers, in display order
pub const TABLE_HEADERS: [&str; 4] = ["User ID", "ID", "Title", "Completed"];

pub fn completed_label(completed: bool) -> &'static str {
    if completed { "Yes" } else { "No" }
}

/// Cell texts for one body row, matching [`TABLE_HEADERS`]
pub fn row_cells(todo: &Todo) -> [String; 4] {
    [
        todo.user_id.to_string(),
        todo.id.to_string(),
        todo.title.clone(),
        completed_label(todo.completed).to_string(),
    ]
}

/// CSS class for a header or body cell. Only the first column is left aligned.
pub fn cell_class(column: usize) -> &'static str {
    if column == 0 { "cell" } else { "cell align-right" }
}
