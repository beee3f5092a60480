//! Frontend Models
//!
//! The todo record shown in the table and the wire shape it is decoded from.

use serde::Deserialize;

/// Normalized todo record held by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub user_id: u32,
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

/// One element of the `/todos/` response array.
///
/// Only the four displayed fields are selected; anything else the endpoint
/// sends is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTodo {
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

impl From<RawTodo> for Todo {
    fn from(raw: RawTodo) -> Self {
        Self {
            user_id: raw.user_id,
            id: raw.id,
            title: raw.title,
            completed: raw.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_todo_ignores_extra_fields() {
        let raw: RawTodo = serde_json::from_str(
            r#"{"userId": 3, "id": 42, "title": "water plants", "completed": false, "priority": "high"}"#,
        )
        .unwrap();
        let todo = Todo::from(raw);
        assert_eq!(todo.user_id, 3);
        assert_eq!(todo.id, 42);
        assert_eq!(todo.title, "water plants");
        assert!(!todo.completed);
    }

    #[test]
    fn test_raw_todo_requires_completed_flag() {
        let result = serde_json::from_str::<RawTodo>(r#"{"userId": 1, "id": 1, "title": "t1"}"#);
        assert!(result.is_err());
    }
}
