//! Todo Data Source
//!
//! The async seam between the view and wherever rows come from.

mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{RawTodo, Todo};

pub use http::HttpTodoSource;

/// Everything that can go wrong while loading todos.
///
/// The variants only sharpen diagnostics; callers treat them all alike.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of todo rows.
///
/// Futures are not `Send`: on wasm32 they wrap browser promises and run on
/// the single UI thread.
#[async_trait(?Send)]
pub trait TodoSource: Send + Sync {
    /// Fetch the full list, in server order
    async fn fetch_todos(&self) -> Result<Vec<Todo>, FetchError>;
}

/// Decode a response body into normalized records, preserving array order
pub fn parse_todos(body: &str) -> Result<Vec<Todo>, FetchError> {
    let raw: Vec<RawTodo> = serde_json::from_str(body)?;
    Ok(raw.into_iter().map(Todo::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_todos_keeps_response_order() {
        let body = r#"[
            {"userId": 1, "id": 7, "title": "b", "completed": true},
            {"userId": 2, "id": 3, "title": "a", "completed": false}
        ]"#;
        let todos = parse_todos(body).unwrap();
        let ids: Vec<u32> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![7, 3]);
        assert_eq!(todos[1].user_id, 2);
    }

    #[test]
    fn test_parse_todos_empty_array() {
        assert!(parse_todos("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_todos_rejects_non_array() {
        let err = parse_todos(r#"{"userId": 1, "id": 1, "title": "t", "completed": true}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_parse_todos_rejects_wrong_field_type() {
        let err = parse_todos(r#"[{"userId": 1, "id": 1, "title": "t", "completed": "yes"}]"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_status_error_message() {
        assert_eq!(FetchError::Status(500).to_string(), "server responded with status 500");
    }
}
