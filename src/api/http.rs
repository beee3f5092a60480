//! HTTP-backed todo source.

use async_trait::async_trait;

use super::{parse_todos, FetchError, TodoSource};
use crate::models::Todo;

/// Loads todos with a single unauthenticated GET, no query and no timeout
#[derive(Clone, Debug)]
pub struct HttpTodoSource {
    url: String,
}

impl HttpTodoSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl TodoSource for HttpTodoSource {
    async fn fetch_todos(&self) -> Result<Vec<Todo>, FetchError> {
        log::debug!("[HttpTodoSource] GET {}", self.url);
        let response = reqwest::get(&self.url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        parse_todos(&body)
    }
}

