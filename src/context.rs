//! Application Context
//!
//! Shared services provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use crate::api::TodoSource;

/// Where the table loads its rows from
#[derive(Clone)]
pub struct TodoSourceContext(Arc<dyn TodoSource>);

impl TodoSourceContext {
    pub fn new(source: impl TodoSource + 'static) -> Self {
        Self(Arc::new(source))
    }

    pub fn source(&self) -> Arc<dyn TodoSource> {
        Arc::clone(&self.0)
    }
}

/// Get the todo source from context
pub fn use_todo_source() -> TodoSourceContext {
    expect_context::<TodoSourceContext>()
}
