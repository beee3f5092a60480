//! App Configuration
//!
//! Compile-time defaults. Nothing is read from the environment.

use log::Level;

/// Endpoint listing every todo
pub const TODOS_URL: &str = "https://jsonplaceholder.typicode.com/todos/";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// URL the table loads its rows from
    pub todos_url: String,
    /// Most verbose level forwarded to the console
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            todos_url: TODOS_URL.to_string(),
            log_level: if cfg!(debug_assertions) {
                Level::Debug
            } else {
                Level::Info
            },
        }
    }
}
