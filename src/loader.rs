//! One-shot Todo Loading
//!
//! Fetches rows from a [`TodoSource`] and writes them into the store.
//! Failures are logged and swallowed; the store keeps whatever it held.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::api::TodoSource;
use crate::store::{store_set_data, TodoStore};

/// Progress of a view's load. `Loaded` and `Failed` render the same.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Cancellation flag tied to a mounted view
#[derive(Clone, Debug, Default)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the owning view as unmounted
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Body of the view's mount effect: calls `begin` on the first run only.
///
/// `prev` is the value the effect returned last time, `None` on the first run.
pub fn run_once(prev: Option<()>, begin: impl FnOnce()) {
    if prev.is_none() {
        begin();
    }
}

/// Run a single load. Never returns an error to the caller.
///
/// Returns `None` when `guard` was cancelled before the response arrived;
/// the response is then dropped and the store is left alone.
pub async fn load_todos(store: TodoStore, source: &dyn TodoSource, guard: &MountGuard) -> Option<LoadStatus> {
    let result = source.fetch_todos().await;
    if guard.is_cancelled() {
        log::debug!("[TodoTable] Unmounted before the response arrived, discarding it");
        return None;
    }
    match result {
        Ok(rows) => {
            log::info!("[TodoTable] Loaded {} todos", rows.len());
            store_set_data(&store, rows);
            Some(LoadStatus::Loaded)
        }
        Err(e) => {
            log::error!("[TodoTable] Failed to load todos: {}", e);
            Some(LoadStatus::Failed)
        }
    }
}
