//! Todo Table App
//!
//! Root component: owns the store and the data source, provides both via context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpTodoSource;
use crate::components::TodoTable;
use crate::config::AppConfig;
use crate::context::TodoSourceContext;
use crate::store::TodoState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(Store::new(TodoState::default()));
    provide_context(TodoSourceContext::new(HttpTodoSource::new(config.todos_url)));

    view! {
        <main class="app-layout">
            <TodoTable />
        </main>
    }
}
