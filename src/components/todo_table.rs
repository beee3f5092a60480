//! Todo Table Component
//!
//! Loads todos once on mount and renders whatever the store currently holds.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_todo_source;
use crate::loader::{load_todos, run_once, LoadStatus, MountGuard};
use crate::store::{use_todo_store, TodoStateStoreFields};
use crate::table::{cell_class, row_cells, TABLE_HEADERS};

/// Todo table component
#[component]
pub fn TodoTable() -> impl IntoView {
    let store = use_todo_store();
    let source = use_todo_source().source();
    let (status, set_status) = signal(LoadStatus::Idle);

    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.cancel()
    });

    // Load on mount. No tracked reads, and `run_once` blocks any re-run.
    Effect::new(move |prev: Option<()>| {
        run_once(prev, || {
            let source = source.clone();
            let guard = guard.clone();
            set_status.set(LoadStatus::Loading);
            spawn_local(async move {
                if let Some(outcome) = load_todos(store, source.as_ref(), &guard).await {
                    set_status.set(outcome);
                }
            });
        })
    });

    let busy = move || (status.get() == LoadStatus::Loading).to_string();

    view! {
        <div class="todo-table-wrapper">
            <div class="table-container">
                <table class="todo-table" aria-label="todo table" aria-busy=busy>
                    <thead>
                        <tr>
                            {TABLE_HEADERS
                                .iter()
                                .enumerate()
                                .map(|(column, header)| view! {
                                    <th class=cell_class(column)>{*header}</th>
                                })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.rows().get()
                            key=|todo| todo.id
                            children=move |todo| {
                                let [user_id, id, title, completed] = row_cells(&todo);
                                view! {
                                    <tr class="todo-row">
                                        <th scope="row" class=cell_class(0)>{user_id}</th>
                                        <td class=cell_class(1)>{id}</td>
                                        <td class=cell_class(2)>{title}</td>
                                        <td class=cell_class(3)>{completed}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
