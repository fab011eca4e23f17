//! Todo List Component
//!
//! Container with the add/search inputs and the filtered task rows. Owns the
//! window keydown binding for the link shortcuts.

use leptos::prelude::*;
use leptos_keybind::bind_global_keydown;

use crate::components::{AddTaskForm, SearchBox, TaskRow};
use crate::context::use_todo_context;
use crate::search::filter_tasks;
use crate::store::{store_handle_key, use_todo_store, TodoStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();
    let ctx = use_todo_context();

    // Bound once per mount, removed on unmount
    let link_token = ctx.link_token();
    bind_global_keydown(move |key, _ev| {
        store_handle_key(&store, &key, &link_token);
    });

    let visible_ids = move || {
        let term = store.search_term().get();
        store.tasks().with(|tasks| {
            filter_tasks(tasks.as_slice(), &term)
                .into_iter()
                .map(|(_, task)| task.id)
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="todo-container">
            <AddTaskForm />
            <SearchBox />
            <ul>
                <For
                    each=visible_ids
                    key=|id| *id
                    children=move |id| view! { <TaskRow id=id /> }
                />
            </ul>
        </div>
    }
}
