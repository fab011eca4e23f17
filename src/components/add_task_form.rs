//! Add Task Form Component
//!
//! Staging input for the draft task and the button that submits it.

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::store::{store_submit_draft, use_todo_store, TodoStateStoreFields};

#[component]
pub fn AddTaskForm() -> impl IntoView {
    let store = use_todo_store();
    let ctx = use_todo_context();
    let icon = ctx.default_icon();

    view! {
        <input
            type="text"
            class="task-input"
            placeholder=ctx.task_placeholder()
            prop:value=move || store.input_value().get()
            on:input=move |ev| store.input_value().set(event_target_value(&ev))
        />
        <button class="task-button" on:click=move |_| store_submit_draft(&store, &icon)>
            <i class="fas fa-plus" />
            " Add Task"
        </button>
    }
}
