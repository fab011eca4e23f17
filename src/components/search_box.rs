//! Search Box Component

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn SearchBox() -> impl IntoView {
    let store = use_todo_store();
    let ctx = use_todo_context();

    view! {
        <input
            type="text"
            class="task-input"
            placeholder=ctx.search_placeholder()
            prop:value=move || store.search_term().get()
            on:input=move |ev| store.search_term().set(event_target_value(&ev))
        />
    }
}
