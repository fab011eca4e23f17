//! Link Select Component
//!
//! Dropdown of every task as a candidate link target. All rows share one
//! selection.

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::selection::LinkSelection;
use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn LinkSelect() -> impl IntoView {
    let store = use_todo_store();
    let ctx = use_todo_context();

    // Candidate targets are all tasks, ignoring the search filter. Options
    // are keyed by id so editing a task's text keeps its option element.
    let option_ids = move || {
        store
            .tasks()
            .with(|tasks| tasks.iter().map(|task| task.id).collect::<Vec<_>>())
    };

    view! {
        <select on:change=move |ev| {
            let selection = LinkSelection::from_option_value(&event_target_value(&ev));
            store.selection().set(selection);
        }>
            <option
                value={LinkSelection::IDLE_OPTION_VALUE}
                prop:selected=move || store.selection().get().marks(None)
            >
                {ctx.link_token()}
            </option>
            <For
                each=option_ids
                key=|id| *id
                children=move |id| {
                    let content = move || {
                        store
                            .tasks()
                            .with(|tasks| tasks.get(id).map(|task| task.content.clone()))
                            .unwrap_or_default()
                    };
                    view! {
                        <option
                            value=id.to_string()
                            prop:selected=move || store.selection().get().marks(Some(id))
                        >
                            {content}
                        </option>
                    }
                }
            />
        </select>
    }
}
