//! Task Row Component
//!
//! One `<li>` of the list: icon, content, linked tasks, edit field, link
//! target picker and the link/delete buttons.

use leptos::prelude::*;

use crate::components::LinkSelect;
use crate::models::TaskId;
use crate::store::{
    store_delete_task, store_edit_task, store_link_selected, use_todo_store, TodoStateStoreFields,
};

/// A single task row, looked up by id so edits don't remount it
#[component]
pub fn TaskRow(id: TaskId) -> impl IntoView {
    let store = use_todo_store();

    let task = Memo::new(move |_| store.tasks().with(|tasks| tasks.get(id).cloned()));
    let is_draft = Memo::new(move |_| store.tasks().with(|tasks| tasks.is_draft(id)));
    let linked = Memo::new(move |_| store.tasks().with(|tasks| tasks.linked_contents(id)));

    // Position is resolved when an event fires; earlier deletes shift it
    let position = move || store.tasks().with_untracked(|tasks| tasks.position_of(id));

    let content = move || {
        task.with(|t| t.as_ref().map(|t| t.content.clone()).unwrap_or_default())
    };
    let icon_class = move || {
        task.with(|t| format!("fa {}", t.as_ref().map(|t| t.icon.as_str()).unwrap_or_default()))
    };

    // The draft row edits the staging text, other rows edit their content
    let field_value = move || {
        if is_draft.get() {
            store.input_value().get()
        } else {
            content()
        }
    };

    let link_disabled = move || is_draft.get() || store.selection().get().is_idle();

    view! {
        <li class="task">
            <div class="task-content">
                <span class=icon_class />
                " "
                {content}
                {move || {
                    linked
                        .get()
                        .into_iter()
                        .map(|linked_content| view! { <div class="linked-task">{linked_content}</div> })
                        .collect_view()
                }}
            </div>
            <input
                type="text"
                class="task-input"
                prop:value=field_value
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    if is_draft.get_untracked() {
                        store.input_value().set(value);
                    } else if let Some(position) = position() {
                        store_edit_task(&store, position, value);
                    }
                }
                autofocus=move || is_draft.get()
            />
            <LinkSelect />
            <button
                class="task-button"
                disabled=link_disabled
                on:click=move |_| {
                    if let Some(position) = position() {
                        store_link_selected(&store, position);
                    }
                }
            >
                "Link to selected task"
            </button>
            <button
                class="task-button"
                on:click=move |_| {
                    if let Some(position) = position() {
                        store_delete_task(&store, position);
                    }
                }
            >
                "Delete"
            </button>
        </li>
    }
}
