//! Todo App
//!
//! Root component: creates the store and provides it with the settings.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::TodoList;
use crate::config::TodoConfig;
use crate::context::TodoContext;
use crate::store::TodoState;

#[component]
pub fn App(config: TodoConfig) -> impl IntoView {
    // Seed state: one blank draft task
    let store = Store::new(TodoState::new(&config.default_icon));

    // Provide context to all children
    provide_context(store);
    provide_context(TodoContext::new(config));

    view! { <TodoList /> }
}
