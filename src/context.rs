//! Todo Context
//!
//! Read-only settings shared with all components via the Leptos Context API.

use leptos::prelude::*;

use crate::config::TodoConfig;

#[derive(Clone, Copy)]
pub struct TodoContext {
    config: StoredValue<TodoConfig>,
}

impl TodoContext {
    pub fn new(config: TodoConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    pub fn default_icon(&self) -> String {
        self.config.with_value(|c| c.default_icon.clone())
    }

    pub fn link_token(&self) -> String {
        self.config.with_value(|c| c.link_token.clone())
    }

    pub fn task_placeholder(&self) -> String {
        self.config.with_value(|c| c.task_placeholder.clone())
    }

    pub fn search_placeholder(&self) -> String {
        self.config.with_value(|c| c.search_placeholder.clone())
    }
}

/// Get the todo context
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
