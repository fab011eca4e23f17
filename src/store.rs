//! Todo State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Components read
//! single fields; the helpers below apply user intents field by field.

use leptos::prelude::*;
use leptos_keybind::Key;
use reactive_stores::Store;

use crate::selection::{resolve_key, LinkCommand, LinkSelection};
use crate::task_list::TaskList;

/// Component state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct TodoState {
    /// All tasks, draft last
    pub tasks: TaskList,
    /// Staging text for the draft task
    pub input_value: String,
    pub search_term: String,
    /// Target of the next link/unlink action
    pub selection: LinkSelection,
}

impl TodoState {
    pub fn new(icon: &str) -> Self {
        Self {
            tasks: TaskList::new(icon),
            input_value: String::new(),
            search_term: String::new(),
            selection: LinkSelection::Idle,
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================
//
// Each helper takes and releases one field guard at a time: field guards
// share the store's lock.

/// Turn the staging text into a task and clear the input
pub fn store_submit_draft(store: &TodoStore, icon: &str) {
    let text = store.input_value().get_untracked();
    store.tasks().write().add_task(&text, icon);
    store.input_value().set(String::new());
}

/// Replace the content of the task at `position`
pub fn store_edit_task(store: &TodoStore, position: usize, content: String) {
    let result = store.tasks().write().edit_task(position, content);
    if let Err(e) = result {
        log::warn!("[TASKS] edit failed: {}", e);
    }
}

/// Delete the task at `position`, dropping the selection if it pointed there
pub fn store_delete_task(store: &TodoStore, position: usize) {
    let result = store.tasks().write().delete_task(position);
    match result {
        Ok(removed) => {
            if store.selection().get_untracked().targets(removed.id) {
                store.selection().set(LinkSelection::Idle);
            }
        }
        Err(e) => log::warn!("[TASKS] delete failed: {}", e),
    }
}

/// Link the task at `position` to the selected task (the row's link button)
pub fn store_link_selected(store: &TodoStore, position: usize) {
    let source = store.tasks().with_untracked(|tasks| tasks.id_at(position));
    let Some(source) = source else {
        log::warn!("[TASKS] link failed: no task at position {}", position);
        return;
    };
    if let Some(command) = store.selection().get_untracked().link_from(source) {
        store_apply_command(store, command);
    }
}

/// Run the keyboard link protocol for one key press.
///
/// Returns true when the key changed the links.
pub fn store_handle_key(store: &TodoStore, key: &Key, link_token: &str) -> bool {
    let staging = store.input_value().get_untracked();
    let selection = store.selection().get_untracked();
    let draft = store.tasks().with_untracked(|tasks| tasks.draft_id());

    match resolve_key(key, &staging, selection, draft, link_token) {
        Some(command) => {
            log::debug!("[KEYS] {:?} -> {:?}", key, command);
            store_apply_command(store, command);
            true
        }
        None => false,
    }
}

fn store_apply_command(store: &TodoStore, command: LinkCommand) {
    let result = command.apply(&mut store.tasks().write());
    if let Err(e) = result {
        log::warn!("[TASKS] {:?} failed: {}", command, e);
    }
    store.selection().set(LinkSelection::Idle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;

    const ICON: &str = "fa-utensils";
    const TOKEN: &str = "<>";

    fn with_store(f: impl FnOnce(TodoStore)) {
        let owner = Owner::new();
        owner.with(|| f(Store::new(TodoState::new(ICON))));
    }

    fn contents(store: &TodoStore) -> Vec<String> {
        store
            .tasks()
            .with_untracked(|tasks| tasks.iter().map(|task| task.content.clone()).collect())
    }

    #[test]
    fn test_typing_then_add() {
        with_store(|store| {
            store.input_value().set("Wash dishes".to_string());
            store_submit_draft(&store, ICON);

            assert_eq!(contents(&store), vec!["Wash dishes".to_string(), String::new()]);
            assert_eq!(store.input_value().get_untracked(), "");
        });
    }

    #[test]
    fn test_keyboard_link_and_unlink() {
        with_store(|store| {
            store.input_value().set("Buy milk".to_string());
            store_submit_draft(&store, ICON);
            let (first, draft) = store
                .tasks()
                .with_untracked(|tasks| (tasks.id_at(0).unwrap(), tasks.draft_id()));

            store.selection().set(LinkSelection::Armed(first));
            store.input_value().set(TOKEN.to_string());
            assert!(store_handle_key(&store, &Key::Enter, TOKEN));
            assert_eq!(
                store.tasks().with_untracked(|tasks| tasks.get(draft).unwrap().linked_tasks.clone()),
                vec![first]
            );
            assert_eq!(store.selection().get_untracked(), LinkSelection::Idle);

            store.selection().set(LinkSelection::Armed(first));
            assert!(store_handle_key(&store, &Key::Backspace, TOKEN));
            assert!(store
                .tasks()
                .with_untracked(|tasks| tasks.get(draft).unwrap().linked_tasks.is_empty()));
            assert_eq!(store.selection().get_untracked(), LinkSelection::Idle);
        });
    }

    #[test]
    fn test_keys_ignored_when_idle() {
        with_store(|store| {
            store.input_value().set(TOKEN.to_string());
            assert!(!store_handle_key(&store, &Key::Enter, TOKEN));
            assert!(!store_handle_key(&store, &Key::Backspace, TOKEN));
            assert!(!store_handle_key(&store, &Key::Other("x".to_string()), TOKEN));
        });
    }

    #[test]
    fn test_delete_clears_selection_of_deleted_task() {
        with_store(|store| {
            store_submit_draft(&store, ICON);
            let first = store.tasks().with_untracked(|tasks| tasks.id_at(0).unwrap());
            store.selection().set(LinkSelection::Armed(first));

            store_delete_task(&store, 0);

            assert_eq!(store.selection().get_untracked(), LinkSelection::Idle);
            assert_eq!(contents(&store), vec![String::new()]);
        });
    }

    #[test]
    fn test_add_after_deleting_draft_row() {
        with_store(|store| {
            store.input_value().set("Buy milk".to_string());
            store_submit_draft(&store, ICON);

            store_delete_task(&store, 1);
            store.input_value().set("Walk dog".to_string());
            store_submit_draft(&store, ICON);

            assert_eq!(
                contents(&store),
                vec!["Buy milk".to_string(), "Walk dog".to_string(), String::new()]
            );
        });
    }

    #[test]
    fn test_keyboard_link_after_middle_delete() {
        with_store(|store| {
            for text in ["a", "b", "c"] {
                store.input_value().set(text.to_string());
                store_submit_draft(&store, ICON);
            }
            let c = store.tasks().with_untracked(|tasks| tasks.id_at(2).unwrap());

            store_delete_task(&store, 1);
            let draft = store.tasks().with_untracked(|tasks| tasks.draft_id());
            assert_eq!(store.tasks().with_untracked(|tasks| tasks.position_of(draft)), Some(2));

            store.selection().set(LinkSelection::Armed(c));
            store.input_value().set(TOKEN.to_string());
            assert!(store_handle_key(&store, &Key::Enter, TOKEN));
            assert_eq!(
                store.tasks().with_untracked(|tasks| tasks.linked_contents(draft)),
                vec!["c".to_string()]
            );

            store.selection().set(LinkSelection::Armed(c));
            assert!(store_handle_key(&store, &Key::Backspace, TOKEN));
            assert!(store.tasks().with_untracked(|tasks| tasks.linked_contents(draft).is_empty()));
            assert_eq!(store.selection().get_untracked(), LinkSelection::Idle);
        });
    }

    #[test]
    fn test_link_button_and_bad_positions() {
        with_store(|store| {
            store.input_value().set("a".to_string());
            store_submit_draft(&store, ICON);
            store.input_value().set("b".to_string());
            store_submit_draft(&store, ICON);
            let (a, b) = store
                .tasks()
                .with_untracked(|tasks| (tasks.id_at(0).unwrap(), tasks.id_at(1).unwrap()));

            store.selection().set(LinkSelection::Armed(b));
            store_link_selected(&store, 0);
            assert!(store.tasks().with_untracked(|tasks| tasks.get(a).unwrap().links_to(b)));
            assert_eq!(store.selection().get_untracked(), LinkSelection::Idle);

            // out of range positions leave the list untouched
            let before = store.tasks().get_untracked();
            store_edit_task(&store, 10, "x".to_string());
            store_delete_task(&store, 10);
            store_link_selected(&store, 10);
            assert_eq!(store.tasks().get_untracked(), before);
        });
    }
}
