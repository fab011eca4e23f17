//! Link Selection
//!
//! The task picked as the target of the next link/unlink action, and the
//! keyboard protocol that confirms or removes a link:
//!
//! - `Enter` while the staging input holds exactly the link token links the
//!   draft task to the selected task.
//! - `Backspace` while a task is selected removes the link between the
//!   selected task and the draft.
//!
//! Both reset the selection afterwards. Every other key is left to the
//! regular input bindings.

use leptos_keybind::Key;

use crate::error::Result;
use crate::models::TaskId;
use crate::task_list::TaskList;

/// Selection state of the link target picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkSelection {
    #[default]
    Idle,
    Armed(TaskId),
}

impl LinkSelection {
    /// `<option>` value standing for "no task selected"
    pub const IDLE_OPTION_VALUE: &'static str = "-1";

    pub fn target(self) -> Option<TaskId> {
        match self {
            LinkSelection::Idle => None,
            LinkSelection::Armed(id) => Some(id),
        }
    }

    pub fn is_idle(self) -> bool {
        self == LinkSelection::Idle
    }

    pub fn targets(self, id: TaskId) -> bool {
        self == LinkSelection::Armed(id)
    }

    /// Whether the `<option>` for `option` shows as selected; `None` is the
    /// "no task" option
    pub fn marks(self, option: Option<TaskId>) -> bool {
        self.target() == option
    }

    /// Decode a `<select>` value; anything that is not a task id means Idle
    pub fn from_option_value(value: &str) -> Self {
        value
            .parse::<TaskId>()
            .map(LinkSelection::Armed)
            .unwrap_or(LinkSelection::Idle)
    }

    /// Command linking `source` to the selected task, if any
    pub fn link_from(self, source: TaskId) -> Option<LinkCommand> {
        self.target().map(|target| LinkCommand::Link { source, target })
    }
}

/// A link change requested by a button or a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkCommand {
    Link { source: TaskId, target: TaskId },
    /// Remove the links between the selected task and the draft, both ways
    Detach { selected: TaskId, draft: TaskId },
}

impl LinkCommand {
    /// Apply to the list. Returns whether any link changed.
    pub fn apply(self, tasks: &mut TaskList) -> Result<bool> {
        match self {
            LinkCommand::Link { source, target } => tasks.link_task(source, target),
            LinkCommand::Detach { selected, draft } => {
                let back = tasks.unlink_task(selected, draft)?;
                let forward = tasks.unlink_task(draft, selected)?;
                Ok(back || forward)
            }
        }
    }
}

/// Decide what a key press does to the links.
///
/// `staging` is the current add-task input text and `draft` the id of the
/// last task. Returns `None` when the key is not part of the protocol or no
/// task is selected.
pub fn resolve_key(
    key: &Key,
    staging: &str,
    selection: LinkSelection,
    draft: TaskId,
    link_token: &str,
) -> Option<LinkCommand> {
    match key {
        Key::Enter if staging == link_token => selection.link_from(draft),
        Key::Backspace => selection
            .target()
            .map(|selected| LinkCommand::Detach { selected, draft }),
        _ => None,
    }
}
