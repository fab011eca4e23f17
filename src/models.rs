//! Task Models
//!
//! Data structures for tasks and the links between them.

use std::fmt;
use std::str::FromStr;

/// Content given to a task submitted with blank text
pub const BLANK_CONTENT: &str = " ";

/// Stable task identifier, allocated when the task is created.
///
/// Links and row keys use this instead of list positions, so deleting or
/// filtering tasks never makes a reference point at the wrong task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u32);

impl TaskId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(TaskId)
    }
}

/// Task data structure
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
    /// Icon font class, e.g. `fa-utensils`
    pub icon: String,
    /// Tasks this one links to, in link order, without duplicates
    pub linked_tasks: Vec<TaskId>,
}

impl Task {
    pub fn new(id: TaskId, content: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            icon: icon.into(),
            linked_tasks: Vec::new(),
        }
    }

    pub fn links_to(&self, target: TaskId) -> bool {
        self.linked_tasks.contains(&target)
    }
}
