//! Task List Model
//!
//! Ordered task list with its mutation operations. The last task is always
//! the draft bound to the add-task input; the list is never empty.

use crate::error::{Result, TodoError};
use crate::models::{Task, TaskId, BLANK_CONTENT};

#[derive(Debug, Clone, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u32,
}

impl TaskList {
    /// New list holding a single blank draft task
    pub fn new(icon: &str) -> Self {
        let mut list = Self {
            tasks: Vec::new(),
            next_id: 0,
        };
        list.push_draft(icon);
        list
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn push_draft(&mut self, icon: &str) -> TaskId {
        let id = self.allocate_id();
        self.tasks.push(Task::new(id, String::new(), icon));
        id
    }

    fn get_mut(&mut self, id: TaskId) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TodoError::UnknownTask(id))
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position < self.tasks.len() {
            Ok(())
        } else {
            Err(TodoError::PositionOutOfRange {
                position,
                len: self.tasks.len(),
            })
        }
    }

    // ========================
    // Lookups
    // ========================

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    pub fn id_at(&self, position: usize) -> Option<TaskId> {
        self.tasks.get(position).map(|task| task.id)
    }

    /// The draft task (last in the list)
    pub fn draft(&self) -> &Task {
        &self.tasks[self.tasks.len() - 1]
    }

    pub fn draft_id(&self) -> TaskId {
        self.draft().id
    }

    pub fn is_draft(&self, id: TaskId) -> bool {
        self.draft_id() == id
    }

    /// Contents of the tasks `id` links to, in link order
    pub fn linked_contents(&self, id: TaskId) -> Vec<String> {
        let Some(task) = self.get(id) else {
            return Vec::new();
        };
        task.linked_tasks
            .iter()
            .filter_map(|linked| self.get(*linked))
            .map(|linked| linked.content.clone())
            .collect()
    }

    // ========================
    // Mutations
    // ========================

    /// Finalize the draft with `text` and open a new blank draft after it.
    ///
    /// Blank text is stored as a single space. Returns the finalized task id.
    pub fn add_task(&mut self, text: &str, icon: &str) -> TaskId {
        let content = if text.trim().is_empty() {
            BLANK_CONTENT.to_string()
        } else {
            text.to_string()
        };

        let last = self.tasks.len() - 1;
        let finalized = &mut self.tasks[last];
        finalized.content = content;
        let finalized_id = finalized.id;

        let draft_id = self.push_draft(icon);
        log::debug!("[TASKS] added task {}, new draft {}", finalized_id, draft_id);
        finalized_id
    }

    pub fn edit_task(&mut self, position: usize, content: impl Into<String>) -> Result<()> {
        self.check_position(position)?;
        self.tasks[position].content = content.into();
        Ok(())
    }

    /// Remove the task at `position` and every link pointing at it.
    ///
    /// Removing the draft opens a fresh blank draft in its place, so a real
    /// task never becomes the draft.
    pub fn delete_task(&mut self, position: usize) -> Result<Task> {
        self.check_position(position)?;
        let removed = self.tasks.remove(position);

        for task in &mut self.tasks {
            task.linked_tasks.retain(|linked| *linked != removed.id);
        }

        if position == self.tasks.len() {
            self.push_draft(&removed.icon);
        }

        log::debug!("[TASKS] deleted task {} at position {}", removed.id, position);
        Ok(removed)
    }

    /// Link `source` to `target`. Returns false if the link already existed.
    pub fn link_task(&mut self, source: TaskId, target: TaskId) -> Result<bool> {
        if !self.contains(target) {
            return Err(TodoError::UnknownTask(target));
        }
        let task = self.get_mut(source)?;
        if task.links_to(target) {
            return Ok(false);
        }
        task.linked_tasks.push(target);
        log::debug!("[TASKS] linked {} -> {}", source, target);
        Ok(true)
    }

    /// Remove the link `holder -> target`. Returns false if there was none.
    pub fn unlink_task(&mut self, holder: TaskId, target: TaskId) -> Result<bool> {
        let task = self.get_mut(holder)?;
        let before = task.linked_tasks.len();
        task.linked_tasks.retain(|linked| *linked != target);
        let changed = task.linked_tasks.len() != before;
        if changed {
            log::debug!("[TASKS] unlinked {} -> {}", holder, target);
        }
        Ok(changed)
    }
}
