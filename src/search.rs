//! Search Filter
//!
//! Case-insensitive substring filtering over the task list.

use crate::models::Task;

/// Check whether `task` matches an already lower-cased search term
pub fn matches(task: &Task, term_lower: &str) -> bool {
    task.content.to_lowercase().contains(term_lower)
}

/// Tasks whose content contains `term`, ignoring case, in list order.
///
/// Each match is paired with its position in the full list, so callers can
/// act on the task without confusing display order and storage order.
pub fn filter_tasks<'a>(tasks: &'a [Task], term: &str) -> Vec<(usize, &'a Task)> {
    let term_lower = term.to_lowercase();
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| matches(task, &term_lower))
        .collect()
}
