//! UI Components
//!
//! Leptos components rendering the todo list.

mod add_task_form;
mod link_select;
mod search_box;
mod task_row;
mod todo_list;

pub use add_task_form::AddTaskForm;
pub use link_select::LinkSelect;
pub use search_box::SearchBox;
pub use task_row::TaskRow;
pub use todo_list::TodoList;
