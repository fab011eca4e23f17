//! Error Types

use crate::models::TaskId;

/// Error type for task list operations and configuration loading
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TodoError {
    #[error("position {position} out of range for {len} tasks")]
    PositionOutOfRange { position: usize, len: usize },
    #[error("unknown task: {0}")]
    UnknownTask(TaskId),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;
