//! Service error taxonomy.

use prodtrack_core::{EmployeeId, TaskId};

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the task service and the authentication gate.
///
/// All variants are recoverable at the shell boundary; a failed operation
/// leaves the repository unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed input: empty name/comment, negative or non-finite hours.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Unknown task id, or a task that does not belong to the acting
    /// employee (ownership scoping does not reveal other employees' tasks).
    #[error("task {0} not found")]
    TaskNotFound(TaskId),

    /// Unknown assignee for a manager assignment.
    #[error("employee {0} not found")]
    EmployeeNotFound(EmployeeId),

    /// Credential mismatch. Deliberately does not distinguish an unknown
    /// email from a wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Operation restricted to managers.
    #[error("operation requires the manager role")]
    Forbidden,
}
