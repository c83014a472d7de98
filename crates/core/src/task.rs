//! Task model - the core unit of tracked work.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::{CommentId, EmployeeId, TaskId};
use crate::Time;

/// A task logged by (or assigned to) an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, issued by the repository
    pub id: TaskId,

    /// Owning employee
    pub employee_id: EmployeeId,

    /// Task name
    pub name: String,

    /// Hours spent so far (non-negative)
    pub hours_spent: f64,

    /// Date the task was logged
    pub created_on: NaiveDate,

    /// Date the task is due
    pub due_date: NaiveDate,

    /// Current status. Always mutated through the status-transition path so
    /// that `status_history` stays in sync.
    pub status: TaskStatus,

    /// Comments in insertion order
    pub comments: Vec<Comment>,

    /// Append-only audit trail of status transitions. Non-empty for every
    /// stored task; the last entry's `new` equals `status`.
    pub status_history: Vec<StatusChange>,
}

/// Status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Not started yet
    Pending,
    /// Being worked on
    InProgress,
    /// Finished
    Completed,
}

impl TaskStatus {
    /// Human-readable status name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "InProgress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Decode the numeric menu encoding (0-Pending, 1-InProgress,
    /// 2-Completed).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(TaskStatus::Pending),
            1 => Some(TaskStatus::InProgress),
            2 => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A comment on a task. Append-only; never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier, issued by the repository
    pub id: CommentId,

    /// Parent task
    pub task_id: TaskId,

    /// Comment text (non-empty)
    pub text: String,

    /// Name of the author
    pub added_by: String,

    /// When the comment was added
    pub added_at: Time,
}

/// One entry of a task's status audit trail.
///
/// The entry recorded at task creation has `old == new` (the initial status).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChange {
    /// Status before the transition
    pub old: TaskStatus,

    /// Status after the transition
    pub new: TaskStatus,

    /// When the transition happened
    pub changed_at: Time,

    /// Name of the actor who made the transition
    pub changed_by: String,
}

/// Filter for querying tasks.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TaskFilter {
    /// Keep only tasks with this status
    pub status: Option<TaskStatus>,

    /// Keep only tasks owned by this employee
    pub employee: Option<EmployeeId>,
}

impl TaskFilter {
    /// Whether a task passes this filter.
    pub fn matches(&self, task: &Task) -> bool {
        self.status.map_or(true, |s| task.status == s)
            && self.employee.map_or(true, |e| task.employee_id == e)
    }
}

/// Partial update for a task. Every field is optional; supplied fields
/// overwrite the current value.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    /// New task name
    pub name: Option<String>,

    /// New hours-spent value
    pub hours_spent: Option<f64>,

    /// New status (routed through the status-transition path)
    pub status: Option<TaskStatus>,

    /// New due date
    pub due_date: Option<NaiveDate>,
}
