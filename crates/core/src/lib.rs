//! prodtrack core data models.
//!
//! This crate defines the fundamental data structures of the employee
//! productivity tracker: employees, tasks, comments and the status-change
//! audit trail. Pure data, no behavior beyond construction — validation and
//! mutation rules live in `prodtrack-service`.

#![warn(missing_docs)]

mod employee;
mod id;
mod task;

pub use employee::{Employee, Role};
pub use id::{CommentId, EmployeeId, TaskId};
pub use task::{Comment, StatusChange, Task, TaskFilter, TaskPatch, TaskStatus};

/// Timestamp type for audit records.
pub type Time = chrono::DateTime<chrono::Utc>;
