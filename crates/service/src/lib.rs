//! Role-scoped task operations for prodtrack.
//!
//! This crate implements the task service (create / update / delete /
//! comment / status transition / assignment), the authentication gate, and
//! the read-only query surface the reporting layer consumes.

#![warn(missing_docs)]

mod error;
mod service;

pub use error::{Error, Result};
pub use service::{change_status, TaskService};
