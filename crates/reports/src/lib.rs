//! Read-only reporting for prodtrack.
//!
//! Everything in this crate is computed from the service's query surface
//! (`list_tasks`, `tasks_owned_by`, `overdue_tasks`, `employees`); nothing
//! here mutates state.

#![warn(missing_docs)]

pub mod csv;
pub mod summary;

pub use csv::tasks_csv;
pub use summary::{
    analytics, tasks_by_employee, timesheet, top_performers, weekly_hours, AnalyticsSnapshot,
    Performer, Timesheet,
};
