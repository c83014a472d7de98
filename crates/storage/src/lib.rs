//! In-memory storage for prodtrack.
//!
//! This crate provides the task repository: the owning store for employees
//! and tasks, the id counters, and the creation-time invariant that every
//! stored task carries a non-empty status history.

#![warn(missing_docs)]

pub mod repository;

pub use repository::Repository;
