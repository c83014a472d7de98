//! Employee model and roles.

use serde::{Deserialize, Serialize};

use crate::id::EmployeeId;

/// An employee of the organization, seeded at startup and immutable after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier
    pub id: EmployeeId,

    /// Display name
    pub name: String,

    /// Department the employee belongs to
    pub department: String,

    /// Email address, used as the login key (matched case-insensitively)
    pub email: String,

    /// Role governing which operations are available
    pub role: Role,

    /// Login password. Compared in cleartext — demo limitation, not a
    /// security mechanism.
    pub password: String,
}

/// Role of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Regular employee: manages only their own tasks
    Employee,
    /// Manager: can additionally assign tasks and run team reports
    Manager,
}

impl Role {
    /// Human-readable role name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::Manager => "Manager",
        }
    }
}
