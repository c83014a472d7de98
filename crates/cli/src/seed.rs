//! Demo seed data, matching the original deployment.

use chrono::{Duration, Local};
use prodtrack_core::{Employee, EmployeeId, Role, Task, TaskId, TaskStatus};
use prodtrack_service::TaskService;

/// Seed three employees and three tasks.
pub fn seed(service: &mut TaskService) {
    let repo = service.repository_mut();

    repo.add_employee(employee(1, "Shiv", "IT", "Shiv@gbsoft.com", Role::Employee, "123"));
    repo.add_employee(employee(2, "Bhagwat", "HR", "bhagwat@gbsoft.com", Role::Employee, "123"));
    repo.add_employee(employee(
        3,
        "Ganesh Bhutekar",
        "IT",
        "ganesh@gbsoft.com",
        Role::Manager,
        "admin",
    ));

    let today = Local::now().date_naive();
    repo.add_task(
        task(1, "Fix Bug #101", 5.0, today, today, TaskStatus::Completed),
        "System",
    );
    repo.add_task(
        task(
            1,
            "Develop Feature X",
            6.0,
            today - Duration::days(2),
            today + Duration::days(1),
            TaskStatus::InProgress,
        ),
        "System",
    );
    repo.add_task(
        task(2, "Recruitment Drive", 4.0, today, today, TaskStatus::Pending),
        "System",
    );
}

fn employee(
    id: u32,
    name: &str,
    department: &str,
    email: &str,
    role: Role,
    password: &str,
) -> Employee {
    Employee {
        id: EmployeeId::new(id),
        name: name.to_string(),
        department: department.to_string(),
        email: email.to_string(),
        role,
        password: password.to_string(),
    }
}

fn task(
    owner: u32,
    name: &str,
    hours: f64,
    created_on: chrono::NaiveDate,
    due_date: chrono::NaiveDate,
    status: TaskStatus,
) -> Task {
    Task {
        id: TaskId::new(0), // assigned by the repository
        employee_id: EmployeeId::new(owner),
        name: name.to_string(),
        hours_spent: hours,
        created_on,
        due_date,
        status,
        comments: Vec::new(),
        status_history: Vec::new(),
    }
}
