//! The in-memory task repository.

use std::collections::BTreeMap;

use chrono::Utc;
use prodtrack_core::{CommentId, Employee, EmployeeId, StatusChange, Task, TaskId};
use tracing::debug;

/// Owning store for employees and tasks.
///
/// Constructed once per process (or per test) and passed to the service;
/// there is no global state. Task and comment ids come from strictly
/// increasing counters and are never reused after deletion.
#[derive(Debug)]
pub struct Repository {
    employees: Vec<Employee>,
    tasks: BTreeMap<TaskId, Task>,
    next_task_id: u64,
    next_comment_id: u64,
}

impl Repository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            tasks: BTreeMap::new(),
            next_task_id: 1,
            next_comment_id: 1,
        }
    }

    /// Insert an employee. Seeding is the only writer path; ids are taken
    /// as given.
    pub fn add_employee(&mut self, employee: Employee) {
        debug!(id = %employee.id, name = %employee.name, "add employee");
        self.employees.push(employee);
    }

    /// Issue a fresh task id.
    pub fn next_task_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next_task_id);
        self.next_task_id += 1;
        id
    }

    /// Issue a fresh comment id.
    pub fn next_comment_id(&mut self) -> CommentId {
        let id = CommentId::new(self.next_comment_id);
        self.next_comment_id += 1;
        id
    }

    /// Store a task: assign a fresh id, record the initial status-history
    /// entry (old == new == the task's given status) and insert.
    ///
    /// This is the only way a task enters the repository, so no stored task
    /// exists without a history entry.
    pub fn add_task(&mut self, mut task: Task, created_by: &str) -> &Task {
        let id = self.next_task_id();
        task.id = id;
        task.status_history.push(StatusChange {
            old: task.status,
            new: task.status,
            changed_at: Utc::now(),
            changed_by: created_by.to_string(),
        });
        debug!(%id, name = %task.name, owner = %task.employee_id, "add task");
        self.tasks.entry(id).or_insert(task)
    }

    /// Delete a task if present. Comments and history go with it. Returns
    /// whether a task was removed.
    pub fn remove_task(&mut self, task_id: TaskId) -> bool {
        let removed = self.tasks.remove(&task_id).is_some();
        if removed {
            debug!(id = %task_id, "remove task");
        }
        removed
    }

    /// Look up a task by id.
    pub fn find_task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.get(&task_id)
    }

    /// Look up a task by id, mutably.
    pub fn find_task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.tasks.get_mut(&task_id)
    }

    /// All tasks owned by an employee, in ascending id order.
    pub fn tasks_for_employee(&self, employee_id: EmployeeId) -> Vec<&Task> {
        self.tasks
            .values()
            .filter(|t| t.employee_id == employee_id)
            .collect()
    }

    /// Look up an employee by id.
    pub fn find_employee(&self, employee_id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == employee_id)
    }

    /// Look up an employee by login credentials. Email is matched
    /// case-insensitively, the password exactly (cleartext; demo
    /// limitation).
    pub fn find_employee_by_credentials(&self, email: &str, password: &str) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|e| e.email.eq_ignore_ascii_case(email) && e.password == password)
    }

    /// All employees, in seed order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// All tasks, in ascending id order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use prodtrack_core::{Role, TaskStatus};

    fn unsaved_task(owner: EmployeeId, name: &str, status: TaskStatus) -> Task {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        Task {
            id: TaskId::new(0),
            employee_id: owner,
            name: name.to_string(),
            hours_spent: 1.0,
            created_on: today,
            due_date: today,
            status,
            comments: Vec::new(),
            status_history: Vec::new(),
        }
    }

    #[test]
    fn add_task_assigns_id_and_initial_history() {
        let mut repo = Repository::new();
        let task = repo.add_task(
            unsaved_task(EmployeeId::new(1), "Fix Bug #101", TaskStatus::Pending),
            "System",
        );

        assert_eq!(task.id, TaskId::new(1));
        assert_eq!(task.status_history.len(), 1);
        let entry = &task.status_history[0];
        assert_eq!(entry.old, TaskStatus::Pending);
        assert_eq!(entry.new, TaskStatus::Pending);
        assert_eq!(entry.changed_by, "System");
    }

    #[test]
    fn task_ids_increase_and_are_not_reused_after_deletion() {
        let mut repo = Repository::new();
        let owner = EmployeeId::new(1);
        let first = repo
            .add_task(unsaved_task(owner, "a", TaskStatus::Pending), "System")
            .id;
        let second = repo
            .add_task(unsaved_task(owner, "b", TaskStatus::Pending), "System")
            .id;
        assert!(second > first);

        assert!(repo.remove_task(second));
        let third = repo
            .add_task(unsaved_task(owner, "c", TaskStatus::Pending), "System")
            .id;
        assert!(third > second);
    }

    #[test]
    fn comment_ids_are_strictly_increasing() {
        let mut repo = Repository::new();
        let a = repo.next_comment_id();
        let b = repo.next_comment_id();
        assert!(b > a);
    }

    #[test]
    fn remove_task_is_a_noop_for_unknown_ids() {
        let mut repo = Repository::new();
        assert!(!repo.remove_task(TaskId::new(42)));
    }

    #[test]
    fn credential_lookup_ignores_email_case_but_not_password() {
        let mut repo = Repository::new();
        repo.add_employee(Employee {
            id: EmployeeId::new(1),
            name: "Shiv".to_string(),
            department: "IT".to_string(),
            email: "shiv@gbsoft.com".to_string(),
            role: Role::Employee,
            password: "123".to_string(),
        });

        assert!(repo
            .find_employee_by_credentials("SHIV@GBSOFT.COM", "123")
            .is_some());
        assert!(repo
            .find_employee_by_credentials("shiv@gbsoft.com", "wrong")
            .is_none());
    }

    #[test]
    fn tasks_iterate_in_ascending_id_order() {
        let mut repo = Repository::new();
        let owner = EmployeeId::new(1);
        for name in ["a", "b", "c"] {
            repo.add_task(unsaved_task(owner, name, TaskStatus::Pending), "System");
        }
        let ids: Vec<_> = repo.tasks().map(|t| t.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
