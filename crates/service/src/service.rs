//! Task service: role-scoped mutations and the read-only query surface.

use chrono::{Local, NaiveDate, Utc};
use prodtrack_core::{
    Comment, Employee, EmployeeId, Role, StatusChange, Task, TaskFilter, TaskId, TaskPatch,
    TaskStatus,
};
use prodtrack_storage::Repository;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Apply a status transition to a task.
///
/// A no-op when `new_status` equals the current status (idempotent, not an
/// error). Otherwise appends one audit entry and updates the status. This is
/// the single authorized path for status mutation; writing `task.status`
/// directly anywhere else would break the history invariant.
pub fn change_status(task: &mut Task, new_status: TaskStatus, changed_by: &str) {
    if task.status == new_status {
        return;
    }
    task.status_history.push(StatusChange {
        old: task.status,
        new: new_status,
        changed_at: Utc::now(),
        changed_by: changed_by.to_string(),
    });
    task.status = new_status;
    debug!(id = %task.id, status = %new_status, by = changed_by, "status changed");
}

/// The task service. Owns the repository; one instance per process (or per
/// test). Every mutation is scoped to an acting employee.
#[derive(Debug)]
pub struct TaskService {
    repo: Repository,
}

impl TaskService {
    /// Create a service over an existing repository.
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    // === Session ===

    /// Validate credentials and return the matching employee as the session
    /// identity. Email is matched case-insensitively.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Employee> {
        match self.repo.find_employee_by_credentials(email, password) {
            Some(employee) => {
                info!(name = %employee.name, role = employee.role.as_str(), "login");
                Ok(employee.clone())
            }
            None => Err(Error::InvalidCredentials),
        }
    }

    // === Mutations ===

    /// Create a task owned by the actor.
    pub fn create_task(
        &mut self,
        actor: &Employee,
        name: &str,
        hours_spent: f64,
        status: TaskStatus,
        due_date: NaiveDate,
    ) -> Result<Task> {
        validate_name(name)?;
        validate_hours(hours_spent)?;

        let task = Task {
            id: TaskId::new(0), // assigned by the repository
            employee_id: actor.id,
            name: name.to_string(),
            hours_spent,
            created_on: today(),
            due_date,
            status,
            comments: Vec::new(),
            status_history: Vec::new(),
        };
        let stored = self.repo.add_task(task, &actor.name);
        info!(id = %stored.id, name = %stored.name, by = %actor.name, "task created");
        Ok(stored.clone())
    }

    /// Create a task for another employee. Manager-only; the assignee must
    /// exist. The task starts `Pending`.
    pub fn assign_task(
        &mut self,
        manager: &Employee,
        employee_id: EmployeeId,
        name: &str,
        hours_spent: f64,
        due_date: NaiveDate,
    ) -> Result<Task> {
        if manager.role != Role::Manager {
            return Err(Error::Forbidden);
        }
        if self.repo.find_employee(employee_id).is_none() {
            return Err(Error::EmployeeNotFound(employee_id));
        }
        validate_name(name)?;
        validate_hours(hours_spent)?;

        let task = Task {
            id: TaskId::new(0),
            employee_id,
            name: name.to_string(),
            hours_spent,
            created_on: today(),
            due_date,
            status: TaskStatus::Pending,
            comments: Vec::new(),
            status_history: Vec::new(),
        };
        let stored = self.repo.add_task(task, &manager.name);
        info!(id = %stored.id, assignee = %employee_id, by = %manager.name, "task assigned");
        Ok(stored.clone())
    }

    /// Apply a partial update to one of the actor's own tasks. A supplied
    /// status is routed through [`change_status`] to keep the audit trail
    /// intact.
    pub fn update_task(&mut self, actor: &Employee, task_id: TaskId, patch: TaskPatch) -> Result<()> {
        // Validate the whole patch before touching the task so a failure
        // leaves it unchanged.
        if let Some(name) = &patch.name {
            validate_name(name)?;
        }
        if let Some(hours) = patch.hours_spent {
            validate_hours(hours)?;
        }

        let actor_name = actor.name.clone();
        let task = self.owned_task_mut(actor, task_id)?;
        if let Some(name) = patch.name {
            task.name = name;
        }
        if let Some(hours) = patch.hours_spent {
            task.hours_spent = hours;
        }
        if let Some(status) = patch.status {
            change_status(task, status, &actor_name);
        }
        if let Some(due) = patch.due_date {
            task.due_date = due;
        }
        debug!(id = %task_id, by = %actor_name, "task updated");
        Ok(())
    }

    /// Delete one of the actor's own tasks.
    pub fn delete_task(&mut self, actor: &Employee, task_id: TaskId) -> Result<()> {
        self.owned_task(actor, task_id)?;
        self.repo.remove_task(task_id);
        info!(id = %task_id, by = %actor.name, "task deleted");
        Ok(())
    }

    /// Append a comment to one of the actor's own tasks.
    pub fn add_comment(&mut self, actor: &Employee, task_id: TaskId, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(Error::Validation("comment cannot be empty".to_string()));
        }
        self.owned_task(actor, task_id)?;

        let comment_id = self.repo.next_comment_id();
        let comment = Comment {
            id: comment_id,
            task_id,
            text: text.to_string(),
            added_by: actor.name.clone(),
            added_at: Utc::now(),
        };
        // Ownership was checked above; the task is still present.
        if let Some(task) = self.repo.find_task_mut(task_id) {
            task.comments.push(comment);
        }
        debug!(id = %task_id, comment = %comment_id, by = %actor.name, "comment added");
        Ok(())
    }

    /// Transition the status of one of the actor's own tasks.
    pub fn change_task_status(
        &mut self,
        actor: &Employee,
        task_id: TaskId,
        new_status: TaskStatus,
    ) -> Result<()> {
        let actor_name = actor.name.clone();
        let task = self.owned_task_mut(actor, task_id)?;
        change_status(task, new_status, &actor_name);
        Ok(())
    }

    // === Queries (read-only) ===

    /// Look up a task by id.
    pub fn find_task(&self, task_id: TaskId) -> Option<&Task> {
        self.repo.find_task(task_id)
    }

    /// All tasks matching the filter, sorted by id ascending.
    pub fn list_tasks(&self, filter: &TaskFilter) -> Vec<&Task> {
        self.repo.tasks().filter(|t| filter.matches(t)).collect()
    }

    /// All tasks owned by an employee, sorted by id ascending.
    pub fn tasks_owned_by(&self, employee_id: EmployeeId) -> Vec<&Task> {
        self.repo.tasks_for_employee(employee_id)
    }

    /// Tasks due strictly before today and not completed.
    pub fn overdue_tasks(&self) -> Vec<&Task> {
        self.overdue_as_of(today())
    }

    /// Tasks due strictly before the given date and not completed.
    pub fn overdue_as_of(&self, today: NaiveDate) -> Vec<&Task> {
        self.repo
            .tasks()
            .filter(|t| t.due_date < today && t.status != TaskStatus::Completed)
            .collect()
    }

    /// All employees.
    pub fn employees(&self) -> &[Employee] {
        self.repo.employees()
    }

    /// Look up an employee by id.
    pub fn find_employee(&self, employee_id: EmployeeId) -> Option<&Employee> {
        self.repo.find_employee(employee_id)
    }

    /// Mutable access to the underlying repository, for seeding.
    pub fn repository_mut(&mut self) -> &mut Repository {
        &mut self.repo
    }

    // === Helpers ===

    fn owned_task(&self, actor: &Employee, task_id: TaskId) -> Result<&Task> {
        self.repo
            .find_task(task_id)
            .filter(|t| t.employee_id == actor.id)
            .ok_or(Error::TaskNotFound(task_id))
    }

    fn owned_task_mut(&mut self, actor: &Employee, task_id: TaskId) -> Result<&mut Task> {
        let actor_id = actor.id;
        self.repo
            .find_task_mut(task_id)
            .filter(|t| t.employee_id == actor_id)
            .ok_or(Error::TaskNotFound(task_id))
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation("task name cannot be empty".to_string()));
    }
    Ok(())
}

fn validate_hours(hours: f64) -> Result<()> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(Error::Validation(format!(
            "hours must be a non-negative number, got {hours}"
        )));
    }
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
