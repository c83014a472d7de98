//! Aggregation reports: timesheets, weekly hours, rankings, analytics.

use std::collections::BTreeMap;

use chrono::{Datelike, Utc};
use prodtrack_core::{EmployeeId, Task, TaskFilter, TaskStatus, Time};
use prodtrack_service::TaskService;
use serde::{Deserialize, Serialize};

/// Key for a calendar week: (ISO year, ISO week number).
pub type WeekKey = (i32, u32);

/// Key for a calendar month: (year, month).
pub type MonthKey = (i32, u32);

/// Hours one employee logged, grouped by week and by month.
///
/// Grouping is by the date a task was logged (`created_on`).
#[derive(Debug, Clone)]
pub struct Timesheet {
    /// The employee this timesheet is for
    pub employee_id: EmployeeId,

    /// Summed hours per ISO week
    pub weekly_hours: BTreeMap<WeekKey, f64>,

    /// Summed hours per calendar month
    pub monthly_hours: BTreeMap<MonthKey, f64>,
}

/// Build the weekly/monthly timesheet for one employee.
pub fn timesheet(service: &TaskService, employee_id: EmployeeId) -> Timesheet {
    let mut weekly_hours: BTreeMap<WeekKey, f64> = BTreeMap::new();
    let mut monthly_hours: BTreeMap<MonthKey, f64> = BTreeMap::new();

    for task in service.tasks_owned_by(employee_id) {
        *weekly_hours.entry(week_of(task)).or_default() += task.hours_spent;
        let month = (task.created_on.year(), task.created_on.month());
        *monthly_hours.entry(month).or_default() += task.hours_spent;
    }

    Timesheet {
        employee_id,
        weekly_hours,
        monthly_hours,
    }
}

/// All tasks grouped per employee, in ascending employee-id order.
pub fn tasks_by_employee(service: &TaskService) -> BTreeMap<EmployeeId, Vec<&Task>> {
    let mut groups: BTreeMap<EmployeeId, Vec<&Task>> = BTreeMap::new();
    for task in service.list_tasks(&TaskFilter::default()) {
        groups.entry(task.employee_id).or_default().push(task);
    }
    groups
}

/// Hours per ISO week per employee, across the whole team.
pub fn weekly_hours(service: &TaskService) -> BTreeMap<WeekKey, BTreeMap<EmployeeId, f64>> {
    let mut weeks: BTreeMap<WeekKey, BTreeMap<EmployeeId, f64>> = BTreeMap::new();
    for task in service.list_tasks(&TaskFilter::default()) {
        *weeks
            .entry(week_of(task))
            .or_default()
            .entry(task.employee_id)
            .or_default() += task.hours_spent;
    }
    weeks
}

/// One entry of the top-performer ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Performer {
    /// The ranked employee
    pub employee_id: EmployeeId,

    /// Employee display name
    pub name: String,

    /// Hours logged on completed tasks
    pub completed_hours: f64,

    /// Number of completed tasks
    pub completed_tasks: usize,
}

/// Rank employees by hours logged on completed tasks, highest first, and
/// keep the top `n`. Ties break on employee id for a stable order.
pub fn top_performers(service: &TaskService, n: usize) -> Vec<Performer> {
    let mut performers: Vec<Performer> = service
        .employees()
        .iter()
        .map(|employee| {
            let completed: Vec<_> = service
                .tasks_owned_by(employee.id)
                .into_iter()
                .filter(|t| t.status == TaskStatus::Completed)
                .collect();
            Performer {
                employee_id: employee.id,
                name: employee.name.clone(),
                completed_hours: completed.iter().map(|t| t.hours_spent).sum(),
                completed_tasks: completed.len(),
            }
        })
        .collect();

    performers.sort_by(|a, b| {
        b.completed_hours
            .partial_cmp(&a.completed_hours)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.employee_id.cmp(&b.employee_id))
    });
    performers.truncate(n);
    performers
}

/// A point-in-time summary of the whole task board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    /// When the snapshot was taken
    pub generated_at: Time,

    /// Total number of tasks
    pub total_tasks: usize,

    /// Tasks currently pending
    pub pending: usize,

    /// Tasks currently in progress
    pub in_progress: usize,

    /// Tasks completed
    pub completed: usize,

    /// Total hours logged across all tasks
    pub total_hours: f64,

    /// Tasks past their due date and not completed
    pub overdue: usize,
}

/// Take an analytics snapshot of the current board.
pub fn analytics(service: &TaskService) -> AnalyticsSnapshot {
    let tasks = service.list_tasks(&TaskFilter::default());
    let count = |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count();

    AnalyticsSnapshot {
        generated_at: Utc::now(),
        total_tasks: tasks.len(),
        pending: count(TaskStatus::Pending),
        in_progress: count(TaskStatus::InProgress),
        completed: count(TaskStatus::Completed),
        total_hours: tasks.iter().map(|t| t.hours_spent).sum(),
        overdue: service.overdue_tasks().len(),
    }
}

fn week_of(task: &Task) -> WeekKey {
    let week = task.created_on.iso_week();
    (week.year(), week.week())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use prodtrack_core::{Employee, Role};
    use prodtrack_storage::Repository;

    fn seeded_service() -> (TaskService, Employee, Employee) {
        let mut repo = Repository::new();
        let e1 = Employee {
            id: EmployeeId::new(1),
            name: "Shiv".to_string(),
            department: "IT".to_string(),
            email: "shiv@gbsoft.com".to_string(),
            role: Role::Employee,
            password: "123".to_string(),
        };
        let mut e2 = e1.clone();
        e2.id = EmployeeId::new(2);
        e2.name = "Bhagwat".to_string();
        e2.email = "bhagwat@gbsoft.com".to_string();
        repo.add_employee(e1.clone());
        repo.add_employee(e2.clone());
        (TaskService::new(repo), e1, e2)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn timesheet_groups_hours_by_iso_week_and_month() {
        let (mut svc, e1, _) = seeded_service();
        let d = date(2024, 6, 20);
        svc.create_task(&e1, "a", 5.0, TaskStatus::Pending, d).unwrap();
        svc.create_task(&e1, "b", 3.0, TaskStatus::Completed, d).unwrap();

        let sheet = timesheet(&svc, e1.id);
        // Both tasks were logged today, so they land in one week and one
        // month bucket.
        assert_eq!(sheet.weekly_hours.len(), 1);
        assert_eq!(sheet.monthly_hours.len(), 1);
        assert_eq!(*sheet.weekly_hours.values().next().unwrap(), 8.0);
        assert_eq!(*sheet.monthly_hours.values().next().unwrap(), 8.0);
    }

    #[test]
    fn tasks_by_employee_groups_every_task_once() {
        let (mut svc, e1, e2) = seeded_service();
        let d = date(2024, 6, 20);
        svc.create_task(&e1, "a", 1.0, TaskStatus::Pending, d).unwrap();
        svc.create_task(&e2, "b", 2.0, TaskStatus::Pending, d).unwrap();
        svc.create_task(&e2, "c", 3.0, TaskStatus::Pending, d).unwrap();

        let groups = tasks_by_employee(&svc);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&e1.id].len(), 1);
        assert_eq!(groups[&e2.id].len(), 2);
    }

    #[test]
    fn weekly_hours_sums_per_employee() {
        let (mut svc, e1, e2) = seeded_service();
        let d = date(2024, 6, 20);
        svc.create_task(&e1, "a", 2.0, TaskStatus::Pending, d).unwrap();
        svc.create_task(&e1, "b", 2.5, TaskStatus::Pending, d).unwrap();
        svc.create_task(&e2, "c", 4.0, TaskStatus::Pending, d).unwrap();

        let weeks = weekly_hours(&svc);
        assert_eq!(weeks.len(), 1);
        let week = weeks.values().next().unwrap();
        assert_eq!(week[&e1.id], 4.5);
        assert_eq!(week[&e2.id], 4.0);
    }

    #[test]
    fn top_performers_ranks_by_completed_hours_only() {
        let (mut svc, e1, e2) = seeded_service();
        let d = date(2024, 6, 20);
        svc.create_task(&e1, "done", 3.0, TaskStatus::Completed, d).unwrap();
        svc.create_task(&e1, "open", 10.0, TaskStatus::InProgress, d).unwrap();
        svc.create_task(&e2, "done", 6.0, TaskStatus::Completed, d).unwrap();

        let ranking = top_performers(&svc, 3);
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].employee_id, e2.id);
        assert_eq!(ranking[0].completed_hours, 6.0);
        assert_eq!(ranking[1].employee_id, e1.id);
        assert_eq!(ranking[1].completed_hours, 3.0);
        assert_eq!(ranking[1].completed_tasks, 1);

        assert_eq!(top_performers(&svc, 1).len(), 1);
    }

    #[test]
    fn analytics_counts_statuses_and_hours() {
        let (mut svc, e1, _) = seeded_service();
        let d = date(2024, 6, 20);
        svc.create_task(&e1, "a", 1.0, TaskStatus::Pending, d).unwrap();
        svc.create_task(&e1, "b", 2.0, TaskStatus::InProgress, d).unwrap();
        svc.create_task(&e1, "c", 3.0, TaskStatus::Completed, d).unwrap();

        let snapshot = analytics(&svc);
        assert_eq!(snapshot.total_tasks, 3);
        assert_eq!(snapshot.pending, 1);
        assert_eq!(snapshot.in_progress, 1);
        assert_eq!(snapshot.completed, 1);
        assert_eq!(snapshot.total_hours, 6.0);
    }
}
