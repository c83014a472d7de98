//! CSV rendering of the task list.

use prodtrack_core::{Task, TaskFilter};
use prodtrack_service::TaskService;

const HEADER: &str = "TaskId,EmployeeId,Name,Hours,Status,Date,Due,Comments";

/// Render all tasks as CSV, sorted by task id ascending.
///
/// Fields containing commas, quotes or newlines are quoted per RFC 4180.
pub fn tasks_csv(service: &TaskService) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for task in service.list_tasks(&TaskFilter::default()) {
        out.push_str(&task_row(task));
        out.push('\n');
    }
    out
}

fn task_row(task: &Task) -> String {
    format!(
        "{},{},{},{},{},{},{},{}",
        task.id,
        task.employee_id,
        escape(&task.name),
        task.hours_spent,
        task.status,
        task.created_on,
        task.due_date,
        task.comments.len(),
    )
}

fn escape(field: &str) -> String {
    if field.contains(['"', ',', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use prodtrack_core::{Employee, EmployeeId, Role, TaskStatus};
    use prodtrack_storage::Repository;

    #[test]
    fn renders_header_and_one_row_per_task() {
        let mut repo = Repository::new();
        let e1 = Employee {
            id: EmployeeId::new(1),
            name: "Shiv".to_string(),
            department: "IT".to_string(),
            email: "shiv@gbsoft.com".to_string(),
            role: Role::Employee,
            password: "123".to_string(),
        };
        repo.add_employee(e1.clone());
        let mut svc = TaskService::new(repo);

        let due = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        svc.create_task(&e1, "Fix Bug #101", 5.0, TaskStatus::Completed, due)
            .unwrap();
        svc.create_task(&e1, "Review, then merge", 2.0, TaskStatus::Pending, due)
            .unwrap();

        let csv = tasks_csv(&svc);
        let lines: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].starts_with("1,1,Fix Bug #101,5,Completed,"));
        // The comma in the name forces quoting.
        assert!(lines[2].contains("\"Review, then merge\""));
    }

    #[test]
    fn escape_doubles_embedded_quotes() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a \"b\""), "\"a \"\"b\"\"\"");
    }
}
