//! Interactive employee and manager menus.
//!
//! Thin presentation layer: every mutation goes through the service, every
//! report through `prodtrack-reports`. Service errors print and return to
//! the menu.

use std::io;
use std::path::Path;

use prodtrack_core::{Employee, Task, TaskFilter, TaskPatch};
use prodtrack_reports as reports;
use prodtrack_service::TaskService;

use crate::{export, input};

/// Menu loop for a regular employee session.
pub fn employee_menu(service: &mut TaskService, user: &Employee) -> io::Result<()> {
    loop {
        println!("-- Employee Menu --");
        println!("1. Create Task");
        println!("2. Update Task");
        println!("3. Delete Task");
        println!("4. View My Tasks");
        println!("5. Add Comment / Update Status");
        println!("6. My Weekly / Monthly Timesheet");
        println!("7. Logout");
        match input::prompt("Select: ")?.as_str() {
            "1" => create_task(service, user)?,
            "2" => update_task(service, user)?,
            "3" => delete_task(service, user)?,
            "4" => print_tasks(&service.tasks_owned_by(user.id)),
            "5" => comment_or_status(service, user)?,
            "6" => print_timesheet(service, user),
            "7" => return Ok(()),
            _ => println!("! Invalid option."),
        }
        println!();
    }
}

/// Menu loop for a manager session.
pub fn manager_menu(
    service: &mut TaskService,
    user: &Employee,
    export_dir: &Path,
) -> io::Result<()> {
    loop {
        println!("-- Manager Menu --");
        println!("1. Assign Task to Employee");
        println!("2. View/Filter Tasks");
        println!("3. Group Tasks by Employee");
        println!("4. Weekly Hours (All Employees)");
        println!("5. Top 3 Performers");
        println!("6. Overdue Tasks");
        println!("7. Analytics Dashboard");
        println!("8. Export CSV Reports");
        println!("9. Logout");
        match input::prompt("Select: ")?.as_str() {
            "1" => assign_task(service, user)?,
            "2" => filter_tasks(service)?,
            "3" => group_by_employee(service),
            "4" => weekly_hours(service),
            "5" => top_performers(service),
            "6" => overdue_tasks(service),
            "7" => analytics(service),
            "8" => match export::export_reports(service, export_dir) {
                Ok(()) => println!("Reports written to {}", export_dir.display()),
                Err(err) => println!("! Export failed: {err}"),
            },
            "9" => return Ok(()),
            _ => println!("! Invalid option."),
        }
        println!();
    }
}

// === Employee actions ===

fn create_task(service: &mut TaskService, user: &Employee) -> io::Result<()> {
    println!("=== Create Task ===");
    let name = input::read_nonempty("Task Name: ")?;
    let hours = input::read_parsed("Hours Spent (numeric): ")?;
    let status = input::read_status("Status (0-Pending,1-InProgress,2-Completed): ")?;
    let due = input::read_date("Due Date (yyyy-mm-dd): ")?;

    match service.create_task(user, &name, hours, status, due) {
        Ok(task) => println!("Task {} created successfully.", task.id),
        Err(err) => println!("! {err}"),
    }
    Ok(())
}

fn update_task(service: &mut TaskService, user: &Employee) -> io::Result<()> {
    print_tasks(&service.tasks_owned_by(user.id));
    let task_id = input::read_parsed("Enter TaskId to update: ")?;

    let Some(task) = service.find_task(task_id).filter(|t| t.employee_id == user.id) else {
        println!("! Task not found.");
        return Ok(());
    };
    let current_name = task.name.clone();
    let current_hours = task.hours_spent;
    let current_status = task.status;
    let current_due = task.due_date;

    let patch = TaskPatch {
        name: input::read_optional(&format!("New Name ({current_name}): "))?,
        hours_spent: input::read_optional_parsed(&format!("New Hours ({current_hours}): "))?,
        status: input::read_optional_status(&format!("New Status ({current_status}): "))?,
        due_date: input::read_optional_date(&format!("New Due ({current_due}): "))?,
    };

    match service.update_task(user, task_id, patch) {
        Ok(()) => println!("Task updated successfully."),
        Err(err) => println!("! {err}"),
    }
    Ok(())
}

fn delete_task(service: &mut TaskService, user: &Employee) -> io::Result<()> {
    print_tasks(&service.tasks_owned_by(user.id));
    let task_id = input::read_parsed("Enter TaskId to delete: ")?;
    match service.delete_task(user, task_id) {
        Ok(()) => println!("Task deleted successfully."),
        Err(err) => println!("! {err}"),
    }
    Ok(())
}

fn comment_or_status(service: &mut TaskService, user: &Employee) -> io::Result<()> {
    print_tasks(&service.tasks_owned_by(user.id));
    let task_id = input::read_parsed("TaskId: ")?;

    println!("1) Add Comment  2) Change Status");
    match input::prompt("Select: ")?.as_str() {
        "1" => {
            let text = input::read_nonempty("Comment: ")?;
            match service.add_comment(user, task_id, &text) {
                Ok(()) => println!("Comment added successfully."),
                Err(err) => println!("! {err}"),
            }
        }
        "2" => {
            let status = input::read_status("New Status (0-Pending,1-InProgress,2-Completed): ")?;
            match service.change_task_status(user, task_id, status) {
                Ok(()) => println!("Status updated."),
                Err(err) => println!("! {err}"),
            }
        }
        _ => println!("! Invalid option."),
    }
    Ok(())
}

fn print_timesheet(service: &TaskService, user: &Employee) {
    let sheet = reports::timesheet(service, user.id);
    println!("Weekly hours:");
    for ((year, week), hours) in &sheet.weekly_hours {
        println!("  {year}-W{week:02}: {hours}");
    }
    println!("Monthly hours:");
    for ((year, month), hours) in &sheet.monthly_hours {
        println!("  {year}-{month:02}: {hours}");
    }
}

// === Manager actions ===

fn assign_task(service: &mut TaskService, manager: &Employee) -> io::Result<()> {
    println!("Employees:");
    for e in service.employees() {
        println!("{} - {} ({})", e.id, e.name, e.department);
    }

    let employee_id = input::read_parsed("Enter EmployeeId to assign: ")?;
    let name = input::read_nonempty("Task Name: ")?;
    let hours = input::read_parsed("Estimated Hours: ")?;
    let due = input::read_date("Due Date (yyyy-mm-dd): ")?;

    match service.assign_task(manager, employee_id, &name, hours, due) {
        Ok(task) => println!("Task {} assigned successfully.", task.id),
        Err(err) => println!("! {err}"),
    }
    Ok(())
}

fn filter_tasks(service: &TaskService) -> io::Result<()> {
    let filter = TaskFilter {
        status: input::read_optional_status(
            "Status filter (0-Pending,1-InProgress,2-Completed, empty for all): ",
        )?,
        employee: input::read_optional_parsed("EmployeeId filter (empty for all): ")?,
    };
    print_tasks(&service.list_tasks(&filter));
    Ok(())
}

fn group_by_employee(service: &TaskService) {
    for (employee_id, tasks) in reports::tasks_by_employee(service) {
        let name = service
            .find_employee(employee_id)
            .map(|e| e.name.as_str())
            .unwrap_or("<unknown>");
        println!("{name} ({employee_id}):");
        print_tasks(&tasks);
    }
}

fn weekly_hours(service: &TaskService) {
    for ((year, week), per_employee) in reports::weekly_hours(service) {
        println!("{year}-W{week:02}:");
        for (employee_id, hours) in per_employee {
            let name = service
                .find_employee(employee_id)
                .map(|e| e.name.as_str())
                .unwrap_or("<unknown>");
            println!("  {name}: {hours}");
        }
    }
}

fn top_performers(service: &TaskService) {
    println!("Top 3 Performers (hours on completed tasks):");
    for (rank, p) in reports::top_performers(service, 3).iter().enumerate() {
        println!(
            "{}. {} - {} hours over {} tasks",
            rank + 1,
            p.name,
            p.completed_hours,
            p.completed_tasks
        );
    }
}

fn overdue_tasks(service: &TaskService) {
    println!("Overdue Tasks:");
    for task in service.overdue_tasks() {
        let name = service
            .find_employee(task.employee_id)
            .map(|e| e.name.as_str())
            .unwrap_or("<unknown>");
        println!("- {} (Emp: {}) Due: {}", task.name, name, task.due_date);
    }
}

fn analytics(service: &TaskService) {
    let snapshot = reports::analytics(service);
    println!("Analytics Dashboard");
    println!("  Total tasks:  {}", snapshot.total_tasks);
    println!("  Pending:      {}", snapshot.pending);
    println!("  In progress:  {}", snapshot.in_progress);
    println!("  Completed:    {}", snapshot.completed);
    println!("  Total hours:  {}", snapshot.total_hours);
    println!("  Overdue:      {}", snapshot.overdue);
}

// === Shared ===

fn print_tasks(tasks: &[&Task]) {
    println!("TaskId | EmpId | Name                 | Hours | Status     | Date       | Due        | Comments");
    for t in tasks {
        println!(
            "{:6} | {:5} | {:<20} | {:5} | {:<10} | {} | {} | {}",
            t.id,
            t.employee_id,
            t.name,
            t.hours_spent,
            t.status.as_str(),
            t.created_on,
            t.due_date,
            t.comments.len(),
        );
    }
}
