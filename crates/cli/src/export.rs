//! Report export: task list as CSV, analytics snapshot as JSON.

use std::fs;
use std::path::Path;

use anyhow::Result;
use prodtrack_reports as reports;
use prodtrack_service::TaskService;
use tracing::info;

/// Write `tasks.csv` and `analytics.json` into `dir`, creating it if
/// needed.
pub fn export_reports(service: &TaskService, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;

    let csv_path = dir.join("tasks.csv");
    fs::write(&csv_path, reports::tasks_csv(service))?;

    let json_path = dir.join("analytics.json");
    let snapshot = reports::analytics(service);
    fs::write(&json_path, serde_json::to_string_pretty(&snapshot)?)?;

    info!(csv = %csv_path.display(), json = %json_path.display(), "reports exported");
    Ok(())
}
