//! prodtrack CLI - console-driven employee productivity & task tracker.

mod export;
mod input;
mod menus;
mod seed;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use prodtrack_core::Role;
use prodtrack_service::TaskService;
use prodtrack_storage::Repository;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "prodtrack")]
#[command(about = "Employee productivity & task tracker", long_about = None)]
struct Cli {
    /// Directory the manager's report export writes into
    #[arg(long, default_value = "reports")]
    export_dir: PathBuf,

    /// Start with an empty repository instead of the demo seed data
    #[arg(long)]
    no_seed: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut service = TaskService::new(Repository::new());
    if !cli.no_seed {
        seed::seed(&mut service);
        info!("seeded demo employees and tasks");
    }

    println!("=== Employee Productivity & Task Tracker ===");
    println!("(enter an empty email to quit)\n");

    loop {
        let email = input::prompt("Email: ")?;
        if email.is_empty() {
            return Ok(());
        }
        let password = input::prompt("Password: ")?;

        let user = match service.authenticate(&email, &password) {
            Ok(user) => user,
            Err(err) => {
                println!("! {err}\n");
                continue;
            }
        };
        println!("\nWelcome, {}! Role: {}\n", user.name, user.role.as_str());

        match user.role {
            Role::Manager => menus::manager_menu(&mut service, &user, &cli.export_dir)?,
            Role::Employee => menus::employee_menu(&mut service, &user)?,
        }
    }
}
