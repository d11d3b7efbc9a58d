//! Employee Records - command line access to the employee service.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use employee_records as app;

use app::config::{AppConfig, ConfigLoadResult, LoggingConfig};
use app::{AppError, EmployeeDto, EmployeeService, SeaOrmEmployeeRepository, db, logging};

/// Manage employee records.
#[derive(Parser)]
#[command(name = "employee-records", version)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use config.toml from current directory (dev mode)
    #[arg(long, global = true)]
    dev: bool,

    /// Debug logging for this crate
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show one employee
    Get { id: i64 },
    /// Add a new employee
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        salary: i64,
    },
    /// Change name and salary of an employee (email must match the stored one)
    Update {
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        salary: i64,
    },
    /// Remove an employee
    Delete { id: i64 },
    /// Check the database connection and count stored employees
    Status,
    /// Write a default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = match (&cli.config, cli.dev) {
        (Some(path), _) => path.clone(),
        (None, true) => PathBuf::from("config.toml"),
        (None, false) => AppConfig::default_path(),
    };

    if let Command::InitConfig { force } = cli.command {
        let _guard = logging::init(&LoggingConfig::default(), cli.verbose)?;
        return init_config(&config_path, force);
    }

    let (config, missing) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => (config, false),
        ConfigLoadResult::Missing => (AppConfig::default(), true),
        ConfigLoadResult::Invalid(e) => {
            return Err(AppError::from(e)).with_context(|| format!("Invalid config at {}", config_path.display()));
        }
    };

    // Initialize logging
    let _guard = logging::init(&config.logging, cli.verbose)?;
    if missing {
        tracing::warn!("Config missing at {:?}, using defaults", config_path);
    } else {
        tracing::info!("Config loaded from {:?}", config_path);
    }

    let conn = db::connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    db::ensure_schema(&conn).await?;

    let repo = Arc::new(SeaOrmEmployeeRepository::new(conn));
    let service = EmployeeService::new(Arc::clone(&repo));

    match cli.command {
        Command::Get { id } => print_json(&service.get_by_id(id).await?)?,
        Command::Create { name, email, salary } => {
            let created = service.create(&EmployeeDto::new(name, email, salary)).await?;
            print_json(&created)?;
        }
        Command::Update { id, name, email, salary } => {
            let updated = service.update(id, &EmployeeDto::new(name, email, salary)).await?;
            print_json(&updated)?;
        }
        Command::Delete { id } => {
            service.delete(id).await?;
            println!("Deleted employee {id}");
        }
        Command::Status => {
            db::test_connection(repo.connection()).await?;
            let count = db::count_employees(repo.connection()).await?;
            println!("Database: {}", config.database.name);
            println!("Employees: {count}");
        }
        // Handled before connecting
        Command::InitConfig { .. } => {}
    }

    Ok(())
}

/// Write the default configuration, refusing to clobber an existing file.
fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    AppConfig::default().save(path).map_err(AppError::from)?;
    tracing::info!("Wrote default config to {:?}", path);
    println!("{}", path.display());
    Ok(())
}

fn print_json(dto: &EmployeeDto) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(dto)?);
    Ok(())
}
