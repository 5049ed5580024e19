use anyhow::{Context, Result, anyhow};
use bookmarks::{BookmarkSnapshot, BookmarkStore};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dashboard::DashboardController;
use pipeline::FilterCriteria;
use roster_loader::{EmployeeId, JsonFileSource, Rating};
use std::path::{Path, PathBuf};
use tracing::info;

mod generate;
mod render;

/// HR Dashboard - search, filter and bookmark the employee roster
#[derive(Parser)]
#[command(name = "hr-dashboard")]
#[command(about = "Employee roster dashboard with search, filters and bookmarks", long_about = None)]
struct Cli {
    /// Path to the roster JSON file
    #[arg(short, long, default_value = "data/employees.json")]
    roster: PathBuf,

    /// Path to the bookmark snapshot
    #[arg(short, long, default_value = "data/bookmarks.json")]
    bookmarks: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a synthetic roster
    Generate {
        /// Number of employees to generate
        #[arg(long, default_value = "50")]
        count: usize,

        /// Where to write the roster JSON
        #[arg(long)]
        output: PathBuf,

        /// Seed for reproducible output (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    #[command(flatten)]
    Dashboard(DashboardCommand),
}

/// Commands that run against a loaded dashboard
#[derive(Subcommand)]
enum DashboardCommand {
    /// Show the dashboard, optionally filtered
    List {
        /// Case-insensitive search over name, email and department
        #[arg(long, default_value = "")]
        search: String,

        /// Only show these departments (repeatable)
        #[arg(long = "department")]
        departments: Vec<String>,

        /// Only show these ratings (repeatable)
        #[arg(long = "rating")]
        ratings: Vec<Rating>,
    },

    /// Toggle the bookmark on an employee
    Bookmark {
        /// Employee ID to bookmark or un-bookmark
        #[arg(long)]
        id: EmployeeId,
    },

    /// Show bookmarked employees
    Bookmarks,

    /// Show the departments available for filtering
    Departments,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        // Generating does not need a loaded dashboard
        Commands::Generate { count, output, seed } => handle_generate(count, &output, seed),
        Commands::Dashboard(command) => run_dashboard(&cli.roster, &cli.bookmarks, command).await,
    }
}

/// Restore bookmarks, load the roster, then run a dashboard command
async fn run_dashboard(roster: &Path, bookmarks: &Path, command: DashboardCommand) -> Result<()> {
    let snapshot = BookmarkSnapshot::load(bookmarks)
        .context("Failed to restore bookmarks")?;
    let mut controller = DashboardController::new(BookmarkStore::from_snapshot(snapshot));

    let source = JsonFileSource::new(roster);
    if let Err(err) = controller.load(&source).await {
        render::print_view(&controller.view());
        return Err(err).with_context(|| format!("Roster source {}", source.path().display()));
    }

    // Dispatch to appropriate command handler
    match command {
        DashboardCommand::List {
            search,
            departments,
            ratings,
        } => handle_list(&mut controller, search, departments, ratings),
        DashboardCommand::Bookmark { id } => handle_bookmark(controller, id, bookmarks)?,
        DashboardCommand::Bookmarks => render::print_bookmarks(&controller.bookmarks().list()),
        DashboardCommand::Departments => render::print_departments(&controller.departments()),
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(
    controller: &mut DashboardController,
    search: String,
    departments: Vec<String>,
    ratings: Vec<Rating>,
) {
    let criteria = FilterCriteria::new()
        .with_search_term(search)
        .with_departments(departments)
        .with_ratings(ratings);

    controller.set_criteria(criteria);
    render::print_view(&controller.view());
}

/// Handle the 'bookmark' command
fn handle_bookmark(mut controller: DashboardController, id: EmployeeId, path: &Path) -> Result<()> {
    // Fall back to the stored copy so employees who left the roster can still be un-bookmarked
    let employee = controller
        .employee(id)
        .cloned()
        .or_else(|| controller.bookmarks().list().into_iter().find(|e| e.id == id))
        .ok_or_else(|| anyhow!("Employee {} not found", id))?;

    let bookmarked = controller.on_bookmark_toggle(&employee);
    if bookmarked {
        println!("{} Bookmarked {}", "✓".green(), employee.full_name());
    } else {
        println!("{} Removed bookmark for {}", "✓".green(), employee.full_name());
    }

    let store = controller.into_bookmarks();
    store
        .snapshot()
        .save(path)
        .context("Failed to save bookmarks")?;
    info!("{} bookmarks saved", store.len());
    Ok(())
}

/// Handle the 'generate' command
fn handle_generate(count: usize, output: &Path, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    let roster = generate::generate_roster(count, seed);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(&roster)?;
    std::fs::write(output, content)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} Wrote {} employees to {} (seed {})",
        "✓".green(),
        roster.len(),
        output.display(),
        seed
    );
    Ok(())
}
