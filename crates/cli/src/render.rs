//! Terminal rendering of the dashboard view.

use colored::Colorize;
use dashboard::{DashboardState, DashboardView, DepartmentSummary, RosterStats};
use roster_loader::Employee;

/// Print the whole dashboard: stats bar, then cards or a placeholder.
pub fn print_view(view: &DashboardView<'_>) {
    match view.state {
        DashboardState::Loading => {
            println!("{}", "Loading employees...".dimmed());
            return;
        }
        DashboardState::Error(message) => {
            println!("{}", message.red());
            return;
        }
        DashboardState::Ready => {}
    }

    print!("{}", "HR Performance Dashboard\n".bold().blue());
    print_stats(&view.stats);
    println!();

    if view.has_no_matches() {
        println!("{}", "No employees match your filters".dimmed());
        return;
    }

    for employee in view.filtered {
        print_employee_card(employee, view.is_bookmarked(employee.id));
    }
}

/// The three counters shown above the grid.
pub fn print_stats(stats: &RosterStats) {
    println!(
        "{} {}   {} {}   {} {}",
        "Total Employees:".cyan(),
        stats.total.to_string().bold(),
        "Filtered Results:".cyan(),
        stats.filtered.to_string().bold(),
        "Bookmarked:".cyan(),
        stats.bookmarked.to_string().bold(),
    );
}

pub fn print_employee_card(employee: &Employee, bookmarked: bool) {
    let marker = if bookmarked { "★".yellow() } else { "☆".normal() };
    println!(
        "{} {} {}",
        marker,
        format!("#{}", employee.id).dimmed(),
        employee.full_name().bold()
    );
    println!("   {}", employee.email.as_deref().unwrap_or("-"));
    println!(
        "   {} | Rating: {}",
        employee.department.as_deref().filter(|d| !d.is_empty()).unwrap_or("-"),
        format_rating(employee.performance_rating)
    );
}

/// Stars for ratings in 1-5, the plain number otherwise.
fn format_rating(rating: Option<i32>) -> String {
    match rating {
        Some(r @ 1..=5) => format!("{}{} ({})", "★".repeat(r as usize), "☆".repeat(5 - r as usize), r),
        Some(r) => r.to_string(),
        None => "n/a".to_string(),
    }
}

pub fn print_departments(departments: &[DepartmentSummary]) {
    print!("{}", "Departments:\n".bold().blue());
    for department in departments {
        println!("  - {} ({})", department.name, department.count);
    }
}

pub fn print_bookmarks(bookmarked: &[Employee]) {
    print!("{}", "Bookmarked Employees:\n".bold().blue());
    if bookmarked.is_empty() {
        println!("{}", "No bookmarks yet".dimmed());
        return;
    }
    for employee in bookmarked {
        print_employee_card(employee, true);
    }
}
