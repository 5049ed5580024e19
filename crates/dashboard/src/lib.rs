//! Dashboard crate for the HR performance dashboard.
//!
//! This crate contains the controller that ties the roster source, the
//! filter engine and the bookmark store together, and the read-only view
//! it exposes to whatever renders the dashboard.

pub mod controller;
pub mod state;
pub mod view;

pub use controller::DashboardController;
pub use state::{DashboardError, DashboardState};
pub use view::{DashboardView, DepartmentSummary, RosterStats};
