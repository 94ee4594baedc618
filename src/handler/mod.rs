//! Handler module - Input event handling

pub mod dashboard;

pub use dashboard::{handle_dashboard_key, DashboardAction};
