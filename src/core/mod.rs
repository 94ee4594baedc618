//! Core module - Search configuration, modes and dashboard form state

pub mod form;
pub mod mode;
pub mod state;

pub use form::{DashboardForm, Field};
pub use mode::{Capability, DispatchAction, SearchMode};
pub use state::SearchConfig;
