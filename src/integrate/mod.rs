//! Integrate module - Process and environment plumbing
//!
//! - Pick: session results and stable exit codes
//! - Signal: Ctrl-C as cancellation
//! - Tools: fzf/rg/bat discovery on PATH

pub mod pick;
pub mod signal;
pub mod tools;

pub use pick::{exit_code, PickResult};
pub use tools::{check_dependencies, Toolchain};
