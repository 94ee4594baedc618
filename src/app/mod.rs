//! Application module
//!
//! Command-line and config-file settings, the two front ends (looping
//! finder and dashboard) and the selection loop they share.

mod config;
mod config_file;
pub mod dashboard;
pub mod prompt;
pub mod selection_loop;
mod session;

pub use config::{Config, Invocation};
pub use config_file::{ConfigFile, GeneralConfig, LayoutConfig};
pub use prompt::{QueryPrompt, TerminalPrompt};
pub use selection_loop::{apply_toggle, classify, LoopOutcome, SelectionLoop, Step};
pub use session::{environment_context, run, run_session};
