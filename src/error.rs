//! Unified error types for yoink
//!
//! Provides a consistent error handling approach across all modules.

use std::path::PathBuf;

/// Unified error type for yoink operations
#[derive(Debug, thiserror::Error)]
pub enum YoinkError {
    /// I/O errors (pipes, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Required external binaries are not on PATH
    #[error("missing binary dependencies: {}", .0.join(", "))]
    MissingDependencies(Vec<String>),

    /// An external program could not be started
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The selected line could not be turned into a usable path
    #[error("Selection error: {0}")]
    Selection(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Terminal setup or drawing errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Handoff file could not be written or removed
    #[error("Handoff file error: {} - {source}", path.display())]
    Handoff {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience Result type using YoinkError
pub type Result<T> = std::result::Result<T, YoinkError>;

impl YoinkError {
    /// Create a Launch error
    pub fn launch(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Launch {
            program: program.into(),
            source,
        }
    }

    /// Create a Selection error
    pub fn selection(msg: impl Into<String>) -> Self {
        Self::Selection(msg.into())
    }

    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a Terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a Handoff error
    pub fn handoff(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Handoff {
            path: path.into(),
            source,
        }
    }

    /// True when a launch failed because the binary does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Launch { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Print a non-fatal problem for the operator and keep going
pub fn report_warning(problem: &dyn std::fmt::Display) {
    tracing::warn!(%problem, "non-fatal failure");
    eprintln!("yoink: warning: {}", problem);
}
