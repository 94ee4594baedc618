//! Session result and exit codes

/// Exit codes for the application
///
/// These codes are stable and can be relied upon for scripting:
/// - `SUCCESS` (0): Result dispatched, or the operator cancelled
/// - `UNUSABLE` (1): A selection was made but held no usable path
/// - `ERROR` (2): Runtime error (missing tools, terminal error, etc.)
/// - `INVALID` (3): Invalid command-line arguments
pub mod exit_code {
    /// Dispatched or cleanly cancelled
    pub const SUCCESS: i32 = 0;
    /// Selection could not be parsed into a path
    pub const UNUSABLE: i32 = 1;
    /// Runtime error occurred
    pub const ERROR: i32 = 2;
    /// Invalid arguments or options (e.g., unknown flag)
    pub const INVALID: i32 = 3;
}

/// How a picking session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickResult {
    /// An action ran (its own failures are only warnings)
    Dispatched,
    /// Operator cancelled at any point
    Cancelled,
    /// Selection made but unusable
    Unusable,
}

impl PickResult {
    /// Get exit code for this result
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Dispatched | Self::Cancelled => exit_code::SUCCESS,
            Self::Unusable => exit_code::UNUSABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_success() {
        assert_eq!(PickResult::Cancelled.exit_code(), 0);
        assert_eq!(PickResult::Dispatched.exit_code(), 0);
        assert_eq!(PickResult::Unusable.exit_code(), 1);
    }
}
