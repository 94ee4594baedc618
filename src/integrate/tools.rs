//! External tool discovery
//!
//! fzf, ripgrep and bat must all be on PATH before any UI is shown.

use tracing::debug;

use crate::error::{Result, YoinkError};

/// Binaries yoink cannot work without
pub const REQUIRED: [&str; 3] = ["fzf", "rg", "bat"];

/// Debian and Ubuntu ship bat under this name
pub const BAT_ALIAS: &str = "batcat";

/// Resolved tool names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// `bat` or `batcat`
    pub previewer: String,
}

/// Check PATH with the `which` crate
pub fn check_dependencies() -> Result<Toolchain> {
    check_with(|name| which::which(name).is_ok())
}

/// Check using `exists` to test for a binary. Every missing tool is
/// collected so the operator sees the whole list at once.
pub fn check_with(exists: impl Fn(&str) -> bool) -> Result<Toolchain> {
    let mut missing = Vec::new();
    let mut previewer = "bat".to_string();

    for tool in REQUIRED {
        if exists(tool) {
            continue;
        }
        if tool == "bat" && exists(BAT_ALIAS) {
            previewer = BAT_ALIAS.to_string();
            continue;
        }
        missing.push(tool.to_string());
    }

    if !missing.is_empty() {
        return Err(YoinkError::MissingDependencies(missing));
    }

    debug!(%previewer, "all external tools found");
    Ok(Toolchain { previewer })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_present() {
        let tools = check_with(|_| true).unwrap();
        assert_eq!(tools.previewer, "bat");
    }

    #[test]
    fn test_batcat_satisfies_bat() {
        let tools = check_with(|name| name != "bat").unwrap();
        assert_eq!(tools.previewer, "batcat");
    }

    #[test]
    fn test_reports_every_missing_tool() {
        let err = check_with(|name| name == "rg").unwrap_err();
        match err {
            YoinkError::MissingDependencies(missing) => {
                assert_eq!(missing, vec!["fzf".to_string(), "bat".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
