//! Result parser for selector output
//!
//! With `--expect`, fzf prints the pressed key on the first line (empty for
//! Enter) and the chosen candidate on the second.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, YoinkError};

use super::keys::PressedKey;

/// Path and optional line number picked by the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSelection {
    pub path: String,
    pub line: Option<u32>,
}

impl ParsedSelection {
    /// Split a candidate line.
    ///
    /// Content candidates look like `path:line:content`; the line field is
    /// kept only if it is a positive integer. Anything else is a bare path.
    pub fn from_line(raw: &str, content_mode: bool) -> Self {
        let parts: Vec<&str> = raw.split(':').collect();
        if content_mode && parts.len() >= 2 {
            let line = parts[1].trim().parse::<u32>().ok().filter(|n| *n > 0);
            return Self {
                path: parts[0].to_string(),
                line,
            };
        }
        Self {
            path: raw.trim().to_string(),
            line: None,
        }
    }

    /// Resolve against `cwd`, failing when there is no path to act on
    pub fn resolve(&self, cwd: &Path) -> Result<PathBuf> {
        if self.path.trim().is_empty() {
            return Err(YoinkError::selection(format!(
                "no usable path in selection '{}'",
                self
            )));
        }
        Ok(cwd
            .join(&self.path)
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect())
    }
}

impl fmt::Display for ParsedSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.path, line),
            None => f.write_str(&self.path),
        }
    }
}

/// Pressed key plus the selection, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOutput {
    pub key: PressedKey,
    pub selection: Option<ParsedSelection>,
}

/// Parse raw selector stdout. Lines after the second are ignored.
pub fn parse(raw: &str, content_mode: bool) -> ParsedOutput {
    if raw.is_empty() {
        return ParsedOutput {
            key: PressedKey::None,
            selection: None,
        };
    }

    let mut lines = raw.lines();
    let key = PressedKey::from_line(lines.next().unwrap_or_default());
    let selection = lines
        .next()
        .filter(|line| !line.trim().is_empty())
        .map(|line| ParsedSelection::from_line(line, content_mode));

    ParsedOutput { key, selection }
}
