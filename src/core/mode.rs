//! Search mode and dispatch action definitions

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// What the search source enumerates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Bare file paths (`rg --files`)
    #[default]
    FilenameSearch,
    /// `path:line:content` matches (`rg --line-number`)
    ContentSearch,
}

impl SearchMode {
    /// True for content search
    pub fn is_content(self) -> bool {
        matches!(self, Self::ContentSearch)
    }

    /// Short tag shown in the selector header
    pub fn tag(self) -> &'static str {
        match self {
            Self::FilenameSearch => "FILES",
            Self::ContentSearch => "CONTENT",
        }
    }
}

/// Which front end drives the selection loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Toggle keys mutate the configuration and search again
    LiveToggles,
    /// Dashboard front end: one search, no toggles
    SingleShot,
}

impl Capability {
    pub fn supports_toggles(self) -> bool {
        matches!(self, Self::LiveToggles)
    }
}

/// What happens to the chosen result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum DispatchAction {
    /// Primary editor (`$EDITOR`, falling back to vim)
    EditVim,
    /// Visual Studio Code
    EditVSCode,
    /// Sublime Text
    EditSublime,
    /// Reveal the containing directory in the file manager
    OpenFolder,
    /// Hand the containing directory to the shell wrapper
    #[default]
    ChangeDirectory,
    /// Print the path and stop
    PrintOnly,
}

impl DispatchAction {
    /// Every action, in the order the dashboard cycles through them
    pub const ALL: [DispatchAction; 6] = [
        Self::EditVim,
        Self::EditVSCode,
        Self::EditSublime,
        Self::OpenFolder,
        Self::ChangeDirectory,
        Self::PrintOnly,
    ];

    /// Config-file / display name
    pub fn name(self) -> &'static str {
        match self {
            Self::EditVim => "vim",
            Self::EditVSCode => "vscode",
            Self::EditSublime => "sublime",
            Self::OpenFolder => "folder",
            Self::ChangeDirectory => "cd",
            Self::PrintOnly => "print",
        }
    }

    /// Next action in [`DispatchAction::ALL`], wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous action in [`DispatchAction::ALL`], wrapping around
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for DispatchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DispatchAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vim" | "editor" => Ok(Self::EditVim),
            "vscode" | "code" => Ok(Self::EditVSCode),
            "sublime" | "subl" => Ok(Self::EditSublime),
            "folder" | "explorer" => Ok(Self::OpenFolder),
            "cd" => Ok(Self::ChangeDirectory),
            "print" => Ok(Self::PrintOnly),
            other => Err(format!(
                "unknown action '{}'. Valid actions: vim, vscode, sublime, folder, cd, print",
                other
            )),
        }
    }
}

impl TryFrom<String> for DispatchAction {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
