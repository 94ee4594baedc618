//! Expect keys reported back by the selector

use crate::core::DispatchAction;

/// Keys declared with `--expect`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBinding {
    /// ctrl-v: primary editor
    EditPrimary,
    /// ctrl-x: VS Code
    EditSecondary,
    /// ctrl-t: Sublime Text
    EditTertiary,
    /// ctrl-o: reveal folder
    OpenFolder,
    /// ctrl-f: back to filename search
    FilenameMode,
    /// ctrl-g: new content search
    ContentMode,
    /// ctrl-s: case sensitivity
    ToggleCase,
    /// ctrl-h: hidden files
    ToggleHidden,
}

impl KeyBinding {
    /// Keys that end the session with a dispatch
    pub const ACTIONS: [KeyBinding; 4] = [
        Self::EditPrimary,
        Self::EditSecondary,
        Self::EditTertiary,
        Self::OpenFolder,
    ];

    /// Keys that mutate the configuration and search again
    pub const TOGGLES: [KeyBinding; 4] = [
        Self::FilenameMode,
        Self::ContentMode,
        Self::ToggleCase,
        Self::ToggleHidden,
    ];

    /// Name as fzf spells it
    pub fn fzf_name(self) -> &'static str {
        match self {
            Self::EditPrimary => "ctrl-v",
            Self::EditSecondary => "ctrl-x",
            Self::EditTertiary => "ctrl-t",
            Self::OpenFolder => "ctrl-o",
            Self::FilenameMode => "ctrl-f",
            Self::ContentMode => "ctrl-g",
            Self::ToggleCase => "ctrl-s",
            Self::ToggleHidden => "ctrl-h",
        }
    }

    pub fn from_fzf_name(name: &str) -> Option<Self> {
        Self::ACTIONS
            .into_iter()
            .chain(Self::TOGGLES)
            .find(|k| k.fzf_name() == name)
    }

    pub fn is_toggle(self) -> bool {
        Self::TOGGLES.contains(&self)
    }

    /// Dispatch action for action keys; `None` for toggles
    pub fn action(self) -> Option<DispatchAction> {
        match self {
            Self::EditPrimary => Some(DispatchAction::EditVim),
            Self::EditSecondary => Some(DispatchAction::EditVSCode),
            Self::EditTertiary => Some(DispatchAction::EditSublime),
            Self::OpenFolder => Some(DispatchAction::OpenFolder),
            _ => None,
        }
    }

    /// Short label for the header line
    pub fn label(self) -> &'static str {
        match self {
            Self::EditPrimary => "^V(Vim)",
            Self::EditSecondary => "^X(Code)",
            Self::EditTertiary => "^T(Subl)",
            Self::OpenFolder => "^O(Explorer)",
            Self::FilenameMode => "^F(Files)",
            Self::ContentMode => "^G(New Search)",
            Self::ToggleCase => "^S(Case)",
            Self::ToggleHidden => "^H(Hidden)",
        }
    }
}

/// First line of selector output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressedKey {
    /// Selector produced no output at all
    None,
    /// Plain Enter (empty key line)
    Confirm,
    /// One of the declared expect keys
    Bound(KeyBinding),
    /// A key name outside the declared set; treated like Enter
    Unrecognized(String),
}

impl PressedKey {
    pub fn from_line(line: &str) -> Self {
        let name = line.trim();
        if name.is_empty() {
            return Self::Confirm;
        }
        match KeyBinding::from_fzf_name(name) {
            Some(key) => Self::Bound(key),
            None => Self::Unrecognized(name.to_string()),
        }
    }
}
