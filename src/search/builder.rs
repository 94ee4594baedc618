//! Command builder
//!
//! Maps a [`SearchConfig`] to everything one selector session needs: the
//! ripgrep source command, the bat preview, the preview window, and the
//! header/prompt the operator sees.

use std::fmt;

use crate::core::{Capability, DispatchAction, SearchConfig, SearchMode};

use super::keys::KeyBinding;
use super::shell;

/// Directories never listed in filename mode
pub const IGNORE_GLOB: &str = "!.git/*";

/// Pattern used when the content query is empty
pub const MATCH_ALL: &str = ".";

/// Preview window scroll suffix that centres line `{2}`
const CENTRE_ON_MATCH: &str = "+{2}-/2";

const GREEN: &str = "\x1b[1;32m";
const YELLOW: &str = "\x1b[1;33m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// A program plus its arguments, spawned without a shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add `arg` only when `cond` holds
    pub fn arg_if(self, cond: bool, arg: impl Into<String>) -> Self {
        if cond {
            self.arg(arg)
        } else {
            self
        }
    }

    /// POSIX-quoted rendering, safe to paste into `sh -c`
    pub fn to_shell_string(&self) -> String {
        let words = std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str));
        shell::join(words)
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_shell_string())
    }
}

/// Presentation knobs that come from the config file, not the loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// `bat` or `batcat`
    pub previewer: String,
    /// Base `--preview-window` value
    pub preview_window: String,
    /// `--height` value
    pub height: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            previewer: "bat".to_string(),
            preview_window: "right:60%:wrap".to_string(),
            height: "95%".to_string(),
        }
    }
}

/// Everything one selector session is launched with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSpec {
    pub source: CommandLine,
    /// Shell command run by the selector; `{}`, `{1}`, `{2}` are its placeholders
    pub preview: String,
    pub preview_window: String,
    pub header: String,
    pub prompt: String,
    pub height: String,
    pub expect: Vec<KeyBinding>,
    /// Whether the source emits `path:line:content`
    pub content_mode: bool,
}

impl SearchSpec {
    /// `--expect` value, e.g. `ctrl-v,ctrl-x,ctrl-t,ctrl-o`
    pub fn expect_list(&self) -> String {
        self.expect
            .iter()
            .map(|k| k.fzf_name())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Build the selector session for `config`
pub fn build(config: &SearchConfig, capability: Capability, options: &BuildOptions) -> SearchSpec {
    let previewer = shell::quote(&options.previewer);

    let (source, preview, preview_window, prompt) = match config.mode {
        SearchMode::FilenameSearch => (
            CommandLine::new("rg")
                .arg("--files")
                .arg_if(config.include_hidden, "--hidden")
                .arg("--glob")
                .arg(IGNORE_GLOB),
            format!("{} --style=numbers --color=always {{}}", previewer),
            options.preview_window.clone(),
            "FILES> ".to_string(),
        ),
        SearchMode::ContentSearch => {
            let pattern = if config.query.is_empty() {
                MATCH_ALL
            } else {
                config.query.as_str()
            };
            let case_flag = if config.case_sensitive {
                "--case-sensitive"
            } else {
                "--smart-case"
            };
            (
                CommandLine::new("rg")
                    .arg("--line-number")
                    .arg("--no-heading")
                    .arg("--color=always")
                    .arg_if(config.include_hidden, "--hidden")
                    .arg(case_flag)
                    .arg("--regexp")
                    .arg(pattern),
                format!(
                    "{} --style=numbers --color=always --highlight-line {{2}} {{1}}",
                    previewer
                ),
                format!("{}:{}", options.preview_window, CENTRE_ON_MATCH),
                format!("RG:'{}'> ", config.query),
            )
        }
    };

    let mut expect = KeyBinding::ACTIONS.to_vec();
    if capability.supports_toggles() {
        expect.extend(KeyBinding::TOGGLES);
    }

    SearchSpec {
        source,
        preview,
        preview_window,
        header: header_text(config, capability),
        prompt,
        height: options.height.clone(),
        expect,
        content_mode: config.mode.is_content(),
    }
}

/// Status line plus key legend
pub fn header_text(config: &SearchConfig, capability: Capability) -> String {
    let mode = format!("{GREEN}[{}]{RESET}", config.mode.tag());
    let case = if config.case_sensitive {
        format!("{YELLOW}[CASE:SENSITIVE]{RESET}")
    } else {
        format!("{DIM}[CASE:SMART]{RESET}")
    };
    let hidden = if config.include_hidden {
        format!("{YELLOW}[HIDDEN:ON]{RESET}")
    } else {
        format!("{DIM}[HIDDEN:OFF]{RESET}")
    };

    let actions = KeyBinding::ACTIONS
        .iter()
        .map(|k| k.label())
        .collect::<Vec<_>>()
        .join(" | ");
    let mut header = format!(
        "{mode}  {case}  {hidden}\nACTIONS: Enter({}) | {actions}",
        enter_label(config.default_action)
    );

    if capability.supports_toggles() {
        let toggles = KeyBinding::TOGGLES
            .iter()
            .map(|k| k.label())
            .collect::<Vec<_>>()
            .join(" | ");
        header.push_str("\nTOGGLES: ");
        header.push_str(&toggles);
    }

    header
}

fn enter_label(action: DispatchAction) -> &'static str {
    match action {
        DispatchAction::EditVim => "VIM",
        DispatchAction::EditVSCode => "CODE",
        DispatchAction::EditSublime => "SUBL",
        DispatchAction::OpenFolder => "EXPLORER",
        DispatchAction::ChangeDirectory => "CD",
        DispatchAction::PrintOnly => "PRINT",
    }
}
