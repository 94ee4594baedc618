//! Dispatch actions
//!
//! Hands the chosen path to an editor, the file manager, the shell `cd`
//! wrapper, or stdout. Missing programs are warnings, never fatal.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::core::DispatchAction;
use crate::error::{report_warning, Result, YoinkError};
use crate::search::{shell, CommandLine, ParsedSelection};

use super::handoff::HandoffFile;

/// Editor used when `$EDITOR` is unset
pub const DEFAULT_EDITOR: &str = "vim";

/// Everything the actions need from the environment, passed explicitly
#[derive(Debug, Clone)]
pub struct DispatchContext {
    pub cwd: PathBuf,
    /// `None` when no home directory could be resolved
    pub handoff: Option<HandoffFile>,
    /// Raw `$EDITOR` value
    pub editor: Option<String>,
}

impl DispatchContext {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            handoff: None,
            editor: None,
        }
    }

    pub fn with_handoff(mut self, handoff: Option<HandoffFile>) -> Self {
        self.handoff = handoff;
        self
    }

    pub fn with_editor(mut self, editor: Option<String>) -> Self {
        self.editor = editor.filter(|e| !e.trim().is_empty());
        self
    }
}

/// Directory containing `path`, or `path` itself at the root
pub fn containing_dir(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(path)
        .to_path_buf()
}

/// Command for the editor actions; `None` for the others
pub fn editor_command(
    action: DispatchAction,
    path: &Path,
    line: Option<u32>,
    editor: Option<&str>,
) -> Option<CommandLine> {
    let path_str = path.display().to_string();
    let with_line = match line {
        Some(n) => format!("{}:{}", path_str, n),
        None => path_str.clone(),
    };

    match action {
        DispatchAction::EditVim => {
            let mut words = editor_words(editor);
            let program = words.remove(0);
            let mut command = CommandLine::new(program);
            command.args = words;
            if let Some(n) = line {
                command = command.arg(format!("+{}", n));
            }
            Some(command.arg(path_str))
        }
        DispatchAction::EditVSCode => Some(CommandLine::new("code").arg("-g").arg(with_line)),
        DispatchAction::EditSublime => Some(CommandLine::new("subl").arg(with_line)),
        _ => None,
    }
}

/// `$EDITOR` split into words. A value that does not split (an open
/// quote, say) or is empty falls back to [`DEFAULT_EDITOR`].
fn editor_words(editor: Option<&str>) -> Vec<String> {
    let Some(raw) = editor else {
        return vec![DEFAULT_EDITOR.to_string()];
    };
    match shell::split(raw).filter(|w| !w.is_empty()) {
        Some(words) => words,
        None => {
            warn!(editor = raw, fallback = DEFAULT_EDITOR, "cannot split $EDITOR");
            report_warning(&format!(
                "cannot parse EDITOR={:?}, using {}",
                raw, DEFAULT_EDITOR
            ));
            vec![DEFAULT_EDITOR.to_string()]
        }
    }
}

/// The platform's "reveal in file manager" command
pub fn folder_command(dir: &Path) -> CommandLine {
    let program = if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    };
    CommandLine::new(program).arg(dir.display().to_string())
}

/// Runs the terminal action of a session
pub struct Dispatcher<W: Write> {
    ctx: DispatchContext,
    out: W,
}

impl<W: Write> Dispatcher<W> {
    pub fn new(ctx: DispatchContext, out: W) -> Self {
        Self { ctx, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Remove the previous session's handoff before searching
    pub fn reset_handoff(&self) {
        if let Some(handoff) = &self.ctx.handoff {
            if let Err(e) = handoff.clear() {
                report_warning(&e);
            }
        }
    }

    /// Perform `action` on `selection`.
    ///
    /// Only an unusable selection is an error; failures of the external
    /// programs or the handoff file are reported as warnings.
    pub fn dispatch(&mut self, action: DispatchAction, selection: &ParsedSelection) -> Result<()> {
        let path = selection.resolve(&self.ctx.cwd)?;
        debug!(%action, path = %path.display(), line = ?selection.line, "dispatching");

        match self.run_action(action, selection, &path) {
            Err(e) if e.is_not_found() => {
                report_warning(&format!("{} (is it installed and on PATH?)", e));
            }
            Err(e) => report_warning(&e),
            Ok(()) => {}
        }
        Ok(())
    }

    pub(crate) fn run_action(
        &mut self,
        action: DispatchAction,
        selection: &ParsedSelection,
        path: &Path,
    ) -> Result<()> {
        match action {
            DispatchAction::PrintOnly => {
                writeln!(self.out, "{}", selection)?;
                self.out.flush()?;
                Ok(())
            }
            DispatchAction::ChangeDirectory => {
                let handoff = self.ctx.handoff.as_ref().ok_or_else(|| {
                    YoinkError::config("no home directory for the handoff file")
                })?;
                handoff.write_dir(&containing_dir(path))
            }
            DispatchAction::OpenFolder => {
                launch(&folder_command(&containing_dir(path)), &self.ctx.cwd)
            }
            editor_action => {
                let editor = self.ctx.editor.as_deref();
                let command = editor_command(editor_action, path, selection.line, editor)
                    .ok_or_else(|| {
                        YoinkError::config(format!("{} is not an editor", editor_action))
                    })?;
                launch(&command, &self.ctx.cwd)
            }
        }
    }
}

/// Run `command` in the foreground and wait for it
fn launch(command: &CommandLine, cwd: &Path) -> Result<()> {
    debug!(command = %command, "launching");
    let status = Command::new(&command.program)
        .args(&command.args)
        .current_dir(cwd)
        .status()
        .map_err(|e| YoinkError::launch(&command.program, e))?;
    if !status.success() {
        debug!(program = %command.program, %status, "program exited unsuccessfully");
    }
    Ok(())
}
