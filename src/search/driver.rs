//! Selector driver
//!
//! Runs the ripgrep source and fzf as a producer/consumer pipeline and
//! captures what fzf prints.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::{report_warning, Result, YoinkError};
use crate::integrate::signal;

use super::builder::{CommandLine, SearchSpec};

/// fzf exit status when the operator aborts (Esc, Ctrl-C, Ctrl-G)
const STATUS_INTERRUPTED: i32 = 130;
/// fzf exit status for invalid options or other internal errors
const STATUS_ERROR: i32 = 2;

/// Outcome of one selector session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorRun {
    /// Raw stdout of the selector, possibly empty
    Output(String),
    /// The operator aborted
    Cancelled,
}

/// Anything that can present a [`SearchSpec`] and report what was picked
pub trait Selector {
    fn select(&mut self, spec: &SearchSpec) -> Result<SelectorRun>;
}

/// [`Selector`] backed by a real `fzf` process
#[derive(Debug, Clone)]
pub struct FzfDriver {
    command: CommandLine,
    cwd: PathBuf,
}

impl FzfDriver {
    /// Run `fzf` from PATH in `cwd`
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self::with_command(CommandLine::new("fzf"), cwd)
    }

    /// Run a custom selector command; the `SearchSpec` arguments are appended
    pub fn with_command(command: CommandLine, cwd: impl Into<PathBuf>) -> Self {
        Self {
            command,
            cwd: cwd.into(),
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// fzf arguments for `spec`
    pub fn selector_args(spec: &SearchSpec) -> Vec<String> {
        vec![
            "--ansi".to_string(),
            "--delimiter".to_string(),
            ":".to_string(),
            "--height".to_string(),
            spec.height.clone(),
            "--layout".to_string(),
            "reverse".to_string(),
            "--border".to_string(),
            "--prompt".to_string(),
            spec.prompt.clone(),
            "--header".to_string(),
            spec.header.clone(),
            format!("--expect={}", spec.expect_list()),
            "--preview".to_string(),
            spec.preview.clone(),
            "--preview-window".to_string(),
            spec.preview_window.clone(),
        ]
    }
}

impl Selector for FzfDriver {
    fn select(&mut self, spec: &SearchSpec) -> Result<SelectorRun> {
        // An interrupt from an earlier blocking point must not cancel this run
        signal::take_interrupt();
        debug!(source = %spec.source, "starting search source");

        let mut source = Command::new(&spec.source.program)
            .args(&spec.source.args)
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| YoinkError::launch(&spec.source.program, e))?;

        let Some(pipe) = source.stdout.take() else {
            let _ = source.kill();
            let _ = source.wait();
            return Err(YoinkError::terminal("search source has no stdout pipe"));
        };

        let output = Command::new(&self.command.program)
            .args(&self.command.args)
            .args(Self::selector_args(spec))
            .current_dir(&self.cwd)
            .stdin(Stdio::from(pipe))
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output();

        // The selector may finish before the source does; never leave a zombie
        let _ = source.kill();
        match source.wait() {
            Ok(status) => debug!(%status, "search source reaped"),
            Err(e) => warn!(error = %e, "failed to reap search source"),
        }

        let output = output.map_err(|e| YoinkError::launch(&self.command.program, e))?;
        let interrupted = signal::take_interrupt();
        debug!(status = %output.status, interrupted, "selector finished");

        match output.status.code() {
            _ if interrupted => Ok(SelectorRun::Cancelled),
            Some(STATUS_INTERRUPTED) | None => Ok(SelectorRun::Cancelled),
            Some(STATUS_ERROR) => {
                report_warning(&format!("{} reported an error", self.command.program));
                Ok(SelectorRun::Cancelled)
            }
            Some(_) => Ok(SelectorRun::Output(
                String::from_utf8_lossy(&output.stdout).into_owned(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Capability, SearchConfig};
    use crate::search::builder::{build, BuildOptions};

    fn spec() -> SearchSpec {
        build(
            &SearchConfig::default(),
            Capability::LiveToggles,
            &BuildOptions::default(),
        )
    }

    #[test]
    fn test_selector_args() {
        let spec = spec();
        let args = FzfDriver::selector_args(&spec);
        assert_eq!(args[0], "--ansi");
        let delim = args.iter().position(|a| a == "--delimiter").unwrap();
        assert_eq!(args[delim + 1], ":");
        assert!(args.contains(&format!("--expect={}", spec.expect_list())));
        let preview = args.iter().position(|a| a == "--preview").unwrap();
        assert_eq!(args[preview + 1], spec.preview);
        let window = args.iter().position(|a| a == "--preview-window").unwrap();
        assert_eq!(args[window + 1], spec.preview_window);
        let header = args.iter().position(|a| a == "--header").unwrap();
        assert_eq!(args[header + 1], spec.header);
    }

    #[cfg(unix)]
    mod pipeline {
        use super::*;
        use std::fs;
        use tempfile::TempDir;

        /// Selector stand-in: drains stdin, echoes the last line it saw,
        /// then exits with `status`.
        fn fake_selector(dir: &TempDir, key: &str, status: i32) -> FzfDriver {
            let script = dir.path().join("selector.sh");
            fs::write(
                &script,
                format!(
                    "last=''\nwhile IFS= read -r line; do last=\"$line\"; done\nprintf '%s\\n%s\\n' '{}' \"$last\"\nexit {}\n",
                    key, status
                ),
            )
            .unwrap();
            FzfDriver::with_command(
                CommandLine::new("sh").arg(script.display().to_string()),
                dir.path(),
            )
        }

        fn printf_source(text: &str) -> SearchSpec {
            SearchSpec {
                source: CommandLine::new("printf").arg(text),
                ..spec()
            }
        }

        #[test]
        fn test_pipeline_feeds_selector() {
            let dir = TempDir::new().unwrap();
            let mut driver = fake_selector(&dir, "ctrl-v", 0);
            let run = driver.select(&printf_source("a.txt\\nb.txt\\n")).unwrap();
            assert_eq!(run, SelectorRun::Output("ctrl-v\nb.txt\n".to_string()));
        }

        #[test]
        fn test_status_130_is_cancelled() {
            let dir = TempDir::new().unwrap();
            let mut driver = fake_selector(&dir, "", 130);
            let run = driver.select(&printf_source("a.txt\\n")).unwrap();
            assert_eq!(run, SelectorRun::Cancelled);
        }

        #[test]
        fn test_no_match_still_returns_output() {
            let dir = TempDir::new().unwrap();
            let mut driver = fake_selector(&dir, "ctrl-s", 1);
            let run = driver.select(&printf_source("")).unwrap();
            assert_eq!(run, SelectorRun::Output("ctrl-s\n\n".to_string()));
        }

        #[test]
        fn test_missing_source_is_launch_error() {
            let dir = TempDir::new().unwrap();
            let mut driver = fake_selector(&dir, "", 0);
            let spec = SearchSpec {
                source: CommandLine::new("yoink-no-such-binary"),
                ..spec()
            };
            let err = driver.select(&spec).unwrap_err();
            assert!(err.is_not_found());
        }
    }
}
