//! Directory handoff file (shell `cd` integration)
//!
//! The process cannot change its parent shell's directory, so the
//! change-directory action writes the target to a well-known file and a
//! shell wrapper reads it after yoink exits.
//!
//! Assumes a single yoink instance per file at a time.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, YoinkError};

/// File name under the home directory
pub const HANDOFF_FILE_NAME: &str = ".yoink_last_path";

/// Environment variable overriding the handoff location
pub const HANDOFF_ENV: &str = "YOINK_HANDOFF_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffFile {
    path: PathBuf,
}

impl HandoffFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$YOINK_HANDOFF_FILE`, else `~/.yoink_last_path`
    pub fn locate() -> Option<Self> {
        if let Some(path) = env::var_os(HANDOFF_ENV).filter(|v| !v.is_empty()) {
            return Some(Self::new(path));
        }
        dirs::home_dir().map(|home| Self::new(home.join(HANDOFF_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove any previous handoff so a cancelled session never triggers a
    /// stale jump. A missing file is fine.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(YoinkError::handoff(&self.path, e)),
        }
    }

    /// Overwrite the file with `dir`, no trailing newline
    pub fn write_dir(&self, dir: &Path) -> Result<()> {
        fs::write(&self.path, dir.display().to_string())
            .map_err(|e| YoinkError::handoff(&self.path, e))
    }

    /// Current content, if the file exists
    pub fn read(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }
}
