//! Session tests against stub fzf, rg and bat scripts
//!
//! The stubs sit first on PATH. The fzf stub drains its input, prints the
//! contents of `$FAKE_FZF_OUTPUT` and exits with `$FAKE_FZF_STATUS`.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FZF_STUB: &str = r#"#!/bin/sh
cat > /dev/null
cat "$FAKE_FZF_OUTPUT"
exit "${FAKE_FZF_STATUS:-0}"
"#;

const RG_STUB: &str = "#!/bin/sh\nprintf 'src/main.rs\\nREADME.md\\n'\n";

const BAT_STUB: &str = "#!/bin/sh\nexit 0\n";

const EDITOR_STUB: &str = "#!/bin/sh\nprintf '%s\\n' \"$@\" > \"$EDITOR_LOG\"\n";

/// Temporary home, project and stub directory for one run
struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        for dir in ["home", "project/src", "bin", "config"] {
            fs::create_dir_all(root.path().join(dir)).unwrap();
        }
        let sandbox = Self { root };
        sandbox.stub("fzf", FZF_STUB);
        sandbox.stub("rg", RG_STUB);
        sandbox.stub("bat", BAT_STUB);
        sandbox.stub("fake-editor", EDITOR_STUB);
        sandbox
    }

    fn stub(&self, name: &str, script: &str) {
        let path = self.bin().join(name);
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.root.path().join(rel)
    }

    fn bin(&self) -> PathBuf {
        self.path("bin")
    }

    fn home(&self) -> PathBuf {
        self.path("home")
    }

    fn project(&self) -> PathBuf {
        self.path("project").canonicalize().unwrap()
    }

    fn handoff(&self) -> PathBuf {
        self.home().join(".yoink_last_path")
    }

    /// Command with the selector answering `fzf_output`
    fn yoink(&self, fzf_output: &str) -> Command {
        let output_file = self.path("fzf-output");
        fs::write(&output_file, fzf_output).unwrap();

        let system_path = std::env::var("PATH").unwrap_or_default();
        let mut cmd = Command::cargo_bin("yoink").unwrap();
        cmd.current_dir(self.project())
            .env("PATH", format!("{}:{}", self.bin().display(), system_path))
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.path("config"))
            .env("FAKE_FZF_OUTPUT", &output_file)
            .env_remove("YOINK_HANDOFF_FILE")
            .env_remove("EDITOR")
            .env_remove("YOINK_LOG");
        cmd
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

// =============================================================================
// Change Directory (default action)
// =============================================================================

#[test]
fn enter_writes_containing_directory_to_handoff() {
    let sandbox = Sandbox::new();
    sandbox
        .yoink("\nsrc/main.rs\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let expected = sandbox.project().join("src");
    assert_eq!(read(&sandbox.handoff()), expected.display().to_string());
}

#[test]
fn handoff_env_overrides_location() {
    let sandbox = Sandbox::new();
    let custom = sandbox.path("handoff");
    sandbox
        .yoink("\nREADME.md\n")
        .env("YOINK_HANDOFF_FILE", &custom)
        .assert()
        .success();

    assert_eq!(read(&custom), sandbox.project().display().to_string());
    assert!(!sandbox.handoff().exists());
}

// =============================================================================
// Cancellation
// =============================================================================

#[test]
fn aborted_selector_exits_zero_and_clears_stale_handoff() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.handoff(), "/old/place").unwrap();

    sandbox
        .yoink("")
        .env("FAKE_FZF_STATUS", "130")
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());

    assert!(!sandbox.handoff().exists());
}

#[test]
fn dashboard_terminal_error_still_clears_stale_handoff() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.handoff(), "/old/place").unwrap();

    // no terminal under the test harness, so the dashboard cannot start
    sandbox
        .yoink("")
        .arg("--dashboard")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());

    assert!(!sandbox.handoff().exists());
}

#[test]
fn selector_error_is_a_warning() {
    let sandbox = Sandbox::new();
    sandbox
        .yoink("")
        .env("FAKE_FZF_STATUS", "2")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("yoink: warning:"));
}

// =============================================================================
// Editors
// =============================================================================

#[test]
fn ctrl_v_launches_editor_from_environment() {
    let sandbox = Sandbox::new();
    let log = sandbox.path("editor.log");
    sandbox
        .yoink("ctrl-v\nsrc/main.rs\n")
        .env("EDITOR", sandbox.bin().join("fake-editor"))
        .env("EDITOR_LOG", &log)
        .assert()
        .success();

    let expected = sandbox.project().join("src/main.rs");
    assert_eq!(read(&log), format!("{}\n", expected.display()));
    assert!(!sandbox.handoff().exists());
}

#[test]
fn missing_editor_is_a_warning() {
    let sandbox = Sandbox::new();
    sandbox
        .yoink("ctrl-v\nsrc/main.rs\n")
        .env("EDITOR", "/nonexistent/editor")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("yoink: warning:"))
        .stderr(predicate::str::contains("/nonexistent/editor"));
}

// =============================================================================
// Config File
// =============================================================================

#[cfg(target_os = "linux")]
#[test]
fn config_file_sets_default_action() {
    let sandbox = Sandbox::new();
    let dir = sandbox.path("config/yoink");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[general]\ndefault_action = \"print\"\n").unwrap();

    sandbox
        .yoink("\nsrc/main.rs\n")
        .assert()
        .success()
        .stdout("src/main.rs\n");

    assert!(!sandbox.handoff().exists());
}

#[cfg(target_os = "linux")]
#[test]
fn broken_config_file_falls_back_to_defaults() {
    let sandbox = Sandbox::new();
    let dir = sandbox.path("config/yoink");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[general\n").unwrap();

    sandbox.yoink("\nREADME.md\n").assert().success();
    assert_eq!(
        read(&sandbox.handoff()),
        sandbox.project().display().to_string()
    );
}
