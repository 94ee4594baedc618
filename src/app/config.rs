//! Application configuration from CLI arguments

use std::env;

use super::config_file::ConfigFile;
use crate::core::Capability;
use crate::integrate::exit_code;

/// What the command line asked for
#[derive(Debug)]
pub enum Invocation {
    /// Start a session
    Run(Config),
    /// Print usage and exit
    Help,
    /// Print version and exit
    Version,
}

/// Application configuration from CLI args and config file
#[derive(Debug)]
pub struct Config {
    /// Looping front end (live toggles) or dashboard (single shot)
    pub capability: Capability,
    /// Settings loaded from the config file
    pub file: ConfigFile,
}

impl Config {
    pub fn from_args() -> anyhow::Result<Self> {
        match Self::parse(env::args().skip(1))? {
            Invocation::Run(mut config) => {
                config.file = ConfigFile::load();
                Ok(config)
            }
            Invocation::Help => {
                print_help();
                std::process::exit(exit_code::SUCCESS);
            }
            Invocation::Version => {
                println!("yoink {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(exit_code::SUCCESS);
            }
        }
    }

    /// Parse arguments (program name already skipped). The config file is
    /// left at its defaults.
    pub fn parse<I>(args: I) -> anyhow::Result<Invocation>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut capability = Capability::LiveToggles;

        for arg in args {
            let arg: String = arg.into();
            match arg.as_str() {
                "--dashboard" | "-d" => capability = Capability::SingleShot,
                "--help" | "-h" => return Ok(Invocation::Help),
                "--version" | "-V" => return Ok(Invocation::Version),
                unknown if unknown.starts_with('-') => {
                    anyhow::bail!(
                        "Unknown option: {}. Use --help for usage information.",
                        unknown
                    );
                }
                other => {
                    anyhow::bail!(
                        "Unexpected argument: {}. yoink searches the current directory.",
                        other
                    );
                }
            }
        }

        Ok(Invocation::Run(Self {
            capability,
            file: ConfigFile::default(),
        }))
    }
}

fn print_help() {
    println!(
        r#"yoink - Interactive finder over fzf, ripgrep and bat

USAGE:
    yoink [OPTIONS]

Searches the current directory. Pick a file (or a matching line) and
hand it to an editor, a file manager, your shell or stdout.

OPTIONS:
    -d, --dashboard     Configure the search in a form first, then search once
    -h, --help          Show this help message
    -V, --version       Show version

ACTION KEYS (inside the finder):
    Enter       Default action (cd unless configured otherwise)
    Ctrl+V      Open in $EDITOR (vim) at the matched line
    Ctrl+X      Open in VS Code
    Ctrl+T      Open in Sublime Text
    Ctrl+O      Open the containing folder

TOGGLE KEYS (looping mode only):
    Ctrl+F      Search file names
    Ctrl+G      New content search (asks for a query)
    Ctrl+S      Toggle case sensitivity
    Ctrl+H      Toggle hidden files

DASHBOARD KEYS:
    Up/Down/Tab Move between fields
    Left/Right  Change the focused value (Space toggles)
    Enter       Start the search
    Esc         Quit

CONFIG FILE:
    ~/.config/yoink/config.toml

    [general]
    default_action = "cd"      # vim | vscode | sublime | folder | cd | print
    include_hidden = false
    case_sensitive = false

    [layout]
    height = "95%"
    preview_window = "right:60%:wrap"

ENVIRONMENT:
    EDITOR              Editor for Ctrl+V (default: vim)
    YOINK_HANDOFF_FILE  Directory handoff file (default: ~/.yoink_last_path)
    YOINK_LOG           Diagnostics filter, e.g. YOINK_LOG=debug (stderr)

EXIT CODES:
    0           Success (action ran, or search cancelled)
    1           Selection held no usable path
    2           Error (missing fzf/rg/bat, terminal error)
    3           Invalid arguments (unknown option)

SHELL INTEGRATION:
    A program cannot change its parent shell's directory, so the cd action
    writes the directory to the handoff file. Add to ~/.bashrc or ~/.zshrc:

    y() {{
        command yoink "$@"
        local file dir
        file="${{YOINK_HANDOFF_FILE:-$HOME/.yoink_last_path}}"
        dir=$(cat "$file" 2>/dev/null)
        [ -n "$dir" ] && cd "$dir"
        rm -f "$file"
    }}
"#
    );
}
