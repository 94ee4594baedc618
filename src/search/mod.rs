//! Search module - fzf/ripgrep/bat plumbing
//!
//! - Builder: configuration to source, preview and selector arguments
//! - Driver: runs the source → selector pipeline
//! - Parser: splits selector output into key and selection
//! - Shell: quoting for the parts fzf hands to a shell

pub mod builder;
pub mod driver;
pub mod keys;
pub mod parser;
pub mod shell;

pub use builder::{build, header_text, BuildOptions, CommandLine, SearchSpec, MATCH_ALL};
pub use driver::{FzfDriver, Selector, SelectorRun};
pub use keys::{KeyBinding, PressedKey};
pub use parser::{parse, ParsedOutput, ParsedSelection};
