//! yoink - Keyboard-driven file and content finder
//!
//! Composes fzf (selection), ripgrep (search source) and bat (preview),
//! then hands the chosen path to an editor, the file manager, the shell
//! `cd` wrapper or stdout.

pub mod action;
pub mod app;
pub mod core;
pub mod error;
pub mod handler;
pub mod integrate;
pub mod logging;
pub mod render;
pub mod search;
