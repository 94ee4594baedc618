//! End-to-end tests for the yoink binary

mod cli_basic;
#[cfg(unix)]
mod session;
