//! Interrupt handling
//!
//! Ctrl-C reaches every process in the foreground group, including fzf and
//! ripgrep. yoink records it instead of dying so the driver can report a
//! clean cancellation once its children have exited.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Result, YoinkError};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Install the process-wide handler. Call once, early in `main`.
pub fn install() -> Result<()> {
    ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst))
        .map_err(|e| YoinkError::terminal(format!("cannot install interrupt handler: {}", e)))
}

/// Return whether an interrupt arrived since the last call, and reset it
pub fn take_interrupt() -> bool {
    INTERRUPTED.swap(false, Ordering::SeqCst)
}
