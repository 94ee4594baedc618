//! Session wiring: front end, selection loop, dispatch

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::action::{DispatchContext, Dispatcher, HandoffFile};
use crate::core::{Capability, SearchConfig};
use crate::error::Result;
use crate::integrate::{PickResult, Toolchain};
use crate::search::{FzfDriver, Selector};

use super::config::Config;
use super::dashboard;
use super::prompt::{QueryPrompt, TerminalPrompt};
use super::selection_loop::{LoopOutcome, SelectionLoop};

/// Run the selection loop from `config`, then the chosen action
pub fn run_session<S, P, W>(
    selection_loop: &mut SelectionLoop<S, P>,
    config: &mut SearchConfig,
    dispatcher: &mut Dispatcher<W>,
) -> PickResult
where
    S: Selector,
    P: QueryPrompt,
    W: Write,
{
    dispatcher.reset_handoff();

    match selection_loop.run(config) {
        LoopOutcome::Cancelled => {
            debug!("session cancelled");
            PickResult::Cancelled
        }
        LoopOutcome::Dispatch { action, selection } => {
            match dispatcher.dispatch(action, &selection) {
                Ok(()) => PickResult::Dispatched,
                Err(e) => {
                    warn!(error = %e, "unusable selection");
                    eprintln!("yoink: {}", e);
                    PickResult::Unusable
                }
            }
        }
    }
}

/// Dispatch context from the process environment
pub fn environment_context(cwd: PathBuf) -> DispatchContext {
    DispatchContext::new(cwd)
        .with_handoff(HandoffFile::locate())
        .with_editor(env::var("EDITOR").ok())
}

/// Run the front end selected on the command line
pub fn run(config: Config, toolchain: &Toolchain, cwd: PathBuf) -> Result<PickResult> {
    let options = config.file.build_options(toolchain.previewer.as_str());
    let mut search = config.file.initial_config(config.capability);
    let mut dispatcher = Dispatcher::new(environment_context(cwd.clone()), io::stdout());

    // cleared before any front end runs, including the dashboard
    dispatcher.reset_handoff();

    if config.capability == Capability::SingleShot {
        match dashboard::configure(search)? {
            Some(configured) => search = configured,
            None => return Ok(PickResult::Cancelled),
        }
    }

    let mut selection_loop = SelectionLoop::new(
        FzfDriver::new(&cwd),
        TerminalPrompt,
        config.capability,
        options,
    );

    Ok(run_session(&mut selection_loop, &mut search, &mut dispatcher))
}
