//! Selection loop
//!
//! Drives the selector until the operator either picks something to act on
//! or cancels. Toggle keys mutate the configuration and search again; the
//! dashboard front end runs the same loop with toggles disabled, so it always
//! ends after one search.

use tracing::debug;

use crate::core::{Capability, DispatchAction, SearchConfig};
use crate::error::report_warning;
use crate::search::{
    build, parse, BuildOptions, KeyBinding, ParsedOutput, ParsedSelection, PressedKey, Selector,
    SelectorRun,
};

use super::prompt::QueryPrompt;

/// How one selector result moves the loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Stop without acting
    Cancel,
    /// Mutate the configuration, then search again
    Toggle(KeyBinding),
    /// Search again unchanged
    Retry,
    /// Act on the selection and stop
    Dispatch {
        action: DispatchAction,
        selection: ParsedSelection,
    },
}

/// Terminal state of the loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopOutcome {
    Cancelled,
    Dispatch {
        action: DispatchAction,
        selection: ParsedSelection,
    },
}

/// Decide what a parsed result means. Rules are checked in order and
/// exactly one applies.
pub fn classify(
    output: ParsedOutput,
    default_action: DispatchAction,
    capability: Capability,
) -> Step {
    // 1. nothing came back
    if output.key == PressedKey::None {
        return Step::Cancel;
    }

    // 2. toggles, looping front end only
    if let PressedKey::Bound(key) = output.key {
        if key.is_toggle() && capability.supports_toggles() {
            return Step::Toggle(key);
        }
    }

    // 3. key pressed on an empty list
    let Some(selection) = output.selection else {
        return match capability {
            Capability::LiveToggles => Step::Retry,
            Capability::SingleShot => Step::Cancel,
        };
    };

    // 4. explicit action keys, 5. Enter or anything unrecognised
    let action = match output.key {
        PressedKey::Bound(key) => key.action().unwrap_or(default_action),
        _ => default_action,
    };
    Step::Dispatch { action, selection }
}

/// Apply a toggle key to the configuration
pub fn apply_toggle(config: &mut SearchConfig, key: KeyBinding) {
    match key {
        KeyBinding::FilenameMode => config.switch_to_filenames(),
        KeyBinding::ContentMode => config.switch_to_content(),
        KeyBinding::ToggleCase => config.toggle_case(),
        KeyBinding::ToggleHidden => config.toggle_hidden(),
        _ => {}
    }
}

/// The selection state machine
pub struct SelectionLoop<S, P> {
    selector: S,
    prompt: P,
    capability: Capability,
    options: BuildOptions,
}

impl<S: Selector, P: QueryPrompt> SelectionLoop<S, P> {
    pub fn new(selector: S, prompt: P, capability: Capability, options: BuildOptions) -> Self {
        Self {
            selector,
            prompt,
            capability,
            options,
        }
    }

    pub fn into_parts(self) -> (S, P) {
        (self.selector, self.prompt)
    }

    /// Run until a terminal state. Errors from the selector or prompt are
    /// reported and end the session as a cancellation.
    pub fn run(&mut self, config: &mut SearchConfig) -> LoopOutcome {
        loop {
            if self.capability.supports_toggles() && config.needs_query() {
                match self.prompt.ask() {
                    Ok(Some(answer)) if answer.trim().is_empty() => {
                        config.query = crate::search::MATCH_ALL.to_string();
                    }
                    Ok(Some(answer)) => config.query = answer,
                    Ok(None) => return LoopOutcome::Cancelled,
                    Err(e) => {
                        report_warning(&e);
                        return LoopOutcome::Cancelled;
                    }
                }
            }

            let spec = build(config, self.capability, &self.options);
            let raw = match self.selector.select(&spec) {
                Ok(SelectorRun::Output(raw)) => raw,
                Ok(SelectorRun::Cancelled) => return LoopOutcome::Cancelled,
                Err(e) => {
                    report_warning(&e);
                    return LoopOutcome::Cancelled;
                }
            };

            let parsed = parse(&raw, spec.content_mode);
            debug!(?parsed, "selector output");

            match classify(parsed, config.default_action, self.capability) {
                Step::Cancel => return LoopOutcome::Cancelled,
                Step::Toggle(key) => apply_toggle(config, key),
                Step::Retry => {}
                Step::Dispatch { action, selection } => {
                    return LoopOutcome::Dispatch { action, selection }
                }
            }
        }
    }
}
