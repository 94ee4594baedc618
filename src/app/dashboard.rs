//! Dashboard event loop
//!
//! Draws on stderr's alternate screen so stdout stays free for print-only
//! results.

use std::io::{self, Stderr};

use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::core::{DashboardForm, SearchConfig};
use crate::error::{Result, YoinkError};
use crate::handler::{handle_dashboard_key, DashboardAction};
use crate::render::render_dashboard;

/// Show the form until the operator starts a search (`Some`) or quits
/// (`None`)
pub fn configure(initial: SearchConfig) -> Result<Option<SearchConfig>> {
    terminal::enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let result = run_form(&mut terminal, DashboardForm::new(initial));

    // Restore terminal
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;

    result
}

fn run_form(
    terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    mut form: DashboardForm,
) -> Result<Option<SearchConfig>> {
    loop {
        terminal
            .draw(|frame| render_dashboard(frame, &form))
            .map_err(|e| YoinkError::terminal(e.to_string()))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match handle_dashboard_key(&mut form, key) {
            DashboardAction::None => {}
            DashboardAction::Submit => return Ok(Some(form.finish())),
            DashboardAction::Quit => return Ok(None),
        }
    }
}
