//! Dashboard keyboard handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{DashboardForm, Field};

/// What the dashboard loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    /// Keep editing
    None,
    /// Start the search with the current form
    Submit,
    /// Leave without searching
    Quit,
}

/// Apply `key` to the form
pub fn handle_dashboard_key(form: &mut DashboardForm, key: KeyEvent) -> DashboardAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let in_query = form.focus == Field::Query;

    match key.code {
        KeyCode::Char('c') if ctrl => DashboardAction::Quit,
        KeyCode::Esc => DashboardAction::Quit,
        KeyCode::Char('q') if !in_query => DashboardAction::Quit,
        KeyCode::Enter => DashboardAction::Submit,
        KeyCode::Down | KeyCode::Tab => {
            form.focus_next();
            DashboardAction::None
        }
        KeyCode::Up | KeyCode::BackTab => {
            form.focus_prev();
            DashboardAction::None
        }
        KeyCode::Right => {
            form.change_value(true);
            DashboardAction::None
        }
        KeyCode::Left => {
            form.change_value(false);
            DashboardAction::None
        }
        KeyCode::Backspace => {
            form.pop_char();
            DashboardAction::None
        }
        KeyCode::Char(' ') if !in_query => {
            form.change_value(true);
            DashboardAction::None
        }
        KeyCode::Char('j') if !in_query => {
            form.focus_next();
            DashboardAction::None
        }
        KeyCode::Char('k') if !in_query => {
            form.focus_prev();
            DashboardAction::None
        }
        KeyCode::Char(c) if in_query && !ctrl => {
            form.push_char(c);
            DashboardAction::None
        }
        _ => DashboardAction::None,
    }
}
