//! Dashboard form state

use super::mode::{DispatchAction, SearchMode};
use super::state::SearchConfig;

/// Focusable rows of the dashboard, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Mode,
    /// Only shown in content mode
    Query,
    Case,
    Hidden,
    Action,
    Start,
}

impl Field {
    pub const ORDER: [Field; 6] = [
        Self::Mode,
        Self::Query,
        Self::Case,
        Self::Hidden,
        Self::Action,
        Self::Start,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Mode => "Search mode",
            Self::Query => "Query",
            Self::Case => "Case sensitive",
            Self::Hidden => "Hidden files",
            Self::Action => "Enter action",
            Self::Start => "Start search",
        }
    }
}

/// Configuring state: the search being prepared plus the focused row
#[derive(Debug, Clone)]
pub struct DashboardForm {
    pub config: SearchConfig,
    pub focus: Field,
}

impl DashboardForm {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            focus: Field::Mode,
        }
    }

    /// Rows currently on screen
    pub fn visible_fields(&self) -> Vec<Field> {
        Field::ORDER
            .into_iter()
            .filter(|f| *f != Field::Query || self.config.mode.is_content())
            .collect()
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, delta: isize) {
        let fields = self.visible_fields();
        let len = fields.len() as isize;
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len);
        self.focus = fields[next as usize];
    }

    /// Change the focused value; `forward` picks the cycling direction
    pub fn change_value(&mut self, forward: bool) {
        match self.focus {
            Field::Mode => {
                self.config.mode = match self.config.mode {
                    SearchMode::FilenameSearch => SearchMode::ContentSearch,
                    SearchMode::ContentSearch => SearchMode::FilenameSearch,
                };
            }
            Field::Case => self.config.toggle_case(),
            Field::Hidden => self.config.toggle_hidden(),
            Field::Action => {
                let action = self.config.default_action;
                self.config.default_action = if forward { action.next() } else { action.prev() };
            }
            Field::Query | Field::Start => {}
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.focus == Field::Query {
            self.config.query.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if self.focus == Field::Query {
            self.config.query.pop();
        }
    }

    /// The configuration handed to the search. A query typed before
    /// switching back to filename mode is dropped.
    pub fn finish(mut self) -> SearchConfig {
        if !self.config.mode.is_content() {
            self.config.query.clear();
        }
        self.config
    }

    pub fn action(&self) -> DispatchAction {
        self.config.default_action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_hidden_in_filename_mode() {
        let form = DashboardForm::new(SearchConfig::default());
        assert!(!form.visible_fields().contains(&Field::Query));
    }

    #[test]
    fn test_focus_skips_query_and_wraps() {
        let mut form = DashboardForm::new(SearchConfig::default());
        form.focus_next();
        assert_eq!(form.focus, Field::Case);
        form.focus_prev();
        form.focus_prev();
        assert_eq!(form.focus, Field::Start);
    }

    #[test]
    fn test_content_mode_shows_query() {
        let mut form = DashboardForm::new(SearchConfig::default());
        form.change_value(true);
        assert_eq!(form.config.mode, SearchMode::ContentSearch);
        form.focus_next();
        assert_eq!(form.focus, Field::Query);
        form.push_char('f');
        form.push_char('n');
        form.pop_char();
        assert_eq!(form.config.query, "f");
    }

    #[test]
    fn test_action_cycles_both_ways() {
        let mut form = DashboardForm::new(SearchConfig::default());
        form.focus = Field::Action;
        let start = form.action();
        form.change_value(true);
        assert_ne!(form.action(), start);
        form.change_value(false);
        assert_eq!(form.action(), start);
    }

    #[test]
    fn test_finish_drops_filename_query() {
        let mut form = DashboardForm::new(SearchConfig::default());
        form.change_value(true);
        form.config.query = "fn main".into();
        assert_eq!(form.finish().query, "fn main");

        let mut form = DashboardForm::new(SearchConfig::default());
        form.config.query = "stale".into();
        assert_eq!(form.finish().query, "");
    }
}
