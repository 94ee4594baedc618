//! Search configuration carried across selection-loop iterations

use super::mode::{DispatchAction, SearchMode};

/// Configuration record the command builder reads.
///
/// The loop owns one of these and mutates it between iterations; each
/// iteration builds its commands from a shared borrow, so a single search
/// always sees one consistent snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub mode: SearchMode,
    pub case_sensitive: bool,
    pub include_hidden: bool,
    pub default_action: DispatchAction,
    /// Only meaningful in content mode; empty matches every line
    pub query: String,
}

impl SearchConfig {
    /// Switch to filename search. The query is kept for a later return.
    pub fn switch_to_filenames(&mut self) {
        self.mode = SearchMode::FilenameSearch;
    }

    /// Start a new content search. Always clears the query so the operator
    /// is asked for a fresh one.
    pub fn switch_to_content(&mut self) {
        self.mode = SearchMode::ContentSearch;
        self.query.clear();
    }

    pub fn toggle_case(&mut self) {
        self.case_sensitive = !self.case_sensitive;
    }

    pub fn toggle_hidden(&mut self) {
        self.include_hidden = !self.include_hidden;
    }

    /// Content mode without a query: the loop must prompt before searching
    pub fn needs_query(&self) -> bool {
        self.mode.is_content() && self.query.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SearchConfig {
        SearchConfig {
            mode: SearchMode::ContentSearch,
            case_sensitive: false,
            include_hidden: true,
            default_action: DispatchAction::PrintOnly,
            query: "TODO".to_string(),
        }
    }

    #[test]
    fn test_toggle_case_is_involution() {
        let original = sample();
        let mut config = original.clone();
        config.toggle_case();
        assert!(config.case_sensitive);
        config.toggle_case();
        assert_eq!(config, original);
    }

    #[test]
    fn test_toggle_hidden_is_involution() {
        let original = sample();
        let mut config = original.clone();
        config.toggle_hidden();
        assert!(!config.include_hidden);
        config.toggle_hidden();
        assert_eq!(config, original);
    }

    #[test]
    fn test_switch_to_content_clears_query() {
        let mut config = sample();
        config.switch_to_content();
        assert_eq!(config.mode, SearchMode::ContentSearch);
        assert!(config.query.is_empty());
        assert!(config.needs_query());

        let mut config = SearchConfig {
            mode: SearchMode::FilenameSearch,
            query: "left over".to_string(),
            ..sample()
        };
        config.switch_to_content();
        assert!(config.query.is_empty());
    }

    #[test]
    fn test_filename_mode_never_needs_query() {
        let mut config = sample();
        config.query.clear();
        config.switch_to_filenames();
        assert!(!config.needs_query());
    }
}
