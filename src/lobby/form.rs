//! Lobby creation form: the category and difficulty selectors.

use tracing::{debug, instrument};

/// Local selection state for a new lobby.
///
/// Choices come from [`LobbyConfig`](crate::LobbyConfig). An empty choice
/// list selects the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LobbyForm {
    categories: Vec<String>,
    difficulties: Vec<String>,
    category_index: usize,
    difficulty_index: usize,
}

impl LobbyForm {
    /// Creates a form with the first choice of each list selected.
    #[instrument(skip_all, fields(categories = categories.len(), difficulties = difficulties.len()))]
    pub fn new(categories: Vec<String>, difficulties: Vec<String>) -> Self {
        Self {
            categories,
            difficulties,
            category_index: 0,
            difficulty_index: 0,
        }
    }

    /// Currently selected category.
    pub fn category(&self) -> &str {
        self.categories
            .get(self.category_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Currently selected difficulty.
    pub fn difficulty(&self) -> &str {
        self.difficulties
            .get(self.difficulty_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Advances the category selector, wrapping at the end.
    #[instrument(skip(self))]
    pub fn next_category(&mut self) {
        self.category_index = wrap_next(self.category_index, self.categories.len());
        debug!(category = %self.category(), "Category selected");
    }

    /// Advances the difficulty selector, wrapping at the end.
    #[instrument(skip(self))]
    pub fn next_difficulty(&mut self) {
        self.difficulty_index = wrap_next(self.difficulty_index, self.difficulties.len());
        debug!(difficulty = %self.difficulty(), "Difficulty selected");
    }
}

fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (index + 1) % len }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_selectors_wrap() {
        let mut form = LobbyForm::new(strings(&["Nature", "History"]), strings(&["easy"]));
        assert_eq!(form.category(), "Nature");
        form.next_category();
        assert_eq!(form.category(), "History");
        form.next_category();
        assert_eq!(form.category(), "Nature");
        form.next_difficulty();
        assert_eq!(form.difficulty(), "easy");
    }

    #[test]
    fn test_empty_choices_select_nothing() {
        let mut form = LobbyForm::default();
        form.next_category();
        assert_eq!(form.category(), "");
        assert_eq!(form.difficulty(), "");
    }
}
