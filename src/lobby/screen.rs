//! Screen trait for the three lobby views.

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::lobby::action::UiAction;
use crate::lobby::controller::ViewStateController;

/// Trait implemented by each view's screen.
///
/// Screens own presentation state only (selection cursors). They render from
/// the controller and declare the [`UiAction`] a key press triggers; the
/// controller decides what that action does.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, controller: &ViewStateController);

    /// Handles a key event, returning the action it triggers, if any.
    fn handle_key(&mut self, key: KeyEvent, controller: &ViewStateController) -> Option<UiAction>;
}
