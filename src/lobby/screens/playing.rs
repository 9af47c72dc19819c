//! Playing screen: shown while the joined lobby's game runs.
//!
//! Questions are not delivered yet; the screen only shows the countdown.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

use crate::lobby::action::UiAction;
use crate::lobby::controller::ViewStateController;
use crate::lobby::screen::Screen;

/// Playing screen. Has no state of its own.
#[derive(Debug, Default)]
pub struct PlayingScreen;

impl Screen for PlayingScreen {
    #[instrument(skip(self, frame, controller))]
    fn render(&self, frame: &mut Frame, controller: &ViewStateController) {
        let lobby = controller
            .current_lobby_id()
            .map(|id| id.to_string())
            .unwrap_or_default();
        let (timer, color) = match controller.countdown() {
            Some(countdown) if countdown.expired() => ("Time's up!".to_string(), Color::Red),
            Some(countdown) => (countdown.label(), Color::Yellow),
            None => (String::new(), Color::Yellow),
        };
        let text = format!(
            "Game in progress in lobby {}\n\n{}\n\nPress l to leave the game.",
            lobby, timer
        );

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Playing"));
        frame.render_widget(paragraph, frame.area());
    }

    #[instrument(skip(self, key, _controller))]
    fn handle_key(&mut self, key: KeyEvent, _controller: &ViewStateController) -> Option<UiAction> {
        match key.code {
            KeyCode::Char('l') | KeyCode::Esc => Some(UiAction::LeaveGame),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(UiAction::Quit),
            _ => None,
        }
    }
}
