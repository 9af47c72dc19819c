//! Waiting screen: shown after creating or joining a lobby.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

use crate::lobby::action::UiAction;
use crate::lobby::controller::ViewStateController;
use crate::lobby::screen::Screen;

/// Waiting screen. Has no state of its own.
#[derive(Debug, Default)]
pub struct WaitingScreen;

impl Screen for WaitingScreen {
    #[instrument(skip(self, frame, controller))]
    fn render(&self, frame: &mut Frame, controller: &ViewStateController) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new("Waiting for the game to start")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let body = match (controller.current_lobby_id(), controller.current_lobby()) {
            (_, Some(lobby)) => format!(
                "Lobby {}\n\nCreator: {}\nCategory: {}\nDifficulty: {}",
                lobby.id(),
                lobby.creator(),
                lobby.category(),
                lobby.difficulty()
            ),
            (Some(lobby_id), None) => format!("Lobby {}", lobby_id),
            (None, None) => "You have not joined a lobby.".to_string(),
        };
        let details = Paragraph::new(body)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Lobby"));
        frame.render_widget(details, chunks[1]);

        let help = Paragraph::new("s: Start game | Tab: Lobbies | l: Leave | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, _controller))]
    fn handle_key(&mut self, key: KeyEvent, _controller: &ViewStateController) -> Option<UiAction> {
        match key.code {
            KeyCode::Char('s') => Some(UiAction::StartGame),
            KeyCode::Tab => Some(UiAction::ToggleLandingLobby),
            KeyCode::Char('l') | KeyCode::Esc => Some(UiAction::LeaveGame),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(UiAction::Quit),
            _ => None,
        }
    }
}
