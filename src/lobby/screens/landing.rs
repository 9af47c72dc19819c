//! Landing screen: lobby cards and the new-lobby form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, instrument};

use crate::lobby::action::UiAction;
use crate::lobby::card::LobbyCard;
use crate::lobby::controller::ViewStateController;
use crate::lobby::screen::Screen;

/// State for the landing screen.
#[derive(Debug, Default)]
pub struct LandingScreen {
    list_state: ListState,
}

impl LandingScreen {
    /// Selected card index, clamped to the current card count.
    fn selected_index(&self, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        Some(self.list_state.selected().unwrap_or(0).min(count - 1))
    }

    fn select_previous(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let i = match self.selected_index(count) {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let i = match self.selected_index(count) {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}

fn card_item(card: &LobbyCard) -> ListItem<'static> {
    let affordance = card.affordance();
    let button_style = if *affordance.enabled() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    ListItem::new(vec![
        Line::from(card.creator_line().clone()),
        Line::from(card.category_line().clone()),
        Line::from(card.difficulty_line().clone()),
        Line::from(Span::styled(format!("[ {} ]", affordance.label()), button_style)),
        Line::from(""),
    ])
}

impl Screen for LandingScreen {
    #[instrument(skip(self, frame, controller))]
    fn render(&self, frame: &mut Frame, controller: &ViewStateController) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new("Trivia Lobby")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let form = controller.form();
        let form_text = match controller.notice() {
            Some(notice) => format!(
                "Category: {}   Difficulty: {}   ({})",
                form.category(),
                form.difficulty(),
                notice
            ),
            None => format!(
                "Category: {}   Difficulty: {}",
                form.category(),
                form.difficulty()
            ),
        };
        let form_bar = Paragraph::new(form_text)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("New Lobby"));
        frame.render_widget(form_bar, chunks[1]);

        let cards = controller.cards();
        let items: Vec<ListItem> = cards.iter().map(card_item).collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Lobbies"))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        list_state.select(self.selected_index(cards.len()));
        frame.render_stateful_widget(list, chunks[2], &mut list_state);

        let help = Paragraph::new(
            "↑↓: Select | Enter: Join | n: New lobby | c/d: Category/Difficulty | r: Refresh | Tab: Lobby | q: Quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, controller))]
    fn handle_key(&mut self, key: KeyEvent, controller: &ViewStateController) -> Option<UiAction> {
        let count = controller.cards().len();
        match key.code {
            KeyCode::Up => {
                self.select_previous(count);
                None
            }
            KeyCode::Down => {
                self.select_next(count);
                None
            }
            KeyCode::Enter => {
                let card = controller.cards().get(self.selected_index(count)?)?;
                let action = card.affordance().action().clone();
                if action.is_none() {
                    debug!(lobby_id = %card.lobby_id(), "Selected lobby has no join affordance");
                }
                action
            }
            KeyCode::Char('n') => Some(UiAction::NewLobby),
            KeyCode::Char('c') => Some(UiAction::NextCategory),
            KeyCode::Char('d') => Some(UiAction::NextDifficulty),
            KeyCode::Char('r') => Some(UiAction::RefreshLobbies),
            KeyCode::Tab => Some(UiAction::ToggleLandingLobby),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(UiAction::Quit),
            _ => None,
        }
    }
}
