//! Tests for the lobby-card projection.

use trivia_lobby::{IN_PROGRESS_LABEL, JOIN_LABEL, Lobby, LobbyId, UiAction, render_lobby_cards};

#[test]
fn test_open_and_started_lobbies() {
    let lobbies = vec![
        Lobby::new("1", "Dalai", "Nature", "Easy"),
        Lobby::new("2", "Ada", "History", "hard").started(),
    ];

    let cards = render_lobby_cards(&lobbies);
    assert_eq!(cards.len(), 2);

    let open = &cards[0];
    assert_eq!(open.lobby_id(), &LobbyId::new("1"));
    assert_eq!(open.affordance().label(), JOIN_LABEL);
    assert!(*open.affordance().enabled());
    assert_eq!(
        *open.affordance().action(),
        Some(UiAction::JoinLobby(LobbyId::new("1")))
    );

    let started = &cards[1];
    assert_eq!(started.affordance().label(), IN_PROGRESS_LABEL);
    assert!(!*started.affordance().enabled());
    assert!(started.affordance().action().is_none());
}

#[test]
fn test_card_lines_show_lobby_details() {
    let cards = render_lobby_cards(&[Lobby::new("1", "Dalai", "Nature", "Easy")]);
    let card = &cards[0];
    assert_eq!(card.creator_line(), "Creator: Dalai");
    assert_eq!(card.category_line(), "Category: Nature");
    assert_eq!(card.difficulty_line(), "Difficulty: Easy");
}

#[test]
fn test_cards_keep_input_order() {
    let lobbies: Vec<Lobby> = ["3", "1", "2"]
        .iter()
        .map(|id| Lobby::new(*id, "Dalai", "Nature", "Easy"))
        .collect();
    let ids: Vec<String> = render_lobby_cards(&lobbies)
        .iter()
        .map(|card| card.lobby_id().to_string())
        .collect();
    assert_eq!(ids, ["3", "1", "2"]);
}

#[test]
fn test_empty_list_renders_nothing() {
    assert!(render_lobby_cards(&[]).is_empty());
}

#[test]
fn test_mark_in_progress_is_monotonic() {
    let mut lobby = Lobby::new("1", "Dalai", "Nature", "Easy");
    assert!(lobby.mark_in_progress());
    assert!(!lobby.mark_in_progress());
    assert!(*lobby.in_progress());
}

#[test]
fn test_lobby_json_uses_camel_case() {
    let lobby: Lobby = serde_json::from_str(
        r#"{"id":"1","creator":"Dalai","category":"Nature","difficulty":"Easy","inProgress":true}"#,
    )
    .expect("valid lobby json");
    assert!(*lobby.in_progress());
    assert_eq!(lobby.id().as_str(), "1");
}

fn button_text(card: &trivia_lobby::LobbyCard) -> String {
    format!("[ {} ]", card.affordance().label())
}

#[test]
fn test_label_readable_through_borrowed_card() {
    let cards = render_lobby_cards(&[
        Lobby::new("1", "Dalai", "Nature", "Easy"),
        Lobby::new("2", "Ada", "History", "hard").started(),
    ]);
    let buttons: Vec<String> = cards.iter().map(button_text).collect();
    assert_eq!(buttons, ["[ Join ]", "[ In Progress ]"]);
}
