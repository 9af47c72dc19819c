//! Terminal UI for the trivia lobby.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};

use crate::config::LobbyConfig;
use crate::lobby::{
    LandingScreen, PanelVisibility, PlayingScreen, Screen, ViewStateController, WaitingScreen,
};
use crate::transport::{LoopbackTransport, TransportEvent};

/// One screen per view.
#[derive(Debug, Default)]
struct Screens {
    landing: LandingScreen,
    waiting: WaitingScreen,
    playing: PlayingScreen,
}

impl Screens {
    /// The screen for the single visible panel.
    fn active(&mut self, panels: PanelVisibility) -> &mut dyn Screen {
        if *panels.playing() {
            &mut self.playing
        } else if *panels.waiting() {
            &mut self.waiting
        } else {
            &mut self.landing
        }
    }
}

/// Sends tracing output to the configured log file so it does not corrupt
/// the terminal.
pub fn init_tracing(config: &LobbyConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Runs the lobby UI against the loopback transport until the user quits.
pub async fn run_tui(config: LobbyConfig) -> Result<()> {
    info!(player_name = %config.player_name(), "Starting trivia lobby");

    let (transport, mut events) =
        LoopbackTransport::new(config.player_name().clone(), config.lobbies().clone());
    let mut controller = ViewStateController::new(
        Box::new(transport),
        config.player_name().clone(),
        config.lobby_form(),
        *config.question_seconds(),
    );
    controller.refresh_lobbies()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(*config.tick_rate_ms());
    let res = run_loop(&mut terminal, &mut controller, &mut events, tick_rate).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Lobby loop error");
    }
    res
}

/// Draw, drain inbound events, read one key, repeat.
#[instrument(skip_all)]
async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    controller: &mut ViewStateController,
    events: &mut mpsc::UnboundedReceiver<TransportEvent>,
    tick_rate: Duration,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut screens = Screens::default();
    let mut last_tick = Instant::now();

    loop {
        while let Ok(event) = events.try_recv() {
            debug!(?event, "Inbound transport event");
            controller.handle_event(event);
        }

        let now = Instant::now();
        controller.tick(now - last_tick);
        last_tick = now;

        let panels = controller.view_state().panels();
        terminal.draw(|f| {
            let screen = screens.active(panels);
            screen.render(f, controller);
        })?;

        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if let Some(action) = screens.active(panels).handle_key(key, controller) {
                if let Err(e) = controller.dispatch(action) {
                    warn!(error = %e, "Request could not be sent");
                }
            }
        }

        if *controller.quit_requested() {
            info!("Lobby quitting");
            return Ok(());
        }

        sleep(Duration::from_millis(10)).await;
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::lobby::{LobbyForm, UiAction, View};
    use crate::transport::ChannelTransport;

    #[test]
    fn test_visible_panel_picks_key_handler() {
        let (transport, _requests) = ChannelTransport::new();
        let controller =
            ViewStateController::new(Box::new(transport), "Dalai", LobbyForm::default(), 30);
        let mut screens = Screens::default();
        let start = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);

        let landing = PanelVisibility::for_view(View::Landing);
        assert_eq!(screens.active(landing).handle_key(start, &controller), None);
        assert_eq!(
            screens.active(landing).handle_key(tab, &controller),
            Some(UiAction::ToggleLandingLobby)
        );

        let waiting = PanelVisibility::for_view(View::Waiting);
        assert_eq!(
            screens.active(waiting).handle_key(start, &controller),
            Some(UiAction::StartGame)
        );

        let playing = PanelVisibility::for_view(View::Playing);
        assert_eq!(screens.active(playing).handle_key(tab, &controller), None);
    }
}
