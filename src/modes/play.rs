use std::io::{stderr, Stderr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::interval;

use crate::game::{GameClock, Phase, SnakeGame};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::{save_stats, GameMetrics, StatsRecord};
use crate::render::Renderer;
use crate::settings::GameSettings;

/// The interactive arcade session
///
/// Drives the cooperative frame loop: every frame calls `advance` with the
/// current clock reading (the simulation gates itself on its move
/// interval), then draws the latest snapshot, so rendering stays smooth at
/// frame rate while the game logic steps at its own score-dependent pace.
pub struct PlayMode {
    game: SnakeGame,
    clock: GameClock,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    settings: GameSettings,
    stats_path: PathBuf,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(settings: GameSettings, stats: StatsRecord, stats_path: PathBuf) -> Self {
        let game = SnakeGame::new(settings.to_config());

        Self {
            game,
            clock: GameClock::new(),
            metrics: GameMetrics::new(stats),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            settings,
            stats_path,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Frames at 30 FPS; simulation steps are gated inside advance, so
        // one timer serves both cadences.
        let frame_interval = Duration::from_millis(33);
        let mut frame_timer = interval(frame_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Advance the simulation and draw a frame
                _ = frame_timer.tick() => {
                    self.advance_and_render(terminal)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn advance_and_render(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        if let Some(report) = self.game.advance(self.clock.now()) {
            if report.ate_food && self.settings.sound_enabled {
                // A failed bell is not worth interrupting the game for.
                let _ = execute!(stderr(), Print('\u{7}'));
            }
            if report.died {
                self.metrics.on_game_over(self.game.score());
                save_stats(&self.metrics.stats, &self.stats_path)?;
            }
        }

        self.metrics.update();
        let snapshot = self.game.snapshot();
        terminal
            .draw(|frame| {
                self.renderer
                    .render(frame, &snapshot, &self.metrics, &self.settings);
            })
            .context("Failed to draw frame")?;

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn(direction) => self.game.set_direction(direction),
                KeyAction::PauseOrStart => match self.game.phase() {
                    Phase::NotStarted => {
                        self.game.start();
                        self.metrics.on_game_start();
                    }
                    Phase::Running | Phase::Paused => self.game.toggle_pause(),
                    Phase::Over => {}
                },
                KeyAction::Restart => {
                    // The restart key only works on the game-over screen.
                    if self.game.phase() == Phase::Over {
                        self.game.restart();
                    }
                }
                KeyAction::CycleTheme => self.settings.theme = self.settings.theme.next(),
                KeyAction::ToggleGridLines => self.settings.show_grid = !self.settings.show_grid,
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Theme;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn test_mode() -> PlayMode {
        PlayMode::new(
            GameSettings::default(),
            StatsRecord::default(),
            PathBuf::from("unused_stats.json"),
        )
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_initial_state() {
        let mode = test_mode();
        assert_eq!(mode.game.phase(), Phase::NotStarted);
        assert_eq!(mode.game.score(), 0);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_space_starts_then_pauses() {
        let mut mode = test_mode();

        mode.handle_event(press(KeyCode::Char(' '))).unwrap();
        assert_eq!(mode.game.phase(), Phase::Running);

        mode.handle_event(press(KeyCode::Char(' '))).unwrap();
        assert_eq!(mode.game.phase(), Phase::Paused);

        mode.handle_event(press(KeyCode::Char(' '))).unwrap();
        assert_eq!(mode.game.phase(), Phase::Running);
    }

    #[test]
    fn test_restart_key_ignored_mid_game() {
        let mut mode = test_mode();
        mode.handle_event(press(KeyCode::Char(' '))).unwrap();

        mode.handle_event(press(KeyCode::Char('r'))).unwrap();
        assert_eq!(mode.game.phase(), Phase::Running); // not reset
    }

    #[test]
    fn test_theme_and_grid_keys_update_settings() {
        let mut mode = test_mode();
        assert_eq!(mode.settings.theme, Theme::Dark);
        assert!(mode.settings.show_grid);

        mode.handle_event(press(KeyCode::Char('t'))).unwrap();
        assert_eq!(mode.settings.theme, Theme::Neon);

        mode.handle_event(press(KeyCode::Char('g'))).unwrap();
        assert!(!mode.settings.show_grid);
    }

    #[test]
    fn test_quit_key() {
        let mut mode = test_mode();
        mode.handle_event(press(KeyCode::Char('q'))).unwrap();
        assert!(mode.should_quit);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut mode = test_mode();
        let mut release = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        mode.handle_event(Event::Key(release)).unwrap();
        assert_eq!(mode.game.phase(), Phase::NotStarted);
    }
}
