use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use rand::rngs::StdRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Action, GameConfig, GameEngine, GameState};
use crate::input::{InputMapper, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::Renderer;

/// Frame cadence: 30 FPS regardless of game speed
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// Interactive keyboard-driven play: the tick driver, input source, render
/// consumer and restart signal around the core engine.
pub struct HumanMode {
    engine: GameEngine<StdRng>,
    state: GameState,
    mapper: InputMapper,
    metrics: SessionMetrics,
    renderer: Renderer,
    tick_interval: Duration,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, tick_ms: u64) -> Self {
        // tokio's interval rejects a zero period
        let tick_ms = tick_ms.max(1);
        let mut engine = GameEngine::new(config);
        let state = engine.reset();
        let mapper = InputMapper::new(state.snake.direction);

        Self {
            engine,
            state,
            mapper,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            tick_interval: Duration::from_millis(tick_ms),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.tick_interval);
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                // Buffer terminal events between ticks
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.state.is_running() {
                        self.update_game();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

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

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match InputMapper::decode(key) {
                KeyAction::Steer(dir) => self.mapper.steer(dir),
                KeyAction::Restart => self.reset_game(),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        let action = self
            .mapper
            .take_pending()
            .map(Action::Move)
            .unwrap_or(Action::Continue);

        let result = self.engine.step(&mut self.state, action);
        self.metrics.on_tick(self.state.snake.len());

        if result.terminated {
            self.metrics.on_game_over(self.state.score);
        }
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.mapper.reset(self.state.snake.direction);
        self.metrics.on_round_start();
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
    use crate::game::GameStatus;

    #[test]
    fn test_mode_initialization() {
        let mode = HumanMode::new(GameConfig::default(), 125);
        assert!(mode.state.is_running());
        assert_eq!(mode.state.score, 0);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_restart_starts_a_fresh_round() {
        let mut mode = HumanMode::new(GameConfig::default(), 125);
        mode.state.score = 10;
        mode.state.status = GameStatus::GameOver;

        mode.reset_game();

        assert_eq!(mode.state.score, 0);
        assert!(mode.state.is_running());
    }

    #[test]
    fn test_zero_tick_rate_is_floored() {
        let mode = HumanMode::new(GameConfig::default(), 0);
        assert_eq!(mode.tick_interval, Duration::from_millis(1));
    }

    #[test]
    fn test_game_over_tick_updates_metrics() {
        let mut mode = HumanMode::new(GameConfig::default(), 125);
        // Steer the snake into the right wall
        loop {
            mode.update_game();
            if !mode.state.is_running() {
                break;
            }
        }
        assert_eq!(mode.metrics.rounds_played, 1);
    }
}
