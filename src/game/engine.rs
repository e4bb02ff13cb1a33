use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::collision::{self, HeadContact};
use super::config::GameConfig;
use super::direction::{Action, Direction};
use super::spawner::ObstacleSpawner;
use super::state::{GameState, GameStatus, ObstacleKind, Position, Snake, TailEffect};

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// What the head ran into, or None if the game was already over
    pub contact: Option<HeadContact>,
    /// Whether the game is over after this tick
    pub terminated: bool,
}

/// Applies the game rules, one tick at a time.
///
/// The engine owns the config and the obstacle spawner; the state is passed
/// in so callers keep ownership of it (and the renderer can borrow it between
/// ticks).
pub struct GameEngine<R: Rng> {
    config: GameConfig,
    spawner: ObstacleSpawner<R>,
}

impl GameEngine<StdRng> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Build an engine around an explicit random source, for deterministic
    /// tests
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            config,
            spawner: ObstacleSpawner::new(rng),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh round: snake at grid center heading Right, obstacles
    /// spawned at their target counts, status Running.
    pub fn reset(&mut self) -> GameState {
        let center = Position::new(
            (self.config.grid_width / 2) as i32,
            (self.config.grid_height / 2) as i32,
        );
        // The configured length is clamped so the trailing body always fits
        // between the left wall and the center
        let max_length = (self.config.grid_width / 2).max(1);
        let length = self.config.initial_snake_length.clamp(1, max_length);
        let snake = Snake::new(center, Direction::Right, length);

        let mut state = GameState::new(snake, self.config.grid_width, self.config.grid_height);
        self.spawner.replenish(&mut state, &self.config);
        state
    }

    /// Advance the game by one tick.
    ///
    /// A `Move` action that reverses the current heading is silently ignored
    /// and the snake keeps going; a terminated game is never mutated.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_running() {
            return StepResult {
                contact: None,
                terminated: true,
            };
        }

        if let Action::Move(dir) = action {
            if !state.snake.direction.is_opposite(dir) {
                state.snake.direction = dir;
            }
        }

        let new_head = state.snake.head().stepped(state.snake.direction);
        let contact = collision::classify(state, new_head);

        match contact {
            HeadContact::OutOfBounds | HeadContact::SelfCollision => {
                state.status = GameStatus::GameOver;
            }
            HeadContact::Ate(ObstacleKind::Stone) => {
                // Fatal on contact, body untouched
                state.status = GameStatus::GameOver;
            }
            HeadContact::Ate(ObstacleKind::GoodApple) => {
                state.consume_obstacle(new_head);
                state.snake.advance(new_head, TailEffect::Grow);
                state.score += 1;
            }
            HeadContact::Ate(ObstacleKind::BadApple) => {
                state.consume_obstacle(new_head);
                let len = state.snake.advance(new_head, TailEffect::Shrink);
                if len == 0 {
                    state.status = GameStatus::GameOver;
                }
            }
            HeadContact::Empty => {
                state.snake.advance(new_head, TailEffect::Keep);
            }
        }

        // Top up every tick, not only on consumption, so that a spawn skipped
        // on a saturated grid is retried as soon as space frees up
        if state.is_running() {
            self.spawner.replenish(state, &self.config);
        }

        state.ticks += 1;

        debug_assert!(
            !state.is_running() || has_unique_cells(&state.snake),
            "snake body self-overlaps while running"
        );
        debug_assert!(
            state
                .obstacles
                .iter()
                .all(|obs| !state.snake.occupies(obs.position)),
            "obstacle overlaps snake body"
        );

        StepResult {
            contact: Some(contact),
            terminated: !state.is_running(),
        }
    }
}

fn has_unique_cells(snake: &Snake) -> bool {
    let cells = snake.cells();
    cells
        .iter()
        .enumerate()
        .all(|(i, cell)| !cells[i + 1..].contains(cell))
}
