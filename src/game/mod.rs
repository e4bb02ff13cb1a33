//! Core game rules for garden snake
//!
//! Everything in here is pure logic with no I/O or rendering dependencies:
//! the engine advances one tick at a time and the renderer only ever reads
//! the resulting state.

pub mod collision;
pub mod config;
pub mod direction;
pub mod engine;
pub mod spawner;
pub mod state;

// Re-export commonly used types
pub use collision::HeadContact;
pub use config::GameConfig;
pub use direction::{Action, Direction};
pub use engine::{GameEngine, StepResult};
pub use spawner::ObstacleSpawner;
pub use state::{GameState, GameStatus, Obstacle, ObstacleKind, Position, Snake, TailEffect};
