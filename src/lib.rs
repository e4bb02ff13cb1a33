//! Garden Snake - a grid Snake game with three obstacle kinds
//!
//! This library provides:
//! - Core game rules: movement, growth/shrinkage, collisions, spawning (game module)
//! - Buffered directional input (input module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive keyboard mode (modes module)
//!
//! Good apples grow the snake, bad apples shrink it, stones end the round.

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
