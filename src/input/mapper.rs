use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// High-level meaning of a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Restart,
    Quit,
    None,
}

/// Buffers directional input between ticks.
///
/// Key events arrive asynchronously; the mapper keeps only the most recent
/// direction that is not a 180-degree reversal of the last accepted one
/// (last-write-wins within a tick window, so a double reversal cannot sneak
/// through). The engine consumes the buffered direction once at tick start.
#[derive(Debug, Clone)]
pub struct InputMapper {
    last_accepted: Direction,
    pending: Option<Direction>,
}

impl InputMapper {
    pub fn new(initial: Direction) -> Self {
        Self {
            last_accepted: initial,
            pending: None,
        }
    }

    /// Decode a raw terminal key event. Arrows and WASD steer, `r` restarts,
    /// `q`/Esc/Ctrl+C quit; anything else is ignored.
    pub fn decode(key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                KeyAction::Steer(Direction::Up)
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::Steer(Direction::Down)
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::Steer(Direction::Left)
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::Steer(Direction::Right)
            }
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    /// Buffer a steering request. Reversals of the last accepted direction
    /// are dropped without effect.
    pub fn steer(&mut self, candidate: Direction) {
        if !candidate.is_opposite(self.last_accepted) {
            self.pending = Some(candidate);
        }
    }

    /// Take the buffered direction for this tick, marking it accepted
    pub fn take_pending(&mut self) -> Option<Direction> {
        let dir = self.pending.take();
        if let Some(dir) = dir {
            self.last_accepted = dir;
        }
        dir
    }

    /// Clear buffered input and realign with the snake's heading after a
    /// reset
    pub fn reset(&mut self, initial: Direction) {
        self.last_accepted = initial;
        self.pending = None;
    }
}
