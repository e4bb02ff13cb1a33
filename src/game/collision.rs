use super::state::{GameState, ObstacleKind, Position};

/// Classification of the cell the snake's head is about to enter.
///
/// Pure data: the engine decides what mutation each variant implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadContact {
    /// The new head cell lies outside the grid
    OutOfBounds,
    /// The new head cell is occupied by a non-vacating body segment
    SelfCollision,
    /// The new head cell holds an obstacle of this kind
    Ate(ObstacleKind),
    /// Nothing there
    Empty,
}

/// Classify what `new_head` intersects, without mutating anything.
///
/// The snake's tail cell does not count as a collision: on any tick that is
/// not a growth tick the tail vacates that cell, and a growth tick can only
/// happen when the head lands on an apple, which by invariant never overlaps
/// the body.
pub fn classify(state: &GameState, new_head: Position) -> HeadContact {
    if !state.is_in_bounds(new_head) {
        return HeadContact::OutOfBounds;
    }

    if let Some(kind) = state.obstacle_at(new_head) {
        return HeadContact::Ate(kind);
    }

    if state.snake.would_hit_body(new_head, true) {
        return HeadContact::SelfCollision;
    }

    HeadContact::Empty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;
    use crate::game::state::{Obstacle, Snake, TailEffect};

    fn state_with_snake(snake: Snake) -> GameState {
        GameState::new(snake, 20, 20)
    }

    #[test]
    fn test_out_of_bounds() {
        let state = state_with_snake(Snake::new(Position::new(0, 5), Direction::Left, 3));
        assert_eq!(
            classify(&state, Position::new(-1, 5)),
            HeadContact::OutOfBounds
        );
        assert_eq!(
            classify(&state, Position::new(0, 20)),
            HeadContact::OutOfBounds
        );
    }

    #[test]
    fn test_self_collision() {
        // Length 5 curled into a hook: head at (5,6), body still covering
        // (5,5) when the head turns back up
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 5);
        snake.advance(Position::new(6, 5), TailEffect::Keep);
        snake.advance(Position::new(6, 6), TailEffect::Keep);
        snake.advance(Position::new(5, 6), TailEffect::Keep);
        let state = state_with_snake(snake);

        assert_eq!(
            classify(&state, Position::new(5, 5)),
            HeadContact::SelfCollision
        );
    }

    #[test]
    fn test_moving_into_vacating_tail_is_legal() {
        // Length 4 closed into a 2x2 loop: head (4,5), tail (5,5). The tail
        // vacates in the same tick the head enters its cell.
        let mut snake = Snake::new(Position::new(5, 5), Direction::Down, 1);
        snake.advance(Position::new(5, 6), TailEffect::Grow);
        snake.advance(Position::new(4, 6), TailEffect::Grow);
        snake.advance(Position::new(4, 5), TailEffect::Grow);
        let state = state_with_snake(snake);

        assert_eq!(state.snake.tail(), Some(Position::new(5, 5)));
        assert_eq!(classify(&state, Position::new(5, 5)), HeadContact::Empty);
    }

    #[test]
    fn test_obstacle_contact() {
        let mut state = state_with_snake(Snake::new(Position::new(5, 5), Direction::Right, 3));
        state.obstacles.push(Obstacle {
            kind: ObstacleKind::GoodApple,
            position: Position::new(6, 5),
        });
        state.obstacles.push(Obstacle {
            kind: ObstacleKind::Stone,
            position: Position::new(5, 4),
        });

        assert_eq!(
            classify(&state, Position::new(6, 5)),
            HeadContact::Ate(ObstacleKind::GoodApple)
        );
        assert_eq!(
            classify(&state, Position::new(5, 4)),
            HeadContact::Ate(ObstacleKind::Stone)
        );
        assert_eq!(classify(&state, Position::new(5, 6)), HeadContact::Empty);
    }
}
