use super::direction::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The adjacent cell in the given direction
    pub fn stepped(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// What happens to the snake's tail when the head advances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailEffect {
    /// Keep the tail: net length +1 (good apple)
    Grow,
    /// Drop the tail: net length unchanged (empty cell)
    Keep,
    /// Drop the tail and one extra segment: net length -1 (bad apple)
    Shrink,
}

/// The snake: body cells head-first, plus its current heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body segments, head at index 0
    body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a snake of `length` cells with its head at `head`, the body
    /// trailing away from the heading. `length` must be at least 1; a body
    /// may only become empty by shrinking.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        debug_assert!(length > 0, "snake must start with at least one cell");
        let (dx, dy) = direction.delta();
        let body = (0..length as i32)
            .map(|i| head.moved_by(-dx * i, -dy * i))
            .collect();
        Self { body, direction }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// The last body segment
    pub fn tail(&self) -> Option<Position> {
        self.body.last().copied()
    }

    pub fn cells(&self) -> &[Position] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Whether advancing into `pos` would hit the body. The tail cell is not
    /// counted when `tail_vacates` is true, since it moves out of the way in
    /// the same tick.
    pub fn would_hit_body(&self, pos: Position, tail_vacates: bool) -> bool {
        let blocking = if tail_vacates && !self.body.is_empty() {
            &self.body[..self.body.len() - 1]
        } else {
            &self.body[..]
        };
        blocking.contains(&pos)
    }

    /// Advance the head to `new_head`, applying the tail effect. Returns the
    /// resulting length.
    pub fn advance(&mut self, new_head: Position, effect: TailEffect) -> usize {
        self.body.insert(0, new_head);

        match effect {
            TailEffect::Grow => {}
            TailEffect::Keep => {
                self.body.pop();
            }
            TailEffect::Shrink => {
                self.body.pop();
                self.body.pop();
            }
        }

        self.body.len()
    }
}

/// The three obstacle kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    /// Grows the snake by one segment
    GoodApple,
    /// Shrinks the snake by one segment
    BadApple,
    /// Ends the game on contact
    Stone,
}

/// A transient item on the grid, consumed on contact with the snake's head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub position: Position,
}

/// Whether a round is still in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Complete game state: the single source of truth the renderer reads once
/// per tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    pub obstacles: Vec<Obstacle>,
    pub status: GameStatus,
    pub grid_width: usize,
    pub grid_height: usize,
    /// Good apples eaten this round
    pub score: u32,
    pub ticks: u32,
}

impl GameState {
    pub fn new(snake: Snake, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            obstacles: Vec::new(),
            status: GameStatus::Running,
            grid_width,
            grid_height,
            score: 0,
            ticks: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    pub fn obstacle_at(&self, pos: Position) -> Option<ObstacleKind> {
        self.obstacles
            .iter()
            .find(|obs| obs.position == pos)
            .map(|obs| obs.kind)
    }

    /// Count of active obstacles of one kind
    pub fn obstacle_count(&self, kind: ObstacleKind) -> usize {
        self.obstacles.iter().filter(|obs| obs.kind == kind).count()
    }

    /// A cell is free if neither the snake nor an obstacle occupies it
    pub fn cell_is_free(&self, pos: Position) -> bool {
        !self.snake.occupies(pos) && self.obstacle_at(pos).is_none()
    }

    /// Remove the obstacle at `pos`, returning its kind
    pub fn consume_obstacle(&mut self, pos: Position) -> Option<ObstacleKind> {
        let idx = self.obstacles.iter().position(|obs| obs.position == pos)?;
        Some(self.obstacles.swap_remove(idx).kind)
    }
}
