use rand::Rng;

use super::config::GameConfig;
use super::state::{GameState, Obstacle, ObstacleKind, Position};

/// Attempts per placement before giving up for this tick. Placement failure
/// is soft: the grid simply carries fewer obstacles until space frees up.
const MAX_PLACEMENT_ATTEMPTS: usize = 128;

/// Places obstacles on random free cells, keeping each kind at its target
/// count from the config.
///
/// The random source is injected so tests can drive placement with a seeded
/// generator.
pub struct ObstacleSpawner<R: Rng> {
    rng: R,
}

impl<R: Rng> ObstacleSpawner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Top up every obstacle kind to its target count. Called once per tick
    /// after consumption is resolved, and once during reset.
    pub fn replenish(&mut self, state: &mut GameState, config: &GameConfig) {
        let targets = [
            (ObstacleKind::GoodApple, config.good_apple_count),
            (ObstacleKind::BadApple, config.bad_apple_count),
            (ObstacleKind::Stone, config.stone_count),
        ];

        for (kind, target) in targets {
            while state.obstacle_count(kind) < target {
                match self.spawn(state, kind) {
                    Some(obstacle) => state.obstacles.push(obstacle),
                    // Grid saturated; retry on a later tick
                    None => break,
                }
            }
        }
    }

    /// Pick a uniformly random cell occupied by neither the snake nor another
    /// obstacle. Returns None if no free cell turns up within the attempt
    /// budget.
    fn spawn(&mut self, state: &GameState, kind: ObstacleKind) -> Option<Obstacle> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let position = Position::new(
                self.rng.gen_range(0..state.grid_width as i32),
                self.rng.gen_range(0..state.grid_height as i32),
            );

            if state.cell_is_free(position) {
                return Some(Obstacle { kind, position });
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;
    use crate::game::state::Snake;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_state(width: usize, height: usize) -> GameState {
        GameState::new(
            Snake::new(Position::new(2, 2), Direction::Right, 3),
            width,
            height,
        )
    }

    #[test]
    fn test_replenish_reaches_target_counts() {
        let mut spawner = ObstacleSpawner::new(StdRng::seed_from_u64(7));
        let mut state = test_state(10, 10);
        let config = GameConfig::small();

        spawner.replenish(&mut state, &config);

        assert_eq!(
            state.obstacle_count(ObstacleKind::GoodApple),
            config.good_apple_count
        );
        assert_eq!(
            state.obstacle_count(ObstacleKind::BadApple),
            config.bad_apple_count
        );
        assert_eq!(
            state.obstacle_count(ObstacleKind::Stone),
            config.stone_count
        );
    }

    #[test]
    fn test_obstacles_never_overlap_snake_or_each_other() {
        let mut spawner = ObstacleSpawner::new(StdRng::seed_from_u64(42));
        let mut state = test_state(5, 5);
        let mut config = GameConfig::new(5, 5);
        config.good_apple_count = 4;
        config.bad_apple_count = 4;
        config.stone_count = 4;

        spawner.replenish(&mut state, &config);

        for obs in &state.obstacles {
            assert!(!state.snake.occupies(obs.position));
        }
        let mut positions: Vec<_> = state.obstacles.iter().map(|o| o.position).collect();
        positions.sort_by_key(|p| (p.x, p.y));
        positions.dedup();
        assert_eq!(positions.len(), state.obstacles.len());
    }

    #[test]
    fn test_seeded_placement_is_deterministic() {
        let config = GameConfig::small();

        let mut state_a = test_state(10, 10);
        ObstacleSpawner::new(StdRng::seed_from_u64(99)).replenish(&mut state_a, &config);

        let mut state_b = test_state(10, 10);
        ObstacleSpawner::new(StdRng::seed_from_u64(99)).replenish(&mut state_b, &config);

        assert_eq!(state_a.obstacles, state_b.obstacles);
    }

    #[test]
    fn test_saturated_grid_skips_spawning() {
        // 3x1 grid fully covered by the snake: no free cell exists
        let snake = Snake::new(Position::new(2, 0), Direction::Right, 3);
        let mut state = GameState::new(snake, 3, 1);
        let config = GameConfig::new(3, 1);

        let mut spawner = ObstacleSpawner::new(StdRng::seed_from_u64(1));
        spawner.replenish(&mut state, &config);

        assert!(state.obstacles.is_empty());
    }
}
