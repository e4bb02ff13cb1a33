use std::time::{Duration, Instant};

/// Per-session statistics shown in the header. Nothing here is persisted;
/// everything resets when the process exits.
pub struct SessionMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub best_score: u32,
    pub longest_snake: usize,
    pub rounds_played: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_score: 0,
            longest_snake: 0,
            rounds_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_round_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_tick(&mut self, snake_length: usize) {
        if snake_length > self.longest_snake {
            self.longest_snake = snake_length;
        }
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.rounds_played += 1;
        if final_score > self.best_score {
            self.best_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
