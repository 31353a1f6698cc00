use std::time::Duration;

use crate::boss::Boss;
use crate::error::{GameError, Result};

/// Fixed rules of a run. Everything here is a constant of the game; tests
/// shorten `tick` and `result_pause` so they never wait on a real clock.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub total_levels: u32,
    pub starting_lives: u32,
    pub level_time: Duration,
    pub words_per_boss: usize,
    pub points_per_boss: u64,
    /// Frame pacing of the level loop.
    pub tick: Duration,
    /// How long level results and the game-over screen stay up.
    pub result_pause: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_levels: 25,
            starting_lives: 3,
            level_time: Duration::from_secs(60),
            words_per_boss: 10,
            points_per_boss: 100,
            tick: Duration::from_millis(50),
            result_pause: Duration::from_secs(2),
        }
    }
}

impl GameConfig {
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_result_pause(mut self, pause: Duration) -> Self {
        self.result_pause = pause;
        self
    }

    /// Every level needs a boss to display.
    pub fn validate(&self) -> Result<()> {
        match (1..=self.total_levels).find(|level| Boss::for_level(*level).is_none()) {
            Some(level) => Err(GameError::MissingBoss(level)),
            None => Ok(()),
        }
    }
}
