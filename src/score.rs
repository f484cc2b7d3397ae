//! Score, line, and level bookkeeping plus the gravity speed curve

use std::time::Duration;

const BASE_INTERVAL_MS: u64 = 500;
const MIN_INTERVAL_MS: u64 = 100;
const SPEEDUP_PER_LEVEL_MS: u64 = 30;

/// Scoring state owned by the game
#[derive(Debug, Clone)]
pub struct Score {
    /// Current score
    pub points: u64,
    /// Total lines cleared
    pub lines: u32,
    /// Current level
    pub level: u32,
}

impl Score {
    pub fn new() -> Self {
        Self {
            points: 0,
            lines: 0,
            level: 1,
        }
    }

    /// Record a clear of 1-4 rows: bump the line total, award the
    /// level-scaled bonus, then recompute the level. The bonus uses the
    /// level in effect before the clear.
    pub fn add_clear(&mut self, cleared: usize) {
        let bonus: u64 = match cleared {
            1 => 100,
            2 => 300,
            3 => 500,
            4 => 800,
            // At most 4 rows can clear from one piece
            _ => 0,
        };

        self.lines += cleared as u32;
        self.points += bonus * self.level as u64;
        self.level = self.lines / 10 + 1;
    }

    /// Time between automatic descents at the current level, clamped to
    /// 100ms.
    pub fn gravity_interval(&self) -> Duration {
        let ms = BASE_INTERVAL_MS
            .saturating_sub(self.level as u64 * SPEEDUP_PER_LEVEL_MS)
            .max(MIN_INTERVAL_MS);
        Duration::from_millis(ms)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}
