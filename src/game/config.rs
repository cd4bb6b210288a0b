use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Points awarded per food eaten.
pub const FOOD_POINTS: u32 = 10;

/// Score interval at which the tick interval shortens.
pub const SPEED_UP_EVERY: u32 = 50;

/// Fastest allowed tick interval in milliseconds.
pub const MIN_TICK_MS: u64 = 50;

/// Grid side length on a regular terminal.
pub const WIDE_GRID: usize = 20;

/// Grid side length on a narrow terminal.
pub const NARROW_GRID: usize = 15;

// Each cell renders two columns wide, plus the board border and margins.
const WIDE_GRID_MIN_COLS: u16 = (WIDE_GRID as u16) * 2 + 8;

/// Difficulty level, fixed for the duration of a game.
///
/// Each level maps to a base tick interval and the amount the interval
/// shortens every time the score crosses a multiple of [`SPEED_UP_EVERY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Tick interval at the start of a game, in milliseconds.
    pub fn base_tick_ms(self) -> u64 {
        match self {
            Difficulty::Easy => 200,
            Difficulty::Medium => 150,
            Difficulty::Hard => 100,
        }
    }

    /// Milliseconds shaved off the tick interval per speed-up threshold.
    pub fn speed_step_ms(self) -> u64 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 8,
            Difficulty::Hard => 12,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

/// Configuration for a game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid, in cells.
    pub grid_size: usize,
    /// Starting difficulty.
    pub difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: WIDE_GRID,
            difficulty: Difficulty::default(),
        }
    }
}

impl GameConfig {
    pub fn new(grid_size: usize, difficulty: Difficulty) -> Self {
        Self {
            grid_size,
            difficulty,
        }
    }

    /// Pick a grid size for the terminal width, chosen once at startup and
    /// fixed for the process lifetime.
    pub fn grid_for_viewport(cols: u16) -> usize {
        if cols < WIDE_GRID_MIN_COLS {
            NARROW_GRID
        } else {
            WIDE_GRID
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_table() {
        assert_eq!(Difficulty::Easy.base_tick_ms(), 200);
        assert_eq!(Difficulty::Easy.speed_step_ms(), 5);
        assert_eq!(Difficulty::Medium.base_tick_ms(), 150);
        assert_eq!(Difficulty::Medium.speed_step_ms(), 8);
        assert_eq!(Difficulty::Hard.base_tick_ms(), 100);
        assert_eq!(Difficulty::Hard.speed_step_ms(), 12);
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, WIDE_GRID);
        assert_eq!(config.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_grid_for_viewport() {
        assert_eq!(GameConfig::grid_for_viewport(120), WIDE_GRID);
        assert_eq!(GameConfig::grid_for_viewport(40), NARROW_GRID);
    }
}
