//! Core types shared across the engine
//! This module contains pure data types with no external dependencies

use thiserror::Error;

/// Grid dimension at session start (cells per side)
pub const INITIAL_GRID_SIZE: usize = 4;
/// Grid growth per completed level (one pair of rows and columns)
pub const LEVEL_SIZE_STEP: usize = 2;

/// Distinct icon identifiers available to the generator
pub const DEFAULT_ICON_COUNT: u16 = 18;

/// Points awarded for each removed pair
pub const MATCH_REWARD: u32 = 10;

/// Time budget (seconds) for level 1
pub const BASE_TIME_SECS: u32 = 60;
/// Extra seconds granted per level beyond the first
pub const TIME_BONUS_SECS: u32 = 30;

/// Opaque icon identifier. The UI maps these to visual assets;
/// the engine only compares them for equality.
pub type IconId = u16;

/// Cell on the grid (None = empty, Some = occupied by an icon)
pub type Cell = Option<IconId>;

/// Grid position, 0-indexed (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Session parameters. `Default` matches the original game:
/// 4x4 board, 18 icons, 60s base budget plus 30s per level, 10 points per pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Side length of the level-1 grid (even, >= 4)
    pub initial_size: usize,
    /// Number of distinct icon ids the generator cycles through (>= 1)
    pub icon_count: u16,
    /// Seconds on the clock at level 1
    pub base_time_secs: u32,
    /// Additional seconds per level beyond the first
    pub time_bonus_secs: u32,
    /// Score delta per matched pair
    pub match_reward: u32,
    /// RNG seed for board generation and reshuffles
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_size: INITIAL_GRID_SIZE,
            icon_count: DEFAULT_ICON_COUNT,
            base_time_secs: BASE_TIME_SECS,
            time_bonus_secs: TIME_BONUS_SECS,
            match_reward: MATCH_REWARD,
            seed: 1,
        }
    }
}

/// Result of a `select` call
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectOutcome {
    /// Whether a pair was removed
    pub matched: bool,
    /// Connecting path for transient rendering (endpoints included); only on match
    pub path: Option<Vec<Coord>>,
    /// Points added by this call
    pub score_delta: u32,
    /// Whether this match cleared the grid and advanced the level
    pub level_advanced: bool,
}

/// Result of a countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Seconds left on the clock (never negative)
    pub time_remaining: u32,
    /// True exactly once, on the tick that exhausts the budget
    pub expired: bool,
}

/// Engine error kinds. Timer expiry is session state, not an error:
/// post-expiry calls are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Invalid generation parameters (fatal to session creation)
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: &'static str },
    /// Selection coordinate outside grid bounds (caller bug; state untouched)
    #[error("selection out of bounds at {coord}")]
    InvalidSelection { coord: Coord },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_original_rules() {
        let config = GameConfig::default();
        assert_eq!(config.initial_size, 4);
        assert_eq!(config.icon_count, 18);
        assert_eq!(config.base_time_secs, 60);
        assert_eq!(config.time_bonus_secs, 30);
        assert_eq!(config.match_reward, 10);
    }

    #[test]
    fn test_error_display() {
        let err = GameError::InvalidSelection {
            coord: Coord::new(9, 3),
        };
        assert_eq!(err.to_string(), "selection out of bounds at (9, 3)");

        let err = GameError::InvalidConfig {
            reason: "icon_count must be >= 1",
        };
        assert!(err.to_string().contains("icon_count"));
    }
}
