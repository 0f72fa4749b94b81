//! Session module - the match-engine state machine
//!
//! A session owns one grid, the score/level counters, the countdown, and
//! at most one pending selection. `select` runs the whole
//! identity-check / connectivity-check / removal / win-detection chain
//! and reports the outcome as plain data; rendering is somebody else's
//! job. The session is not internally synchronized: callers serialize
//! access (see `engine::clock` for the timer side).

use log::{debug, info};

use crate::core::generator;
use crate::core::grid::Grid;
use crate::core::path::find_path;
use crate::core::rng::SimpleRng;
use crate::core::snapshot::GameSnapshot;
use crate::core::timer::Countdown;
use crate::types::{Coord, GameConfig, GameError, SelectOutcome, TickOutcome, LEVEL_SIZE_STEP};

/// One playthrough: grid, score, level, clock, pending selection
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    score: u32,
    level: u32,
    pending: Option<Coord>,
    countdown: Countdown,
    rng: SimpleRng,
    config: GameConfig,
    /// Set when the countdown expires; select/shuffle become no-ops
    terminal: bool,
}

impl Session {
    /// Start a new playthrough at level 1 with a freshly generated grid
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        if config.initial_size < 4 || config.initial_size % 2 != 0 {
            return Err(GameError::InvalidConfig {
                reason: "initial_size must be even and >= 4",
            });
        }

        let mut rng = SimpleRng::new(config.seed);
        let grid = generator::generate(config.initial_size, config.icon_count, &mut rng)?;

        Ok(Self {
            grid,
            score: 0,
            level: 1,
            pending: None,
            countdown: Countdown::new(config.base_time_secs),
            rng,
            config,
            terminal: false,
        })
    }

    /// Start a playthrough on a caller-supplied grid (tests, tooling,
    /// scripted scenarios). The grid is taken as level 1.
    pub fn with_grid(grid: Grid, config: GameConfig) -> Result<Self, GameError> {
        if config.icon_count < 1 {
            return Err(GameError::InvalidConfig {
                reason: "icon_count must be >= 1",
            });
        }

        Ok(Self {
            grid,
            score: 0,
            level: 1,
            pending: None,
            countdown: Countdown::new(config.base_time_secs),
            rng: SimpleRng::new(config.seed),
            config,
            terminal: false,
        })
    }

    /// Handle a tile click.
    ///
    /// First click on an occupied cell records it as pending. The second
    /// click evaluates the pair: distinct coordinates, equal icons, and
    /// an empty corridor between them. On a match both cells are cleared,
    /// the reward is added, and a cleared grid advances the level. The
    /// pending selection is consumed either way.
    ///
    /// Clicks on empty cells are no-ops; out-of-bounds coordinates are a
    /// caller bug and reported as `InvalidSelection`. After expiry every
    /// call is a no-op.
    pub fn select(&mut self, coord: Coord) -> Result<SelectOutcome, GameError> {
        if self.terminal {
            return Ok(SelectOutcome::default());
        }

        match self.grid.get(coord) {
            None => return Err(GameError::InvalidSelection { coord }),
            Some(None) => return Ok(SelectOutcome::default()),
            Some(Some(_)) => {}
        }

        let Some(first) = self.pending.take() else {
            self.pending = Some(coord);
            return Ok(SelectOutcome::default());
        };

        // Second click: same tile twice just cancels the selection.
        if first == coord {
            return Ok(SelectOutcome::default());
        }

        let icons_match = self.grid.get(first).flatten() == self.grid.get(coord).flatten();
        let path = if icons_match {
            find_path(&self.grid, first, coord)
        } else {
            None
        };

        let Some(path) = path else {
            debug!(
                "no match between ({}, {}) and ({}, {})",
                first.row, first.col, coord.row, coord.col
            );
            return Ok(SelectOutcome::default());
        };

        // Matched pair: remove both cells together so every icon id
        // keeps even multiplicity.
        self.grid.set(first, None);
        self.grid.set(coord, None);
        self.score += self.config.match_reward;
        debug!(
            "matched pair at ({}, {}) / ({}, {}), score {}",
            first.row, first.col, coord.row, coord.col, self.score
        );

        let level_advanced = if self.grid.is_cleared() {
            self.advance_level()?;
            true
        } else {
            false
        };

        Ok(SelectOutcome {
            matched: true,
            path: Some(path),
            score_delta: self.config.match_reward,
            level_advanced,
        })
    }

    /// Grow the grid, bump the level, recompute the time budget, and
    /// install a fresh board. Only reachable once the grid is cleared.
    fn advance_level(&mut self) -> Result<(), GameError> {
        let mut size = self.grid.size() + LEVEL_SIZE_STEP;
        if size % 2 != 0 {
            // Should not occur: generation only ever produces even sizes.
            size += 1;
        }

        self.level += 1;
        let budget =
            self.config.base_time_secs + (self.level - 1) * self.config.time_bonus_secs;

        self.grid = generator::generate(size, self.config.icon_count, &mut self.rng)?;
        self.countdown.reset(budget);
        self.pending = None;

        info!(
            "level {} reached: {}x{} board, {budget}s budget",
            self.level, size, size
        );
        Ok(())
    }

    /// Manual reshuffle: permute the icons of occupied cells.
    ///
    /// Score, level, and remaining time are untouched, and the set of
    /// empty cells never changes. The pending selection is dropped since
    /// the icon under it may have moved. No-op after expiry.
    pub fn shuffle(&mut self) {
        if self.terminal {
            return;
        }
        generator::shuffle_occupied(&mut self.grid, &mut self.rng);
        self.pending = None;
        debug!("board reshuffled at level {}", self.level);
    }

    /// Advance the countdown by one second.
    ///
    /// On the expiring tick the session becomes terminal: further
    /// `select`/`shuffle` calls are no-ops. Expiry is reported exactly
    /// once.
    pub fn on_tick(&mut self) -> TickOutcome {
        let outcome = self.countdown.tick();
        if outcome.expired {
            self.terminal = true;
            self.pending = None;
            info!("time expired at level {}, final score {}", self.level, self.score);
        }
        outcome
    }

    /// Current grid (read-only; the session owns the authoritative copy)
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn time_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    /// First tile of an in-progress pair selection, if any
    pub fn pending_selection(&self) -> Option<Coord> {
        self.pending
    }

    /// Whether the countdown has run out (game over)
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Value-type copy of everything a renderer needs
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            size: self.grid.size(),
            cells: self.grid.cells().to_vec(),
            score: self.score,
            level: self.level,
            time_remaining: self.countdown.remaining(),
            pending: self.pending,
            game_over: self.terminal,
        }
    }
}
