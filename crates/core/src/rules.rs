//! Rules module - the tunable parameters of a game
//!
//! Defaults reproduce the classic setup: a 10x15 grid, 500ms gravity that
//! speeds up by 20ms per cleared line, uniformly random pieces.

use std::fmt;

use crate::types::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_DIM, MIN_BOARD_DIM, MIN_INTERVAL_MS,
    SPEEDUP_PER_LINE_MS, START_INTERVAL_MS,
};

/// How the next piece kind is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Randomizer {
    /// Every draw is an independent pick among the seven kinds
    #[default]
    Uniform,
    /// Shuffled bags containing each kind once
    SevenBag,
}

impl Randomizer {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "uniform" => Some(Randomizer::Uniform),
            "bag" | "7bag" | "sevenbag" | "seven-bag" => Some(Randomizer::SevenBag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::SevenBag => "bag",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub board_width: u8,
    pub board_height: u8,
    pub start_interval_ms: u32,
    pub speedup_per_line_ms: u32,
    pub min_interval_ms: u32,
    pub randomizer: Randomizer,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            start_interval_ms: START_INTERVAL_MS,
            speedup_per_line_ms: SPEEDUP_PER_LINE_MS,
            min_interval_ms: MIN_INTERVAL_MS,
            randomizer: Randomizer::Uniform,
        }
    }
}

impl GameRules {
    /// Reject dimensions and timings the game cannot run with.
    pub fn validate(&self) -> Result<(), RulesError> {
        for (name, value) in [("width", self.board_width), ("height", self.board_height)] {
            if !(MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&value) {
                return Err(RulesError::BoardDimension { name, value });
            }
        }
        if self.min_interval_ms == 0 {
            return Err(RulesError::ZeroMinInterval);
        }
        if self.start_interval_ms < self.min_interval_ms {
            return Err(RulesError::IntervalBelowMinimum {
                start_ms: self.start_interval_ms,
                min_ms: self.min_interval_ms,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    BoardDimension { name: &'static str, value: u8 },
    ZeroMinInterval,
    IntervalBelowMinimum { start_ms: u32, min_ms: u32 },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::BoardDimension { name, value } => write!(
                f,
                "board {name} {value} is outside {MIN_BOARD_DIM}..={MAX_BOARD_DIM}"
            ),
            RulesError::ZeroMinInterval => write!(f, "minimum gravity interval must be positive"),
            RulesError::IntervalBelowMinimum { start_ms, min_ms } => write!(
                f,
                "start interval {start_ms}ms is below the minimum interval {min_ms}ms"
            ),
        }
    }
}

impl std::error::Error for RulesError {}
