//! Session configuration

use thiserror::Error;

use crate::rng::Randomizer;
use crate::scoring::ScoringPolicy;
use crate::types::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_HEIGHT, MAX_BOARD_WIDTH,
    MIN_BOARD_HEIGHT, MIN_BOARD_WIDTH,
};

/// Rejected configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board width {value} is outside {min}..={max}")]
    WidthOutOfRange { value: u16, min: u16, max: u16 },
    #[error("board height {value} is outside {min}..={max}")]
    HeightOutOfRange { value: u16, min: u16, max: u16 },
}

/// Everything fixed for the duration of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: u16,
    pub height: u16,
    pub seed: u32,
    pub randomizer: Randomizer,
    pub scoring: ScoringPolicy,
}

impl SessionConfig {
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_randomizer(mut self, randomizer: Randomizer) -> Self {
        self.randomizer = randomizer;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }

    /// Check board dimensions against the supported range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_WIDTH..=MAX_BOARD_WIDTH).contains(&self.width) {
            return Err(ConfigError::WidthOutOfRange {
                value: self.width,
                min: MIN_BOARD_WIDTH,
                max: MAX_BOARD_WIDTH,
            });
        }
        if !(MIN_BOARD_HEIGHT..=MAX_BOARD_HEIGHT).contains(&self.height) {
            return Err(ConfigError::HeightOutOfRange {
                value: self.height,
                min: MIN_BOARD_HEIGHT,
                max: MAX_BOARD_HEIGHT,
            });
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            seed: 1,
            randomizer: Randomizer::default(),
            scoring: ScoringPolicy::default(),
        }
    }
}
