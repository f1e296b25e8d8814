//! Game configuration.
//!
//! `GameConfig` holds every tunable of a game. Defaults match the standard
//! table: a 12-face wheel, payouts of face × 10, a 100-point win threshold
//! and 8 seats. Configs can be loaded from JSON and adjusted with the
//! `with_*` builder methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Faces on the wheel, numbered 1..=face_count (default: 12).
    pub face_count: u8,

    /// Banking pays current face × this multiplier (default: 10).
    pub payout_multiplier: u32,

    /// Score needed at round end to win (default: 100).
    pub win_threshold: u32,

    /// Total seats; bots fill whatever humans leave empty (default: 8).
    pub max_participants: usize,

    /// Lower bound for sampled bot coefficients (default: 0.5).
    pub coefficient_min: f64,

    /// Upper bound for sampled bot coefficients (default: 1.0).
    pub coefficient_max: f64,

    /// Stop after this many rounds without a winner (default: unlimited).
    pub max_rounds: Option<u32>,

    /// Carry scores across rounds instead of resetting them (default: false).
    pub cumulative_scores: bool,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            face_count: 12,
            payout_multiplier: 10,
            win_threshold: 100,
            max_participants: 8,
            coefficient_min: 0.5,
            coefficient_max: 1.0,
            max_rounds: None,
            cumulative_scores: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the win threshold.
    #[must_use]
    pub fn with_win_threshold(mut self, threshold: u32) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Set the number of seats.
    #[must_use]
    pub fn with_max_participants(mut self, count: usize) -> Self {
        self.max_participants = count;
        self
    }

    /// Set a round limit.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Keep scores across rounds.
    #[must_use]
    pub fn with_cumulative_scores(mut self, cumulative: bool) -> Self {
        self.cumulative_scores = cumulative;
        self
    }

    /// Faces strictly above this value count as high.
    #[must_use]
    pub fn high_boundary(&self) -> u8 {
        self.face_count / 2
    }

    /// Check the config for values the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.face_count == 0 {
            return Err(GameError::Config("face_count must be at least 1".to_string()));
        }
        if u32::from(self.face_count)
            .checked_mul(self.payout_multiplier)
            .is_none()
        {
            return Err(GameError::Config(format!(
                "payout_multiplier {} overflows the top face's payout",
                self.payout_multiplier
            )));
        }
        if self.max_participants == 0 || self.max_participants > u8::MAX as usize {
            return Err(GameError::Config(format!(
                "max_participants must be 1-255, got {}",
                self.max_participants
            )));
        }
        if !(self.coefficient_min.is_finite() && self.coefficient_max.is_finite())
            || self.coefficient_min > self.coefficient_max
        {
            return Err(GameError::Config(format!(
                "coefficient range {}..={} is empty",
                self.coefficient_min, self.coefficient_max
            )));
        }
        if self.max_rounds == Some(0) {
            return Err(GameError::Config("max_rounds must be at least 1".to_string()));
        }
        Ok(())
    }
}
