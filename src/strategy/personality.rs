//! Bot personality coefficients.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameRng};

/// Four independent coefficients that shape a bot's play.
///
/// Each lies in `[0.5, 1.0]` when sampled with the default config. They are
/// fixed for the bot's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    /// Scales the value of guessing low.
    pub cautious: f64,

    /// Weights favourable face gaps, and scales the value of guessing high.
    pub aggressive: f64,

    /// Weights unfavourable face gaps.
    pub risky: f64,

    /// Scales the value of banking.
    pub contrarian: f64,
}

impl Personality {
    /// Create a personality from explicit coefficients.
    #[must_use]
    pub const fn new(cautious: f64, aggressive: f64, risky: f64, contrarian: f64) -> Self {
        Self {
            cautious,
            aggressive,
            risky,
            contrarian,
        }
    }

    /// Sample every coefficient uniformly from the config's range.
    pub fn sample(rng: &mut GameRng, config: &GameConfig) -> Self {
        let (low, high) = (config.coefficient_min, config.coefficient_max);
        Self {
            cautious: rng.gen_range_f64(low, high),
            aggressive: rng.gen_range_f64(low, high),
            risky: rng.gen_range_f64(low, high),
            contrarian: rng.gen_range_f64(low, high),
        }
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cautious={:.2} aggressive={:.2} risky={:.2} contrarian={:.2}",
            self.cautious, self.aggressive, self.risky, self.contrarian
        )
    }
}
