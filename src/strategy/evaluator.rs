//! Expected-value bot strategy.
//!
//! For each option the bot computes a raw expected value over the faces
//! still on the wheel, scales it by a second coefficient, and takes the
//! option with the strictly greatest positive value.
//!
//! With current face `c` and a remaining face `n`:
//!
//! | option | `n > c`                | `n < c`                | `n == c`    | scale        |
//! |--------|------------------------|------------------------|-------------|--------------|
//! | higher | `(n - c) * aggressive` | `(c - n) * risky`      | `7 * risky` | `aggressive` |
//! | lower  | `(n - c) * risky`      | `(c - n) * aggressive` | `7 * risky` | `cautious`   |
//! | bank   | -                      | -                      | -           | `contrarian` |
//!
//! Banking is not summed over faces: its raw value is `c * payout_multiplier`.
//!
//! Options are compared in the order higher, lower, bank against a running
//! maximum starting at 0, so ties keep the earlier option and a value of 0
//! or less is never picked.

use serde::{Deserialize, Serialize};

use crate::core::Action;
use crate::wheel::{Face, Wheel};

use super::personality::Personality;

/// Raw value added when a remaining face equals the reference face.
const TIE_VALUE: f64 = 7.0;

/// One value per option a bot can choose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionValues {
    pub higher: f64,
    pub lower: f64,
    pub bank: f64,
}

impl OptionValues {
    /// Options in evaluation order.
    #[must_use]
    pub fn in_order(&self) -> [(Action, f64); 3] {
        [
            (Action::Higher, self.higher),
            (Action::Lower, self.lower),
            (Action::Bank, self.bank),
        ]
    }
}

/// Raw and scaled expected values for one decision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub raw: OptionValues,
    pub scaled: OptionValues,
}

impl Evaluation {
    /// The option with the strictly greatest positive scaled value.
    #[must_use]
    pub fn best(&self) -> Option<Action> {
        let mut choice = None;
        let mut max_expected_value = 0.0;

        for (action, value) in self.scaled.in_order() {
            if value > max_expected_value {
                max_expected_value = value;
                choice = Some(action);
            }
        }

        choice
    }
}

/// Bot decision maker driven by a [`Personality`].
///
/// Decisions are a pure function of the wheel's current face, its remaining
/// faces, the personality and the banked flag. Evaluating the bank option
/// never changes any state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BotStrategy {
    personality: Personality,
}

impl BotStrategy {
    /// Create a strategy for the given personality.
    #[must_use]
    pub const fn new(personality: Personality) -> Self {
        Self { personality }
    }

    /// The bot's coefficients.
    #[must_use]
    pub fn personality(&self) -> &Personality {
        &self.personality
    }

    /// Recommend an action, or `None` when the bot is banked or no option
    /// has positive value.
    #[must_use]
    pub fn decide(&self, wheel: &Wheel, banked: bool) -> Option<Action> {
        if banked {
            return None;
        }
        self.evaluate(wheel).best()
    }

    /// Compute expected values against the wheel's state.
    ///
    /// Before the first draw there is no current face: the reference becomes
    /// the midpoint of the remaining faces and banking is worth nothing.
    #[must_use]
    pub fn evaluate(&self, wheel: &Wheel) -> Evaluation {
        let reference = match wheel.current_face() {
            Some(face) => f64::from(face.0),
            None => pool_midpoint(wheel),
        };
        let bank = wheel
            .current_face()
            .map_or(0.0, |face| f64::from(face.value().saturating_mul(wheel.payout_multiplier())));

        self.evaluate_faces(reference, wheel.remaining().iter().copied(), bank)
    }

    /// Compute expected values from explicit inputs.
    ///
    /// `bank_value` is the raw payout for banking now.
    #[must_use]
    pub fn evaluate_faces(
        &self,
        reference: f64,
        remaining: impl IntoIterator<Item = Face>,
        bank_value: f64,
    ) -> Evaluation {
        let Personality {
            cautious,
            aggressive,
            risky,
            contrarian,
        } = self.personality;

        let mut raw = OptionValues {
            bank: bank_value,
            ..OptionValues::default()
        };

        for face in remaining {
            let n = f64::from(face.0);
            if n > reference {
                raw.higher += (n - reference) * aggressive;
                raw.lower += (n - reference) * risky;
            } else if n < reference {
                raw.higher += (reference - n) * risky;
                raw.lower += (reference - n) * aggressive;
            } else {
                raw.higher += TIE_VALUE * risky;
                raw.lower += TIE_VALUE * risky;
            }
        }

        let scaled = OptionValues {
            higher: raw.higher * aggressive,
            lower: raw.lower * cautious,
            bank: raw.bank * contrarian,
        };

        Evaluation { raw, scaled }
    }
}

fn pool_midpoint(wheel: &Wheel) -> f64 {
    match (wheel.remaining().get_min(), wheel.remaining().get_max()) {
        (Some(low), Some(high)) => (f64::from(low.0) + f64::from(high.0)) / 2.0,
        _ => 0.0,
    }
}
