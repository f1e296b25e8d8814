//! Bot decision making.
//!
//! - `Personality`: the four fixed coefficients of a bot
//! - `BotStrategy`: expected-value evaluation of higher, lower and bank
//!
//! ## Example
//!
//! ```
//! use wheel_game::core::Action;
//! use wheel_game::strategy::{BotStrategy, Personality};
//! use wheel_game::wheel::Face;
//!
//! let strategy = BotStrategy::new(Personality::new(0.5, 1.0, 0.5, 0.5));
//! let remaining = (1..=5).chain(7..=12).map(Face);
//!
//! let evaluation = strategy.evaluate_faces(6.0, remaining, 60.0);
//! assert_eq!(evaluation.best(), Some(Action::Bank));
//! ```

mod evaluator;
mod personality;

pub use evaluator::{BotStrategy, Evaluation, OptionValues};
pub use personality::Personality;
