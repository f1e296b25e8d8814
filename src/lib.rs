//! # wheel-game
//!
//! A turn-based high/low wheel game for human and bot participants.
//!
//! ## Rules
//!
//! A wheel holds the faces 1-12. Each round, participants take turns in
//! registration order. On a turn a participant may:
//!
//! - **Higher / Lower**: call whether the next face drawn is high (7-12) or
//!   low (1-6). A correct call scores the drawn face and triggers one
//!   unscored bonus draw.
//! - **Bank**: score the current face × 10, draw one more face, and sit out
//!   the rest of the round.
//! - **Free spin**: pass once per round without drawing.
//!
//! The round ends the moment the last face is drawn. Anyone at or above 100
//! points at round end wins (first in registration order on ties);
//! otherwise scores reset and a new round starts.
//!
//! ## Modules
//!
//! - `core`: participant IDs, actions, errors, RNG, configuration
//! - `wheel`: the shared pool of faces
//! - `participant`: per-seat state and action sources
//! - `strategy`: expected-value bot decisions
//! - `round`: the per-round state machine and action resolution
//! - `game`: table setup and the multi-round loop
//! - `events`: notifications for display and tests
//! - `input`: the human input collaborator
//!
//! ## Example
//!
//! ```
//! use wheel_game::{GameBuilder, GameConfig, GameRng, NullObserver, ScriptedInput};
//!
//! let config = GameConfig::default().with_max_rounds(5);
//! let mut game = GameBuilder::new()
//!     .config(config)
//!     .build(GameRng::new(42), ScriptedInput::new(), NullObserver)
//!     .unwrap();
//!
//! let outcome = game.play().unwrap();
//! assert!(game.rounds_played() <= 5);
//! # let _ = outcome;
//! ```

pub mod core;
pub mod events;
pub mod game;
pub mod input;
pub mod participant;
pub mod round;
pub mod strategy;
pub mod wheel;

// Re-export commonly used types
pub use crate::core::{Action, ActionRecord, GameConfig, GameError, GameRng, ParticipantId, Result};

pub use crate::wheel::{Face, Wheel};

pub use crate::participant::{ActionSource, Participant};

pub use crate::strategy::{BotStrategy, Evaluation, OptionValues, Personality};

pub use crate::round::{ActionResolver, Outcome, ResolverContext, RoundController, RoundPhase, RoundSummary};

pub use crate::game::{GameBuilder, GameController, GameOutcome};

pub use crate::events::{
    ConsoleObserver, DrawReason, GameEvent, NullObserver, Observer, RecordingObserver, Standing,
};

pub use crate::input::{ConsoleInput, HumanInput, ScriptedInput};
