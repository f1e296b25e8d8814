//! Core engine types: participant IDs, actions, errors, RNG, configuration.
//!
//! Everything here is shared by the wheel, the participants and the
//! controllers; none of it knows about turn order.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use config::GameConfig;
pub use error::{GameError, Result};
pub use player::ParticipantId;
pub use rng::GameRng;
