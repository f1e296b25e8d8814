//! Game setup and the multi-round game loop.
//!
//! - `GameBuilder`: seats humans and bots
//! - `GameController`: resets participants, runs rounds, checks for a winner

mod builder;
mod controller;

pub use builder::GameBuilder;
pub use controller::{GameController, GameOutcome};
