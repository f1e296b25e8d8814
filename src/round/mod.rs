//! Round orchestration.
//!
//! - `RoundController`: the per-round state machine over spin cycles
//! - `ActionResolver`: applies one participant's action to the wheel

mod controller;
mod resolver;

pub use controller::{RoundController, RoundPhase, RoundSummary};
pub use resolver::{ActionResolver, Outcome, ResolverContext};
