//! The wheel of numbered faces shared by every participant in a round.
//!
//! - `Face`: a numbered face and its high/low classification
//! - `Wheel`: the undrawn pool, current face and draw history

mod face;
mod pool;

pub use face::Face;
pub use pool::{DrawHistory, Wheel};
