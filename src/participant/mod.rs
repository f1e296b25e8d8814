//! Participants and their action sources.
//!
//! A participant is common mutable state plus an attached source of
//! actions. Humans and bots differ only in the source.

mod source;
mod state;

pub use source::ActionSource;
pub use state::Participant;
