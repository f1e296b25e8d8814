//! Collaborators that supply decisions for human participants.

mod human;

pub use human::{action_prompt, ConsoleInput, HumanInput, ScriptedInput};
