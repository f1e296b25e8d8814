//! Event notifications for display and testing.
//!
//! Controllers emit a [`GameEvent`] after each meaningful state change and
//! hand it to an [`Observer`]. Observers never influence the game.

mod event;
mod observer;

pub use event::{DrawReason, GameEvent, Standing};
pub use observer::{ConsoleObserver, NullObserver, Observer, RecordingObserver};
