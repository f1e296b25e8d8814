//! Observers receive game events as they happen.
//!
//! Observers are purely observational: they cannot change game state and
//! their failures never stop the game.

use std::io::Write;

use tracing::warn;

use super::event::GameEvent;

/// Receiver of game events.
pub trait Observer {
    /// Called after each meaningful state change.
    fn on_event(&mut self, event: &GameEvent);
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn on_event(&mut self, event: &GameEvent) {
        (**self).on_event(event);
    }
}

impl<O: Observer + ?Sized> Observer for Box<O> {
    fn on_event(&mut self, event: &GameEvent) {
        (**self).on_event(event);
    }
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Observer that keeps every event in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<GameEvent>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count events matching a predicate.
    pub fn count(&self, predicate: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }
}

impl Observer for RecordingObserver {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

/// Observer that narrates the game as plain text.
pub struct ConsoleObserver<W: Write> {
    out: W,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the observer and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_event(&mut self, event: &GameEvent) -> std::io::Result<()> {
        match event {
            GameEvent::RoundStarted { round } => {
                writeln!(self.out, "\n--- ROUND {round} ---\n")
            }
            GameEvent::SpinStarted { spin, .. } => {
                writeln!(self.out, "\n--- SPIN {spin} ---\n")
            }
            GameEvent::InvalidInput { reason, .. } => {
                writeln!(self.out, "Invalid guess: {reason}")
            }
            GameEvent::GuessResolved {
                name,
                action,
                face,
                correct,
                points,
                ..
            } => {
                if *correct {
                    writeln!(
                        self.out,
                        "{name} guessed {action}, drew {face}, and wins {points} points!"
                    )
                } else {
                    writeln!(self.out, "{name} guessed {action}, drew {face}, and guessed incorrectly.")
                }
            }
            GameEvent::UnscoredDraw { face, reason } => {
                writeln!(self.out, "The wheel turns to {face} ({reason}).")
            }
            GameEvent::Banked { name, payout, .. } => {
                writeln!(self.out, "{name} banks {payout} points.")
            }
            GameEvent::FreeSpinUsed { name, .. } => {
                writeln!(self.out, "{name} uses their free spin.")
            }
            GameEvent::Passed { name, .. } => {
                writeln!(self.out, "{name} passes.")
            }
            GameEvent::RoundCompleted { standings, .. } => {
                writeln!(self.out, "\n--- ROUND OVER ---\n")?;
                for standing in standings {
                    writeln!(self.out, "{}: {} points", standing.name, standing.score)?;
                }
                Ok(())
            }
            GameEvent::GameWon { name, score, .. } => {
                writeln!(self.out, "{name} wins with {score} points!")
            }
            GameEvent::GameAbandoned { rounds } => {
                writeln!(self.out, "No winner after {rounds} rounds.")
            }
        }
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn on_event(&mut self, event: &GameEvent) {
        if let Err(e) = self.write_event(event).and_then(|()| self.out.flush()) {
            warn!(error = %e, "failed to write game narration");
        }
    }
}
