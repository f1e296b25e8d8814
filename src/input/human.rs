//! Human input collaborator.
//!
//! The engine asks a [`HumanInput`] for raw text; parsing and legality
//! checks happen in the round controller so that every implementation gets
//! the same re-prompt behaviour.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::core::{Action, GameError, Result};
use crate::participant::Participant;
use crate::wheel::Wheel;

/// Source of decisions for human-controlled participants.
pub trait HumanInput {
    /// Ask `participant` for an action symbol. Returns the raw line.
    fn request_action(&mut self, participant: &Participant, wheel: &Wheel) -> Result<String>;

    /// Ask for the name of the human in 1-based `seat`.
    fn request_name(&mut self, seat: usize) -> Result<String>;
}

/// Build the action prompt for a participant.
///
/// The free spin is offered only while it is unused.
#[must_use]
pub fn action_prompt(participant: &Participant, wheel: &Wheel) -> String {
    let face = wheel
        .current_face()
        .map_or_else(|| "none yet".to_string(), |face| face.to_string());
    let options = if participant.has_free_action() {
        "Enter 'H' for higher, 'L' for lower, 'B' to bank, or 'F' to use your free spin: "
    } else {
        "Enter 'H' for higher, 'L' for lower, or 'B' to bank: "
    };

    format!(
        "{} (score {}, current face {}, {} left). {}",
        participant.name(),
        participant.score(),
        face,
        wheel.remaining_count(),
        options
    )
}

/// Line-based input over any reader/writer pair (stdin/stdout in the binary).
pub struct ConsoleInput<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;

        // Raw bytes: a garbled line must reach the parser, not fail the read
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(GameError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> HumanInput for ConsoleInput<R, W> {
    fn request_action(&mut self, participant: &Participant, wheel: &Wheel) -> Result<String> {
        let text = action_prompt(participant, wheel);
        self.prompt(&text)
    }

    fn request_name(&mut self, seat: usize) -> Result<String> {
        let name = self.prompt(&format!("Enter name for player {seat}: "))?;
        let name = name.trim();
        if name.is_empty() {
            return Ok(format!("Player {seat}"));
        }
        Ok(name.to_string())
    }
}

/// Pre-scripted input for tests and demos.
///
/// Answers come from queues; an empty queue behaves like a closed stream.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    actions: VecDeque<String>,
    names: VecDeque<String>,
    /// Number of action requests served.
    pub requests: usize,
}

impl ScriptedInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue raw action lines.
    #[must_use]
    pub fn with_lines<S: Into<String>>(mut self, lines: impl IntoIterator<Item = S>) -> Self {
        self.actions.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Queue well-formed actions.
    #[must_use]
    pub fn with_actions(self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.with_lines(actions.into_iter().map(|a| a.symbol().to_string()))
    }

    /// Queue names for setup.
    #[must_use]
    pub fn with_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Action lines not yet consumed.
    #[must_use]
    pub fn remaining_lines(&self) -> usize {
        self.actions.len()
    }
}

impl HumanInput for ScriptedInput {
    fn request_action(&mut self, _participant: &Participant, _wheel: &Wheel) -> Result<String> {
        self.requests += 1;
        self.actions.pop_front().ok_or(GameError::InputClosed)
    }

    fn request_name(&mut self, _seat: usize) -> Result<String> {
        self.names.pop_front().ok_or(GameError::InputClosed)
    }
}
