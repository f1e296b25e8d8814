//! Game event types.
//!
//! Events are emitted by the controllers after each meaningful state change.
//! They carry enough context to narrate the game without reading controller
//! internals.

use serde::{Deserialize, Serialize};

use crate::core::{Action, ParticipantId};
use crate::wheel::Face;

/// Final standing of one participant at round end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub participant: ParticipantId,
    pub name: String,
    pub score: u32,
}

/// Something that happened during the game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh wheel was created and every participant reset.
    RoundStarted { round: u32 },

    /// A new spin cycle began. `spin` is the wheel's spin label.
    SpinStarted { round: u32, spin: u32 },

    /// A human entered something that was not a usable action.
    InvalidInput {
        participant: ParticipantId,
        input: String,
        reason: String,
    },

    /// A participant guessed and a face was drawn.
    GuessResolved {
        participant: ParticipantId,
        name: String,
        action: Action,
        face: Face,
        correct: bool,
        points: u32,
    },

    /// A face was drawn without being scored (bonus, bank follow-up or run-out).
    UnscoredDraw { face: Face, reason: DrawReason },

    /// A participant banked the current face's payout.
    Banked {
        participant: ParticipantId,
        name: String,
        payout: u32,
    },

    /// A participant spent their free spin.
    FreeSpinUsed { participant: ParticipantId, name: String },

    /// A bot found no option worth taking.
    Passed { participant: ParticipantId, name: String },

    /// The wheel ran out of faces.
    RoundCompleted { round: u32, standings: Vec<Standing> },

    /// A participant reached the win threshold.
    GameWon {
        participant: ParticipantId,
        name: String,
        score: u32,
        round: u32,
    },

    /// The round limit was reached without a winner.
    GameAbandoned { rounds: u32 },
}

/// Why a face was drawn without scoring it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawReason {
    /// Follow-up to a correct guess.
    Bonus,
    /// Follow-up to a bank.
    AfterBank,
    /// A whole spin cycle passed without a draw.
    RunOut,
}

impl std::fmt::Display for DrawReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DrawReason::Bonus => "bonus draw",
            DrawReason::AfterBank => "draw after bank",
            DrawReason::RunOut => "run-out draw",
        };
        f.write_str(label)
    }
}
