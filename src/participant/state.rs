//! Per-participant game state.
//!
//! A `Participant` holds the state every seat shares (score, banked flag,
//! free action, pending action) and an attached [`ActionSource`]. The same
//! type serves humans and bots; only the source differs.

use smallvec::SmallVec;

use crate::core::{Action, GameError, ParticipantId, Result};
use crate::wheel::Wheel;

use super::source::ActionSource;

/// A seat at the wheel.
#[derive(Clone, Debug)]
pub struct Participant {
    id: ParticipantId,
    name: String,
    source: ActionSource,

    /// Points earned this round (or this game, with cumulative scoring).
    score: u32,

    /// The once-per-round free action is still unused.
    has_free_action: bool,

    /// Opted out of the rest of the round.
    is_banked: bool,

    /// Last action taken this round.
    pending_action: Option<Action>,
}

impl Participant {
    /// Create a participant in its start-of-round state.
    pub fn new(id: ParticipantId, name: impl Into<String>, source: ActionSource) -> Self {
        Self {
            id,
            name: name.into(),
            source,
            score: 0,
            has_free_action: true,
            is_banked: false,
            pending_action: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> ParticipantId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn source(&self) -> &ActionSource {
        &self.source
    }

    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.source.is_bot()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn has_free_action(&self) -> bool {
        self.has_free_action
    }

    #[must_use]
    pub fn is_banked(&self) -> bool {
        self.is_banked
    }

    #[must_use]
    pub fn pending_action(&self) -> Option<Action> {
        self.pending_action
    }

    /// Restore start-of-round state. The score is kept only when
    /// `keep_score` is set.
    pub fn reset_for_round(&mut self, keep_score: bool) {
        if !keep_score {
            self.score = 0;
        }
        self.has_free_action = true;
        self.is_banked = false;
        self.pending_action = None;
    }

    /// Record the action being resolved.
    pub fn set_pending(&mut self, action: Action) {
        self.pending_action = Some(action);
    }

    /// Add points to the score.
    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Credit a bank payout and leave the round.
    pub fn bank(&mut self, payout: u32) {
        self.add_points(payout);
        self.is_banked = true;
    }

    /// Spend the free action.
    pub fn use_free_action(&mut self) -> Result<()> {
        if !self.has_free_action {
            return Err(GameError::ActionUnavailable {
                action: Action::FreeSpin,
                reason: "the free spin was already used this round",
            });
        }
        self.has_free_action = false;
        Ok(())
    }

    /// Check that `action` can be taken right now against `wheel`.
    ///
    /// Fails without touching any state, so the caller can ask again.
    pub fn check_available(&self, action: Action, wheel: &Wheel) -> Result<()> {
        let reason = if self.is_banked {
            Some("already banked this round")
        } else {
            match action {
                Action::Bank if wheel.current_face().is_none() => Some("no face has been drawn yet"),
                Action::FreeSpin if !self.has_free_action => {
                    Some("the free spin was already used this round")
                }
                Action::Higher | Action::Lower if wheel.is_exhausted() => Some("the wheel is empty"),
                _ => None,
            }
        };

        match reason {
            Some(reason) => Err(GameError::ActionUnavailable { action, reason }),
            None => Ok(()),
        }
    }

    /// Actions that [`Participant::check_available`] would accept.
    #[must_use]
    pub fn available_actions(&self, wheel: &Wheel) -> SmallVec<[Action; 4]> {
        Action::ALL
            .into_iter()
            .filter(|&action| self.check_available(action, wheel).is_ok())
            .collect()
    }
}
