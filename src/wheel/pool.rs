//! The shared wheel: undrawn faces, the current face and the draw history.
//!
//! A `Wheel` lives for exactly one round. Every participant of the round
//! reads and draws from the same instance, so a draw made on one
//! participant's turn is visible to all of them.
//!
//! ## Usage
//!
//! ```
//! use wheel_game::core::{GameConfig, GameRng};
//! use wheel_game::wheel::Wheel;
//!
//! let mut rng = GameRng::new(7);
//! let mut wheel = Wheel::new(&GameConfig::default());
//!
//! let face = wheel.draw(&mut rng).unwrap();
//! assert_eq!(wheel.current_face(), Some(face));
//! assert_eq!(wheel.remaining_count(), 11);
//! assert_eq!(wheel.payout().unwrap(), face.value() * 10);
//! ```

use im::OrdSet;
use smallvec::SmallVec;

use crate::core::{Action, GameConfig, GameError, GameRng, Result};

use super::face::Face;

/// History storage; the standard wheel never exceeds 12 draws.
pub type DrawHistory = SmallVec<[Face; 12]>;

/// Pool of undrawn faces plus the current and past draws of one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wheel {
    /// Faces not yet drawn this round.
    remaining: OrdSet<Face>,

    /// Most recently drawn face. Never a member of `remaining`.
    current: Option<Face>,

    /// Every face drawn this round, in draw order.
    history: DrawHistory,

    /// Faces the wheel started with.
    initial_count: usize,

    payout_multiplier: u32,
}

impl Wheel {
    /// Create a full wheel with faces 1..=`face_count`.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::from_faces((1..=config.face_count).map(Face), config.payout_multiplier)
    }

    /// Create a wheel holding an arbitrary set of faces.
    ///
    /// Duplicates collapse, since faces are unique on a wheel.
    #[must_use]
    pub fn from_faces(faces: impl IntoIterator<Item = Face>, payout_multiplier: u32) -> Self {
        let remaining: OrdSet<Face> = faces.into_iter().collect();
        Self {
            initial_count: remaining.len(),
            remaining,
            current: None,
            history: DrawHistory::new(),
            payout_multiplier,
        }
    }

    /// Draw a face uniformly at random from the pool.
    ///
    /// Removes it from the pool, makes it the current face and appends it
    /// to the history. Fails with [`GameError::EmptyPool`] when nothing is
    /// left; callers are expected to check [`Wheel::is_exhausted`] first.
    pub fn draw(&mut self, rng: &mut GameRng) -> Result<Face> {
        let faces: SmallVec<[Face; 12]> = self.remaining.iter().copied().collect();
        let face = *rng.choose(&faces).ok_or(GameError::EmptyPool)?;

        self.remaining.remove(&face);
        self.current = Some(face);
        self.history.push(face);

        Ok(face)
    }

    /// Draw only if the pool still has faces.
    pub fn draw_if_available(&mut self, rng: &mut GameRng) -> Result<Option<Face>> {
        if self.is_exhausted() {
            return Ok(None);
        }
        self.draw(rng).map(Some)
    }

    /// Points paid for banking now: current face × payout multiplier.
    pub fn payout(&self) -> Result<u32> {
        self.current
            .map(|face| face.value().saturating_mul(self.payout_multiplier))
            .ok_or(GameError::NoDraw)
    }

    /// Whether `symbol` names one of the four actions (H, L, B, F).
    ///
    /// A thin wrapper over [`Action::from_symbol`], which is what line
    /// parsing in the round controller goes through. Availability for a
    /// particular participant is checked separately by
    /// [`Participant::check_available`](crate::participant::Participant::check_available).
    #[must_use]
    pub fn is_legal_action(symbol: char) -> bool {
        Action::from_symbol(symbol).is_some()
    }

    /// Whether every face has been drawn.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Number of faces still in the pool.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Faces still in the pool, in ascending order.
    #[must_use]
    pub fn remaining(&self) -> &OrdSet<Face> {
        &self.remaining
    }

    /// Whether `face` is still in the pool.
    #[must_use]
    pub fn contains(&self, face: Face) -> bool {
        self.remaining.contains(&face)
    }

    /// The most recently drawn face, if any.
    #[must_use]
    pub fn current_face(&self) -> Option<Face> {
        self.current
    }

    /// Faces drawn this round, in order.
    #[must_use]
    pub fn history(&self) -> &[Face] {
        &self.history
    }

    /// Label for the next spin: one more than the number of faces drawn.
    ///
    /// On a 12-face wheel this is `13 - remaining`.
    #[must_use]
    pub fn spin_number(&self) -> u32 {
        (self.initial_count - self.remaining.len() + 1) as u32
    }

    /// Payout multiplier applied when banking.
    #[must_use]
    pub fn payout_multiplier(&self) -> u32 {
        self.payout_multiplier
    }
}
