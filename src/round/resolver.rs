//! Action resolution - applying a chosen action to the wheel and a participant.
//!
//! The resolver checks availability before touching anything, so a rejected
//! action leaves both the wheel and the participant exactly as they were.

use crate::core::{Action, GameRng, Result};
use crate::participant::Participant;
use crate::wheel::{Face, Wheel};

/// Shared state an action is resolved against.
pub struct ResolverContext<'a> {
    pub wheel: &'a mut Wheel,
    pub rng: &'a mut GameRng,
    /// Faces strictly above this are high.
    pub high_boundary: u8,
}

impl<'a> ResolverContext<'a> {
    pub fn new(wheel: &'a mut Wheel, rng: &'a mut GameRng, high_boundary: u8) -> Self {
        Self {
            wheel,
            rng,
            high_boundary,
        }
    }
}

/// What resolving an action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A high/low guess was checked against a fresh draw.
    Guess {
        action: Action,
        face: Face,
        correct: bool,
        points: u32,
        /// Unscored face drawn after a correct guess.
        bonus: Option<Face>,
    },
    /// The participant banked and left the round.
    Banked {
        payout: u32,
        /// Unscored face drawn after banking.
        follow_up: Option<Face>,
    },
    /// The free spin was spent. Nothing was drawn.
    FreeSpin,
}

impl Outcome {
    /// Faces this outcome took off the wheel.
    #[must_use]
    pub fn faces_drawn(&self) -> usize {
        match self {
            Outcome::Guess { bonus, .. } => 1 + usize::from(bonus.is_some()),
            Outcome::Banked { follow_up, .. } => usize::from(follow_up.is_some()),
            Outcome::FreeSpin => 0,
        }
    }
}

/// Applies actions to game state.
pub struct ActionResolver;

impl ActionResolver {
    /// Resolve `action` for `participant`.
    ///
    /// - Higher/Lower: draw; a correct call scores the drawn face and is
    ///   followed by one unscored bonus draw.
    /// - Bank: score the payout, leave the round, then one unscored draw.
    /// - FreeSpin: spend the free action; no draw.
    ///
    /// Follow-up draws are skipped when the wheel is already empty.
    pub fn resolve(
        ctx: &mut ResolverContext<'_>,
        participant: &mut Participant,
        action: Action,
    ) -> Result<Outcome> {
        participant.check_available(action, ctx.wheel)?;
        participant.set_pending(action);

        match action {
            Action::Higher | Action::Lower => {
                let face = ctx.wheel.draw(ctx.rng)?;
                let correct = match action {
                    Action::Higher => face.is_high(ctx.high_boundary),
                    _ => !face.is_high(ctx.high_boundary),
                };

                if !correct {
                    return Ok(Outcome::Guess {
                        action,
                        face,
                        correct,
                        points: 0,
                        bonus: None,
                    });
                }

                participant.add_points(face.value());
                let bonus = ctx.wheel.draw_if_available(ctx.rng)?;
                Ok(Outcome::Guess {
                    action,
                    face,
                    correct,
                    points: face.value(),
                    bonus,
                })
            }
            Action::Bank => {
                let payout = ctx.wheel.payout()?;
                participant.bank(payout);
                let follow_up = ctx.wheel.draw_if_available(ctx.rng)?;
                Ok(Outcome::Banked { payout, follow_up })
            }
            Action::FreeSpin => {
                participant.use_free_action()?;
                Ok(Outcome::FreeSpin)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GameError, ParticipantId};
    use crate::participant::ActionSource;

    fn human() -> Participant {
        Participant::new(ParticipantId::new(0), "Ada", ActionSource::Human)
    }

    fn wheel_of(values: &[u8]) -> Wheel {
        Wheel::from_faces(values.iter().copied().map(Face), 10)
    }

    #[test]
    fn test_correct_guess_scores_and_draws_bonus() {
        let mut rng = GameRng::new(42);
        let mut wheel = wheel_of(&[9, 11]);
        let mut p = human();

        let outcome = {
            let mut ctx = ResolverContext::new(&mut wheel, &mut rng, 6);
            ActionResolver::resolve(&mut ctx, &mut p, Action::Higher).unwrap()
        };

        let Outcome::Guess { face, correct, points, bonus, .. } = outcome else {
            panic!("expected a guess outcome, got {outcome:?}");
        };
        assert!(correct);
        assert_eq!(points, face.value());
        assert_eq!(p.score(), face.value());
        assert!(bonus.is_some());
        assert_ne!(bonus, Some(face));
        assert!(wheel.is_exhausted());
        assert_eq!(p.pending_action(), Some(Action::Higher));
    }

    #[test]
    fn test_incorrect_guess_has_no_bonus() {
        let mut rng = GameRng::new(42);
        let mut wheel = wheel_of(&[2, 3, 4]);
        let mut p = human();

        let mut ctx = ResolverContext::new(&mut wheel, &mut rng, 6);
        let outcome = ActionResolver::resolve(&mut ctx, &mut p, Action::Higher).unwrap();

        assert!(matches!(outcome, Outcome::Guess { correct: false, points: 0, bonus: None, .. }));
        assert_eq!(outcome.faces_drawn(), 1);
        assert_eq!(p.score(), 0);
        assert_eq!(wheel.remaining_count(), 2);
    }

    #[test]
    fn test_lower_guess() {
        let mut rng = GameRng::new(7);
        let mut wheel = wheel_of(&[6]);
        let mut p = human();

        let mut ctx = ResolverContext::new(&mut wheel, &mut rng, 6);
        let outcome = ActionResolver::resolve(&mut ctx, &mut p, Action::Lower).unwrap();

        // 6 is low; the wheel is empty so there is no bonus
        assert_eq!(
            outcome,
            Outcome::Guess {
                action: Action::Lower,
                face: Face(6),
                correct: true,
                points: 6,
                bonus: None,
            }
        );
    }

    #[test]
    fn test_bank_pays_and_draws_follow_up() {
        let mut rng = GameRng::new(1);
        let mut wheel = wheel_of(&[10, 3]);
        let mut p = human();

        let first = wheel.draw(&mut rng).unwrap();
        let mut ctx = ResolverContext::new(&mut wheel, &mut rng, 6);
        let outcome = ActionResolver::resolve(&mut ctx, &mut p, Action::Bank).unwrap();

        let Outcome::Banked { payout, follow_up } = outcome else {
            panic!("expected a bank outcome, got {outcome:?}");
        };
        assert_eq!(payout, first.value() * 10);
        assert_eq!(p.score(), payout);
        assert!(p.is_banked());
        assert!(follow_up.is_some());
        assert!(wheel.is_exhausted());
    }

    #[test]
    fn test_free_spin_draws_nothing() {
        let mut rng = GameRng::new(1);
        let mut wheel = Wheel::new(&GameConfig::default());
        let mut p = human();

        let mut ctx = ResolverContext::new(&mut wheel, &mut rng, 6);
        let outcome = ActionResolver::resolve(&mut ctx, &mut p, Action::FreeSpin).unwrap();
        assert_eq!(outcome, Outcome::FreeSpin);

        let again = ActionResolver::resolve(&mut ctx, &mut p, Action::FreeSpin);
        assert!(matches!(again, Err(GameError::ActionUnavailable { .. })));

        assert_eq!(wheel.remaining_count(), 12);
        assert_eq!(p.score(), 0);
        assert!(!p.has_free_action());
    }

    #[test]
    fn test_rejected_action_leaves_state_untouched() {
        let mut rng = GameRng::new(1);
        let mut wheel = Wheel::new(&GameConfig::default());
        let mut p = human();

        // Bank before the first draw
        let mut ctx = ResolverContext::new(&mut wheel, &mut rng, 6);
        let result = ActionResolver::resolve(&mut ctx, &mut p, Action::Bank);

        assert!(matches!(result, Err(GameError::ActionUnavailable { action: Action::Bank, .. })));
        assert_eq!(p.pending_action(), None);
        assert!(!p.is_banked());
        assert_eq!(wheel.remaining_count(), 12);
    }
}
