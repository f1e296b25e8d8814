//! Round state machine.
//!
//! A round runs spin cycles over the participants in registration order
//! until the wheel is empty:
//!
//! ```text
//! SpinInProgress --(wheel exhausted)--> RoundComplete
//! ```
//!
//! Within a cycle, banked participants are skipped and the round ends the
//! moment the last face is drawn, even if some participants have not acted
//! in that cycle yet. A cycle in which nobody draws and nobody spends a
//! free spin can never make progress, so the controller then runs the rest
//! of the wheel out with unscored draws.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Action, ActionRecord, GameConfig, GameRng, Result};
use crate::events::{DrawReason, GameEvent, Observer, Standing};
use crate::input::HumanInput;
use crate::participant::{ActionSource, Participant};
use crate::wheel::{Face, Wheel};

use super::resolver::{ActionResolver, Outcome, ResolverContext};

/// Phase of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    SpinInProgress,
    RoundComplete,
}

/// What happened in a completed round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Round number (1-based).
    pub round: u32,

    /// Spin cycles run.
    pub spin_cycles: u32,

    /// Every face drawn, in order.
    pub draws: Vec<Face>,

    /// Every turn taken, in order.
    pub records: Vec<ActionRecord>,

    /// Scores at round end, in registration order.
    pub standings: Vec<Standing>,
}

/// Drives one round from a fresh wheel to exhaustion.
pub struct RoundController<'a> {
    round: u32,
    config: &'a GameConfig,
    wheel: Wheel,
    phase: RoundPhase,
    spin_cycles: u32,
    records: Vec<ActionRecord>,
}

impl<'a> RoundController<'a> {
    /// Start round `round` with a fresh wheel.
    #[must_use]
    pub fn new(round: u32, config: &'a GameConfig) -> Self {
        Self::with_wheel(round, config, Wheel::new(config))
    }

    /// Start a round on a prepared wheel.
    #[must_use]
    pub fn with_wheel(round: u32, config: &'a GameConfig, wheel: Wheel) -> Self {
        let phase = if wheel.is_exhausted() {
            RoundPhase::RoundComplete
        } else {
            RoundPhase::SpinInProgress
        };
        Self {
            round,
            config,
            wheel,
            phase,
            spin_cycles: 0,
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    /// Run spin cycles until the wheel is exhausted.
    pub fn run<I, O>(
        mut self,
        participants: &mut [Participant],
        rng: &mut GameRng,
        input: &mut I,
        observer: &mut O,
    ) -> Result<RoundSummary>
    where
        I: HumanInput + ?Sized,
        O: Observer + ?Sized,
    {
        while self.phase == RoundPhase::SpinInProgress {
            let progressed = self.run_spin_cycle(participants, rng, input, observer)?;
            if !progressed && !self.wheel.is_exhausted() {
                self.run_out(rng, observer)?;
            }
        }

        let standings: Vec<Standing> = participants
            .iter()
            .map(|p| Standing {
                participant: p.id(),
                name: p.name().to_string(),
                score: p.score(),
            })
            .collect();

        info!(
            round = self.round,
            spin_cycles = self.spin_cycles,
            "round complete"
        );
        observer.on_event(&GameEvent::RoundCompleted {
            round: self.round,
            standings: standings.clone(),
        });

        Ok(RoundSummary {
            round: self.round,
            spin_cycles: self.spin_cycles,
            draws: self.wheel.history().to_vec(),
            records: self.records,
            standings,
        })
    }

    /// Give every active participant one turn.
    ///
    /// Returns whether the cycle changed anything: a face was drawn or a
    /// free spin was spent.
    pub fn run_spin_cycle<I, O>(
        &mut self,
        participants: &mut [Participant],
        rng: &mut GameRng,
        input: &mut I,
        observer: &mut O,
    ) -> Result<bool>
    where
        I: HumanInput + ?Sized,
        O: Observer + ?Sized,
    {
        if self.phase == RoundPhase::RoundComplete {
            return Ok(false);
        }

        self.spin_cycles += 1;
        let spin = self.wheel.spin_number();
        debug!(round = self.round, spin, "spin cycle started");
        observer.on_event(&GameEvent::SpinStarted {
            round: self.round,
            spin,
        });

        let mut progressed = false;
        for participant in participants.iter_mut() {
            if self.wheel.is_exhausted() {
                break;
            }
            if participant.is_banked() {
                continue;
            }

            let action = self.obtain_action(participant, input, observer)?;
            self.records.push(ActionRecord::new(
                participant.id(),
                action,
                self.round,
                self.spin_cycles,
            ));

            let Some(action) = action else {
                debug!(participant = participant.name(), "bot passed");
                observer.on_event(&GameEvent::Passed {
                    participant: participant.id(),
                    name: participant.name().to_string(),
                });
                continue;
            };

            let outcome = {
                let mut ctx = ResolverContext::new(&mut self.wheel, rng, self.config.high_boundary());
                ActionResolver::resolve(&mut ctx, participant, action)?
            };
            progressed |= outcome.faces_drawn() > 0 || outcome == Outcome::FreeSpin;
            Self::report(participant, outcome, observer);
        }

        if self.wheel.is_exhausted() {
            self.phase = RoundPhase::RoundComplete;
        }
        Ok(progressed)
    }

    /// Ask a participant's source for an action.
    ///
    /// Humans are asked again until they give a usable symbol; nothing is
    /// mutated in between. Bots answer from their strategy and may pass.
    fn obtain_action<I, O>(
        &self,
        participant: &Participant,
        input: &mut I,
        observer: &mut O,
    ) -> Result<Option<Action>>
    where
        I: HumanInput + ?Sized,
        O: Observer + ?Sized,
    {
        match participant.source() {
            ActionSource::Bot(strategy) => {
                let action = strategy.decide(&self.wheel, participant.is_banked());
                debug!(participant = participant.name(), ?action, "bot decided");
                Ok(action)
            }
            ActionSource::Human => loop {
                let line = input.request_action(participant, &self.wheel)?;
                let parsed = line.parse::<Action>().and_then(|action| {
                    participant.check_available(action, &self.wheel)?;
                    Ok(action)
                });

                match parsed {
                    Ok(action) => {
                        debug!(participant = participant.name(), ?action, "human chose");
                        return Ok(Some(action));
                    }
                    Err(e) if e.is_recoverable_input() => {
                        debug!(participant = participant.name(), input = %line, error = %e, "re-prompting");
                        observer.on_event(&GameEvent::InvalidInput {
                            participant: participant.id(),
                            input: line,
                            reason: e.to_string(),
                        });
                    }
                    Err(e) => return Err(e),
                }
            },
        }
    }

    /// Draw every remaining face without scoring it.
    fn run_out<O: Observer + ?Sized>(&mut self, rng: &mut GameRng, observer: &mut O) -> Result<()> {
        debug!(
            round = self.round,
            remaining = self.wheel.remaining_count(),
            "no progress possible, running the wheel out"
        );
        while let Some(face) = self.wheel.draw_if_available(rng)? {
            observer.on_event(&GameEvent::UnscoredDraw {
                face,
                reason: DrawReason::RunOut,
            });
        }
        self.phase = RoundPhase::RoundComplete;
        Ok(())
    }

    fn report<O: Observer + ?Sized>(participant: &Participant, outcome: Outcome, observer: &mut O) {
        let id = participant.id();
        let name = participant.name().to_string();

        match outcome {
            Outcome::Guess {
                action,
                face,
                correct,
                points,
                bonus,
            } => {
                debug!(participant = %name, %face, correct, "guess resolved");
                observer.on_event(&GameEvent::GuessResolved {
                    participant: id,
                    name,
                    action,
                    face,
                    correct,
                    points,
                });
                if let Some(face) = bonus {
                    observer.on_event(&GameEvent::UnscoredDraw {
                        face,
                        reason: DrawReason::Bonus,
                    });
                }
            }
            Outcome::Banked { payout, follow_up } => {
                debug!(participant = %name, payout, "banked");
                observer.on_event(&GameEvent::Banked {
                    participant: id,
                    name,
                    payout,
                });
                if let Some(face) = follow_up {
                    observer.on_event(&GameEvent::UnscoredDraw {
                        face,
                        reason: DrawReason::AfterBank,
                    });
                }
            }
            Outcome::FreeSpin => {
                debug!(participant = %name, "free spin used");
                observer.on_event(&GameEvent::FreeSpinUsed { participant: id, name });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ParticipantId;
    use crate::events::RecordingObserver;
    use crate::input::ScriptedInput;
    use crate::strategy::Personality;

    fn human(id: u8, name: &str) -> Participant {
        Participant::new(ParticipantId::new(id), name, ActionSource::Human)
    }

    fn bot(id: u8) -> Participant {
        Participant::new(
            ParticipantId::new(id),
            format!("Bot {}", id + 1),
            ActionSource::bot(Personality::new(0.75, 0.75, 0.75, 0.75)),
        )
    }

    #[test]
    fn test_round_draws_every_face_once() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(42);
        let mut participants: Vec<_> = (0..8).map(bot).collect();

        let summary = RoundController::new(1, &config)
            .run(&mut participants, &mut rng, &mut ScriptedInput::new(), &mut RecordingObserver::new())
            .unwrap();

        let mut draws: Vec<u8> = summary.draws.iter().map(|f| f.0).collect();
        draws.sort_unstable();
        assert_eq!(draws, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_invalid_input_is_reprompted_without_mutation() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(42);
        let mut participants = vec![human(0, "Ada")];
        // "Q" is unknown, "B" is unavailable before any draw, then a free spin
        let mut input = ScriptedInput::new().with_lines(["Q", "B", "F"]);
        let mut observer = RecordingObserver::new();

        let mut round = RoundController::new(1, &config);
        let progressed = round
            .run_spin_cycle(&mut participants, &mut rng, &mut input, &mut observer)
            .unwrap();

        assert!(progressed);
        assert_eq!(input.requests, 3);
        assert_eq!(
            observer.count(|e| matches!(e, GameEvent::InvalidInput { .. })),
            2
        );
        assert!(!participants[0].has_free_action());
        assert!(!participants[0].is_banked());
        assert_eq!(round.wheel().remaining_count(), 12);
    }

    #[test]
    fn test_round_ends_mid_cycle() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(5);
        let wheel = Wheel::from_faces([Face(2)], 10);
        let mut participants = vec![human(0, "Ada"), human(1, "Grace")];
        let mut input = ScriptedInput::new().with_actions([Action::Higher, Action::Higher]);

        let summary = RoundController::with_wheel(1, &config, wheel)
            .run(&mut participants, &mut rng, &mut input, &mut RecordingObserver::new())
            .unwrap();

        // Only Ada acted; the last face went on her turn
        assert_eq!(input.requests, 1);
        assert_eq!(summary.records.len(), 1);
        assert_eq!(summary.spin_cycles, 1);
    }

    #[test]
    fn test_all_banked_runs_wheel_out() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(9);
        let mut participants = vec![human(0, "Ada")];
        let mut input = ScriptedInput::new().with_actions([Action::Lower, Action::Bank, Action::Bank]);
        let mut observer = RecordingObserver::new();

        let summary = RoundController::new(1, &config)
            .run(&mut participants, &mut rng, &mut input, &mut observer)
            .unwrap();

        assert!(participants[0].is_banked());
        assert_eq!(summary.draws.len(), 12);
        assert!(observer.count(|e| matches!(e, GameEvent::UnscoredDraw { reason: DrawReason::RunOut, .. })) > 0);
    }

    #[test]
    fn test_exhausted_wheel_is_complete() {
        let config = GameConfig::default();
        let round = RoundController::with_wheel(1, &config, Wheel::from_faces(Vec::new(), 10));
        assert_eq!(round.phase(), RoundPhase::RoundComplete);
    }
}
