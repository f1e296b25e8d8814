//! Game controller: successive rounds until someone reaches the threshold.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{GameConfig, GameError, GameRng, ParticipantId, Result};
use crate::events::{GameEvent, Observer};
use crate::input::HumanInput;
use crate::participant::Participant;
use crate::round::{RoundController, RoundSummary};

/// How a game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// A participant met the win threshold at the end of `round`.
    Winner {
        participant: ParticipantId,
        name: String,
        score: u32,
        round: u32,
    },
    /// The round limit was reached first.
    NoWinner { rounds: u32 },
}

impl GameOutcome {
    /// The winner's ID, if any.
    #[must_use]
    pub fn winner(&self) -> Option<ParticipantId> {
        match self {
            GameOutcome::Winner { participant, .. } => Some(*participant),
            GameOutcome::NoWinner { .. } => None,
        }
    }
}

/// Owns the participants and drives rounds.
pub struct GameController<I: HumanInput, O: Observer> {
    config: GameConfig,
    participants: Vec<Participant>,
    rng: GameRng,
    input: I,
    observer: O,
    rounds_played: u32,
    last_round: Option<RoundSummary>,
}

impl<I: HumanInput, O: Observer> GameController<I, O> {
    /// Create a controller over already-registered participants.
    ///
    /// Registration order is turn order and win tie-break order.
    pub fn new(
        config: GameConfig,
        participants: Vec<Participant>,
        rng: GameRng,
        input: I,
        observer: O,
    ) -> Result<Self> {
        config.validate()?;
        if participants.is_empty() {
            return Err(GameError::Config("a game needs at least one participant".to_string()));
        }
        if participants.len() > config.max_participants {
            return Err(GameError::Config(format!(
                "{} participants exceed the {} available seats",
                participants.len(),
                config.max_participants
            )));
        }

        Ok(Self {
            config,
            participants,
            rng,
            input,
            observer,
            rounds_played: 0,
            last_round: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Summary of the most recent round.
    #[must_use]
    pub fn last_round(&self) -> Option<&RoundSummary> {
        self.last_round.as_ref()
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Play rounds until a winner emerges or the round limit is hit.
    pub fn play(&mut self) -> Result<GameOutcome> {
        loop {
            if let Some(limit) = self.config.max_rounds {
                if self.rounds_played >= limit {
                    info!(rounds = self.rounds_played, "round limit reached without a winner");
                    self.observer.on_event(&GameEvent::GameAbandoned {
                        rounds: self.rounds_played,
                    });
                    return Ok(GameOutcome::NoWinner {
                        rounds: self.rounds_played,
                    });
                }
            }

            self.play_round()?;

            if let Some(winner) = self.check_winner() {
                if let GameOutcome::Winner {
                    participant,
                    name,
                    score,
                    round,
                } = &winner
                {
                    info!(winner = %name, score, round, "game won");
                    self.observer.on_event(&GameEvent::GameWon {
                        participant: *participant,
                        name: name.clone(),
                        score: *score,
                        round: *round,
                    });
                }
                return Ok(winner);
            }
        }
    }

    /// Reset every participant, then run one round on a fresh wheel.
    pub fn play_round(&mut self) -> Result<&RoundSummary> {
        self.rounds_played += 1;
        let round = self.rounds_played;

        for participant in &mut self.participants {
            participant.reset_for_round(self.config.cumulative_scores);
        }
        info!(round, participants = self.participants.len(), "round started");
        self.observer.on_event(&GameEvent::RoundStarted { round });

        let summary = RoundController::new(round, &self.config).run(
            &mut self.participants,
            &mut self.rng,
            &mut self.input,
            &mut self.observer,
        )?;

        let summary = self.last_round.insert(summary);
        Ok(&*summary)
    }

    /// The first participant in registration order at or above the threshold.
    #[must_use]
    pub fn check_winner(&self) -> Option<GameOutcome> {
        self.participants
            .iter()
            .find(|p| p.score() >= self.config.win_threshold)
            .map(|p| GameOutcome::Winner {
                participant: p.id(),
                name: p.name().to_string(),
                score: p.score(),
                round: self.rounds_played,
            })
    }
}
