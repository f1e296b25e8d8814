//! Table setup: register humans, fill the remaining seats with bots.

use tracing::debug;

use crate::core::{GameConfig, GameError, GameRng, ParticipantId, Result};
use crate::events::Observer;
use crate::input::HumanInput;
use crate::participant::{ActionSource, Participant};
use crate::strategy::Personality;

use super::controller::GameController;

/// Seat request collected by the builder.
#[derive(Clone, Debug)]
enum Seat {
    /// Human whose name is asked for at build time.
    PromptedHuman,
    Human(String),
    Bot(String, Option<Personality>),
}

/// Builder for a [`GameController`].
///
/// Seats are filled in the order they are added. With `fill_with_bots`
/// (the default), empty seats up to `max_participants` become bots named
/// `Bot 1`, `Bot 2`, ... with sampled personalities.
pub struct GameBuilder {
    config: GameConfig,
    seats: Vec<Seat>,
    fill_with_bots: bool,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            seats: Vec::new(),
            fill_with_bots: true,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Add `count` humans whose names come from the input collaborator.
    pub fn humans(mut self, count: usize) -> Self {
        self.seats.extend(std::iter::repeat(Seat::PromptedHuman).take(count));
        self
    }

    /// Add a named human.
    pub fn human(mut self, name: impl Into<String>) -> Self {
        self.seats.push(Seat::Human(name.into()));
        self
    }

    /// Add a bot with a fixed personality.
    pub fn bot(mut self, name: impl Into<String>, personality: Personality) -> Self {
        self.seats.push(Seat::Bot(name.into(), Some(personality)));
        self
    }

    /// Add a bot whose personality is sampled at build time.
    pub fn random_bot(mut self, name: impl Into<String>) -> Self {
        self.seats.push(Seat::Bot(name.into(), None));
        self
    }

    /// Whether to top the table up with bots.
    pub fn fill_with_bots(mut self, fill: bool) -> Self {
        self.fill_with_bots = fill;
        self
    }

    /// Register participants and create the controller.
    ///
    /// Human names are requested first, in seat order, then bot
    /// personalities are sampled from `rng`.
    pub fn build<I: HumanInput, O: Observer>(
        self,
        mut rng: GameRng,
        mut input: I,
        observer: O,
    ) -> Result<GameController<I, O>> {
        self.config.validate()?;
        if self.seats.len() > self.config.max_participants {
            return Err(GameError::Config(format!(
                "{} seats requested but the table holds {}",
                self.seats.len(),
                self.config.max_participants
            )));
        }

        let mut seats = self.seats;
        if self.fill_with_bots {
            let bot_count = self.config.max_participants - seats.len();
            seats.extend((1..=bot_count).map(|i| Seat::Bot(format!("Bot {i}"), None)));
        }

        let mut participants = Vec::with_capacity(seats.len());
        let mut human_number = 0;
        for (id, seat) in ParticipantId::all(seats.len()).zip(seats) {
            let participant = match seat {
                Seat::PromptedHuman => {
                    human_number += 1;
                    let name = input.request_name(human_number)?;
                    Participant::new(id, name, ActionSource::Human)
                }
                Seat::Human(name) => {
                    human_number += 1;
                    Participant::new(id, name, ActionSource::Human)
                }
                Seat::Bot(name, personality) => {
                    let personality =
                        personality.unwrap_or_else(|| Personality::sample(&mut rng, &self.config));
                    debug!(bot = %name, %personality, "bot seated");
                    Participant::new(id, name, ActionSource::bot(personality))
                }
            };
            participants.push(participant);
        }

        GameController::new(self.config, participants, rng, input, observer)
    }
}
