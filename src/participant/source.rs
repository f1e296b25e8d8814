//! Where a participant's actions come from.

use serde::{Deserialize, Serialize};

use crate::strategy::{BotStrategy, Personality};

/// Action source attached to a participant.
///
/// Humans are asked through the [`HumanInput`](crate::input::HumanInput)
/// collaborator; bots run their [`BotStrategy`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ActionSource {
    Human,
    Bot(BotStrategy),
}

impl ActionSource {
    /// A bot source with the given personality.
    #[must_use]
    pub const fn bot(personality: Personality) -> Self {
        ActionSource::Bot(BotStrategy::new(personality))
    }

    /// Whether this source is a bot.
    #[must_use]
    pub const fn is_bot(&self) -> bool {
        matches!(self, ActionSource::Bot(_))
    }

    /// The bot strategy, if any.
    #[must_use]
    pub const fn strategy(&self) -> Option<&BotStrategy> {
        match self {
            ActionSource::Bot(strategy) => Some(strategy),
            ActionSource::Human => None,
        }
    }
}
