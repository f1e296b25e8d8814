//! Actions a participant can take on their turn.
//!
//! Every action has a single-character symbol used by the human input
//! collaborator:
//! - `H` = guess the next face is high
//! - `L` = guess the next face is low
//! - `B` = bank the current face's payout and sit out the rest of the round
//! - `F` = spend the once-per-round free action

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::ParticipantId;

/// A turn action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Higher,
    Lower,
    Bank,
    FreeSpin,
}

impl Action {
    /// All actions in symbol order.
    pub const ALL: [Action; 4] = [Action::Higher, Action::Lower, Action::Bank, Action::FreeSpin];

    /// The single-character symbol for this action.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Action::Higher => 'H',
            Action::Lower => 'L',
            Action::Bank => 'B',
            Action::FreeSpin => 'F',
        }
    }

    /// Parse a symbol, case-insensitively.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'H' => Some(Action::Higher),
            'L' => Some(Action::Lower),
            'B' => Some(Action::Bank),
            'F' => Some(Action::FreeSpin),
            _ => None,
        }
    }

    /// Whether this action is a high/low guess that triggers a draw.
    #[must_use]
    pub const fn is_guess(self) -> bool {
        matches!(self, Action::Higher | Action::Lower)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::Higher => "higher",
            Action::Lower => "lower",
            Action::Bank => "bank",
            Action::FreeSpin => "free spin",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Action {
    type Err = GameError;

    /// Parse a line of human input. Only the first non-whitespace
    /// character counts, and nothing may follow it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => {
                Action::from_symbol(symbol).ok_or_else(|| GameError::InvalidSymbol(trimmed.to_string()))
            }
            _ => Err(GameError::InvalidSymbol(trimmed.to_string())),
        }
    }
}

/// A recorded action with its position in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The participant who acted.
    pub participant: ParticipantId,

    /// The action taken. `None` when a bot passed.
    pub action: Option<Action>,

    /// Round number (1-based).
    pub round: u32,

    /// Spin cycle within the round (1-based).
    pub spin: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(participant: ParticipantId, action: Option<Action>, round: u32, spin: u32) -> Self {
        Self {
            participant,
            action,
            round,
            spin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip() {
        for action in Action::ALL {
            assert_eq!(Action::from_symbol(action.symbol()), Some(action));
        }
    }

    #[test]
    fn test_lowercase_symbols() {
        assert_eq!(Action::from_symbol('h'), Some(Action::Higher));
        assert_eq!(Action::from_symbol('f'), Some(Action::FreeSpin));
        assert_eq!(Action::from_symbol('x'), None);
    }

    #[test]
    fn test_parse_input_line() {
        assert_eq!("B\n".parse::<Action>().unwrap(), Action::Bank);
        assert_eq!("  l ".parse::<Action>().unwrap(), Action::Lower);

        assert!(matches!("".parse::<Action>(), Err(GameError::InvalidSymbol(_))));
        assert!(matches!("HL".parse::<Action>(), Err(GameError::InvalidSymbol(_))));
        assert!(matches!("Q".parse::<Action>(), Err(GameError::InvalidSymbol(_))));
    }

    #[test]
    fn test_is_guess() {
        assert!(Action::Higher.is_guess());
        assert!(Action::Lower.is_guess());
        assert!(!Action::Bank.is_guess());
        assert!(!Action::FreeSpin.is_guess());
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(ParticipantId::new(2), Some(Action::Bank), 3, 5);

        assert_eq!(record.participant, ParticipantId::new(2));
        assert_eq!(record.action, Some(Action::Bank));
        assert_eq!(record.round, 3);
        assert_eq!(record.spin, 5);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(ParticipantId::new(1), None, 2, 3);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
