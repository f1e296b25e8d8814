//! Error types for the wheel game.

use thiserror::Error;

use super::action::Action;

/// Errors raised by the game engine and its collaborators.
#[derive(Debug, Error)]
pub enum GameError {
    /// A draw was attempted after every face was already drawn.
    #[error("the wheel has no faces left to draw")]
    EmptyPool,

    /// A payout was requested before the first draw of the round.
    #[error("no face has been drawn yet")]
    NoDraw,

    /// Input did not name one of H, L, B or F.
    #[error("invalid action symbol: {0:?}")]
    InvalidSymbol(String),

    /// A known action that the participant cannot take right now.
    #[error("{action} is not available: {reason}")]
    ActionUnavailable { action: Action, reason: &'static str },

    /// Invalid game configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The human input stream ended.
    #[error("input closed before the game finished")]
    InputClosed,

    /// I/O failure talking to a collaborator.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("config file error: {0}")]
    ConfigFile(#[from] serde_json::Error),
}

impl GameError {
    /// Whether the error is recovered by asking the same source again.
    #[must_use]
    pub fn is_recoverable_input(&self) -> bool {
        matches!(self, GameError::InvalidSymbol(_) | GameError::ActionUnavailable { .. })
    }
}

/// Result type for game operations.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_input() {
        assert!(GameError::InvalidSymbol("x".to_string()).is_recoverable_input());
        assert!(GameError::ActionUnavailable {
            action: Action::FreeSpin,
            reason: "already used this round",
        }
        .is_recoverable_input());

        assert!(!GameError::EmptyPool.is_recoverable_input());
        assert!(!GameError::InputClosed.is_recoverable_input());
    }

    #[test]
    fn test_messages() {
        let err = GameError::ActionUnavailable {
            action: Action::Bank,
            reason: "no face has been drawn yet",
        };
        assert_eq!(err.to_string(), "bank is not available: no face has been drawn yet");
        assert_eq!(GameError::EmptyPool.to_string(), "the wheel has no faces left to draw");
    }
}
