//! Participant identification.
//!
//! Participants are identified by their registration index. Registration
//! order is also turn order and the tie-break order for the win check.

use serde::{Deserialize, Serialize};

/// Participant identifier supporting up to 255 seats.
///
/// Indices are 0-based: the first registered participant is `ParticipantId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub u8);

impl ParticipantId {
    /// Create a new participant ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw participant index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all participant IDs for a game with `count` seats.
    ///
    /// ```
    /// use wheel_game::core::ParticipantId;
    ///
    /// let seats: Vec<_> = ParticipantId::all(8).collect();
    /// assert_eq!(seats.len(), 8);
    /// assert_eq!(seats[0], ParticipantId::new(0));
    /// assert_eq!(seats[7], ParticipantId::new(7));
    /// ```
    pub fn all(count: usize) -> impl Iterator<Item = ParticipantId> {
        (0..count.min(u8::MAX as usize) as u8).map(ParticipantId)
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", u16::from(self.0) + 1)
    }
}
