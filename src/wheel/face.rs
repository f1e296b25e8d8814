//! Wheel face values.

use serde::{Deserialize, Serialize};

/// A numbered face on the wheel (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Face(pub u8);

impl Face {
    /// Create a new face.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// The face's point value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0 as u32
    }

    /// Whether the face lies strictly above `boundary`.
    ///
    /// On the standard wheel the boundary is 6: faces 7-12 are high,
    /// faces 1-6 are low.
    #[must_use]
    pub const fn is_high(self, boundary: u8) -> bool {
        self.0 > boundary
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_split() {
        let low: Vec<u8> = (1..=12).filter(|&n| !Face(n).is_high(6)).collect();
        let high: Vec<u8> = (1..=12).filter(|&n| Face(n).is_high(6)).collect();

        assert_eq!(low, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(high, vec![7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_value_and_ordering() {
        assert_eq!(Face::new(9).value(), 9);
        assert!(Face(3) < Face(4));
    }
}
