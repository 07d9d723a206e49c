//! Hint levels, ordered by how much of the solution they give away.

use std::fmt;

use crate::errors::TutorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HintTier {
    /// Piece and origin square only.
    Nudge = 1,
    /// Piece, origin, destination and a capture/check tag.
    Outline = 2,
    /// Full notation plus whether the move mates.
    Solution = 3,
}

impl HintTier {
    pub const ALL: [HintTier; 3] = [HintTier::Nudge, HintTier::Outline, HintTier::Solution];

    #[inline]
    pub const fn level(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for HintTier {
    type Error = TutorError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(HintTier::Nudge),
            2 => Ok(HintTier::Outline),
            3 => Ok(HintTier::Solution),
            other => Err(TutorError::InvalidHintTier(other)),
        }
    }
}

impl fmt::Display for HintTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

#[cfg(test)]
mod tests {
    use super::HintTier;
    use crate::errors::TutorError;

    #[test]
    fn levels_round_trip_and_order() {
        for tier in HintTier::ALL {
            assert_eq!(HintTier::try_from(tier.level()).expect("valid level"), tier);
        }
        assert!(HintTier::Nudge < HintTier::Outline);
        assert!(HintTier::Outline < HintTier::Solution);
        assert_eq!(HintTier::Outline.to_string(), "2");
    }

    #[test]
    fn out_of_range_levels_are_rejected() {
        for level in [0u8, 4, 255] {
            assert!(matches!(
                HintTier::try_from(level),
                Err(TutorError::InvalidHintTier(l)) if l == level
            ));
        }
    }
}
