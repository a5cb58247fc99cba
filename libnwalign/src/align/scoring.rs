use serde::{Deserialize, Serialize};

use crate::align::structs::Direction;

/// Chooses a single winner when several candidate scores of a cell are equal.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Prefer the left neighbor, then the one above, then the diagonal.
    #[default]
    LeftUpDiagonal,
    /// Prefer the diagonal neighbor, then the one above, then the left.
    DiagonalUpLeft,
}

impl TieBreak {
    /// Returns the maximum of the three candidate scores and the
    /// direction of the candidate that wins under this policy.
    pub fn select(self, from_left: isize, from_above: isize, diagonal: isize) -> (isize, Direction) {
        let score = from_left.max(from_above).max(diagonal);

        let direction = match self {
            TieBreak::LeftUpDiagonal => {
                if score == from_left {
                    Direction::Left
                } else if score == from_above {
                    Direction::Up
                } else {
                    Direction::UpLeft
                }
            }
            TieBreak::DiagonalUpLeft => {
                if score == diagonal {
                    Direction::UpLeft
                } else if score == from_above {
                    Direction::Up
                } else {
                    Direction::Left
                }
            }
        };

        (score, direction)
    }
}

/// The scoring parameters of a global alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyConfig {
    /// Added for every symbol aligned against a gap
    pub gap_penalty: isize,
    /// Added for every pair of equal aligned symbols
    pub match_bonus: isize,
    /// Added for every pair of unequal aligned symbols
    pub mismatch_penalty: isize,
    #[serde(default)]
    pub tie_break: TieBreak,
}

impl PenaltyConfig {
    pub const DEFAULT_GAP_PENALTY: isize = -1;
    pub const DEFAULT_MATCH_BONUS: isize = 2;
    pub const DEFAULT_MISMATCH_PENALTY: isize = -1;

    pub fn new(gap_penalty: isize, match_bonus: isize, mismatch_penalty: isize) -> Self {
        Self {
            gap_penalty,
            match_bonus,
            mismatch_penalty,
            tie_break: TieBreak::default(),
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// The score of aligning two symbols against each other.
    pub fn substitution_score(&self, a: char, b: char) -> isize {
        if a == b {
            self.match_bonus
        } else {
            self.mismatch_penalty
        }
    }
}

impl Default for PenaltyConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_GAP_PENALTY,
            Self::DEFAULT_MATCH_BONUS,
            Self::DEFAULT_MISMATCH_PENALTY,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{assert, let_assert};

    #[test]
    fn test_select_without_ties() {
        for tie_break in [TieBreak::LeftUpDiagonal, TieBreak::DiagonalUpLeft] {
            assert!(tie_break.select(3, 1, 2) == (3, Direction::Left));
            assert!(tie_break.select(1, 3, 2) == (3, Direction::Up));
            assert!(tie_break.select(1, 2, 3) == (3, Direction::UpLeft));
        }
    }

    #[test]
    fn test_select_ties() {
        assert!(TieBreak::LeftUpDiagonal.select(1, 1, 1) == (1, Direction::Left));
        assert!(TieBreak::LeftUpDiagonal.select(0, 1, 1) == (1, Direction::Up));
        assert!(TieBreak::DiagonalUpLeft.select(1, 1, 1) == (1, Direction::UpLeft));
        assert!(TieBreak::DiagonalUpLeft.select(1, 1, 0) == (1, Direction::Up));
    }

    #[test]
    fn test_substitution_score() {
        let config = PenaltyConfig::new(-2, 5, -3);
        assert!(config.substitution_score('A', 'A') == 5);
        assert!(config.substitution_score('A', 'a') == -3);
    }

    #[test]
    fn test_config_json() -> anyhow::Result<()> {
        let config = PenaltyConfig::default().with_tie_break(TieBreak::DiagonalUpLeft);
        let json = serde_json::to_string(&config)?;
        assert!(
            json == r#"{"gap_penalty":-1,"match_bonus":2,"mismatch_penalty":-1,"tie_break":"diagonal-up-left"}"#
        );

        let_assert!(
            Ok(parsed) = serde_json::from_str::<PenaltyConfig>(
                r#"{"gap_penalty":-2,"match_bonus":1,"mismatch_penalty":-1}"#
            )
        );
        assert!(parsed == PenaltyConfig::new(-2, 1, -1));
        Ok(())
    }
}
