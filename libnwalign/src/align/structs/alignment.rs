use std::fmt::{Display, Formatter};

use serde::Serialize;

use super::{Direction, DirectionMatrix, ScoreMatrix};
use crate::align::PenaltyConfig;
use crate::alphabet::{BLANK_SYMBOL, GAP_SYMBOL, MATCH_SYMBOL, MISMATCH_SYMBOL};
use crate::structs::Sequence;

/// One column of an alignment. A `None` side is a gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlignedColumn {
    pub seq_1: Option<char>,
    pub seq_2: Option<char>,
}

impl AlignedColumn {
    pub fn pair(seq_1: char, seq_2: char) -> Self {
        Self {
            seq_1: Some(seq_1),
            seq_2: Some(seq_2),
        }
    }

    /// A symbol of the first sequence aligned against a gap.
    pub fn gap_in_2(seq_1: char) -> Self {
        Self {
            seq_1: Some(seq_1),
            seq_2: None,
        }
    }

    /// A symbol of the second sequence aligned against a gap.
    pub fn gap_in_1(seq_2: char) -> Self {
        Self {
            seq_1: None,
            seq_2: Some(seq_2),
        }
    }

    pub fn is_gap(&self) -> bool {
        self.seq_1.is_none() || self.seq_2.is_none()
    }

    pub fn is_match(&self) -> bool {
        matches!((self.seq_1, self.seq_2), (Some(a), Some(b)) if a == b)
    }

    pub fn is_mismatch(&self) -> bool {
        matches!((self.seq_1, self.seq_2), (Some(a), Some(b)) if a != b)
    }

    pub fn score(&self, config: &PenaltyConfig) -> isize {
        match (self.seq_1, self.seq_2) {
            (Some(a), Some(b)) => config.substitution_score(a, b),
            _ => config.gap_penalty,
        }
    }

    /// The middle line symbol of this column.
    ///
    /// A match of two symbols that print as the gap symbol gets a blank,
    /// so that a "|" in the printed alignment never sits across from a gap.
    pub fn indicator(&self) -> char {
        match self.seq_1 {
            Some(a) if self.is_match() && a != GAP_SYMBOL => MATCH_SYMBOL,
            _ => BLANK_SYMBOL,
        }
    }
}

/// One optimal global alignment.
///
/// The typed columns are the source of truth; the three display lines are
/// rendered from them once, at construction.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AlignmentResult {
    length: usize,
    aligned_seq_1: String,
    indicator: String,
    aligned_seq_2: String,
    #[serde(skip)]
    columns: Vec<AlignedColumn>,
}

impl AlignmentResult {
    pub fn from_columns(columns: Vec<AlignedColumn>) -> Self {
        let aligned_seq_1 = columns
            .iter()
            .map(|c| c.seq_1.unwrap_or(GAP_SYMBOL))
            .collect();
        let indicator = columns.iter().map(AlignedColumn::indicator).collect();
        let aligned_seq_2 = columns
            .iter()
            .map(|c| c.seq_2.unwrap_or(GAP_SYMBOL))
            .collect();

        Self {
            length: columns.len(),
            aligned_seq_1,
            indicator,
            aligned_seq_2,
            columns,
        }
    }

    /// Builds the alignment by walking a path of directions forward to
    /// the bottom-right cell of the matrices.
    ///
    /// A path that was cut short by a stop tag starts past the origin; the
    /// symbols it never reaches are left out of the alignment.
    pub(crate) fn from_path(path: &[Direction], seq_1: &Sequence, seq_2: &Sequence) -> Self {
        let consumed_1 = path
            .iter()
            .filter(|&&s| s == Direction::Up || s == Direction::UpLeft)
            .count();
        let consumed_2 = path
            .iter()
            .filter(|&&s| s == Direction::Left || s == Direction::UpLeft)
            .count();
        debug_assert!(consumed_1 <= seq_1.length && consumed_2 <= seq_2.length);

        let mut seq_1_idx = seq_1.length - consumed_1;
        let mut seq_2_idx = seq_2.length - consumed_2;
        let mut columns: Vec<AlignedColumn> = Vec::with_capacity(path.len());

        for step in path {
            match step {
                Direction::UpLeft => {
                    seq_1_idx += 1;
                    seq_2_idx += 1;
                    columns.push(AlignedColumn::pair(
                        seq_1.symbol(seq_1_idx),
                        seq_2.symbol(seq_2_idx),
                    ));
                }
                Direction::Up => {
                    seq_1_idx += 1;
                    columns.push(AlignedColumn::gap_in_2(seq_1.symbol(seq_1_idx)));
                }
                Direction::Left => {
                    seq_2_idx += 1;
                    columns.push(AlignedColumn::gap_in_1(seq_2.symbol(seq_2_idx)));
                }
                Direction::Stop => {}
            }
        }

        Self::from_columns(columns)
    }

    /// The number of alignment columns
    pub fn length(&self) -> usize {
        self.length
    }

    /// The first sequence, with gaps inserted
    pub fn aligned_seq_1(&self) -> &str {
        &self.aligned_seq_1
    }

    /// "|" under every exact match, a space everywhere else
    pub fn indicator(&self) -> &str {
        &self.indicator
    }

    /// The second sequence, with gaps inserted
    pub fn aligned_seq_2(&self) -> &str {
        &self.aligned_seq_2
    }

    pub fn columns(&self) -> &[AlignedColumn] {
        &self.columns
    }

    /// The middle line with an "x" under every mismatch.
    pub fn indicator_with_mismatches(&self) -> String {
        self.columns
            .iter()
            .map(|c| {
                if c.is_mismatch() {
                    MISMATCH_SYMBOL
                } else {
                    c.indicator()
                }
            })
            .collect()
    }

    pub fn matches(&self) -> usize {
        self.columns.iter().filter(|c| c.is_match()).count()
    }

    pub fn gaps(&self) -> usize {
        self.columns.iter().filter(|c| c.is_gap()).count()
    }

    pub fn mismatches(&self) -> usize {
        self.columns.iter().filter(|c| c.is_mismatch()).count()
    }

    /// The fraction of alignment columns that are exact matches.
    pub fn identity(&self) -> f64 {
        if self.length == 0 {
            0.0
        } else {
            self.matches() as f64 / self.length as f64
        }
    }

    pub fn ungapped_1(&self) -> String {
        self.columns.iter().filter_map(|c| c.seq_1).collect()
    }

    pub fn ungapped_2(&self) -> String {
        self.columns.iter().filter_map(|c| c.seq_2).collect()
    }

    /// Scores the alignment column by column, saturating at the
    /// bounds of `isize` like the matrix fill does.
    pub fn score(&self, config: &PenaltyConfig) -> isize {
        self.columns
            .iter()
            .fold(0isize, |total, c| total.saturating_add(c.score(config)))
    }
}

impl Display for AlignmentResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}\n{}",
            self.aligned_seq_1, self.indicator, self.aligned_seq_2
        )
    }
}

/// Everything produced by aligning a pair of sequences.
#[derive(Clone, Debug)]
pub struct GlobalAlignment {
    /// The optimal global alignment score
    pub score: isize,
    pub scores: ScoreMatrix,
    pub directions: DirectionMatrix,
    pub alignment: AlignmentResult,
}
