use log::{debug, trace};
use thiserror::Error;

use crate::align::structs::{AlignmentResult, Direction, DirectionMatrix};
use crate::alphabet::tag_to_char;
use crate::structs::Sequence;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TracebackError {
    #[error(
        "direction matrix entry at row {row}, column {col} is {:?}, which is not an up, left, up-left or stop tag",
        tag_to_char(.tag)
    )]
    UnrecognizedDirection { row: usize, col: usize, tag: u8 },
    #[error("direction {direction:?} at row {row}, column {col} leads outside of the matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        direction: Direction,
    },
    #[error(
        "direction matrix is {rows}x{cols}, but the sequences require {expected_rows}x{expected_cols}"
    )]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },
}

/// Walks the direction matrix from the bottom-right cell back to the
/// origin, returning the steps of the path in forward order.
///
/// The walk ends on a stop tag, or at cell (0, 0). Every cell the walk
/// visits must hold a known tag, the origin included.
pub fn traceback_path(
    directions: &DirectionMatrix,
    seq_1_length: usize,
    seq_2_length: usize,
) -> Result<Vec<Direction>, TracebackError> {
    if directions.rows != seq_1_length + 1 || directions.cols != seq_2_length + 1 {
        return Err(TracebackError::DimensionMismatch {
            rows: directions.rows,
            cols: directions.cols,
            expected_rows: seq_1_length + 1,
            expected_cols: seq_2_length + 1,
        });
    }

    let mut row = seq_1_length;
    let mut col = seq_2_length;
    let mut path: Vec<Direction> = Vec::with_capacity(row + col);

    loop {
        let tag = directions.tag(row, col);
        let direction =
            Direction::from_tag(tag).ok_or(TracebackError::UnrecognizedDirection { row, col, tag })?;

        trace!(
            "step {}: row: {row}, col: {col}, direction: {direction:?}",
            path.len()
        );

        if row == 0 && col == 0 {
            break;
        }

        let (next_row, next_col) = match direction {
            Direction::Stop => break,
            Direction::Up if row > 0 => (row - 1, col),
            Direction::Left if col > 0 => (row, col - 1),
            Direction::UpLeft if row > 0 && col > 0 => (row - 1, col - 1),
            _ => {
                return Err(TracebackError::OutOfBounds {
                    row,
                    col,
                    direction,
                })
            }
        };

        path.push(direction);
        row = next_row;
        col = next_col;
    }

    path.reverse();
    Ok(path)
}

/// Reconstructs one optimal alignment of `seq_1` against `seq_2` from the
/// direction matrix produced by [`needleman_wunsch`](super::needleman_wunsch).
pub fn traceback(
    directions: &DirectionMatrix,
    seq_1: &Sequence,
    seq_2: &Sequence,
) -> Result<AlignmentResult, TracebackError> {
    let path = traceback_path(directions, seq_1.length, seq_2.length)?;
    let alignment = AlignmentResult::from_path(&path, seq_1, seq_2);

    debug!("traced back {} alignment columns", alignment.length());
    trace!("\n{alignment}");

    Ok(alignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::{needleman_wunsch, PenaltyConfig, TieBreak};
    use assert2::{assert, let_assert};

    fn aligned(seq_1: &str, seq_2: &str, config: &PenaltyConfig) -> AlignmentResult {
        let seq_1 = Sequence::from_symbols(seq_1.chars());
        let seq_2 = Sequence::from_symbols(seq_2.chars());
        let (_, directions) = needleman_wunsch(&seq_1, &seq_2, config);
        let_assert!(Ok(alignment) = traceback(&directions, &seq_1, &seq_2));
        alignment
    }

    #[test]
    fn test_reference_pair() {
        let alignment = aligned("ATGGT", "ATGGAT", &PenaltyConfig::default());
        assert!(alignment.aligned_seq_1() == "ATGG-T");
        assert!(alignment.indicator() == "|||| |");
        assert!(alignment.aligned_seq_2() == "ATGGAT");
    }

    #[test]
    fn test_empty_first_sequence() {
        let alignment = aligned("", "ACG", &PenaltyConfig::default());
        assert!(alignment.aligned_seq_1() == "---");
        assert!(alignment.indicator() == "   ");
        assert!(alignment.aligned_seq_2() == "ACG");
    }

    #[test]
    fn test_empty_second_sequence() {
        let alignment = aligned("ACG", "", &PenaltyConfig::default());
        assert!(alignment.aligned_seq_1() == "ACG");
        assert!(alignment.aligned_seq_2() == "---");
    }

    #[test]
    fn test_both_empty() {
        let alignment = aligned("", "", &PenaltyConfig::default());
        assert!(alignment == AlignmentResult::default());
    }

    #[test]
    fn test_identical_pair() {
        let alignment = aligned("AA", "AA", &PenaltyConfig::default());
        assert!(alignment.aligned_seq_1() == "AA");
        assert!(alignment.indicator() == "||");
        assert!(alignment.aligned_seq_2() == "AA");
    }

    #[test]
    fn test_tie_break_paths() {
        let config = PenaltyConfig::default();
        let alignment = aligned("A", "AA", &config);
        assert!(alignment.to_string() == "A-\n| \nAA");

        let config = config.with_tie_break(TieBreak::DiagonalUpLeft);
        let alignment = aligned("A", "AA", &config);
        assert!(alignment.to_string() == "-A\n |\nAA");
    }

    #[test]
    fn test_unrecognized_direction() -> anyhow::Result<()> {
        let seq_1: Sequence = "AC".parse()?;
        let seq_2: Sequence = "AG".parse()?;
        let directions: DirectionMatrix = "S L L\nU ? L\nU U D".parse()?;

        let_assert!(Err(err) = traceback(&directions, &seq_1, &seq_2));
        assert!(
            err == TracebackError::UnrecognizedDirection {
                row: 1,
                col: 1,
                tag: b'?'
            }
        );
        assert!(err.to_string().contains("row 1, column 1"));
        assert!(err.to_string().contains("'?'"));
        Ok(())
    }

    #[test]
    fn test_unreached_bad_tag_is_ignored() -> anyhow::Result<()> {
        let seq_1: Sequence = "AC".parse()?;
        let seq_2: Sequence = "AG".parse()?;
        let directions: DirectionMatrix = "S L ?\nU D ?\nU U D".parse()?;

        let_assert!(Ok(alignment) = traceback(&directions, &seq_1, &seq_2));
        assert!(alignment.to_string() == "AC\n| \nAG");
        Ok(())
    }

    #[test]
    fn test_unrecognized_origin() -> anyhow::Result<()> {
        let seq: Sequence = "A".parse()?;
        let directions: DirectionMatrix = "? L\nU D".parse()?;

        let_assert!(Err(err) = traceback(&directions, &seq, &seq));
        assert!(
            err == TracebackError::UnrecognizedDirection {
                row: 0,
                col: 0,
                tag: b'?'
            }
        );

        let directions: DirectionMatrix = "?".parse()?;
        let empty: Sequence = "".parse()?;
        let_assert!(
            Err(TracebackError::UnrecognizedDirection { row: 0, col: 0, .. }) =
                traceback(&directions, &empty, &empty)
        );
        Ok(())
    }

    #[test]
    fn test_known_origin_tag_ends_walk() -> anyhow::Result<()> {
        let seq: Sequence = "A".parse()?;
        let directions: DirectionMatrix = "L L\nU D".parse()?;

        let_assert!(Ok(path) = traceback_path(&directions, 1, 1));
        assert!(path == vec![Direction::UpLeft]);
        let_assert!(Ok(alignment) = traceback(&directions, &seq, &seq));
        assert!(alignment.to_string() == "A\n|\nA");
        Ok(())
    }

    #[test]
    fn test_early_stop() -> anyhow::Result<()> {
        let seq_1: Sequence = "AC".parse()?;
        let seq_2: Sequence = "AG".parse()?;
        let directions: DirectionMatrix = "S L L\nU S L\nU U D".parse()?;

        let_assert!(Ok(path) = traceback_path(&directions, 2, 2));
        assert!(path == vec![Direction::UpLeft]);

        let_assert!(Ok(alignment) = traceback(&directions, &seq_1, &seq_2));
        assert!(alignment.to_string() == "C\n \nG");
        Ok(())
    }

    #[test]
    fn test_out_of_bounds() -> anyhow::Result<()> {
        let seq_1: Sequence = "A".parse()?;
        let seq_2: Sequence = "A".parse()?;
        let directions: DirectionMatrix = "S U\nL U".parse()?;

        let_assert!(Err(err) = traceback(&directions, &seq_1, &seq_2));
        assert!(
            err == TracebackError::OutOfBounds {
                row: 0,
                col: 1,
                direction: Direction::Up
            }
        );
        Ok(())
    }

    #[test]
    fn test_dimension_mismatch() -> anyhow::Result<()> {
        let seq_1: Sequence = "AC".parse()?;
        let seq_2: Sequence = "A".parse()?;
        let directions = DirectionMatrix::new(2, 2);

        let_assert!(
            Err(TracebackError::DimensionMismatch {
                expected_rows: 3,
                expected_cols: 2,
                ..
            }) = traceback(&directions, &seq_1, &seq_2)
        );
        Ok(())
    }
}
