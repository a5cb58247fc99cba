use log::debug;

use crate::align::structs::{Direction, DirectionMatrix, ScoreMatrix};
use crate::align::PenaltyConfig;
use crate::structs::Sequence;

/// Fills the score and direction matrices of a global alignment of `seq_1`
/// (rows) against `seq_2` (columns).
///
/// Cell (row, col) holds the optimal score of aligning the first `row`
/// symbols of `seq_1` against the first `col` symbols of `seq_2`, and the
/// neighbor that produced it. Cells are filled in row-major order, so the
/// left, upper and upper-left neighbors of a cell are always final.
pub fn needleman_wunsch(
    seq_1: &Sequence,
    seq_2: &Sequence,
    config: &PenaltyConfig,
) -> (ScoreMatrix, DirectionMatrix) {
    let rows = seq_1.length + 1;
    let cols = seq_2.length + 1;

    let mut scores = ScoreMatrix::new(rows, cols);
    let mut directions = DirectionMatrix::new(rows, cols);

    scores.set(0, 0, 0);
    directions.set(0, 0, Direction::Stop);

    for seq_2_idx in 1..cols {
        scores.set(
            0,
            seq_2_idx,
            scores.get(0, seq_2_idx - 1).saturating_add(config.gap_penalty),
        );
        directions.set(0, seq_2_idx, Direction::Left);
    }

    for seq_1_idx in 1..rows {
        let seq_1_symbol = seq_1.symbol(seq_1_idx);

        scores.set(
            seq_1_idx,
            0,
            scores.get(seq_1_idx - 1, 0).saturating_add(config.gap_penalty),
        );
        directions.set(seq_1_idx, 0, Direction::Up);

        for seq_2_idx in 1..cols {
            let seq_2_symbol = seq_2.symbol(seq_2_idx);

            // scores saturate instead of wrapping for extreme penalties
            let from_left = scores
                .get(seq_1_idx, seq_2_idx - 1)
                .saturating_add(config.gap_penalty);
            let from_above = scores
                .get(seq_1_idx - 1, seq_2_idx)
                .saturating_add(config.gap_penalty);
            let diagonal = scores
                .get(seq_1_idx - 1, seq_2_idx - 1)
                .saturating_add(config.substitution_score(seq_1_symbol, seq_2_symbol));

            let (score, direction) = config.tie_break.select(from_left, from_above, diagonal);

            scores.set(seq_1_idx, seq_2_idx, score);
            directions.set(seq_1_idx, seq_2_idx, direction);
        }
    }

    debug!(
        "filled {}x{} matrices, final score: {}",
        rows,
        cols,
        scores.final_score()
    );

    (scores, directions)
}
