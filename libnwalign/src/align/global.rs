use crate::align::structs::GlobalAlignment;
use crate::align::{needleman_wunsch, traceback, PenaltyConfig, TracebackError};
use crate::structs::Sequence;

/// Fills the matrices and traces back one optimal alignment.
pub fn align(
    seq_1: &Sequence,
    seq_2: &Sequence,
    config: &PenaltyConfig,
) -> Result<GlobalAlignment, TracebackError> {
    let (scores, directions) = needleman_wunsch(seq_1, seq_2, config);
    let alignment = traceback(&directions, seq_1, seq_2)?;

    Ok(GlobalAlignment {
        score: scores.final_score(),
        scores,
        directions,
        alignment,
    })
}
