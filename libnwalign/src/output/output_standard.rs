use crate::align::structs::{GlobalAlignment, LabeledMatrix};
use crate::output::display_name;
use crate::structs::Sequence;

use anyhow::Result;
use std::io::Write;

/// Writes everything that precedes the alignment lines: the optional
/// matrix tables, then the names, score and identity.
pub fn write_standard_header(
    result: &GlobalAlignment,
    seq_1: &Sequence,
    seq_2: &Sequence,
    show_matrices: bool,
    out: &mut impl Write,
) -> Result<()> {
    if show_matrices {
        writeln!(out, "score matrix:")?;
        result.scores.dump(out, seq_1, seq_2)?;
        writeln!(out)?;
        writeln!(out, "direction matrix:")?;
        result.directions.dump(out, seq_1, seq_2)?;
        writeln!(out)?;
    }

    let alignment = &result.alignment;
    writeln!(
        out,
        "# {} vs {}",
        display_name(&seq_1.name, "seq_1"),
        display_name(&seq_2.name, "seq_2")
    )?;
    writeln!(out, "# score: {}", result.score)?;
    writeln!(
        out,
        "# identity: {}/{} ({:.1}%)",
        alignment.matches(),
        alignment.length(),
        alignment.identity() * 100.0
    )?;
    Ok(())
}

/// Writes the header followed by the three alignment lines.
pub fn write_standard_output(
    result: &GlobalAlignment,
    seq_1: &Sequence,
    seq_2: &Sequence,
    show_matrices: bool,
    out: &mut impl Write,
) -> Result<()> {
    write_standard_header(result, seq_1, seq_2, show_matrices, out)?;
    writeln!(out, "{}", result.alignment)?;
    Ok(())
}
