use crate::align::structs::{AlignmentResult, GlobalAlignment};
use crate::align::PenaltyConfig;
use crate::structs::Sequence;

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonSequence<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
    length: usize,
    symbols: String,
}

impl<'a> JsonSequence<'a> {
    fn new(seq: &'a Sequence) -> Self {
        Self {
            name: &seq.name,
            details: seq.details.as_deref(),
            length: seq.length,
            symbols: seq.residues().iter().collect(),
        }
    }
}

#[derive(Serialize)]
struct JsonMatrices {
    scores: Vec<Vec<isize>>,
    directions: Vec<String>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    seq_1: JsonSequence<'a>,
    seq_2: JsonSequence<'a>,
    config: &'a PenaltyConfig,
    score: isize,
    identity: f64,
    #[serde(flatten)]
    alignment: &'a AlignmentResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    matrices: Option<JsonMatrices>,
}

/// Writes the alignment as a single pretty-printed JSON document.
pub fn write_json_output(
    result: &GlobalAlignment,
    seq_1: &Sequence,
    seq_2: &Sequence,
    config: &PenaltyConfig,
    show_matrices: bool,
    out: &mut impl Write,
) -> Result<()> {
    let matrices = show_matrices.then(|| JsonMatrices {
        scores: result.scores.to_rows(),
        directions: result.directions.to_glyph_rows(),
    });

    let output = JsonOutput {
        seq_1: JsonSequence::new(seq_1),
        seq_2: JsonSequence::new(seq_2),
        config,
        score: result.score,
        identity: result.alignment.identity(),
        alignment: &result.alignment,
        matrices,
    };

    serde_json::to_writer_pretty(&mut *out, &output).context("failed to write JSON output")?;
    writeln!(out)?;
    Ok(())
}
