use std::io::Write;
use std::path::Path;

use anyhow::Context;
use libnwalign::align::{align, PenaltyConfig};
use libnwalign::output::{write_json_output, write_standard_header, write_standard_output};
use libnwalign::structs::Sequence;
use log::info;
use thiserror::Error;

use crate::args::{AlignArgs, FastaArgs, OutputArgs};
use crate::render::write_colored_alignment;
use crate::util::open_output;

#[derive(Error, Debug)]
#[error("fasta file {path} holds {found} sequence(s), but {needed} are required")]
pub struct MissingRecordsError {
    path: String,
    found: usize,
    needed: usize,
}

pub fn align_literals(args: &AlignArgs) -> anyhow::Result<()> {
    let seq_1: Sequence = Sequence::from_utf8(args.seq_1.as_bytes())?;
    let seq_2: Sequence = Sequence::from_utf8(args.seq_2.as_bytes())?;

    let mut out = open_output(
        args.output_args.output_path.as_ref(),
        args.output_args.allow_overwrite,
    )?;

    align_pair(
        &seq_1,
        &seq_2,
        &args.scoring_args.config(),
        &args.output_args,
        &mut out,
    )?;
    out.flush()?;
    Ok(())
}

pub fn align_fasta(args: &FastaArgs) -> anyhow::Result<()> {
    let (seq_1, seq_2) = match &args.path_2 {
        Some(path_2) => (
            first_records(&args.path_1, 1)?.remove(0),
            first_records(path_2, 1)?.remove(0),
        ),
        None => {
            let mut seqs = first_records(&args.path_1, 2)?;
            let seq_2 = seqs.remove(1);
            (seqs.remove(0), seq_2)
        }
    };

    let mut out = open_output(
        args.output_args.output_path.as_ref(),
        args.output_args.allow_overwrite,
    )?;

    align_pair(
        &seq_1,
        &seq_2,
        &args.scoring_args.config(),
        &args.output_args,
        &mut out,
    )?;
    out.flush()?;
    Ok(())
}

/// Reads a fasta file, keeping its first `needed` records.
fn first_records(path: &Path, needed: usize) -> anyhow::Result<Vec<Sequence>> {
    let mut seqs = Sequence::from_fasta(path)?;

    if seqs.len() < needed {
        return Err(MissingRecordsError {
            path: path.to_string_lossy().to_string(),
            found: seqs.len(),
            needed,
        }
        .into());
    }

    seqs.truncate(needed);
    Ok(seqs)
}

pub fn align_pair(
    seq_1: &Sequence,
    seq_2: &Sequence,
    config: &PenaltyConfig,
    output_args: &OutputArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    info!(
        "aligning {} symbols against {} symbols",
        seq_1.length, seq_2.length
    );

    let result = align(seq_1, seq_2, config).context("failed to trace back the alignment")?;

    if output_args.json {
        write_json_output(
            &result,
            seq_1,
            seq_2,
            config,
            output_args.show_matrices,
            out,
        )?;
    } else if output_args.color {
        write_standard_header(&result, seq_1, seq_2, output_args.show_matrices, out)?;
        write_colored_alignment(&result.alignment, out)?;
    } else {
        write_standard_output(&result, seq_1, seq_2, output_args.show_matrices, out)?;
    }

    Ok(())
}
