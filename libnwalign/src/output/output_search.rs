use crate::align::PenaltyConfig;
use crate::output::display_name;
use crate::seed::{SearchHit, SeedParams};

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

fn perfect_hits(hits: &[SearchHit]) -> usize {
    hits.iter().filter(|h| h.perfect).count()
}

/// Writes one block per hit: the location, seed and score, then the genome
/// window, the middle line (with an "x" under mismatches) and the query.
/// A final line counts the perfect hits.
pub fn write_search_output(hits: &[SearchHit], out: &mut impl Write) -> Result<()> {
    for hit in hits {
        writeln!(
            out,
            "# {} vs {} at genome offset {}",
            display_name(&hit.query_name, "query"),
            display_name(&hit.genome_name, "genome"),
            hit.seed.window_start
        )?;
        writeln!(
            out,
            "# seed: query offset {}, genome offset {}, length {}",
            hit.seed.query_start, hit.seed.genome_start, hit.seed.length
        )?;
        writeln!(out, "# score: {}", hit.score)?;
        writeln!(out, "{}", hit.alignment.aligned_seq_1())?;
        writeln!(out, "{}", hit.alignment.indicator_with_mismatches())?;
        writeln!(out, "{}", hit.alignment.aligned_seq_2())?;
        writeln!(out)?;
    }

    writeln!(out, "# perfect hits: {}", perfect_hits(hits))?;
    Ok(())
}

#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    config: &'a PenaltyConfig,
    params: &'a SeedParams,
    perfect_hits: usize,
    hits: &'a [SearchHit],
}

/// Writes every hit of a search as a single pretty-printed JSON document.
pub fn write_search_json(
    hits: &[SearchHit],
    config: &PenaltyConfig,
    params: &SeedParams,
    out: &mut impl Write,
) -> Result<()> {
    let output = JsonSearchOutput {
        config,
        params,
        perfect_hits: perfect_hits(hits),
        hits,
    };

    serde_json::to_writer_pretty(&mut *out, &output)
        .context("failed to write JSON search output")?;
    writeln!(out)?;
    Ok(())
}
