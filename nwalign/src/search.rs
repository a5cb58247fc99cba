use std::io::Write;

use libnwalign::align::PenaltyConfig;
use libnwalign::output::{write_search_json, write_search_output};
use libnwalign::seed::{SearchHit, SeedParams, SeedSearch};
use libnwalign::structs::Sequence;
use log::info;

use crate::args::SearchArgs;
use crate::util::open_output;

pub fn search_genome(args: &SearchArgs) -> anyhow::Result<()> {
    let genomes = Sequence::from_fasta(&args.genome_path)?;
    let queries = Sequence::from_fasta(&args.queries_path)?;
    let config = args.scoring_args.config();
    let params = args.seed_args.params();

    let hits = search_all(&genomes, &queries, &config, &params)?;

    let mut out = open_output(
        args.output_args.output_path.as_ref(),
        args.output_args.allow_overwrite,
    )?;

    if args.output_args.json {
        write_search_json(&hits, &config, &params, &mut out)?;
    } else {
        write_search_output(&hits, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

/// Searches every query against every genome record, building each
/// record's word index once.
pub fn search_all(
    genomes: &[Sequence],
    queries: &[Sequence],
    config: &PenaltyConfig,
    params: &SeedParams,
) -> anyhow::Result<Vec<SearchHit>> {
    let mut hits: Vec<SearchHit> = vec![];

    for genome in genomes {
        info!(
            "searching {} queries against {} ({} symbols)",
            queries.len(),
            genome.name,
            genome.length
        );

        let search = SeedSearch::new(genome, *params)?;
        for query in queries {
            hits.extend(search.search(query, config)?);
        }
    }

    info!("found {} hits", hits.len());
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{Cli, SubCommands};
    use assert2::{assert, let_assert};
    use clap::Parser;
    use libnwalign::seed::SeedError;

    #[test]
    fn test_search_genome() -> anyhow::Result<()> {
        let dir = std::env::temp_dir();
        let genome = dir.join(format!("nwalign-genome-{}.fa", std::process::id()));
        let queries = dir.join(format!("nwalign-queries-{}.fa", std::process::id()));
        let output = dir.join(format!("nwalign-search-{}.out", std::process::id()));
        std::fs::write(&genome, ">chr1\nGGGGGACGTT\nGCACCCCC\n>chr2\nTTTTTTTT\n")?;
        std::fs::write(&queries, ">q1\nACGTTGCA\n>q2\nAAAAAAAA\n")?;

        let_assert!(Some(genome_arg) = genome.to_str());
        let_assert!(Some(queries_arg) = queries.to_str());
        let_assert!(Some(output_arg) = output.to_str());
        let_assert!(
            Ok(cli) = Cli::try_parse_from([
                "nwalign",
                "search",
                genome_arg,
                queries_arg,
                "--word-size=4",
                "--window=8",
                "-o",
                output_arg,
                "-q",
            ])
        );
        let_assert!(SubCommands::Search(args) = cli.command);

        let result = search_genome(&args);
        let text = std::fs::read_to_string(&output);
        std::fs::remove_file(&genome)?;
        std::fs::remove_file(&queries)?;
        std::fs::remove_file(&output).ok();

        result?;
        let text = text?;
        assert!(
            text == "# q1 vs chr1 at genome offset 5\n\
                     # seed: query offset 0, genome offset 5, length 4\n\
                     # score: 16\n\
                     ACGTTGCA\n\
                     ||||||||\n\
                     ACGTTGCA\n\n\
                     # perfect hits: 1\n"
        );
        Ok(())
    }

    #[test]
    fn test_zero_word_size_is_an_error() -> anyhow::Result<()> {
        let genomes = vec!["ACGT".parse::<Sequence>()?];
        let queries = vec!["ACGT".parse::<Sequence>()?];
        let params = SeedParams {
            word_size: 0,
            window_size: 8,
        };

        let result = search_all(&genomes, &queries, &PenaltyConfig::default(), &params);
        let_assert!(Err(err) = result);
        assert!(err.downcast_ref::<SeedError>() == Some(&SeedError::ZeroWordSize));
        Ok(())
    }
}
