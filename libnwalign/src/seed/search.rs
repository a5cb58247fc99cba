use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::WordIndex;
use crate::align::structs::AlignmentResult;
use crate::align::{align, PenaltyConfig, TracebackError};
use crate::structs::Sequence;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SeedError {
    #[error("seed word size must be at least 1")]
    ZeroWordSize,
    #[error(transparent)]
    Traceback(#[from] TracebackError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedParams {
    /// The length of the words shared by a query and the genome
    pub word_size: usize,
    /// The number of genome symbols aligned against the query for every seed
    pub window_size: usize,
}

impl SeedParams {
    pub const DEFAULT_WORD_SIZE: usize = 11;
    pub const DEFAULT_WINDOW_SIZE: usize = 50;
}

impl Default for SeedParams {
    fn default() -> Self {
        Self {
            word_size: Self::DEFAULT_WORD_SIZE,
            window_size: Self::DEFAULT_WINDOW_SIZE,
        }
    }
}

/// A word shared by a query and the genome, and the genome window it implies.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seed {
    pub query_start: usize,
    pub genome_start: usize,
    /// Where the query would start in the genome if the seed sits on
    /// the alignment diagonal
    pub window_start: usize,
    pub length: usize,
}

/// A seed extended to a genome window and globally aligned to the query.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub query_name: String,
    pub genome_name: String,
    pub seed: Seed,
    pub score: isize,
    /// Every query symbol is matched, with no gaps or mismatches
    pub perfect: bool,
    pub alignment: AlignmentResult,
}

/// Searches query sequences against one genome by looking up the
/// query's words in the genome, then aligning the window around each hit.
#[derive(Clone, Debug)]
pub struct SeedSearch<'a> {
    genome: &'a Sequence,
    index: WordIndex<'a>,
    params: SeedParams,
}

impl<'a> SeedSearch<'a> {
    pub fn new(genome: &'a Sequence, params: SeedParams) -> Result<Self, SeedError> {
        Ok(Self {
            genome,
            index: WordIndex::new(genome, params.word_size)?,
            params,
        })
    }

    /// Finds the seeds of `query`, in query order.
    ///
    /// Each distinct query word is looked up once. A seed whose window would
    /// start before the genome is dropped, and so is every seed after the
    /// first on the same window.
    pub fn seeds(&self, query: &Sequence) -> Vec<Seed> {
        let mut looked_up: HashSet<&[char]> = HashSet::new();
        let mut window_starts: HashSet<usize> = HashSet::new();
        let mut seeds: Vec<Seed> = vec![];

        for (query_start, word) in query
            .residues()
            .windows(self.index.word_size())
            .enumerate()
        {
            if !looked_up.insert(word) {
                continue;
            }

            let genome_start = match self.index.lookup(word) {
                Some(genome_start) => genome_start,
                None => continue,
            };

            let window_start = match genome_start.checked_sub(query_start) {
                Some(window_start) => window_start,
                None => continue,
            };

            if window_starts.insert(window_start) {
                seeds.push(Seed {
                    query_start,
                    genome_start,
                    window_start,
                    length: self.index.word_size(),
                });
            }
        }

        seeds
    }

    /// The genome window of a seed, cut short at the end of the genome.
    pub fn window(&self, seed: &Seed) -> Sequence {
        self.genome.subsequence(
            seed.window_start,
            seed.window_start.saturating_add(self.params.window_size),
        )
    }

    /// Aligns the genome window of every seed (rows) against the query (columns).
    pub fn search(
        &self,
        query: &Sequence,
        config: &PenaltyConfig,
    ) -> Result<Vec<SearchHit>, SeedError> {
        let seeds = self.seeds(query);
        debug!("query {:?} has {} seed(s)", query.name, seeds.len());

        seeds
            .into_iter()
            .map(|seed| -> Result<SearchHit, SeedError> {
                let window = self.window(&seed);
                let result = align(&window, query, config)?;
                let perfect = !query.is_empty()
                    && result.alignment.length() == query.length
                    && result.alignment.matches() == query.length;

                Ok(SearchHit {
                    query_name: query.name.clone(),
                    genome_name: self.genome.name.clone(),
                    seed,
                    score: result.score,
                    perfect,
                    alignment: result.alignment,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{assert, let_assert};

    fn params(word_size: usize, window_size: usize) -> SeedParams {
        SeedParams {
            word_size,
            window_size,
        }
    }

    #[test]
    fn test_default_params() {
        assert!(SeedParams::default() == params(11, 50));
    }

    #[test]
    fn test_words_on_one_diagonal_make_one_seed() -> anyhow::Result<()> {
        let genome: Sequence = "GGGGGACGTTGCACCCCC".parse()?;
        let query: Sequence = "ACGTTGCA".parse()?;
        let search = SeedSearch::new(&genome, params(4, 8))?;

        assert!(
            search.seeds(&query)
                == vec![Seed {
                    query_start: 0,
                    genome_start: 5,
                    window_start: 5,
                    length: 4,
                }]
        );

        let hits = search.search(&query, &PenaltyConfig::default())?;
        let_assert!([hit] = hits.as_slice());
        assert!(hit.score == 16);
        assert!(hit.perfect);
        assert!(hit.alignment.to_string() == "ACGTTGCA\n||||||||\nACGTTGCA");
        Ok(())
    }

    #[test]
    fn test_window_before_genome_start() -> anyhow::Result<()> {
        let genome: Sequence = "ACGTAAAA".parse()?;
        let query: Sequence = "TTACGT".parse()?;
        let search = SeedSearch::new(&genome, params(4, 8))?;

        assert!(search.seeds(&query).is_empty());
        let hits = search.search(&query, &PenaltyConfig::default())?;
        assert!(hits.is_empty());
        Ok(())
    }

    #[test]
    fn test_window_cut_at_genome_end() -> anyhow::Result<()> {
        let genome: Sequence = "GGACGTTG".parse()?;
        let query: Sequence = "ACGTTGCA".parse()?;
        let search = SeedSearch::new(&genome, params(4, 8))?;

        let seeds = search.seeds(&query);
        let_assert!([seed] = seeds.as_slice());
        assert!(seed.window_start == 2);
        assert!(format!("{:?}", search.window(seed)) == "ACGTTG");

        let hits = search.search(&query, &PenaltyConfig::default())?;
        let_assert!([hit] = hits.as_slice());
        assert!(hit.score == 10);
        assert!(!hit.perfect);
        assert!(hit.alignment.to_string() == "ACGTTG--\n||||||  \nACGTTGCA");
        Ok(())
    }

    #[test]
    fn test_mismatch_hit() -> anyhow::Result<()> {
        let mut genome: Sequence = "ACGTTGCAGGG".parse()?;
        genome.name = "chr1".to_string();
        let mut query: Sequence = "ACGTAGCA".parse()?;
        query.name = "q1".to_string();
        let search = SeedSearch::new(&genome, params(4, 8))?;

        let hits = search.search(&query, &PenaltyConfig::default())?;
        let_assert!([hit] = hits.as_slice());
        assert!(hit.query_name == "q1");
        assert!(hit.genome_name == "chr1");
        assert!(hit.score == 13);
        assert!(!hit.perfect);
        assert!(hit.alignment.indicator() == "|||| |||");
        assert!(hit.alignment.indicator_with_mismatches() == "||||x|||");
        Ok(())
    }

    #[test]
    fn test_query_shorter_than_word() -> anyhow::Result<()> {
        let genome: Sequence = "ACGTACGT".parse()?;
        let query: Sequence = "ACG".parse()?;
        let search = SeedSearch::new(&genome, params(4, 8))?;
        assert!(search.seeds(&query).is_empty());
        Ok(())
    }

    #[test]
    fn test_zero_word_size() -> anyhow::Result<()> {
        let genome: Sequence = "ACGT".parse()?;
        let_assert!(Err(err) = SeedSearch::new(&genome, params(0, 8)));
        assert!(err == SeedError::ZeroWordSize);
        Ok(())
    }
}
