use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use libnwalign::align::{PenaltyConfig, TieBreak};
use libnwalign::seed::SeedParams;

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    #[command(about = "Align two sequences given on the command line")]
    Align(AlignArgs),
    #[command(about = "Align the first records of one or two fasta files")]
    Fasta(FastaArgs),
    #[command(about = "Find query sequences in a genome by seeding and aligning word hits")]
    Search(SearchArgs),
}

#[derive(Parser, Debug)]
#[command(name = "nwalign")]
#[command(about = "Compute an optimal global alignment of two sequences with Needleman-Wunsch")]
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,

    /// Increase logging verbosity (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Args)]
pub struct AlignArgs {
    /// The first sequence (matrix rows)
    #[arg(value_name = "SEQ1")]
    pub seq_1: String,

    /// The second sequence (matrix columns)
    #[arg(value_name = "SEQ2")]
    pub seq_2: String,

    /// Arguments that control the alignment scores
    #[command(flatten)]
    pub scoring_args: ScoringArgs,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,
}

#[derive(Debug, Args)]
pub struct FastaArgs {
    /// The fasta file holding the first sequence
    #[arg(value_name = "FILE1.fasta")]
    pub path_1: PathBuf,

    /// The fasta file holding the second sequence. If omitted,
    /// the first two records of FILE1 are aligned
    #[arg(value_name = "FILE2.fasta")]
    pub path_2: Option<PathBuf>,

    /// Arguments that control the alignment scores
    #[command(flatten)]
    pub scoring_args: ScoringArgs,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ScoringArgs {
    /// The score added for every symbol aligned against a gap
    #[arg(
        long = "gap",
        default_value_t = PenaltyConfig::DEFAULT_GAP_PENALTY,
        allow_negative_numbers = true,
        value_name = "N"
    )]
    pub gap_penalty: isize,

    /// The score added for every pair of equal aligned symbols
    #[arg(
        long = "match",
        default_value_t = PenaltyConfig::DEFAULT_MATCH_BONUS,
        allow_negative_numbers = true,
        value_name = "N"
    )]
    pub match_bonus: isize,

    /// The score added for every pair of unequal aligned symbols
    #[arg(
        long = "mismatch",
        default_value_t = PenaltyConfig::DEFAULT_MISMATCH_PENALTY,
        allow_negative_numbers = true,
        value_name = "N"
    )]
    pub mismatch_penalty: isize,

    /// Break score ties in favor of the diagonal instead of the left neighbor
    #[arg(long = "prefer-diagonal", action)]
    pub prefer_diagonal: bool,
}

impl ScoringArgs {
    pub fn config(&self) -> PenaltyConfig {
        let tie_break = if self.prefer_diagonal {
            TieBreak::DiagonalUpLeft
        } else {
            TieBreak::LeftUpDiagonal
        };

        PenaltyConfig::new(self.gap_penalty, self.match_bonus, self.mismatch_penalty)
            .with_tie_break(tie_break)
    }
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Print the score and direction matrices
    #[arg(short = 'm', long = "matrices", action)]
    pub show_matrices: bool,

    /// Write the alignment as JSON
    #[arg(long = "json", action)]
    pub json: bool,

    /// Highlight matches and mismatches when writing to a terminal
    #[arg(long = "color", action, conflicts_with_all = ["json", "output_path"])]
    pub color: bool,

    /// Where to place output (defaults to stdout)
    #[arg(short = 'o', long = "output", value_name = "path")]
    pub output_path: Option<PathBuf>,

    /// Allow nwalign to overwrite files
    #[arg(short = 'q', long = "allow-overwrite", default_value_t = false)]
    pub allow_overwrite: bool,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// The fasta file holding the genome; each record is searched separately
    #[arg(value_name = "GENOME.fasta")]
    pub genome_path: PathBuf,

    /// The fasta file holding the query sequences
    #[arg(value_name = "QUERIES.fasta")]
    pub queries_path: PathBuf,

    /// Arguments that control the alignment scores
    #[command(flatten)]
    pub scoring_args: ScoringArgs,

    /// Arguments that control seeding
    #[command(flatten)]
    pub seed_args: SeedArgs,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: SearchOutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SeedArgs {
    /// The length of the words a query must share with the genome
    #[arg(
        long = "word-size",
        default_value_t = SeedParams::DEFAULT_WORD_SIZE,
        value_name = "N"
    )]
    pub word_size: usize,

    /// The number of genome symbols aligned against the query for every seed
    #[arg(
        long = "window",
        default_value_t = SeedParams::DEFAULT_WINDOW_SIZE,
        value_name = "N"
    )]
    pub window_size: usize,
}

impl SeedArgs {
    pub fn params(&self) -> SeedParams {
        SeedParams {
            word_size: self.word_size,
            window_size: self.window_size,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SearchOutputArgs {
    /// Write the hits as JSON
    #[arg(long = "json", action)]
    pub json: bool,

    /// Where to place output (defaults to stdout)
    #[arg(short = 'o', long = "output", value_name = "path")]
    pub output_path: Option<PathBuf>,

    /// Allow nwalign to overwrite files
    #[arg(short = 'q', long = "allow-overwrite", default_value_t = false)]
    pub allow_overwrite: bool,
}
