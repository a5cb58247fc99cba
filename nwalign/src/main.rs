mod align;
mod args;
mod render;
mod search;
mod util;

use align::{align_fasta, align_literals};
use args::{Cli, SubCommands};
use search::search_genome;
use util::init_logging;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    color_backtrace::install();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        SubCommands::Align(args) => {
            align_literals(&args)?;
        }
        SubCommands::Fasta(args) => {
            align_fasta(&args)?;
        }
        SubCommands::Search(args) => {
            search_genome(&args)?;
        }
    }
    Ok(())
}
