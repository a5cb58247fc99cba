use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use log::LevelFilter;

pub trait PathBufExt {
    fn open(&self, allow_overwrite: bool) -> anyhow::Result<BufWriter<File>>;
}

impl PathBufExt for PathBuf {
    fn open(&self, allow_overwrite: bool) -> anyhow::Result<BufWriter<File>> {
        let mut file_options = File::options();

        if allow_overwrite {
            file_options.write(true).truncate(true).create(true);
        } else {
            file_options.write(true).create_new(true);
        };

        let file = file_options
            .open(self)
            .context(format!("failed to create file: {}", self.to_string_lossy()))?;

        Ok(BufWriter::new(file))
    }
}

/// Opens the output destination: the file at `path`, or stdout.
pub fn open_output(path: Option<&PathBuf>, allow_overwrite: bool) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(path.open(allow_overwrite)?)),
        None => Ok(Box::new(BufWriter::new(std::io::stdout().lock()))),
    }
}

/// Sets up env_logger. RUST_LOG takes precedence over the verbosity flag.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
