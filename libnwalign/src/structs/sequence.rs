use seq_io::fasta::{Reader, Record};
use std::fmt::{Debug, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use crate::alphabet::{GAP_SYMBOL, UTF8_SPACE};
use anyhow::{Context, Result};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("sequence bytes are not valid UTF8 (at byte offset {offset})")]
pub struct InvalidUtf8SequenceError {
    offset: usize,
}

/// This holds the symbols of a sequence to be aligned.
#[derive(Clone, PartialEq, Eq)]
pub struct Sequence {
    /// The name of the sequence
    pub name: String,
    /// The sequence details. If the sequence comes from a fasta, this
    /// is the information following the sequence name in the header
    pub details: Option<String>,
    /// The length of the sequence
    pub length: usize,
    /// The symbols of the sequence. Index 0 holds a gap sentinel, so
    /// that symbol i of the sequence is found at index i
    pub symbols: Vec<char>,
}

impl Sequence {
    pub fn from_symbols(symbols: impl IntoIterator<Item = char>) -> Self {
        // We want position 1 of the sequence to be at index 1, so we'll buffer with a gap
        let mut padded: Vec<char> = vec![GAP_SYMBOL];
        padded.extend(symbols);

        Sequence {
            name: "".to_string(),
            details: None,
            length: padded.len() - 1,
            symbols: padded,
        }
    }

    pub fn from_utf8(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(|e| InvalidUtf8SequenceError {
            offset: e.valid_up_to(),
        })?;
        Ok(Self::from_symbols(text.chars()))
    }

    pub fn from_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let mut seqs: Vec<Self> = vec![];

        let mut reader = Reader::from_path(&path).with_context(|| {
            format!(
                "failed to open fasta file: {}",
                path.as_ref().to_string_lossy()
            )
        })?;

        while let Some(record) = reader.next() {
            let record = record.with_context(|| "failed to read fasta record")?;
            let mut header_bytes = record.head().to_vec();
            let first_space_idx = header_bytes.iter().position(|&b| b == UTF8_SPACE);

            let error_context: fn() -> &'static str =
                || "failed to create String from fasta header bytes";

            let (name, details) = match first_space_idx {
                Some(idx) => {
                    let details_bytes = header_bytes.split_off(idx + 1);
                    header_bytes.pop();
                    (
                        String::from_utf8(header_bytes).with_context(error_context)?,
                        Some(String::from_utf8(details_bytes).with_context(error_context)?),
                    )
                }
                None => (
                    String::from_utf8(header_bytes).with_context(error_context)?,
                    None,
                ),
            };

            let mut seq_bytes: Vec<u8> = vec![];
            for line in record.seq_lines() {
                seq_bytes.extend_from_slice(line);
            }

            let mut seq = Sequence::from_utf8(&seq_bytes)
                .with_context(|| format!("failed to read sequence: {name}"))?;
            seq.name = name;
            seq.details = details;

            seqs.push(seq);
        }
        Ok(seqs)
    }

    /// Returns the symbol at the 1-based position `idx`.
    pub fn symbol(&self, idx: usize) -> char {
        debug_assert!(idx >= 1 && idx <= self.length);
        self.symbols[idx]
    }

    /// The symbols of the sequence, without the gap sentinel.
    pub fn residues(&self) -> &[char] {
        &self.symbols[1..]
    }

    /// The symbols at the 0-based positions `start..end` as a new sequence
    /// with the same name. The range is clamped to the sequence.
    pub fn subsequence(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.length);
        let start = start.min(end);

        let mut seq = Self::from_symbols(self.residues()[start..end].iter().copied());
        seq.name = self.name.clone();
        seq
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The display label of every matrix row (or column) this sequence spans.
    pub fn labels(&self) -> &[char] {
        &self.symbols
    }
}

impl FromStr for Sequence {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_symbols(s.chars()))
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, ">{}", self.name)?;

        if let Some(ref details) = self.details {
            write!(f, " {details}")?
        };

        writeln!(f)?;

        // note: the symbols start with a padding gap
        let mut iter = self.residues().chunks(80).peekable();

        while let Some(chunk) = iter.next() {
            write!(f, "{}", chunk.iter().collect::<String>())?;
            if iter.peek().is_some() {
                // if we're not on the last
                // line, add a linebreak
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Debug for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.residues().iter().collect::<String>())
    }
}
