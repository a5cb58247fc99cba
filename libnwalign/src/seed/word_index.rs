use std::collections::HashMap;

use log::debug;

use super::SeedError;
use crate::structs::Sequence;

/// Maps every distinct word of a genome to the offset of its first occurrence.
///
/// A word is a run of `word_size` consecutive symbols. Offsets are 0-based
/// positions into the residues of the genome.
#[derive(Clone, Debug)]
pub struct WordIndex<'a> {
    word_size: usize,
    positions: HashMap<&'a [char], usize>,
}

impl<'a> WordIndex<'a> {
    pub fn new(genome: &'a Sequence, word_size: usize) -> Result<Self, SeedError> {
        if word_size == 0 {
            return Err(SeedError::ZeroWordSize);
        }

        let mut positions: HashMap<&'a [char], usize> = HashMap::new();
        for (offset, word) in genome.residues().windows(word_size).enumerate() {
            positions.entry(word).or_insert(offset);
        }

        debug!(
            "indexed {} distinct words of length {} in {} genome symbols",
            positions.len(),
            word_size,
            genome.length
        );

        Ok(Self {
            word_size,
            positions,
        })
    }

    pub fn word_size(&self) -> usize {
        self.word_size
    }

    /// The offset of the first occurrence of `word` in the genome.
    pub fn lookup(&self, word: &[char]) -> Option<usize> {
        self.positions.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
