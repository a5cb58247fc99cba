use std::str::FromStr;

use super::LabeledMatrix;
use crate::alphabet::{
    tag_to_char, GLYPH_LEFT, GLYPH_STOP, GLYPH_UP, GLYPH_UP_LEFT, TAG_LEFT, TAG_STOP, TAG_UP,
    TAG_UP_LEFT, TOKEN_TO_TAG,
};
use thiserror::Error;

/// The neighbor that produced the optimal score of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Consumes a symbol of the first sequence against a gap.
    Up = TAG_UP,
    /// Consumes a symbol of the second sequence against a gap.
    Left = TAG_LEFT,
    /// Consumes a symbol of both sequences.
    UpLeft = TAG_UP_LEFT,
    /// The origin of every alignment path.
    Stop = TAG_STOP,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::UpLeft,
        Direction::Stop,
    ];

    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            TAG_UP => Some(Direction::Up),
            TAG_LEFT => Some(Direction::Left),
            TAG_UP_LEFT => Some(Direction::UpLeft),
            TAG_STOP => Some(Direction::Stop),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Direction::Up => GLYPH_UP,
            Direction::Left => GLYPH_LEFT,
            Direction::UpLeft => GLYPH_UP_LEFT,
            Direction::Stop => GLYPH_STOP,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseDirectionError {
    #[error("direction matrix text has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("unknown direction token \"{token}\" at row {row}, column {col}")]
    UnknownToken {
        row: usize,
        col: usize,
        token: String,
    },
}

/// The winning neighbor of every cell of a score matrix.
///
/// Cells hold raw one-byte tags so that a matrix which was built
/// by hand (or parsed from text) can carry tags that don't name a
/// [`Direction`]; those are reported during traceback.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DirectionMatrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<u8>,
}

impl DirectionMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![TAG_STOP; rows * cols],
        }
    }

    pub fn tag(&self, row: usize, col: usize) -> u8 {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        self.data[row * self.cols + col]
    }

    pub fn set_tag(&mut self, row: usize, col: usize, tag: u8) {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        self.data[row * self.cols + col] = tag;
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Direction> {
        Direction::from_tag(self.tag(row, col))
    }

    pub fn set(&mut self, row: usize, col: usize, direction: Direction) {
        self.set_tag(row, col, direction.tag());
    }

    /// Renders each row as a string of direction glyphs.
    pub fn to_glyph_rows(&self) -> Vec<String> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| self.glyph(row, col))
                    .collect::<String>()
            })
            .collect()
    }

    fn glyph(&self, row: usize, col: usize) -> char {
        let tag = self.tag(row, col);
        match Direction::from_tag(tag) {
            Some(direction) => direction.glyph(),
            None => tag_to_char(&tag),
        }
    }
}

impl LabeledMatrix for DirectionMatrix {
    fn num_rows(&self) -> usize {
        self.rows
    }

    fn num_cols(&self) -> usize {
        self.cols
    }

    fn cell_string(&self, row: usize, col: usize) -> String {
        self.glyph(row, col).to_string()
    }
}

impl FromStr for DirectionMatrix {
    type Err = ParseDirectionError;

    /// Parses a grid of whitespace separated cells, one row per line.
    ///
    /// Cells may be direction glyphs or tag letters (U, L, D, S); any
    /// other single ASCII character is kept as a raw tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = 0;
        let mut cols = 0;
        let mut data: Vec<u8> = vec![];

        for line in s.lines().filter(|l| !l.trim().is_empty()) {
            let mut found = 0;
            for token in line.split_whitespace() {
                let tag = match TOKEN_TO_TAG.get(token) {
                    Some(tag) => *tag,
                    None if token.len() == 1 && token.is_ascii() => token.as_bytes()[0],
                    None => {
                        return Err(ParseDirectionError::UnknownToken {
                            row: rows,
                            col: found,
                            token: token.to_string(),
                        })
                    }
                };
                data.push(tag);
                found += 1;
            }

            if rows == 0 {
                cols = found;
            } else if found != cols {
                return Err(ParseDirectionError::RaggedRow {
                    row: rows,
                    found,
                    expected: cols,
                });
            }
            rows += 1;
        }

        if rows == 0 {
            return Err(ParseDirectionError::Empty);
        }

        Ok(Self { rows, cols, data })
    }
}
