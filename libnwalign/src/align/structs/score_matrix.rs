use super::LabeledMatrix;

/// The optimal alignment scores of every pair of sequence prefixes.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct ScoreMatrix {
    pub rows: usize,
    pub cols: usize,
    /// The cells as a flat vector, in row-major order.
    //
    // the data is stored in the following pattern:
    //     [
    //         s_(0, 0), s_(0, 1), ..., s_(0, C-1),
    //         ...
    //         s_(R-1, 0), ..., s_(R-1, C-1)
    //     ]
    pub data: Vec<isize>,
}

impl ScoreMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> isize {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: isize) {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[isize] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// The score of the full alignment, held in the bottom-right cell.
    pub fn final_score(&self) -> isize {
        self.get(self.rows - 1, self.cols - 1)
    }

    pub fn to_rows(&self) -> Vec<Vec<isize>> {
        (0..self.rows).map(|row| self.row(row).to_vec()).collect()
    }
}

impl LabeledMatrix for ScoreMatrix {
    fn num_rows(&self) -> usize {
        self.rows
    }

    fn num_cols(&self) -> usize {
        self.cols
    }

    fn cell_string(&self, row: usize, col: usize) -> String {
        self.get(row, col).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::Sequence;

    #[test]
    fn test_score_matrix_flat() {
        let mut matrix = ScoreMatrix::new(3, 4);

        (0..3).for_each(|row| {
            (0..4).for_each(|col| {
                matrix.set(row, col, (row * 10 + col) as isize);
            });
        });

        (0..3).for_each(|row| {
            (0..4).for_each(|col| {
                assert_eq!(matrix.get(row, col), (row * 10 + col) as isize);
            });
        });

        assert_eq!(matrix.row(1), &[10, 11, 12, 13]);
        assert_eq!(matrix.final_score(), 23);
        assert_eq!(matrix.to_rows().len(), 3);
    }

    #[test]
    fn test_dump() -> anyhow::Result<()> {
        let seq_1: Sequence = "A".parse()?;
        let seq_2: Sequence = "AC".parse()?;

        let mut matrix = ScoreMatrix::new(2, 3);
        matrix.data = vec![0, -1, -2, -1, 2, 1];

        let mut out: Vec<u8> = vec![];
        matrix.dump(&mut out, &seq_1, &seq_2)?;

        assert_eq!(
            String::from_utf8(out)?,
            "   -  A  C\n-  0 -1 -2\nA -1  2  1\n"
        );
        Ok(())
    }
}
