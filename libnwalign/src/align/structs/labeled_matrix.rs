use std::io::Write;

use crate::structs::Sequence;
use anyhow::Result;

/// A dynamic programming grid with one row per prefix of the
/// first sequence and one column per prefix of the second.
pub trait LabeledMatrix {
    fn num_rows(&self) -> usize;
    fn num_cols(&self) -> usize;
    fn cell_string(&self, row: usize, col: usize) -> String;
    fn dump(&self, out: &mut impl Write, seq_1: &Sequence, seq_2: &Sequence) -> Result<()> {
        let row_labels = seq_1.labels();
        let col_labels = seq_2.labels();

        let label = |labels: &[char], idx: usize| labels.get(idx).copied().unwrap_or(' ');

        let mut column_width = 1;
        for row in 0..self.num_rows() {
            for col in 0..self.num_cols() {
                column_width = column_width.max(self.cell_string(row, col).chars().count());
            }
        }

        // the header holds the column labels
        write!(out, " ")?;
        for col in 0..self.num_cols() {
            write!(out, " {:>w$}", label(col_labels, col), w = column_width)?;
        }
        writeln!(out)?;

        for row in 0..self.num_rows() {
            write!(out, "{}", label(row_labels, row))?;
            for col in 0..self.num_cols() {
                write!(
                    out,
                    " {:>w$}",
                    self.cell_string(row, col),
                    w = column_width
                )?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}
