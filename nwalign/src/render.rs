use std::io::Write;

use colored::Colorize;
use libnwalign::align::structs::AlignmentResult;
use libnwalign::alphabet::GAP_SYMBOL;

/// Writes the three alignment lines with matches in green,
/// mismatches in red and gap columns dimmed.
pub fn write_colored_alignment(
    alignment: &AlignmentResult,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut top = String::new();
    let mut bottom = String::new();

    for column in alignment.columns() {
        let a = column.seq_1.unwrap_or(GAP_SYMBOL).to_string();
        let b = column.seq_2.unwrap_or(GAP_SYMBOL).to_string();
        if column.is_match() {
            top.push_str(&a.green().bold().to_string());
            bottom.push_str(&b.green().bold().to_string());
        } else if column.is_gap() {
            top.push_str(&a.dimmed().to_string());
            bottom.push_str(&b.dimmed().to_string());
        } else {
            top.push_str(&a.red().to_string());
            bottom.push_str(&b.red().to_string());
        }
    }

    writeln!(out, "{}\n{}\n{}", top, alignment.indicator(), bottom)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::assert;
    use libnwalign::align::structs::AlignedColumn;

    #[test]
    fn test_plain_when_colors_disabled() -> anyhow::Result<()> {
        colored::control::set_override(false);

        let alignment = AlignmentResult::from_columns(vec![
            AlignedColumn::pair('A', 'A'),
            AlignedColumn::pair('C', 'G'),
            AlignedColumn::gap_in_1('T'),
        ]);

        let mut out: Vec<u8> = vec![];
        write_colored_alignment(&alignment, &mut out)?;
        let text = String::from_utf8(out)?;
        assert!(text == "AC-\n|  \nAGT\n");
        Ok(())
    }
}
