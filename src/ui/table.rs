use std::io::{self, Write};

use crate::data::model::Record;

// ---------------------------------------------------------------------------
// Summary table
// ---------------------------------------------------------------------------

/// One left-justified summary row: index, name, mass, year (widths 4/15/10/6).
/// Longer values are not truncated.
pub fn summary_line(index: usize, record: &Record) -> String {
    format!(
        "{index:<4}{:<15}{:<10}{:<6}",
        record.name, record.mass, record.year
    )
}

/// Write the match count followed by one line per record, numbered from 1.
pub fn write_summary<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    writeln!(out, "\nFiltered {} entries.", records.len())?;
    for (i, record) in records.iter().enumerate() {
        writeln!(out, "{}", summary_line(i + 1, record))?;
    }
    Ok(())
}
