use super::views::SchoolRow;
use std::io::Write;

/// Writes school rows as CSV with a header line.
pub fn write_school_rows_csv<W: Write>(rows: &[SchoolRow], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for row in rows {
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}
