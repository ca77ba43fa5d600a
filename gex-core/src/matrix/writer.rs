use std::io::{self, Write};

use super::Matrix;

/// Writes a matrix as CSV.
///
/// The first record is the index name followed by the column names. Each following record is an
/// index entry followed by its row values.
pub fn write<W>(writer: W, matrix: &Matrix) -> io::Result<()>
where
    W: Write,
{
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    write_record(&mut writer, matrix.index_name(), matrix.column_names())?;

    for (i, key) in matrix.index().iter().enumerate() {
        write_record(&mut writer, key, matrix.row(i))?;
    }

    writer.flush()?;

    Ok(())
}

fn write_record<'a, W, I>(writer: &mut csv::Writer<W>, label: &str, fields: I) -> io::Result<()>
where
    W: Write,
    I: Iterator<Item = &'a str>,
{
    writer.write_field(label)?;

    for field in fields {
        writer.write_field(field)?;
    }

    writer.write_record(None::<&[u8]>)?;

    Ok(())
}
