//! Two-column count tables.

use std::io::{self, Read};

use thiserror::Error;

pub const DEFAULT_KEY_COLUMN: &str = "gene";
pub const DEFAULT_VALUE_COLUMN: &str = "raw_counts";

/// The names of the key and value columns to project from an input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Columns {
    pub key: String,
    pub value: String,
}

impl Columns {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Default for Columns {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_COLUMN, DEFAULT_VALUE_COLUMN)
    }
}

/// A list of (key, value) rows in input order.
///
/// Values are kept as their original text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Table {
    rows: Vec<(String, String)>,
}

impl Table {
    pub fn new(rows: Vec<(String, String)>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[(String, String)] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum ReadTableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] csv::Error),
    #[error("missing column: {0}")]
    MissingColumn(String),
}

/// Reads a tab-delimited table with a header, keeping only the key and value columns.
pub fn read<R>(reader: R, columns: &Columns) -> Result<Table, ReadTableError>
where
    R: Read,
{
    const DELIMITER: u8 = b'\t';

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers()?;
    let key_index = find_column(headers, &columns.key)?;
    let value_index = find_column(headers, &columns.value)?;

    let mut record = csv::StringRecord::new();
    let mut rows = Vec::new();

    while reader.read_record(&mut record)? {
        // SAFETY: records must have the same number of fields as the header.
        let key = &record[key_index];
        let value = &record[value_index];
        rows.push((key.into(), value.into()));
    }

    Ok(Table::new(rows))
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize, ReadTableError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| ReadTableError::MissingColumn(name.into()))
}
