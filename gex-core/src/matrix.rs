//! Labeled string matrices.

mod writer;

use std::collections::HashMap;

pub use self::writer::write;
use crate::{Table, merge::JoinError};

/// The index name of a transposed matrix.
pub const CASE_INDEX_NAME: &str = "case";

/// A matrix with a named index and named columns, both in order.
///
/// Every column has exactly one value per index entry. Index entries may repeat when the table
/// the matrix was created from repeats a key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Matrix {
    index_name: String,
    index: Vec<String>,
    columns: Vec<(String, Vec<String>)>,
}

impl Matrix {
    /// Creates a single column matrix from a table.
    pub fn from_table<I, C>(index_name: I, column_name: C, table: &Table) -> Self
    where
        I: Into<String>,
        C: Into<String>,
    {
        let (index, values): (Vec<_>, Vec<_>) = table.rows().iter().cloned().unzip();

        Self {
            index_name: index_name.into(),
            index,
            columns: vec![(column_name.into(), values)],
        }
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn index(&self) -> &[String] {
        &self.index
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
    }

    pub fn row_count(&self) -> usize {
        self.index.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the values of the row at index `i`, in column order.
    pub fn row(&self, i: usize) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .map(move |(_, values)| values[i].as_str())
    }

    /// Appends `table` as a new column, keeping only the rows whose keys are in both.
    ///
    /// Row order is preserved. A key repeated in `table` is only an error if the matrix has a row
    /// with that key. On error, the matrix is left unchanged.
    pub fn inner_join<C>(&mut self, column_name: C, table: &Table) -> Result<(), JoinError>
    where
        C: Into<String>,
    {
        let column_name = column_name.into();

        if self.column(&column_name).is_some() {
            return Err(JoinError::DuplicateColumn(column_name));
        }

        let mut rhs: HashMap<&str, (&str, usize)> = HashMap::with_capacity(table.len());

        for (key, value) in table.rows() {
            rhs.entry(key.as_str())
                .and_modify(|(_, n)| *n += 1)
                .or_insert((value.as_str(), 1));
        }

        let mut mask = Vec::with_capacity(self.index.len());
        let mut values = Vec::with_capacity(self.index.len());

        for key in &self.index {
            match rhs.get(key.as_str()) {
                Some((_, n)) if *n > 1 => return Err(JoinError::DuplicateKey(key.clone())),
                Some((value, _)) => {
                    mask.push(true);
                    values.push(String::from(*value));
                }
                None => mask.push(false),
            }
        }

        retain_by_mask(&mut self.index, &mask);

        for (_, column) in &mut self.columns {
            retain_by_mask(column, &mask);
        }

        self.columns.push((column_name, values));

        Ok(())
    }

    /// Swaps rows and columns.
    ///
    /// The column names become the index, named `index_name`, and the index becomes the column
    /// names.
    pub fn transpose<I>(&self, index_name: I) -> Self
    where
        I: Into<String>,
    {
        let index = self.column_names().map(String::from).collect();

        let columns = self
            .index
            .iter()
            .enumerate()
            .map(|(i, key)| {
                let values: Vec<_> = self.row(i).map(String::from).collect();
                (key.clone(), values)
            })
            .collect();

        Self {
            index_name: index_name.into(),
            index,
            columns,
        }
    }
}

fn retain_by_mask(values: &mut Vec<String>, mask: &[bool]) {
    let mut flags = mask.iter();
    values.retain(|_| flags.next().copied().unwrap_or(false));
}
