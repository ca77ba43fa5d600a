//! Merging of per-sample count tables into a single matrix.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::{Columns, Matrix, NamingStrategy, SampleNameError, Table, skip::Skipped};

#[derive(Debug, Error)]
pub enum JoinError {
    #[error("invalid sample name: {0}")]
    InvalidSampleName(#[from] SampleNameError),
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("duplicate column: {0}")]
    DuplicateColumn(String),
}

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("no usable input")]
    NoUsableInput,
}

#[derive(Debug)]
pub struct Merged {
    pub matrix: Matrix,
    pub skipped: Vec<Skipped>,
}

/// Merges tables by successive inner joins on the key column.
///
/// Each table contributes one column named `<value column>_<sample name>`. The first table with a
/// sample name seeds the matrix as is. Tables that cannot be joined are skipped and reported in
/// [`Merged::skipped`], leaving the matrix unchanged.
pub fn merge<I, P, N>(
    tables: I,
    columns: &Columns,
    naming_strategy: &N,
) -> Result<Merged, MergeError>
where
    I: IntoIterator<Item = (P, Table)>,
    P: Into<PathBuf>,
    N: NamingStrategy + ?Sized,
{
    let mut matrix = None;
    let mut skipped = Vec::new();

    for (src, table) in tables {
        let src = src.into();

        let result = column_name(&src, columns, naming_strategy)
            .map_err(JoinError::from)
            .and_then(|name| join(&mut matrix, &columns.key, name, &table));

        match (result, &matrix) {
            (Ok(()), Some(matrix)) => debug!(
                src = ?src,
                row_count = matrix.row_count(),
                column_count = matrix.column_count(),
                "joined table"
            ),
            (Ok(()), None) => {}
            (Err(e), _) => skipped.push(Skipped::new(src, e)),
        }
    }

    let matrix = matrix.ok_or(MergeError::NoUsableInput)?;

    Ok(Merged { matrix, skipped })
}

fn column_name<N>(
    src: &Path,
    columns: &Columns,
    naming_strategy: &N,
) -> Result<String, SampleNameError>
where
    N: NamingStrategy + ?Sized,
{
    let sample_name = naming_strategy.sample_name(src)?;
    Ok(format!("{}_{sample_name}", columns.value))
}

fn join(
    matrix: &mut Option<Matrix>,
    key: &str,
    column_name: String,
    table: &Table,
) -> Result<(), JoinError> {
    if let Some(matrix) = matrix {
        return matrix.inner_join(column_name, table);
    }

    *matrix = Some(Matrix::from_table(key, column_name, table));

    Ok(())
}
