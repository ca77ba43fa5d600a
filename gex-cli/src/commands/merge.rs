use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use gex_core::{
    Columns, Matrix, Table,
    matrix::{self, CASE_INDEX_NAME},
    merge::{MergeError, Merged},
    second_field,
    skip::Skipped,
    sources,
    table::{self, ReadTableError},
};
use thiserror::Error;
use tracing::{info, warn};

use crate::fs;

#[derive(Clone, Debug)]
pub struct Config {
    pub files: Vec<String>,
    pub file_index: Option<PathBuf>,
    pub columns: Columns,
    /// Reserved for column selection.
    pub data_type: String,
    pub csv: bool,
    pub transpose: bool,
    pub output_filename: String,
}

impl Config {
    /// Returns the output filename prefix if CSV output is enabled.
    pub fn output_prefix(&self) -> Option<&str> {
        if self.csv && !self.output_filename.is_empty() {
            Some(self.output_filename.as_str())
        } else {
            None
        }
    }
}

pub fn merge(config: Config) -> Result<Merged, MergeCommandError> {
    info!(
        file_count = config.files.len(),
        file_index = ?config.file_index,
        "resolving files"
    );

    let srcs = resolve_sources(&config.files, config.file_index.as_deref())
        .map_err(MergeCommandError::InvalidFileIndex)?;

    info!(
        src_count = srcs.len(),
        data_type = %config.data_type,
        "resolved files"
    );

    let mut skipped = Vec::new();
    let tables = read_tables(srcs, &config.columns, &mut skipped);

    info!(
        table_count = tables.len(),
        skipped_count = skipped.len(),
        "loaded tables"
    );

    let mut merged = gex_core::merge::merge(tables, &config.columns, &second_field)?;

    for s in &merged.skipped {
        log_skipped(s);
    }

    skipped.append(&mut merged.skipped);
    merged.skipped = skipped;

    info!(
        row_count = merged.matrix.row_count(),
        column_count = merged.matrix.column_count(),
        skipped_count = merged.skipped.len(),
        "merged tables"
    );

    if let Some(prefix) = config.output_prefix() {
        let dst = format!("{prefix}_by_gene.csv");
        info!(%dst, "writing output");
        write_matrix(&dst, &merged.matrix).map_err(MergeCommandError::Output)?;

        if config.transpose {
            let dst = format!("{prefix}_by_case.csv");
            info!(%dst, "writing output");
            let transposed = merged.matrix.transpose(CASE_INDEX_NAME);
            write_matrix(&dst, &transposed).map_err(MergeCommandError::Output)?;
        }
    }

    info!("done");

    Ok(merged)
}

#[derive(Debug, Error)]
pub enum MergeCommandError {
    #[error("invalid file index")]
    InvalidFileIndex(#[source] io::Error),
    #[error("merge failed")]
    Merge(#[from] MergeError),
    #[error("output error")]
    Output(#[source] io::Error),
}

fn resolve_sources(files: &[String], file_index: Option<&Path>) -> io::Result<Vec<PathBuf>> {
    let mut srcs = files.to_vec();

    if let Some(src) = file_index {
        let mut reader = fs::open(src)?;
        srcs.extend(sources::read_index(&mut reader)?);
    }

    Ok(sources::resolve(srcs))
}

fn read_tables(
    srcs: Vec<PathBuf>,
    columns: &Columns,
    skipped: &mut Vec<Skipped>,
) -> Vec<(PathBuf, Table)> {
    let mut tables = Vec::with_capacity(srcs.len());

    for src in srcs {
        match read_table(&src, columns) {
            Ok(table) => tables.push((src, table)),
            Err(e) => {
                let s = Skipped::new(src, e);
                log_skipped(&s);
                skipped.push(s);
            }
        }
    }

    tables
}

fn read_table<P>(src: P, columns: &Columns) -> Result<Table, ReadTableError>
where
    P: AsRef<Path>,
{
    let reader = fs::open(src)?;
    table::read(reader, columns)
}

fn log_skipped(skipped: &Skipped) {
    warn!(src = ?skipped.src, reason = %skipped.reason, "skipped table");
}

fn write_matrix<P>(dst: P, m: &Matrix) -> io::Result<()>
where
    P: AsRef<Path>,
{
    let mut writer = File::create(dst).map(BufWriter::new)?;
    matrix::write(&mut writer, m)?;
    writer.flush()
}
