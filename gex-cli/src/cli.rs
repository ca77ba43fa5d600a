use std::path::PathBuf;

use clap::Parser;
use gex_core::table::{Columns, DEFAULT_KEY_COLUMN, DEFAULT_VALUE_COLUMN};

use crate::commands::Config;

/// Merge per-sample gene expression counts into a single matrix.
#[derive(Parser)]
pub struct Cli {
    /// Input sources (tab-delimited counts, optionally gzip-compressed).
    #[arg(short = 'f', long = "files", num_args = 1..)]
    pub files: Option<Vec<String>>,

    /// Write CSV output.
    #[arg(short = 'c', long = "csv")]
    pub csv: bool,

    /// Also write the matrix indexed by case.
    #[arg(short = 't', long = "transpose")]
    pub transpose: bool,

    /// Output filename prefix.
    #[arg(short = 'o', long = "output_filename", default_value = "GEX_dataframe")]
    pub output_filename: String,

    /// An index of input sources, one per line.
    ///
    /// These are merged with the sources given by `--files`.
    #[arg(short = 'r', long = "file_index")]
    pub file_index: Option<String>,

    /// Data type (reserved).
    #[arg(short = 'd', long = "data_type", default_value = "gene")]
    pub data_type: String,

    /// Key column name.
    #[arg(long, default_value = DEFAULT_KEY_COLUMN)]
    pub key_column: String,

    /// Value column name.
    ///
    /// This is also used as the prefix of the merged column names.
    #[arg(long, default_value = DEFAULT_VALUE_COLUMN)]
    pub value_column: String,
}

impl Cli {
    pub fn has_sources(&self) -> bool {
        self.files.is_some() || self.file_index().is_some()
    }

    /// Returns the file index, treating an empty path as absent.
    pub fn file_index(&self) -> Option<&str> {
        self.file_index.as_deref().filter(|src| !src.is_empty())
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            file_index: cli.file_index().map(PathBuf::from),
            files: cli.files.unwrap_or_default(),
            columns: Columns::new(cli.key_column, cli.value_column),
            data_type: cli.data_type,
            csv: cli.csv,
            transpose: cli.transpose,
            output_filename: cli.output_filename,
        }
    }
}
