use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum SampleNameError {
    #[error("invalid filename")]
    InvalidFilename,
    #[error("missing sample name field")]
    MissingField,
}

/// A mapping from an input source to the sample name used to label its column.
pub trait NamingStrategy {
    fn sample_name(&self, src: &Path) -> Result<String, SampleNameError>;
}

impl<F> NamingStrategy for F
where
    F: Fn(&Path) -> Result<String, SampleNameError>,
{
    fn sample_name(&self, src: &Path) -> Result<String, SampleNameError> {
        self(src)
    }
}

/// Returns the second dot-delimited field of the filename.
///
/// E.g., `UNCID_1.TCGA-A1-A0SB.rsem.genes.results` is named `TCGA-A1-A0SB`. The filename must have
/// at least two fields.
pub fn second_field(src: &Path) -> Result<String, SampleNameError> {
    const DELIMITER: char = '.';

    let filename = src
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or(SampleNameError::InvalidFilename)?;

    filename
        .split(DELIMITER)
        .nth(1)
        .map(String::from)
        .ok_or(SampleNameError::MissingField)
}
