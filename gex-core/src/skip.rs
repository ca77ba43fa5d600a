//! Diagnostics for inputs dropped from a merge.

use std::path::PathBuf;

use thiserror::Error;

use crate::{merge::JoinError, table::ReadTableError};

#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("invalid table: {0}")]
    InvalidTable(#[from] ReadTableError),
    #[error("join failed: {0}")]
    Join(#[from] JoinError),
}

/// An input source that was excluded and why.
#[derive(Debug)]
pub struct Skipped {
    pub src: PathBuf,
    pub reason: SkipReason,
}

impl Skipped {
    pub fn new<P, R>(src: P, reason: R) -> Self
    where
        P: Into<PathBuf>,
        R: Into<SkipReason>,
    {
        Self {
            src: src.into(),
            reason: reason.into(),
        }
    }
}
