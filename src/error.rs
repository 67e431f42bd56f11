use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a word count job. Each variant names the offending path.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("input directory '{}' does not exist or is not a directory", .path.display())]
    MissingInputDirectory { path: PathBuf },

    #[error("invalid input file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("cannot read input '{}': {source}", .path.display())]
    UnreadableFile { path: PathBuf, source: io::Error },

    #[error("cannot prepare output directory '{}' ({action}): {source}", .path.display())]
    OutputDirectoryConflict {
        path: PathBuf,
        action: &'static str,
        source: io::Error,
    },

    #[error("cannot write '{}': {source}", .path.display())]
    WriteFailure { path: PathBuf, source: io::Error },
}

impl JobError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::UnreadableFile {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn output_conflict(
        path: impl Into<PathBuf>,
        action: &'static str,
        source: io::Error,
    ) -> Self {
        Self::OutputDirectoryConflict {
            path: path.into(),
            action,
            source,
        }
    }

    pub(crate) fn write_failure(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }
}
