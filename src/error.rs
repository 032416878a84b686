// src/error.rs
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PartitionError {
    #[error("input file does not exist: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV parse error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("column '{column}' not found in header of {}", path.display())]
    MissingColumn { column: String, path: PathBuf },

    #[error("empty '{column}' value in data row {row}")]
    MissingCategory { column: String, row: usize },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write progress output: {0}")]
    Console(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, PartitionError>;

impl PartitionError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingInput { .. } | Self::Read { .. } => 2,
            Self::Parse { .. } => 3,
            Self::MissingColumn { .. } => 4,
            Self::MissingCategory { .. } => 5,
            Self::Write { .. } => 6,
            Self::Console(_) => 1,
        }
    }
}

/// Map a csv writer error to `Write`, keeping the io cause when there is one.
pub(crate) fn write_error(path: impl Into<PathBuf>, err: csv::Error) -> PartitionError {
    let source = match err.into_kind() {
        csv::ErrorKind::Io(e) => e,
        other => io::Error::new(io::ErrorKind::Other, format!("{:?}", other)),
    };
    PartitionError::Write {
        path: path.into(),
        source,
    }
}
