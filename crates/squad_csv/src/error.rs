//! Conversion errors, grouped into I/O, parse and structure kinds.

use std::path::PathBuf;

use thiserror::Error;

/// Broad failure category, used by callers that only care which stage broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    Structure,
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to open input file: {}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input")]
    ReadInput(#[source] std::io::Error),

    #[error("Failed to create output file: {}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write CSV output")]
    Write(#[from] csv::Error),

    #[error("Invalid JSON: {0}")]
    Parse(serde_json::Error),

    #[error("Unexpected shape at {location}: expected {expected}, found {found}")]
    Structure {
        location: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Failed to write metadata file: {}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::OpenInput { .. }
            | ConvertError::ReadInput(_)
            | ConvertError::CreateOutput { .. }
            | ConvertError::Write(_)
            | ConvertError::Metadata { .. } => ErrorKind::Io,
            ConvertError::Parse(_) => ErrorKind::Parse,
            ConvertError::Structure { .. } => ErrorKind::Structure,
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            ConvertError::ReadInput(err.into())
        } else {
            ConvertError::Parse(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
