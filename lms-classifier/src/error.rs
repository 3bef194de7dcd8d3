//! Error type shared by every module of the crate.

use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LmsError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Read failure from a reader with no known path.
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("dimension mismatch in {what}: expected {expected}, got {got}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("classifier has not been fitted")]
    NotFitted,

    #[error("cannot fit on an empty training set")]
    EmptyTrainingSet,

    #[error("label must be 0 or 1, got {0}")]
    InvalidLabel(i64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to render plot: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, LmsError>;

impl LmsError {
    pub(crate) fn mismatch(what: &'static str, expected: usize, got: usize) -> Self {
        LmsError::DimensionMismatch {
            what,
            expected,
            got,
        }
    }
}
