use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchDiffError {
    #[error("unable to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed xml in {origin}: {source}")]
    Xml {
        origin: String,
        #[source]
        source: roxmltree::Error,
    },
    #[error("missing field: {0}")]
    MissingField(String),
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl BenchDiffError {
    pub fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        BenchDiffError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn xml<T: Into<String>>(origin: T, source: roxmltree::Error) -> Self {
        BenchDiffError::Xml {
            origin: origin.into(),
            source,
        }
    }

    pub fn missing_field<T: Into<String>>(msg: T) -> Self {
        BenchDiffError::MissingField(msg.into())
    }

    pub fn invalid_number<T: Into<String>>(msg: T) -> Self {
        BenchDiffError::InvalidNumber(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        BenchDiffError::InvalidInput(msg.into())
    }
}
