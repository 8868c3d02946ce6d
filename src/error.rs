//! Error taxonomy for the witness → wavetable pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Malformed witness text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid hex digit {found:?} at offset {offset}")]
    InvalidHexDigit { offset: usize, found: char },

    #[error("input length {len} is not a multiple of 64 ({remainder} trailing hex digits)")]
    TrailingPartialChunk { len: usize, remainder: usize },
}

/// Per-file failure; never aborts the rest of the batch
#[derive(Debug, Error)]
pub enum WavetableError {
    #[error("witness artifact not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("reconstructed signal is constant ({value}), cannot normalize")]
    DegenerateRange { value: f64 },

    #[error("failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, WavetableError>;
