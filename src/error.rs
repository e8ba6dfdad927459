//! Error type shared by the loaders, the generator and the aggregator.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),
    #[error("Input file is not valid UTF-8: {0}")]
    InputDecodeError(PathBuf),
    #[error("Cannot write to {path}: {source}")]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WordlistError>;
