//! Error types for the simulator.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while reading the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("option {0} expects a value")]
    MissingValue(&'static str),

    #[error("invalid value for {option}: {value:?} ({expected})")]
    InvalidValue {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("unknown pattern: {0} (expected glider, gun, blinker or block)")]
    UnknownPattern(String),
}

/// Errors raised while reading or writing a saved universe.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line that is neither blank, a comment nor two integers.
    #[error("corrupt data on line {line}: {content:?}")]
    Corrupt { line: usize, content: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("could not write frame: {0}")]
    Io(#[from] io::Error),
}
