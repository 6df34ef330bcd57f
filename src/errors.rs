//! Error types for index construction and for the driver binaries.

use thiserror::Error;

/// Errors that can occur while building a [`crate::data_structures::bd_bwt_index::BdBwtIndex`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("input text is empty")]
    EmptyInput,
    #[error("input text contains the reserved end-of-text sentinel byte 0x01")]
    ContainsSentinel,
    #[error("input text contains a forbidden zero byte")]
    ContainsNulByte,
    #[error("input text of length {len} exceeds the maximum supported length of 2^31 - 1 bytes")]
    TooLong { len: usize },
}

/// Errors produced while parsing the driver's command-line arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("missing input file: pass -f <file>")]
    MissingFile,
    #[error("missing value for argument {0}")]
    MissingValueFor(&'static str),
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

/// I/O failures reported by the driver binaries.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("failed to open file {path}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
