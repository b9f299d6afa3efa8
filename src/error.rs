//! Error types for the burrows transforms.
//!
//! Any error returned from a decode means the whole decode failed. Bytes already written to the
//! output before the failure was found are part of the rejected operation and must not be trusted.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BurrowsError {
    /// Absent or zero-length input where a block is required.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An anchor key or recency position outside its valid range.
    #[error("index {index} out of range (limit {limit})")]
    InvalidIndex { index: usize, limit: usize },

    /// Truncated header, missing payload, or premature end of stream.
    #[error("malformed stream: {0}")]
    MalformedStream(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BurrowsError>;
