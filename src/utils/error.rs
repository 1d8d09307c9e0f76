use std::io;
use thiserror::Error;

/// Main error type for the sprawl library.
#[derive(Error, Debug)]
pub enum SprawlError {
    /// An I/O error occurred while reading input or writing output
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// An invalid argument was provided
    #[error("Invalid argument: {0}")]
    InvalidArg(String),
    /// A bit string contained something other than '0' or '1'
    #[error("Invalid digit 0x{byte:02x} at offset {offset}")]
    InvalidDigit { offset: usize, byte: u8 },
    /// A bit string ended in the middle of an eight-digit group
    #[error("Truncated group: {len} trailing digit(s)")]
    TruncatedGroup { len: usize },
}

impl From<SprawlError> for io::Error {
    fn from(err: SprawlError) -> Self {
        match err {
            SprawlError::Io(e) => e,
            SprawlError::InvalidArg(_) => io::Error::new(io::ErrorKind::InvalidInput, err.to_string()),
            SprawlError::InvalidDigit { .. } | SprawlError::TruncatedGroup { .. } => {
                io::Error::new(io::ErrorKind::InvalidData, err.to_string())
            }
        }
    }
}

/// A specialized `Result` type for sprawl operations.
pub type Result<T> = std::result::Result<T, SprawlError>;
