//! # sprawl
//!
//! Streams bytes in and writes each one back out as its eight-digit ASCII
//! binary representation, most significant bit first.
//!
//! This library is organized into two modules:
//! - `utils`: error handling and logging initialisation
//! - `encode`: the byte-to-bitstring lookup table, the streaming transcoder
//!   and the inverse bit-string decoder

// Re-export commonly used types at the crate root
pub use utils::error::{Result, SprawlError};
pub use utils::log::init_logging;

pub mod utils {
    pub mod error;
    pub mod log;
}

pub mod encode;

// Public API exports
pub use encode::decode::decode_bits;
pub use encode::table::{DIGITS_PER_BYTE, LookupTable};
pub use encode::transcoder::{
    DEFAULT_BLOCK_SIZE, MAX_BLOCK_SIZE, TranscodeParams, TranscodeStats, Transcoder, WriteStrategy,
    transcode,
};

// Constants
pub const SPRAWL_VERSION: &str = env!("CARGO_PKG_VERSION");
