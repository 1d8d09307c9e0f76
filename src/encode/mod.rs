pub mod decode;
pub mod table;
pub mod transcoder;

// Re-export commonly used encoding functionality
pub use decode::*;
pub use table::*;
pub use transcoder::*;

// Re-export error types for convenience
pub use crate::utils::error::{Result, SprawlError};
