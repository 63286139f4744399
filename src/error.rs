//! Errors raised while building a PDF417 symbol.

use thiserror::Error;

/// Every way the encoding pipeline can fail. A symbol is either fully encoded
/// or not at all, there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The text contains a character that none of the four text compaction
    /// sub-modes can represent.
    #[error("unsupported character {character:?} at position {position}")]
    UnsupportedCharacter { character: char, position: usize },

    /// Length, data and correction codewords do not fit in a single symbol.
    #[error("{required} codewords required but a symbol holds at most {capacity}")]
    CapacityExceeded { required: usize, capacity: usize },

    /// No Reed-Solomon coefficient table exists for this level.
    #[error("unsupported error correction level {0} (expected 0-8)")]
    UnsupportedCorrectionLevel(u8),

    /// A rendering or layout parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
