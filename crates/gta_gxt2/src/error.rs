//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent warpper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent warpper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// data is not a valid gxt2 table
    #[error("invalid gxt2 table")]
    InvalidTable(#[from] FormatError),

    /// a numeric hash does not fit in 32 bits
    #[error("hash must be >= 0 and <= 4294967295, received {0}")]
    HashOutOfRange(String),

    /// the string starting at `offset` never terminates
    #[error("null terminator not found for entry at offset {offset}, table is possibly corrupt")]
    CorruptEntry {
        /// Start of the unterminated string
        offset: usize,
    },

    /// descriptions are null terminated so they can't contain one
    #[error("description contains a null byte")]
    InteriorNul,

    /// the table would grow past what a u32 offset can address
    #[error("table of {length} bytes can't be addressed with 32 bit offsets")]
    TableTooLarge {
        /// Length the table would have had
        length: usize,
    },
}

/// Error type to provide further information when a table fails validation
#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// buffer ends before the directory does
    #[error("table is truncated")]
    Truncated,

    /// header doesn't start with the table magic
    #[error("missing table magic")]
    InvalidMagic,

    /// the slot after the directory isn't a trailer
    #[error("missing trailer magic")]
    InvalidTrailerMagic,

    /// trailer length field doesn't match the buffer
    #[error("trailer records {expected} bytes but table has {actual}")]
    TrailerLengthMismatch {
        /// Length stored in the trailer
        expected: u32,
        /// Actual buffer length
        actual: usize,
    },

    /// directory hashes must be strictly ascending
    #[error("directory is not sorted at slot {slot}")]
    UnsortedDirectory {
        /// Offending slot index
        slot: usize,
    },

    /// offset points outside of the string heap
    #[error("slot {slot} points outside of the string heap ({offset})")]
    OffsetOutOfBounds {
        /// Offending slot index
        slot: usize,
        /// Offset stored in the slot
        offset: u32,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
