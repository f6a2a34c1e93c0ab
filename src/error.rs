use thiserror::Error;

use crate::header::Tag;

/// Malformed or non canonical DER input
///
/// Only the reader produces these: the writer encodes values chosen by its
/// caller and has no data error to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("input truncated")]
    Truncated,
    #[error("expected {expected} tag, got 0x{got:02x}")]
    UnexpectedTag { expected: Tag, got: u8 },
    #[error("indefinite length is not allowed in DER")]
    IndefiniteLength,
    #[error("length encoded on more bytes than a native integer")]
    LengthOverflow,
    #[error("length not encoded on the smallest number of bytes")]
    NonMinimalLength,
    #[error("length larger than the remaining input")]
    LengthExceedsInput,
    #[error("BOOLEAN: content must be a single 0x00 or 0xff byte")]
    InvalidBoolean,
    #[error("INTEGER: no data")]
    IntegerEmpty,
    #[error("INTEGER: value too wide for the requested type")]
    IntegerTooWide,
    #[error("INTEGER: redundant leading byte")]
    IntegerNotCanonical,
    #[error("NULL: content is not empty")]
    NullNotEmpty,
    #[error("BIT STRING: no data")]
    BitStringEmpty,
    #[error("BIT STRING: {0} unused bits, only 0 is supported")]
    BitStringUnusedBits(u8),
    #[error("unconsumed data left in the enclosing value")]
    TrailingData,
    #[error("sequence still open at the end of decoding")]
    UnbalancedSequence,
}
