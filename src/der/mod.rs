//! Distinguised Encoding Rules (DER) Reader and Writer
//!
//! This encoding enforces one canonical representation of the encoding.
//! The reader rejects anything else: non minimal integers or lengths,
//! indefinite lengths, booleans other than 0x00 / 0xff, trailing data.
//!
//! This is the usual format of cryptographic material. Both sides work on a
//! buffer owned by the caller with fixed size state, and never allocate.
pub mod reader;
pub mod writer;

pub use self::{reader::Reader, writer::Writer};
