//! Canonical ASN.1 DER reader and writer for key blobs
//!
//! Only a small subset of DER is understood: BOOLEAN, INTEGER, NULL,
//! OBJECT IDENTIFIER, OCTET STRING, BIT STRING and SEQUENCE. Everything
//! else, including every BER relaxation, is rejected.
//!
//! Neither side allocates. The [`der::Reader`] gives views into the buffer
//! provided by the user, and the [`der::Writer`] fills a buffer provided
//! by the user, from its end toward its front, so that the length of a
//! SEQUENCE is known when its header is written.
//!
//! The codec has no notion of schema: the order of calls made on the reader
//! or the writer *is* the schema.

#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

mod error;
mod header;
mod intenc;

pub mod der;

pub use error::Error;
pub use header::constants::{READER_MAX_DEPTH, WRITER_MAX_DEPTH};
pub use header::Tag;
