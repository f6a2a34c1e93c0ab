use crate::header::constants::WRITER_MAX_DEPTH;
use crate::header::{length, Tag};
use crate::intenc;

/// DER Writer filling a buffer given by the user, from its end
///
/// Every value is written in front of the previous one, so a structure is
/// written last value first. The length of a SEQUENCE is only known once
/// its content is written, hence the inverted pair of calls around it:
///
/// * [`Writer::end`] marks the end of the SEQUENCE content,
/// * the content is written, last value first,
/// * [`Writer::begin_sequence`] writes the header in front of the content.
///
/// For example `SEQUENCE { INTEGER 1, OCTET STRING "ab" }` is written with:
///
/// ```
/// let mut buf = [0u8; 16];
/// let mut writer = cder::der::Writer::new(&mut buf);
/// writer.end();
/// writer.octetstring(b"ab");
/// writer.integer32(1);
/// writer.begin_sequence();
/// assert_eq!(writer.bytes(), &[0x30, 0x07, 0x02, 0x01, 0x01, 0x04, 0x02, 0x61, 0x62]);
/// ```
///
/// Running out of buffer, or unbalanced `end` / `begin_sequence` calls, are
/// bugs of the caller and panic.
///
/// `MAX_DEPTH` is the size of the marker stack: at most `MAX_DEPTH - 1`
/// sequences can be pending at once.
#[derive(Debug)]
pub struct Writer<'a, const MAX_DEPTH: usize = WRITER_MAX_DEPTH> {
    index: usize,
    buf: &'a mut [u8],
    markers: [usize; MAX_DEPTH],
    depth: usize,
}

impl<'a> Writer<'a> {
    /// create a new DER writer, with the buffer as the user allocated write buffer
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self::with_max_depth(buf)
    }
}

impl<'a, const MAX_DEPTH: usize> Writer<'a, MAX_DEPTH> {
    /// Same as [`Writer::new`], with a marker stack of `MAX_DEPTH` slots
    pub fn with_max_depth(buf: &'a mut [u8]) -> Self {
        Writer {
            index: buf.len(),
            buf,
            markers: [0; MAX_DEPTH],
            depth: 0,
        }
    }

    /// Reserve `sz` bytes in front of what is already written
    fn reserve(&mut self, sz: usize) -> &mut [u8] {
        let Some(start) = self.index.checked_sub(sz) else {
            panic!(
                "DER writer: buffer of {} bytes too small, {} more bytes needed",
                self.buf.len(),
                sz - self.index
            );
        };
        let end = self.index;
        self.index = start;
        &mut self.buf[start..end]
    }

    fn tag(&mut self, tag: Tag) {
        self.reserve(1)[0] = tag.byte();
    }

    fn length(&mut self, len: usize) {
        let out = self.reserve(length::encoded_size(len));
        length::encode(len, out);
    }

    fn copy_data(&mut self, data: &[u8]) {
        self.reserve(data.len()).copy_from_slice(data);
    }

    fn primitive(&mut self, tag: Tag, data: &[u8]) {
        self.copy_data(data);
        self.length(data.len());
        self.tag(tag);
    }

    /// Mark the end of a SEQUENCE content, to be closed by [`Writer::begin_sequence`]
    ///
    /// # Panics
    ///
    /// If `MAX_DEPTH - 1` sequences are already pending.
    pub fn end(&mut self) {
        assert!(
            self.depth + 1 < MAX_DEPTH,
            "DER writer: more than {} nested sequences",
            MAX_DEPTH.saturating_sub(1)
        );
        self.markers[self.depth] = self.index;
        self.depth += 1;
    }

    /// Write the header of the SEQUENCE opened by the matching [`Writer::end`]
    ///
    /// # Panics
    ///
    /// If no sequence is pending, or if the header doesn't fit.
    pub fn begin_sequence(&mut self) {
        assert!(
            self.depth > 0,
            "DER writer: begin_sequence() without a matching end()"
        );
        self.depth -= 1;
        let len = self.markers[self.depth] - self.index;
        self.length(len);
        self.tag(Tag::Sequence);
        tracing::trace!(len, depth = self.depth, "DER sequence written");
    }

    /// Write a boolean to the DER writer
    pub fn bool(&mut self, b: bool) {
        let v = if b { [0xff] } else { [0] };
        self.primitive(Tag::Boolean, &v)
    }

    /// Write a 32 bits integer, on the smallest number of bytes
    pub fn integer32(&mut self, v: i32) {
        self.integer64(i64::from(v))
    }

    /// Write a 64 bits integer, on the smallest number of bytes
    pub fn integer64(&mut self, v: i64) {
        let mut scratch = [0u8; 8];
        let content = intenc::minimal_be(v, &mut scratch);
        self.primitive(Tag::Integer, content)
    }

    /// Write a null to the DER writer
    pub fn null(&mut self) {
        self.primitive(Tag::Null, &[])
    }

    /// Write an OBJECT IDENTIFIER from its already encoded content bytes
    pub fn oid(&mut self, content: &[u8]) {
        self.primitive(Tag::ObjectIdentifier, content)
    }

    /// Write a octetstring to the DER writer
    pub fn octetstring(&mut self, obj: &[u8]) {
        self.primitive(Tag::OctetString, obj)
    }

    /// Write a BIT STRING of whole bytes (0 unused bits)
    pub fn bitstring(&mut self, bits: &[u8]) {
        self.copy_data(bits);
        self.reserve(1)[0] = 0;
        self.length(1 + bits.len());
        self.tag(Tag::BitString);
    }

    /// Number of pending sequences
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len() - self.index
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of bytes that can still be written
    pub fn remaining_capacity(&self) -> usize {
        self.index
    }

    /// The bytes written so far, which are a complete DER stream once no
    /// sequence is pending
    pub fn bytes(&self) -> &[u8] {
        &self.buf[self.index..]
    }

    /// Same as [`Writer::bytes`], borrowed for as long as the buffer
    pub fn into_bytes(self) -> &'a [u8] {
        let index = self.index;
        let buf: &'a [u8] = self.buf;
        &buf[index..]
    }
}
