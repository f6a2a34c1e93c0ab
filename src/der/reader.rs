use crate::error::Error;
use crate::header::constants::READER_MAX_DEPTH;
use crate::header::{length, Tag};
use crate::intenc;

/// Unconsumed part of the input at one nesting level
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Range {
    index: usize,
    len: usize,
}

/// DER Reader over a buffer given by the user
///
/// Values are read in document order, one typed call per value, and
/// `begin_sequence` / `end` around the content of every SEQUENCE.
///
/// The first malformed value puts the reader in a failed state that can't
/// be left: every later call does nothing and returns a default value
/// (`false`, `0`, an empty slice). Decoding is therefore a straight line of
/// calls followed by a single check of [`Reader::success_complete`] (or
/// [`Reader::finish`] to know why it failed). A value returned by a reader
/// that did not complete successfully must not be used.
///
/// `MAX_DEPTH` is the size of the range stack; slot 0 is the top level, so
/// at most `MAX_DEPTH - 1` sequences can be open at once.
#[derive(Clone, Debug)]
pub struct Reader<'a, const MAX_DEPTH: usize = READER_MAX_DEPTH> {
    slice: &'a [u8],
    ranges: [Range; MAX_DEPTH],
    depth: usize,
    failure: Option<Error>,
}

impl<'a> Reader<'a> {
    /// Create a new DER Reader where the read buffer is given by the user
    pub fn new(slice: &'a [u8]) -> Self {
        Self::with_max_depth(slice)
    }
}

impl<'a, const MAX_DEPTH: usize> Reader<'a, MAX_DEPTH> {
    /// Same as [`Reader::new`], with a range stack of `MAX_DEPTH` slots
    ///
    /// # Panics
    ///
    /// If `MAX_DEPTH` is 0.
    pub fn with_max_depth(slice: &'a [u8]) -> Self {
        assert!(MAX_DEPTH > 0, "DER reader: range stack needs at least one slot");
        let mut ranges = [Range::default(); MAX_DEPTH];
        ranges[0] = Range {
            index: 0,
            len: slice.len(),
        };
        Reader {
            slice,
            ranges,
            depth: 0,
            failure: None,
        }
    }

    fn fail(&mut self, error: Error) {
        tracing::debug!(
            %error,
            offset = self.ranges[self.depth].index,
            depth = self.depth,
            "DER decoding failed"
        );
        self.failure = Some(error);
        self.ranges = [Range::default(); MAX_DEPTH];
        self.depth = 0;
    }

    /// Consume the next value of the current level, which must have the tag `tag`,
    /// and return the range of its content
    fn next_assume(&self, tag: Tag) -> Result<(Range, Range), Error> {
        let range = self.ranges[self.depth];
        let input = self
            .slice
            .get(range.index..range.index + range.len)
            .ok_or(Error::Truncated)?;
        if input.len() < 2 {
            return Err(Error::Truncated);
        }
        if input[0] != tag.byte() {
            return Err(Error::UnexpectedTag {
                expected: tag,
                got: input[0],
            });
        }
        let (len, len_size) = length::decode(&input[1..])?;
        let header = 1 + len_size;
        if len > input.len() - header {
            return Err(Error::LengthExceedsInput);
        }
        let consumed = header + len;
        let content = Range {
            index: range.index + header,
            len,
        };
        let rest = Range {
            index: range.index + consumed,
            len: range.len - consumed,
        };
        Ok((content, rest))
    }

    /// Take the next value with the tag `tag`, or fail the reader
    fn subrange(&mut self, tag: Tag) -> Option<Range> {
        if self.failure.is_some() {
            return None;
        }
        match self.next_assume(tag) {
            Ok((content, rest)) => {
                self.ranges[self.depth] = rest;
                Some(content)
            }
            Err(e) => {
                self.fail(e);
                None
            }
        }
    }

    fn subslice(&mut self, tag: Tag) -> Option<&'a [u8]> {
        let content = self.subrange(tag)?;
        let slice = self.slice;
        Some(&slice[content.index..content.index + content.len])
    }

    fn check<T: Default>(&mut self, result: Result<T, Error>) -> T {
        match result {
            Ok(v) => v,
            Err(e) => {
                self.fail(e);
                T::default()
            }
        }
    }

    /// Enter the next SEQUENCE; following calls read its content until [`Reader::end`]
    ///
    /// # Panics
    ///
    /// If `MAX_DEPTH - 1` sequences are already open: the calling schema
    /// nests deeper than this reader allows.
    pub fn begin_sequence(&mut self) {
        if self.failure.is_some() {
            return;
        }
        assert!(
            self.depth + 1 < MAX_DEPTH,
            "DER reader: more than {} nested sequences",
            MAX_DEPTH - 1
        );
        if let Some(content) = self.subrange(Tag::Sequence) {
            self.depth += 1;
            self.ranges[self.depth] = content;
        }
    }

    /// Leave the current SEQUENCE, which must have been entirely read
    ///
    /// # Panics
    ///
    /// If no sequence is open, unless the reader already failed.
    pub fn end(&mut self) {
        if self.failure.is_some() {
            return;
        }
        assert!(
            self.depth > 0,
            "DER reader: end() without a matching begin_sequence()"
        );
        if self.ranges[self.depth].len != 0 {
            self.fail(Error::TrailingData);
            return;
        }
        self.depth -= 1;
    }

    pub fn bool(&mut self) -> bool {
        match self.subslice(Tag::Boolean) {
            None => false,
            Some([0x00]) => false,
            Some([0xff]) => true,
            Some(_) => {
                self.fail(Error::InvalidBoolean);
                false
            }
        }
    }

    /// Read an INTEGER that must fit in 32 bits
    pub fn integer32(&mut self) -> i32 {
        match self.subslice(Tag::Integer) {
            None => 0,
            Some(content) => self.check(intenc::decode_i32(content)),
        }
    }

    /// Read an INTEGER that must fit in 64 bits
    pub fn integer64(&mut self) -> i64 {
        match self.subslice(Tag::Integer) {
            None => 0,
            Some(content) => self.check(intenc::decode_i64(content)),
        }
    }

    pub fn null(&mut self) {
        if let Some(content) = self.subslice(Tag::Null) {
            if !content.is_empty() {
                self.fail(Error::NullNotEmpty);
            }
        }
    }

    /// Read an OBJECT IDENTIFIER, returned as its raw content bytes
    pub fn oid(&mut self) -> &'a [u8] {
        self.subslice(Tag::ObjectIdentifier).unwrap_or_default()
    }

    pub fn octetstring(&mut self) -> &'a [u8] {
        self.subslice(Tag::OctetString).unwrap_or_default()
    }

    /// Read a BIT STRING made of whole bytes (0 unused bits) and return those bytes
    pub fn bitstring(&mut self) -> &'a [u8] {
        match self.subslice(Tag::BitString) {
            None => &[],
            Some([0, bits @ ..]) => bits,
            Some([]) => {
                self.fail(Error::BitStringEmpty);
                &[]
            }
            Some([unused, ..]) => {
                let unused = *unused;
                self.fail(Error::BitStringUnusedBits(unused));
                &[]
            }
        }
    }

    /// No malformed value was met so far
    pub fn success(&self) -> bool {
        self.failure.is_none()
    }

    /// No malformed value was met, every sequence was closed, and the
    /// whole input was consumed
    pub fn success_complete(&self) -> bool {
        self.finish().is_ok()
    }

    /// Same as [`Reader::success_complete`], with the reason of the failure
    pub fn finish(&self) -> Result<(), Error> {
        if let Some(e) = self.failure {
            return Err(e);
        }
        if self.depth != 0 {
            return Err(Error::UnbalancedSequence);
        }
        if self.ranges[0].len != 0 {
            return Err(Error::TrailingData);
        }
        Ok(())
    }

    /// The first error met, if any
    pub fn error(&self) -> Option<Error> {
        self.failure
    }

    /// Number of sequences currently open
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of bytes left to read in the current sequence (or top level)
    pub fn remaining(&self) -> usize {
        self.ranges[self.depth].len
    }
}
