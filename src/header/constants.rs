pub const TAG_BOOLEAN: u8 = 0x01;
pub const TAG_INTEGER: u8 = 0x02;
pub const TAG_BIT_STRING: u8 = 0x03;
pub const TAG_OCTET_STRING: u8 = 0x04;
pub const TAG_NULL: u8 = 0x05;
pub const TAG_OID: u8 = 0x06;
/// SEQUENCE tag (0x10) with the constructed bit set
pub const TAG_SEQUENCE: u8 = 0x30;

/// Default size of the reader range stack.
///
/// Slot 0 is the top level, so up to `READER_MAX_DEPTH - 1` sequences can be nested.
pub const READER_MAX_DEPTH: usize = 7;

/// Default size of the writer marker stack.
///
/// Up to `WRITER_MAX_DEPTH - 1` sequences can be pending at once.
pub const WRITER_MAX_DEPTH: usize = 6;
