//! INTEGER content encoding used in DER
//!
//! Big endian two's complement, on the smallest number of bytes: the first
//! byte may only be 0x00 or 0xff when it carries the sign that the next byte
//! can't carry by itself.

use crate::error::Error;

/// Whether `first` is only a sign extension of `next`
fn redundant_leading(first: u8, next: u8) -> bool {
    (first == 0x00 && next & 0x80 == 0) || (first == 0xff && next & 0x80 != 0)
}

fn decode_be(content: &[u8], width: usize) -> Result<i64, Error> {
    let (first, rest) = content.split_first().ok_or(Error::IntegerEmpty)?;
    if content.len() > width {
        return Err(Error::IntegerTooWide);
    }
    if let Some(next) = rest.first() {
        if redundant_leading(*first, *next) {
            return Err(Error::IntegerNotCanonical);
        }
    }
    // sign extension comes from the first byte
    let acc = i64::from(*first as i8);
    Ok(rest.iter().fold(acc, |acc, b| (acc << 8) | i64::from(*b)))
}

pub(crate) fn decode_i64(content: &[u8]) -> Result<i64, Error> {
    decode_be(content, 8)
}

pub(crate) fn decode_i32(content: &[u8]) -> Result<i32, Error> {
    let v = decode_be(content, 4)?;
    i32::try_from(v).map_err(|_| Error::IntegerTooWide)
}

/// Minimal content bytes of `value`, borrowed from `out`
pub(crate) fn minimal_be(value: i64, out: &mut [u8; 8]) -> &[u8] {
    *out = value.to_be_bytes();
    let mut start = 0;
    while start < out.len() - 1 && redundant_leading(out[start], out[start + 1]) {
        start += 1;
    }
    &out[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::vec::Vec;

    #[rstest]
    #[case(0, vec![0x00])]
    #[case(1, vec![0x01])]
    #[case(127, vec![0x7f])]
    #[case(128, vec![0x00, 0x80])]
    #[case(256, vec![0x01, 0x00])]
    #[case(-1, vec![0xff])]
    #[case(-128, vec![0x80])]
    #[case(-129, vec![0xff, 0x7f])]
    #[case(i64::from(i32::MAX), vec![0x7f, 0xff, 0xff, 0xff])]
    #[case(i64::from(i32::MIN), vec![0x80, 0x00, 0x00, 0x00])]
    #[case(i64::MAX, vec![0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff])]
    #[case(i64::MIN, vec![0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00])]
    fn minimal_encoding(#[case] value: i64, #[case] expected: Vec<u8>) {
        let mut scratch = [0u8; 8];
        assert_eq!(minimal_be(value, &mut scratch), &expected[..]);
        assert_eq!(decode_i64(&expected), Ok(value));
    }

    #[rstest]
    #[case::empty(vec![], Error::IntegerEmpty)]
    #[case::padded_positive(vec![0x00, 0x7f], Error::IntegerNotCanonical)]
    #[case::padded_negative(vec![0xff, 0x80], Error::IntegerNotCanonical)]
    #[case::padded_zero(vec![0x00, 0x00], Error::IntegerNotCanonical)]
    #[case::nine_bytes(vec![0x01, 0, 0, 0, 0, 0, 0, 0, 0], Error::IntegerTooWide)]
    fn decode_i64_rejects(#[case] content: Vec<u8>, #[case] expected: Error) {
        assert_eq!(decode_i64(&content), Err(expected));
    }

    #[test]
    fn decode_i32_bounds() {
        assert_eq!(decode_i32(&[0x7f, 0xff, 0xff, 0xff]), Ok(i32::MAX));
        assert_eq!(decode_i32(&[0x80, 0x00, 0x00, 0x00]), Ok(i32::MIN));
        assert_eq!(decode_i32(&[0x00, 0x80]), Ok(128));
        assert_eq!(
            decode_i32(&[0x00, 0x80, 0x00, 0x00, 0x00]),
            Err(Error::IntegerTooWide)
        );
    }

    #[test]
    fn sign_bit_kept_by_padding() {
        // 0x00 in front of a byte with the high bit set is required, not redundant
        assert_eq!(decode_i64(&[0x00, 0xff]), Ok(255));
        assert_eq!(decode_i64(&[0xff, 0x7f]), Ok(-129));
    }
}
