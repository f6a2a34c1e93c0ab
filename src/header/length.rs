//! DER length octets
//!
//! DER only allows the definite form, on the smallest number of bytes:
//!
//! * Short : 1 byte, for any length value less than 0x80
//! * Long : 1 + n bytes, `0x80 | n` followed by the length in big endian,
//!   where n is between 1 and the size of a native integer
//!
//! The indefinite form (a lone 0x80) is rejected.

use core::mem::size_of;

use crate::error::Error;

const LONG_FORM: u8 = 0b1000_0000;
const NB_BYTES_MASK: u8 = 0b0111_1111;

/// Decode the length octets at the start of `slice`
///
/// Return the length value and the number of bytes of the encoding.
pub fn decode(slice: &[u8]) -> Result<(usize, usize), Error> {
    let first = *slice.first().ok_or(Error::Truncated)?;
    if first & LONG_FORM == 0 {
        return Ok((usize::from(first), 1));
    }

    let nb_bytes = usize::from(first & NB_BYTES_MASK);
    if nb_bytes == 0 {
        return Err(Error::IndefiniteLength);
    }
    if nb_bytes > size_of::<usize>() {
        return Err(Error::LengthOverflow);
    }
    let octets = slice.get(1..1 + nb_bytes).ok_or(Error::Truncated)?;
    if octets.first() == Some(&0) {
        return Err(Error::NonMinimalLength);
    }
    let value = octets
        .iter()
        .fold(0usize, |acc, b| (acc << 8) | usize::from(*b));
    if value < 0x80 {
        return Err(Error::NonMinimalLength);
    }
    Ok((value, 1 + nb_bytes))
}

/// Number of bytes taken by the DER encoding of the length `v`
pub fn encoded_size(v: usize) -> usize {
    if v < 0x80 {
        1
    } else {
        1 + nb_bytes(v)
    }
}

/// Encode the length `v` in `out`, which must be exactly `encoded_size(v)` bytes
pub fn encode(v: usize, out: &mut [u8]) {
    debug_assert_eq!(out.len(), encoded_size(v));
    if v < 0x80 {
        out[0] = v as u8;
        return;
    }
    let nb_bytes = nb_bytes(v);
    out[0] = LONG_FORM | nb_bytes as u8;
    out[1..].copy_from_slice(&v.to_be_bytes()[size_of::<usize>() - nb_bytes..]);
}

fn nb_bytes(v: usize) -> usize {
    size_of::<usize>() - (v.leading_zeros() / 8) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::vec::Vec;

    fn encode_vec(v: usize) -> Vec<u8> {
        let mut out = vec![0u8; encoded_size(v)];
        encode(v, &mut out);
        out
    }

    #[rstest]
    #[case(0, vec![0x00])]
    #[case(5, vec![0x05])]
    #[case(0x7f, vec![0x7f])]
    #[case(0x80, vec![0x81, 0x80])]
    #[case(0xff, vec![0x81, 0xff])]
    #[case(0x100, vec![0x82, 0x01, 0x00])]
    #[case(0x0210, vec![0x82, 0x02, 0x10])]
    #[case(0x01_0000, vec![0x83, 0x01, 0x00, 0x00])]
    fn encode_smallest(#[case] value: usize, #[case] expected: Vec<u8>) {
        assert_eq!(encoded_size(value), expected.len());
        assert_eq!(encode_vec(value), expected);
        assert_eq!(decode(&expected), Ok((value, expected.len())));
    }

    #[rstest]
    #[case::empty(vec![], Error::Truncated)]
    #[case::indefinite(vec![0x80], Error::IndefiniteLength)]
    #[case::short_as_long(vec![0x81, 0x05], Error::NonMinimalLength)]
    #[case::just_below_long(vec![0x81, 0x7f], Error::NonMinimalLength)]
    #[case::leading_zero(vec![0x82, 0x00, 0x80], Error::NonMinimalLength)]
    #[case::missing_octets(vec![0x82, 0x01], Error::Truncated)]
    #[case::too_many_octets(vec![0x89, 1, 0, 0, 0, 0, 0, 0, 0, 0], Error::LengthOverflow)]
    fn decode_rejects(#[case] input: Vec<u8>, #[case] expected: Error) {
        assert_eq!(decode(&input), Err(expected));
    }

    #[test]
    fn decode_ignores_following_bytes() {
        assert_eq!(decode(&[0x03, 0xaa, 0xbb]), Ok((3, 1)));
        assert_eq!(decode(&[0x81, 0x90, 0x00]), Ok((0x90, 2)));
    }

    #[test]
    fn decode_encode_length() {
        for v in &[
            1usize, 10, 32, 43, 46, 56, 80, 88, 92, 102, 140, 200, 340, 359, 469, 699, 999, 1001,
            1394, 2149214, 241421421,
        ] {
            let encoded = encode_vec(*v);
            assert_eq!(decode(&encoded), Ok((*v, encoded.len())), "length {}", v);
        }
    }
}
