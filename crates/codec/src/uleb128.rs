//! ULEB128 length prefixes for sequences, byte strings and strings.
//!
//! Seven bits per byte, least significant group first, with `0x80` set on
//! every byte but the last. Only the shortest encoding is accepted.

use crate::DecoderError;
use bytes::{BufMut, BytesMut};

/// Largest length BCS allows for a sequence.
pub const MAX_SEQUENCE_LENGTH: usize = (1 << 31) - 1;

/// A `u32` needs at most five 7-bit groups.
const MAX_ULEB128_BYTES: usize = 5;

pub fn write_uleb128(buffer: &mut BytesMut, mut value: u32) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            buffer.put_u8(byte);
            return;
        }
        buffer.put_u8(byte | 0x80);
    }
}

/// Reads a ULEB128 `u32` from the front of `input`, returning the value and
/// the number of bytes consumed.
pub fn read_uleb128(input: &[u8]) -> Result<(u32, usize), DecoderError> {
    let mut value: u64 = 0;

    for (index, &byte) in input.iter().enumerate() {
        if index == MAX_ULEB128_BYTES {
            return Err(DecoderError::Uleb128Overflow);
        }

        let digit = u64::from(byte & 0x7f);
        value |= digit << (7 * index);

        if byte & 0x80 == 0 {
            if index > 0 && digit == 0 {
                return Err(DecoderError::NonCanonicalUleb128);
            }
            let value = u32::try_from(value).map_err(|_| DecoderError::Uleb128Overflow)?;
            return Ok((value, index + 1));
        }
    }

    Err(DecoderError::UnexpectedEof {
        needed: input.len() + 1,
        available: input.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: u32) -> Vec<u8> {
        let mut buffer = BytesMut::new();
        write_uleb128(&mut buffer, value);
        buffer.to_vec()
    }

    #[test]
    fn test_single_byte_values() {
        assert_eq!(encode(0), vec![0x00]);
        assert_eq!(encode(1), vec![0x01]);
        assert_eq!(encode(2), vec![0x02]);
        assert_eq!(encode(127), vec![0x7f]);
    }

    #[test]
    fn test_multi_byte_values() {
        assert_eq!(encode(128), vec![0x80, 0x01]);
        assert_eq!(encode(300), vec![0xac, 0x02]);
        assert_eq!(encode(16_384), vec![0x80, 0x80, 0x01]);
        assert_eq!(encode(u32::MAX), vec![0xff, 0xff, 0xff, 0xff, 0x0f]);
    }

    #[test]
    fn test_read_reports_consumed() {
        assert_eq!(read_uleb128(&[0xac, 0x02, 0xff]).unwrap(), (300, 2));
        assert_eq!(read_uleb128(&[0x00]).unwrap(), (0, 1));
        assert_eq!(
            read_uleb128(&[0xff, 0xff, 0xff, 0xff, 0x0f]).unwrap(),
            (u32::MAX, 5)
        );
    }

    #[test]
    fn test_read_rejects_non_canonical() {
        assert!(matches!(
            read_uleb128(&[0x80, 0x00]),
            Err(DecoderError::NonCanonicalUleb128)
        ));
        assert!(matches!(
            read_uleb128(&[0x81, 0x80, 0x00]),
            Err(DecoderError::NonCanonicalUleb128)
        ));
    }

    #[test]
    fn test_read_rejects_overflow() {
        assert!(matches!(
            read_uleb128(&[0xff, 0xff, 0xff, 0xff, 0x10]),
            Err(DecoderError::Uleb128Overflow)
        ));
        assert!(matches!(
            read_uleb128(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x01]),
            Err(DecoderError::Uleb128Overflow)
        ));
    }

    #[test]
    fn test_read_truncated() {
        assert!(matches!(
            read_uleb128(&[]),
            Err(DecoderError::UnexpectedEof { needed: 1, available: 0 })
        ));
        assert!(matches!(
            read_uleb128(&[0x80]),
            Err(DecoderError::UnexpectedEof { needed: 2, available: 1 })
        ));
    }

    #[test]
    fn test_round_trip_boundaries() {
        for value in [0, 127, 128, 16_383, 16_384, 2_097_151, 2_097_152, u32::MAX] {
            let bytes = encode(value);
            assert_eq!(read_uleb128(&bytes).unwrap(), (value, bytes.len()));
        }
    }
}
