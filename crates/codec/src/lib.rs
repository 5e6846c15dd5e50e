//! Binary Canonical Serialization (BCS) for Move values.
//!
//! Integers are fixed-width little-endian, sequences and strings carry a
//! ULEB128 length prefix, and structs are the plain concatenation of their
//! fields. [`U256`] values are always exactly 32 bytes.

pub mod decode;
pub mod encode;
pub mod error;
pub mod traits;
pub mod uleb128;

pub use decode::Decoder;
pub use encode::Encoder;
pub use error::{CodecError, DecoderError, EncoderError};
pub use traits::{Decode, Encode};
pub use uleb128::MAX_SEQUENCE_LENGTH;

use move_bcs_types::{U128, U256};
use std::io::{ErrorKind, Read};
use tracing::trace;

pub fn encode<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>, CodecError> {
    let mut encoder = Encoder::new();
    value.encode(&mut encoder)?;
    Ok(encoder.finish())
}

/// Decodes a single value that must span all of `data`.
pub fn decode<T: Decode>(data: &[u8]) -> Result<T, CodecError> {
    let mut decoder = Decoder::new(data);
    let value = T::decode(&mut decoder)?;
    decoder.finish()?;
    Ok(value)
}

/// Reads the rest of `reader` and decodes it as a single value.
pub fn from_reader<T: Decode, R: Read>(mut reader: R) -> Result<T, CodecError> {
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(DecoderError::Io)?;
    decode(&data)
}

/// Reads one `U256` from `reader`, returning it with the number of bytes
/// consumed. The reader is left at an unspecified position on error.
pub fn read_u256<R: Read>(reader: &mut R) -> Result<(U256, usize), CodecError> {
    let bytes = read_exact_array::<R, { U256::BYTES }>(reader)?;
    Ok((U256::from_le_bytes(bytes), U256::BYTES))
}

/// Reads one `U128` from `reader`, returning it with the number of bytes
/// consumed.
pub fn read_u128<R: Read>(reader: &mut R) -> Result<(U128, usize), CodecError> {
    let bytes = read_exact_array::<R, { U128::BYTES }>(reader)?;
    Ok((U128::from_le_bytes(bytes), U128::BYTES))
}

fn read_exact_array<R: Read, const N: usize>(reader: &mut R) -> Result<[u8; N], CodecError> {
    let mut buf = [0u8; N];
    let mut filled = 0;

    while filled < N {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                trace!(needed = N, available = filled, "reader exhausted");
                return Err(DecoderError::UnexpectedEof {
                    needed: N,
                    available: filled,
                }
                .into());
            }
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(DecoderError::Io(err).into()),
        }
    }

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_encode_decode_u256() {
        let value = U256::from(300u64);
        let encoded = encode(&value).unwrap();
        assert_eq!(encoded.len(), 32);
        assert_eq!(&encoded[..2], &[0x2c, 0x01]);
        let decoded: U256 = decode(&encoded).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let mut encoded = encode(&U256::ONE).unwrap();
        encoded.push(0);
        assert!(matches!(
            decode::<U256>(&encoded),
            Err(CodecError::Decoder(DecoderError::TrailingBytes(1)))
        ));
    }

    #[test]
    fn test_decode_short_u256() {
        assert!(matches!(
            decode::<U256>(&[0u8; 31]),
            Err(CodecError::Decoder(DecoderError::UnexpectedEof {
                needed: 32,
                available: 31
            }))
        ));
    }

    #[test]
    fn test_read_u256_advances_by_32() {
        let mut data = encode(&U256::from(16u64)).unwrap();
        data.extend_from_slice(&[0xaa, 0xbb]);
        let mut cursor = Cursor::new(data);

        let (value, consumed) = read_u256(&mut cursor).unwrap();
        assert_eq!(value, U256::from(16u64));
        assert_eq!(consumed, 32);
        assert_eq!(cursor.position(), 32);
    }

    #[test]
    fn test_read_u256_short_reader() {
        let mut cursor = Cursor::new(vec![1u8; 20]);
        assert!(matches!(
            read_u256(&mut cursor),
            Err(CodecError::Decoder(DecoderError::UnexpectedEof {
                needed: 32,
                available: 20
            }))
        ));
    }

    #[test]
    fn test_read_u128() {
        let mut cursor = Cursor::new(encode(&U128::from(5u64)).unwrap());
        assert_eq!(read_u128(&mut cursor).unwrap(), (U128::from(5u64), 16));
    }

    #[test]
    fn test_from_reader() {
        let bytes = encode(&vec![U256::from(16u64), U256::from(17u64)]).unwrap();
        let decoded: Vec<U256> = from_reader(Cursor::new(bytes)).unwrap();
        assert_eq!(decoded, vec![U256::from(16u64), U256::from(17u64)]);
    }
}
