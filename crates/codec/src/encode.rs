use crate::traits::Encode;
use crate::uleb128::{write_uleb128, MAX_SEQUENCE_LENGTH};
use crate::{CodecError, EncoderError};
use bytes::{BufMut, BytesMut};

pub struct Encoder {
    buffer: BytesMut,
}

impl Encoder {
    pub fn new() -> Self {
        Encoder {
            buffer: BytesMut::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Encoder {
            buffer: BytesMut::with_capacity(capacity),
        }
    }

    pub fn finish(self) -> Vec<u8> {
        self.buffer.to_vec()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Appends raw bytes with no length prefix.
    pub fn encode_fixed(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    pub fn encode_length(&mut self, length: usize) -> Result<(), CodecError> {
        if length > MAX_SEQUENCE_LENGTH {
            return Err(EncoderError::LengthOverflow {
                length,
                max: MAX_SEQUENCE_LENGTH,
            }
            .into());
        }
        // Bounded by MAX_SEQUENCE_LENGTH above.
        write_uleb128(&mut self.buffer, length as u32);
        Ok(())
    }

    /// Length-prefixed byte string.
    pub fn encode_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        self.encode_length(bytes.len())?;
        self.encode_fixed(bytes);
        Ok(())
    }

    pub fn encode_seq<T: Encode>(&mut self, items: &[T]) -> Result<(), CodecError> {
        self.encode_length(items.len())?;
        for item in items {
            item.encode(self)?;
        }
        Ok(())
    }

    pub fn encode_u8(&mut self, value: u8) {
        self.buffer.put_u8(value);
    }

    pub fn encode_u16(&mut self, value: u16) {
        self.buffer.put_u16_le(value);
    }

    pub fn encode_u32(&mut self, value: u32) {
        self.buffer.put_u32_le(value);
    }

    pub fn encode_u64(&mut self, value: u64) {
        self.buffer.put_u64_le(value);
    }

    pub fn encode_u128(&mut self, value: u128) {
        self.buffer.put_u128_le(value);
    }

    pub fn encode_bool(&mut self, value: bool) {
        self.encode_u8(u8::from(value));
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_integers_little_endian() {
        let mut encoder = Encoder::new();
        encoder.encode_u8(0x01);
        encoder.encode_u16(0x0203);
        encoder.encode_u32(0x0405_0607);
        encoder.encode_u64(0x0809_0a0b_0c0d_0e0f);
        assert_eq!(
            encoder.finish(),
            vec![
                0x01, 0x03, 0x02, 0x07, 0x06, 0x05, 0x04, 0x0f, 0x0e, 0x0d, 0x0c, 0x0b, 0x0a,
                0x09, 0x08
            ]
        );
    }

    #[test]
    fn test_encode_u128() {
        let mut encoder = Encoder::new();
        encoder.encode_u128(1 << 64);
        let bytes = encoder.finish();
        assert_eq!(bytes.len(), 16);
        assert_eq!(bytes[8], 1);
    }

    #[test]
    fn test_encode_bool() {
        let mut encoder = Encoder::new();
        encoder.encode_bool(true);
        encoder.encode_bool(false);
        assert_eq!(encoder.finish(), vec![0x01, 0x00]);
    }

    #[test]
    fn test_encode_bytes() {
        let mut encoder = Encoder::new();
        encoder.encode_bytes(b"dog").unwrap();
        assert_eq!(encoder.finish(), vec![0x03, b'd', b'o', b'g']);
    }

    #[test]
    fn test_encode_empty_bytes() {
        let mut encoder = Encoder::new();
        encoder.encode_bytes(&[]).unwrap();
        assert_eq!(encoder.finish(), vec![0x00]);
    }

    #[test]
    fn test_encode_seq() {
        let mut encoder = Encoder::new();
        encoder.encode_seq(&[1u16, 2u16]).unwrap();
        assert_eq!(encoder.finish(), vec![0x02, 0x01, 0x00, 0x02, 0x00]);
    }

    #[test]
    fn test_encode_long_seq_prefix() {
        let items = vec![0u8; 200];
        let mut encoder = Encoder::new();
        encoder.encode_seq(&items).unwrap();
        let bytes = encoder.finish();
        assert_eq!(&bytes[..2], &[0xc8, 0x01]);
        assert_eq!(bytes.len(), 202);
    }

    #[test]
    fn test_encode_length_limit() {
        let mut encoder = Encoder::new();
        assert!(encoder.encode_length(MAX_SEQUENCE_LENGTH).is_ok());
        assert!(matches!(
            encoder.encode_length(MAX_SEQUENCE_LENGTH + 1),
            Err(CodecError::Encoder(EncoderError::LengthOverflow { .. }))
        ));
    }
}
