use crate::traits::Decode;
use crate::uleb128::{read_uleb128, MAX_SEQUENCE_LENGTH};
use crate::{CodecError, DecoderError};
use tracing::trace;

pub struct Decoder<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Decoder { data, position: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Fails with [`DecoderError::TrailingBytes`] if input is left over.
    pub fn finish(&self) -> Result<(), CodecError> {
        match self.remaining() {
            0 => Ok(()),
            left => Err(DecoderError::TrailingBytes(left).into()),
        }
    }

    /// Reads exactly `N` bytes or nothing at all.
    pub fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let available = self.remaining();
        if available < N {
            trace!(
                needed = N,
                available,
                position = self.position,
                "short read"
            );
            return Err(DecoderError::UnexpectedEof {
                needed: N,
                available,
            }
            .into());
        }

        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.position..self.position + N]);
        self.position += N;
        Ok(out)
    }

    fn read_slice(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        let available = self.remaining();
        if available < len {
            trace!(needed = len, available, position = self.position, "short read");
            return Err(DecoderError::UnexpectedEof {
                needed: len,
                available,
            }
            .into());
        }

        let slice = &self.data[self.position..self.position + len];
        self.position += len;
        Ok(slice)
    }

    pub fn decode_length(&mut self) -> Result<usize, CodecError> {
        let (value, consumed) = read_uleb128(&self.data[self.position..]).map_err(|err| {
            trace!(position = self.position, %err, "bad length prefix");
            err
        })?;
        self.position += consumed;

        let length = value as usize;
        if length > MAX_SEQUENCE_LENGTH {
            return Err(DecoderError::LengthOverflow {
                length,
                max: MAX_SEQUENCE_LENGTH,
            }
            .into());
        }
        Ok(length)
    }

    pub fn decode_bytes(&mut self) -> Result<Vec<u8>, CodecError> {
        let length = self.decode_length()?;
        Ok(self.read_slice(length)?.to_vec())
    }

    pub fn decode_seq<T: Decode>(&mut self) -> Result<Vec<T>, CodecError> {
        let length = self.decode_length()?;

        // Every element takes at least one byte, so cap the up-front allocation.
        let mut items = Vec::with_capacity(length.min(self.remaining()));
        for _ in 0..length {
            items.push(T::decode(self)?);
        }
        Ok(items)
    }

    pub fn decode_u8(&mut self) -> Result<u8, CodecError> {
        let [byte] = self.read_fixed::<1>()?;
        Ok(byte)
    }

    pub fn decode_u16(&mut self) -> Result<u16, CodecError> {
        Ok(u16::from_le_bytes(self.read_fixed()?))
    }

    pub fn decode_u32(&mut self) -> Result<u32, CodecError> {
        Ok(u32::from_le_bytes(self.read_fixed()?))
    }

    pub fn decode_u64(&mut self) -> Result<u64, CodecError> {
        Ok(u64::from_le_bytes(self.read_fixed()?))
    }

    pub fn decode_u128(&mut self) -> Result<u128, CodecError> {
        Ok(u128::from_le_bytes(self.read_fixed()?))
    }

    pub fn decode_bool(&mut self) -> Result<bool, CodecError> {
        match self.decode_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(DecoderError::InvalidData(format!("Invalid boolean value: {other}")).into()),
        }
    }

    /// Reads an option tag: `0x00` for none, `0x01` for some.
    pub fn decode_option_tag(&mut self) -> Result<bool, CodecError> {
        match self.decode_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(DecoderError::InvalidData(format!("Invalid option tag: {other}")).into()),
        }
    }
}
