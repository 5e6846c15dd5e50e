use crate::{CodecError, Decoder, DecoderError, Encoder};
use move_bcs_types::{U128, U256};

pub trait Encode {
    fn encode(&self, encoder: &mut Encoder) -> Result<(), CodecError>;
}

pub trait Decode: Sized {
    fn decode(decoder: &mut Decoder) -> Result<Self, CodecError>;
}

macro_rules! impl_primitive {
    ($($ty:ty => $encode:ident, $decode:ident;)*) => {
        $(
            impl Encode for $ty {
                fn encode(&self, encoder: &mut Encoder) -> Result<(), CodecError> {
                    encoder.$encode(*self);
                    Ok(())
                }
            }

            impl Decode for $ty {
                fn decode(decoder: &mut Decoder) -> Result<Self, CodecError> {
                    decoder.$decode()
                }
            }
        )*
    };
}

impl_primitive! {
    u8 => encode_u8, decode_u8;
    u16 => encode_u16, decode_u16;
    u32 => encode_u32, decode_u32;
    u64 => encode_u64, decode_u64;
    u128 => encode_u128, decode_u128;
    bool => encode_bool, decode_bool;
}

impl Encode for U128 {
    fn encode(&self, encoder: &mut Encoder) -> Result<(), CodecError> {
        encoder.encode_fixed(&self.to_le_bytes());
        Ok(())
    }
}

impl Decode for U128 {
    fn decode(decoder: &mut Decoder) -> Result<Self, CodecError> {
        Ok(U128::from_le_bytes(decoder.read_fixed()?))
    }
}

impl Encode for U256 {
    fn encode(&self, encoder: &mut Encoder) -> Result<(), CodecError> {
        encoder.encode_fixed(&self.to_le_bytes());
        Ok(())
    }
}

impl Decode for U256 {
    fn decode(decoder: &mut Decoder) -> Result<Self, CodecError> {
        Ok(U256::from_le_bytes(decoder.read_fixed()?))
    }
}

impl<const N: usize> Encode for [u8; N] {
    fn encode(&self, encoder: &mut Encoder) -> Result<(), CodecError> {
        encoder.encode_fixed(self);
        Ok(())
    }
}

impl<const N: usize> Decode for [u8; N] {
    fn decode(decoder: &mut Decoder) -> Result<Self, CodecError> {
        decoder.read_fixed()
    }
}

impl Encode for str {
    fn encode(&self, encoder: &mut Encoder) -> Result<(), CodecError> {
        encoder.encode_bytes(self.as_bytes())
    }
}

impl Encode for String {
    fn encode(&self, encoder: &mut Encoder) -> Result<(), CodecError> {
        encoder.encode_bytes(self.as_bytes())
    }
}

impl Decode for String {
    fn decode(decoder: &mut Decoder) -> Result<Self, CodecError> {
        let bytes = decoder.decode_bytes()?;
        String::from_utf8(bytes).map_err(|_| {
            CodecError::Decoder(DecoderError::InvalidData(
                "Invalid UTF-8 string".to_string(),
            ))
        })
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, encoder: &mut Encoder) -> Result<(), CodecError> {
        encoder.encode_seq(self)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, encoder: &mut Encoder) -> Result<(), CodecError> {
        encoder.encode_seq(self)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(decoder: &mut Decoder) -> Result<Self, CodecError> {
        decoder.decode_seq()
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self, encoder: &mut Encoder) -> Result<(), CodecError> {
        match self {
            Some(value) => {
                encoder.encode_u8(1);
                value.encode(encoder)
            }
            None => {
                encoder.encode_u8(0);
                Ok(())
            }
        }
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(decoder: &mut Decoder) -> Result<Self, CodecError> {
        if decoder.decode_option_tag()? {
            Ok(Some(T::decode(decoder)?))
        } else {
            Ok(None)
        }
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, encoder: &mut Encoder) -> Result<(), CodecError> {
        (**self).encode(encoder)
    }
}

// Struct fields are concatenated in declaration order with no framing, which
// is exactly how tuples encode.
macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name: Encode),+> Encode for ($($name,)+) {
            #[allow(non_snake_case)]
            fn encode(&self, encoder: &mut Encoder) -> Result<(), CodecError> {
                let ($($name,)+) = self;
                $($name.encode(encoder)?;)+
                Ok(())
            }
        }

        impl<$($name: Decode),+> Decode for ($($name,)+) {
            fn decode(decoder: &mut Decoder) -> Result<Self, CodecError> {
                Ok(($($name::decode(decoder)?,)+))
            }
        }
    };
}

impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
