use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Decoder error: {0}")]
    Decoder(#[from] DecoderError),

    #[error("Encoder error: {0}")]
    Encoder(#[from] EncoderError),
}

#[derive(Debug, Error)]
pub enum DecoderError {
    #[error("Unexpected end of input: needed {needed} bytes, {available} available")]
    UnexpectedEof { needed: usize, available: usize },

    #[error("Invalid BCS data: {0}")]
    InvalidData(String),

    #[error("ULEB128 value does not fit in u32")]
    Uleb128Overflow,

    #[error("Non-canonical ULEB128 encoding")]
    NonCanonicalUleb128,

    #[error("Sequence length {length} exceeds maximum of {max}")]
    LengthOverflow { length: usize, max: usize },

    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum EncoderError {
    #[error("Sequence length {length} exceeds maximum of {max}")]
    LengthOverflow { length: usize, max: usize },
}
