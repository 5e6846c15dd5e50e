//! Range ceilings and the decimal parser shared by [`U128`](crate::U128) and
//! [`U256`](crate::U256).

use crate::{Result, TypesError};
use num_bigint::{BigInt, Sign};
use std::sync::LazyLock;

/// 2^128, the exclusive upper bound of `U128`.
pub static U128_CEILING: LazyLock<BigInt> = LazyLock::new(|| BigInt::from(1u8) << 128usize);

/// 2^256, the exclusive upper bound of `U256`.
pub static U256_CEILING: LazyLock<BigInt> = LazyLock::new(|| BigInt::from(1u8) << 256usize);

/// Returns true if `value` lies in `[0, 2^128)`.
pub fn is_u128(value: &BigInt) -> bool {
    value.sign() != Sign::Minus && value < &*U128_CEILING
}

/// Returns true if `value` lies in `[0, 2^256)`.
pub fn is_u256(value: &BigInt) -> bool {
    value.sign() != Sign::Minus && value < &*U256_CEILING
}

/// Parses an unsigned base-10 numeral. Signs, separators and whitespace are
/// rejected; leading zeros are not.
pub(crate) fn parse_decimal(text: &str) -> Result<BigInt> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TypesError::InvalidDecimal(text.to_string()));
    }

    BigInt::parse_bytes(text.as_bytes(), 10)
        .ok_or_else(|| TypesError::InvalidDecimal(text.to_string()))
}

/// Reads one big-endian 64-bit word from an 8-byte slice.
pub(crate) fn be_word(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(bytes);
    u64::from_be_bytes(word)
}

/// Reads one little-endian 64-bit word from an 8-byte slice.
pub(crate) fn le_word(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(bytes);
    u64::from_le_bytes(word)
}
