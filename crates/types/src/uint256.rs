//! 256-bit unsigned integer, Move's `u256`.
//!
//! A [`U256`] is two [`U128`] halves. Two byte orders are in play and must not
//! be mixed:
//!
//! - the big-endian decomposition used when converting from a big integer
//!   ([`U256::from_be_bytes`]), and
//! - the BCS wire layout ([`U256::to_le_bytes`]), which writes the four words
//!   least significant first, each little-endian.

use crate::range::{be_word, is_u256, le_word, parse_decimal};
use crate::uint128::{add_words, sub_words};
use crate::{Result, TypesError, U128};
use num_bigint::{BigInt, BigUint};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Shl, Shr};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct U256 {
    hi: U128,
    lo: U128,
}

impl U256 {
    /// Size of the BCS encoding in bytes.
    pub const BYTES: usize = 32;

    pub const ZERO: Self = Self::from_halves(U128::ZERO, U128::ZERO);
    pub const ONE: Self = Self::from_halves(U128::ZERO, U128::ONE);
    pub const MAX: Self = Self::from_halves(U128::MAX, U128::MAX);

    pub const fn from_halves(hi: U128, lo: U128) -> Self {
        Self { hi, lo }
    }

    /// Builds a value from four 64-bit words, least significant first.
    pub const fn from_words(words: [u64; 4]) -> Self {
        Self {
            lo: U128::from_words(words[1], words[0]),
            hi: U128::from_words(words[3], words[2]),
        }
    }

    /// The four 64-bit words, least significant first.
    pub const fn as_words(&self) -> [u64; 4] {
        [self.lo.lo(), self.lo.hi(), self.hi.lo(), self.hi.hi()]
    }

    pub const fn from_u64(value: u64) -> Self {
        Self::from_halves(U128::ZERO, U128::from_u64(value))
    }

    /// Bits 128..256.
    pub const fn hi(&self) -> U128 {
        self.hi
    }

    /// Bits 0..128.
    pub const fn lo(&self) -> U128 {
        self.lo
    }

    pub const fn low_u64(&self) -> u64 {
        self.lo.lo()
    }

    pub const fn is_zero(&self) -> bool {
        self.hi.is_zero() && self.lo.is_zero()
    }

    /// Converts from a big integer, failing unless `0 <= value < 2^256`.
    pub fn from_big_int(value: &BigInt) -> Result<Self> {
        if !is_u256(value) {
            return Err(TypesError::OutOfRange {
                value: value.to_string(),
                bits: 256,
            });
        }

        // In range, so the magnitude is at most 32 bytes.
        let (_, magnitude) = value.to_bytes_be();
        let mut buf = [0u8; Self::BYTES];
        buf[Self::BYTES - magnitude.len()..].copy_from_slice(&magnitude);

        Ok(Self::from_be_bytes(buf))
    }

    pub fn from_big_uint(value: &BigUint) -> Result<Self> {
        Self::from_big_int(&BigInt::from(value.clone()))
    }

    /// Replaces the value in place. On error `self` is left untouched.
    pub fn set_big_int(&mut self, value: &BigInt) -> Result<()> {
        *self = Self::from_big_int(value)?;
        Ok(())
    }

    pub fn to_big_int(&self) -> BigInt {
        (self.hi.to_big_int() << 128usize) + self.lo.to_big_int()
    }

    pub fn to_big_uint(&self) -> BigUint {
        (self.hi.to_big_uint() << 128usize) + self.lo.to_big_uint()
    }

    pub fn from_dec_str(text: &str) -> Result<Self> {
        Self::from_big_int(&parse_decimal(text)?)
    }

    /// Big-endian decomposition: bytes `[0..8]` are `hi.hi`, `[8..16]` are
    /// `hi.lo`, `[16..24]` are `lo.hi` and `[24..32]` are `lo.lo`.
    pub fn from_be_bytes(bytes: [u8; Self::BYTES]) -> Self {
        Self {
            hi: U128::from_words(be_word(&bytes[0..8]), be_word(&bytes[8..16])),
            lo: U128::from_words(be_word(&bytes[16..24]), be_word(&bytes[24..32])),
        }
    }

    pub fn to_be_bytes(&self) -> [u8; Self::BYTES] {
        let mut out = [0u8; Self::BYTES];
        out[0..8].copy_from_slice(&self.hi.hi().to_be_bytes());
        out[8..16].copy_from_slice(&self.hi.lo().to_be_bytes());
        out[16..24].copy_from_slice(&self.lo.hi().to_be_bytes());
        out[24..32].copy_from_slice(&self.lo.lo().to_be_bytes());
        out
    }

    /// BCS wire layout: `lo.lo`, `lo.hi`, `hi.lo`, `hi.hi`, each word
    /// little-endian.
    pub fn to_le_bytes(&self) -> [u8; Self::BYTES] {
        let mut out = [0u8; Self::BYTES];
        out[0..8].copy_from_slice(&self.lo.lo().to_le_bytes());
        out[8..16].copy_from_slice(&self.lo.hi().to_le_bytes());
        out[16..24].copy_from_slice(&self.hi.lo().to_le_bytes());
        out[24..32].copy_from_slice(&self.hi.hi().to_le_bytes());
        out
    }

    /// Inverse of [`to_le_bytes`](Self::to_le_bytes). Every 32-byte pattern
    /// is a valid value.
    pub fn from_le_bytes(bytes: [u8; Self::BYTES]) -> Self {
        Self {
            lo: U128::from_words(le_word(&bytes[8..16]), le_word(&bytes[0..8])),
            hi: U128::from_words(le_word(&bytes[24..32]), le_word(&bytes[16..24])),
        }
    }

    pub fn from_le_slice(bytes: &[u8]) -> Result<Self> {
        let array: [u8; Self::BYTES] =
            bytes.try_into().map_err(|_| TypesError::InvalidLength {
                expected: Self::BYTES,
                actual: bytes.len(),
            })?;
        Ok(Self::from_le_bytes(array))
    }

    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let (lo, carry) = self.lo.carrying_add(rhs.lo, false);
        let (hi, carry) = self.hi.carrying_add(rhs.hi, carry);
        (Self { hi, lo }, carry)
    }

    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let (lo, borrow) = self.lo.borrowing_sub(rhs.lo, false);
        let (hi, borrow) = self.hi.borrowing_sub(rhs.hi, borrow);
        (Self { hi, lo }, borrow)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Some(diff),
            (_, true) => None,
        }
    }

    /// Adds a single word, propagating the carry through the upper words.
    pub fn overflowing_add_u64(self, rhs: u64) -> (Self, bool) {
        let mut words = self.as_words();
        let mut carry = false;
        for (i, word) in words.iter_mut().enumerate() {
            let addend = if i == 0 { rhs } else { 0 };
            (*word, carry) = add_words(*word, addend, carry);
        }
        (Self::from_words(words), carry)
    }

    /// Subtracts a single word, propagating the borrow through the upper words.
    pub fn overflowing_sub_u64(self, rhs: u64) -> (Self, bool) {
        let mut words = self.as_words();
        let mut borrow = false;
        for (i, word) in words.iter_mut().enumerate() {
            let subtrahend = if i == 0 { rhs } else { 0 };
            (*word, borrow) = sub_words(*word, subtrahend, borrow);
        }
        (Self::from_words(words), borrow)
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hi.cmp(&other.hi).then(self.lo.cmp(&other.lo))
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Shl<u32> for U256 {
    type Output = Self;

    fn shl(self, shift: u32) -> Self {
        if shift >= 256 {
            return Self::ZERO;
        }

        let words = self.as_words();
        let word_shift = (shift / 64) as usize;
        let bit_shift = shift % 64;
        let mut out = [0u64; 4];

        for i in word_shift..4 {
            let src = i - word_shift;
            out[i] = words[src] << bit_shift;
            if bit_shift > 0 && src > 0 {
                out[i] |= words[src - 1] >> (64 - bit_shift);
            }
        }

        Self::from_words(out)
    }
}

impl Shr<u32> for U256 {
    type Output = Self;

    fn shr(self, shift: u32) -> Self {
        if shift >= 256 {
            return Self::ZERO;
        }

        let words = self.as_words();
        let word_shift = (shift / 64) as usize;
        let bit_shift = shift % 64;
        let mut out = [0u64; 4];

        for i in 0..4 - word_shift {
            let src = i + word_shift;
            out[i] = words[src] >> bit_shift;
            if bit_shift > 0 && src + 1 < 4 {
                out[i] |= words[src + 1] << (64 - bit_shift);
            }
        }

        Self::from_words(out)
    }
}

macro_rules! impl_from_native {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for U256 {
                fn from(value: $ty) -> Self {
                    Self::from_u64(u64::from(value))
                }
            }
        )*
    };
}

impl_from_native!(u8, u16, u32, u64);

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        Self::from_halves(U128::ZERO, U128::from(value))
    }
}

impl From<U128> for U256 {
    fn from(value: U128) -> Self {
        Self::from_halves(U128::ZERO, value)
    }
}

impl From<primitive_types::U256> for U256 {
    fn from(value: primitive_types::U256) -> Self {
        Self::from_words(value.0)
    }
}

impl From<U256> for primitive_types::U256 {
    fn from(value: U256) -> Self {
        primitive_types::U256(value.as_words())
    }
}

impl TryFrom<&BigInt> for U256 {
    type Error = TypesError;

    fn try_from(value: &BigInt) -> Result<Self> {
        Self::from_big_int(value)
    }
}

impl TryFrom<&BigUint> for U256 {
    type Error = TypesError;

    fn try_from(value: &BigUint) -> Result<Self> {
        Self::from_big_uint(value)
    }
}

impl From<U256> for BigInt {
    fn from(value: U256) -> Self {
        value.to_big_int()
    }
}

impl From<U256> for BigUint {
    fn from(value: U256) -> Self {
        value.to_big_uint()
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_big_uint(), f)
    }
}

impl FromStr for U256 {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_dec_str(s)
    }
}

// JSON has no number type wide enough, so the value travels as a decimal string.
impl Serialize for U256 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for U256 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::from_dec_str(&text).map_err(de::Error::custom)
    }
}
