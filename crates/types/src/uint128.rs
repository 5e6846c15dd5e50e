use crate::range::{be_word, is_u128, le_word, parse_decimal};
use crate::{Result, TypesError};
use num_bigint::{BigInt, BigUint};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// 128-bit unsigned integer, Move's `u128`, stored as two 64-bit words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct U128 {
    hi: u64,
    lo: u64,
}

impl U128 {
    /// Size of the BCS encoding in bytes.
    pub const BYTES: usize = 16;

    pub const ZERO: Self = Self { hi: 0, lo: 0 };
    pub const ONE: Self = Self { hi: 0, lo: 1 };
    pub const MAX: Self = Self {
        hi: u64::MAX,
        lo: u64::MAX,
    };

    pub const fn from_words(hi: u64, lo: u64) -> Self {
        Self { hi, lo }
    }

    pub const fn from_u64(value: u64) -> Self {
        Self { hi: 0, lo: value }
    }

    /// Bits 64..128.
    pub const fn hi(&self) -> u64 {
        self.hi
    }

    /// Bits 0..64.
    pub const fn lo(&self) -> u64 {
        self.lo
    }

    pub const fn is_zero(&self) -> bool {
        self.hi == 0 && self.lo == 0
    }

    pub fn from_big_int(value: &BigInt) -> Result<Self> {
        if !is_u128(value) {
            return Err(TypesError::OutOfRange {
                value: value.to_string(),
                bits: 128,
            });
        }

        let (_, magnitude) = value.to_bytes_be();
        let mut buf = [0u8; Self::BYTES];
        buf[Self::BYTES - magnitude.len()..].copy_from_slice(&magnitude);

        Ok(Self {
            hi: be_word(&buf[0..8]),
            lo: be_word(&buf[8..16]),
        })
    }

    pub fn to_big_int(&self) -> BigInt {
        (BigInt::from(self.hi) << 64usize) + BigInt::from(self.lo)
    }

    pub fn to_big_uint(&self) -> BigUint {
        (BigUint::from(self.hi) << 64usize) + BigUint::from(self.lo)
    }

    pub fn from_dec_str(text: &str) -> Result<Self> {
        Self::from_big_int(&parse_decimal(text)?)
    }

    /// BCS layout: low word then high word, each little-endian.
    pub fn to_le_bytes(&self) -> [u8; Self::BYTES] {
        let mut out = [0u8; Self::BYTES];
        out[0..8].copy_from_slice(&self.lo.to_le_bytes());
        out[8..16].copy_from_slice(&self.hi.to_le_bytes());
        out
    }

    pub fn from_le_bytes(bytes: [u8; Self::BYTES]) -> Self {
        Self {
            lo: le_word(&bytes[0..8]),
            hi: le_word(&bytes[8..16]),
        }
    }

    /// Adds with an incoming carry, returning the sum and the outgoing carry.
    pub fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (lo, carry) = add_words(self.lo, rhs.lo, carry);
        let (hi, carry) = add_words(self.hi, rhs.hi, carry);
        (Self { hi, lo }, carry)
    }

    /// Subtracts with an incoming borrow, returning the difference and the
    /// outgoing borrow.
    pub fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let (lo, borrow) = sub_words(self.lo, rhs.lo, borrow);
        let (hi, borrow) = sub_words(self.hi, rhs.hi, borrow);
        (Self { hi, lo }, borrow)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.carrying_add(rhs, false) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.borrowing_sub(rhs, false) {
            (diff, false) => Some(diff),
            (_, true) => None,
        }
    }
}

pub(crate) fn add_words(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, c0) = a.overflowing_add(b);
    let (sum, c1) = sum.overflowing_add(u64::from(carry));
    (sum, c0 || c1)
}

pub(crate) fn sub_words(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, b0) = a.overflowing_sub(b);
    let (diff, b1) = diff.overflowing_sub(u64::from(borrow));
    (diff, b0 || b1)
}

impl Ord for U128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hi.cmp(&other.hi).then(self.lo.cmp(&other.lo))
    }
}

impl PartialOrd for U128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for U128 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u128> for U128 {
    fn from(value: u128) -> Self {
        Self {
            hi: (value >> 64) as u64,
            lo: value as u64,
        }
    }
}

impl From<U128> for u128 {
    fn from(value: U128) -> Self {
        (u128::from(value.hi) << 64) | u128::from(value.lo)
    }
}

impl From<primitive_types::U128> for U128 {
    fn from(value: primitive_types::U128) -> Self {
        let [lo, hi] = value.0;
        Self { hi, lo }
    }
}

impl From<U128> for primitive_types::U128 {
    fn from(value: U128) -> Self {
        primitive_types::U128([value.lo, value.hi])
    }
}

impl TryFrom<&BigInt> for U128 {
    type Error = TypesError;

    fn try_from(value: &BigInt) -> Result<Self> {
        Self::from_big_int(value)
    }
}

impl From<U128> for BigInt {
    fn from(value: U128) -> Self {
        value.to_big_int()
    }
}

impl fmt::Display for U128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&u128::from(*self), f)
    }
}

impl FromStr for U128 {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_dec_str(s)
    }
}

impl Serialize for U128 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for U128 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::from_dec_str(&text).map_err(de::Error::custom)
    }
}
