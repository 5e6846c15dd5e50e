pub mod range;
pub mod uint128;
pub mod uint256;

pub use range::{is_u128, is_u256, U128_CEILING, U256_CEILING};
pub use uint128::U128;
pub use uint256::U256;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("Invalid decimal string: {0:?}")]
    InvalidDecimal(String),

    #[error("Value {value} does not fit in an unsigned {bits}-bit integer")]
    OutOfRange { value: String, bits: u32 },

    #[error("Invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, TypesError>;
