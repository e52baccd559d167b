//! Error types for asset identity and exact-decimal amount arithmetic
//!
//! Every variant is a caller-input validation failure. Nothing here is
//! transient: retrying the same call with the same inputs fails the same way.

use thiserror::Error;

/// Errors raised while constructing assets or combining asset amounts
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// Arithmetic or comparison attempted between amounts of different assets
    #[error("Mismatched assets: cannot combine {left} with {right}")]
    MismatchedAsset { left: String, right: String },

    /// Amount literal is not plain decimal notation
    #[error("Invalid decimal amount: '{input}' - expected plain decimal notation")]
    InvalidAmount { input: String },

    /// Amount literal carries more fractional digits than the engine keeps
    #[error("Precision loss: '{input}' has more than {max} fractional digits")]
    PrecisionLoss { input: String, max: u32 },

    /// Division by zero in fixed-point arithmetic
    #[error("Division by zero in fixed-point arithmetic")]
    DivisionByZero,

    /// Asset precision beyond what the fixed-point representation can hold
    #[error("Unsupported precision: {decimals} decimals exceeds maximum of {max}")]
    UnsupportedDecimals { decimals: u8, max: u32 },

    /// Network name that does not map onto a known chain
    #[error("Unknown network: '{input}'")]
    UnknownNetwork { input: String },
}
