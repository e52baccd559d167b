//! Pool pricing errors

use thiserror::Error;
use types::AssetError;

/// Errors raised by pool construction and swap pricing
///
/// All variants describe invalid caller input; none are transient and no
/// operation returns a partial result alongside them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Swap requested in an asset the pool does not trade
    #[error("Asset {asset} is not part of pool {pool}")]
    AssetNotInPair { asset: String, pool: String },

    /// Composite pools must share exactly one pivot asset
    #[error("Pools {first} and {second} must share exactly one asset, found {shared}")]
    NoSharedAsset {
        first: String,
        second: String,
        shared: usize,
    },

    /// Both sides of a pool hold the same asset
    #[error("Pool cannot hold the same asset on both sides: {asset}")]
    IdenticalAssets { asset: String },

    /// Negative reserve or swap amount
    #[error("Amount must not be negative: {amount}")]
    NegativeAmount { amount: String },

    /// Desired output beyond what the slip formula can pay out
    #[error("Insufficient liquidity: requested {requested} but at most {max} is obtainable")]
    InsufficientLiquidity { requested: String, max: String },

    #[error(transparent)]
    Asset(#[from] AssetError),
}

pub type Result<T> = std::result::Result<T, PoolError>;
