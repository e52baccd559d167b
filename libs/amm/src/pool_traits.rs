//! Pool trait definitions for unified quoting

use crate::error::Result;
use crate::{CompositePair, Pair};
use types::{Asset, AssetAmount};

/// Pool type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolType {
    /// A single on-chain liquidity pool
    Direct,
    /// Two pools chained through a shared pivot asset
    Composite,
}

/// Unified pool interface so callers can quote through any route the same way
pub trait AmmPool {
    /// Calculate output amount for given input
    fn calc_swap_result(&self, input: &AssetAmount) -> Result<AssetAmount>;

    /// Calculate required input for desired output
    fn calc_reverse_swap_result(&self, output: &AssetAmount) -> Result<AssetAmount>;

    /// Whether `asset` can be swapped through this pool
    fn contains(&self, asset: &Asset) -> bool;

    /// Canonical joined-symbol identifier
    fn symbol(&self) -> String;

    fn pool_type(&self) -> PoolType;
}

impl AmmPool for Pair {
    fn calc_swap_result(&self, input: &AssetAmount) -> Result<AssetAmount> {
        Pair::calc_swap_result(self, input)
    }

    fn calc_reverse_swap_result(&self, output: &AssetAmount) -> Result<AssetAmount> {
        Pair::calc_reverse_swap_result(self, output)
    }

    fn contains(&self, asset: &Asset) -> bool {
        Pair::contains(self, asset)
    }

    fn symbol(&self) -> String {
        Pair::symbol(self)
    }

    fn pool_type(&self) -> PoolType {
        PoolType::Direct
    }
}

impl AmmPool for CompositePair {
    fn calc_swap_result(&self, input: &AssetAmount) -> Result<AssetAmount> {
        CompositePair::calc_swap_result(self, input)
    }

    fn calc_reverse_swap_result(&self, output: &AssetAmount) -> Result<AssetAmount> {
        CompositePair::calc_reverse_swap_result(self, output)
    }

    fn contains(&self, asset: &Asset) -> bool {
        CompositePair::contains(self, asset)
    }

    fn symbol(&self) -> String {
        CompositePair::symbol(self)
    }

    fn pool_type(&self) -> PoolType {
        PoolType::Composite
    }
}
