//! Two-hop routing through a shared pivot asset
//!
//! A [`CompositePair`] is a computed view over two [`Pair`]s that share
//! exactly one asset. Quotes are strict compositions of the constituent
//! pairs' own quotes, so routing adds no rounding of its own.

use crate::error::{PoolError, Result};
use crate::pair::Pair;
use tracing::{debug, trace};
use types::{Asset, AssetAmount};

/// Virtual pool between the two outer assets of two pools sharing a pivot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositePair {
    pair1: Pair,
    pair2: Pair,
    pivot: Asset,
    outer: [Asset; 2],
}

impl CompositePair {
    /// Chain two pools; fails unless they share exactly one asset
    pub fn new(pair1: Pair, pair2: Pair) -> Result<Self> {
        let shared: Vec<&Asset> = pair1
            .assets()
            .into_iter()
            .filter(|asset| pair2.contains(asset))
            .collect();

        let pivot = match shared.as_slice() {
            [pivot] => (*pivot).clone(),
            _ => {
                return Err(PoolError::NoSharedAsset {
                    first: pair1.symbol(),
                    second: pair2.symbol(),
                    shared: shared.len(),
                })
            }
        };

        let outer = [
            pair1.other_asset(&pivot)?.clone(),
            pair2.other_asset(&pivot)?.clone(),
        ];

        debug!(
            first = %pair1.symbol(),
            second = %pair2.symbol(),
            pivot = %pivot,
            "Composed two-hop pool"
        );

        Ok(Self {
            pair1,
            pair2,
            pivot,
            outer,
        })
    }

    pub fn pair1(&self) -> &Pair {
        &self.pair1
    }

    pub fn pair2(&self) -> &Pair {
        &self.pair2
    }

    /// The intermediate asset both pools trade
    pub fn shared_asset(&self) -> &Asset {
        &self.pivot
    }

    /// Non-shared asset of `pair1`, then of `pair2`
    pub fn outer_assets(&self) -> [&Asset; 2] {
        [&self.outer[0], &self.outer[1]]
    }

    /// True for either outer asset; the pivot is not tradable through the composite
    pub fn contains(&self, asset: &Asset) -> bool {
        self.outer.iter().any(|outer| outer == asset)
    }

    /// Outer symbols, lower-cased, alphabetical, joined by `_`
    pub fn symbol(&self) -> String {
        let mut symbols = self
            .outer
            .iter()
            .map(|asset| asset.symbol().to_ascii_lowercase())
            .collect::<Vec<_>>();
        symbols.sort();
        symbols.join("_")
    }

    /// Constituent pool trading `asset` against the pivot
    pub fn pair_for(&self, asset: &Asset) -> Result<&Pair> {
        self.hops_from(asset).map(|(near, _)| near)
    }

    /// Route `x` through the pool holding its asset, then the pivot through the other
    pub fn calc_swap_result(&self, x: &AssetAmount) -> Result<AssetAmount> {
        let (entry, exit) = self.hops_from(x.asset())?;

        let pivot_amount = entry.calc_swap_result(x)?;
        trace!(hop = %entry.symbol(), intermediate = %pivot_amount, "First hop");
        let result = exit.calc_swap_result(&pivot_amount)?;

        debug!(pool = %self.symbol(), input = %x, output = %result, "Computed composite swap");
        Ok(result)
    }

    /// Invert through the pool holding `y`'s asset first, then through the other
    pub fn calc_reverse_swap_result(&self, y: &AssetAmount) -> Result<AssetAmount> {
        let (exit, entry) = self.hops_from(y.asset())?;

        let pivot_amount = exit.calc_reverse_swap_result(y)?;
        trace!(hop = %exit.symbol(), intermediate = %pivot_amount, "Last hop inverted");
        let result = entry.calc_reverse_swap_result(&pivot_amount)?;

        debug!(pool = %self.symbol(), desired = %y, required = %result, "Computed composite reverse swap");
        Ok(result)
    }

    /// (pool trading `asset`, the other pool) for an outer asset
    fn hops_from(&self, asset: &Asset) -> Result<(&Pair, &Pair)> {
        if *asset == self.outer[0] {
            Ok((&self.pair1, &self.pair2))
        } else if *asset == self.outer[1] {
            Ok((&self.pair2, &self.pair1))
        } else {
            Err(PoolError::AssetNotInPair {
                asset: asset.key().to_string(),
                pool: self.symbol(),
            })
        }
    }
}
