//! Pool reserve snapshots
//!
//! A [`PoolConfig`] names two registered assets and their current reserves.
//! Reserves are decimal literals by default; `base_units = true` reads them
//! as integer minor units, the form chain queries return.

use crate::assets::AssetRegistry;
use amm::Pair;
use anyhow::{Context, Result};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use tracing::debug;
use types::{Asset, AssetAmount, Network};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub a: String,
    pub a_amount: String,
    pub b: String,
    pub b_amount: String,

    /// Network both assets are registered on
    #[serde(default = "default_pool_network")]
    pub network: Network,

    #[serde(default)]
    pub base_units: bool,
}

fn default_pool_network() -> Network {
    Network::Sifchain
}

impl PoolConfig {
    /// Resolve both assets against `registry` and build the pool
    pub fn to_pair(&self, registry: &AssetRegistry) -> Result<Pair> {
        let a = self.reserve(registry, &self.a, &self.a_amount)?;
        let b = self.reserve(registry, &self.b, &self.b_amount)?;

        let pair = Pair::new(a, b).with_context(|| format!("Invalid pool {}/{}", self.a, self.b))?;
        debug!(pool = %pair, "Loaded pool snapshot");
        Ok(pair)
    }

    fn reserve(&self, registry: &AssetRegistry, symbol: &str, literal: &str) -> Result<AssetAmount> {
        let asset: Asset = registry
            .get(self.network, symbol)
            .with_context(|| format!("Pool asset '{symbol}' is not registered on {}", self.network))?
            .clone();

        let amount = if self.base_units {
            let units: BigInt = literal
                .trim()
                .parse()
                .with_context(|| format!("Invalid base-unit reserve '{literal}' for {symbol}"))?;
            AssetAmount::from_base_units(asset, units)
        } else {
            AssetAmount::parse(asset, literal)
        };
        amount.with_context(|| format!("Invalid reserve '{literal}' for {symbol}"))
    }
}

/// Build every configured pool, failing on the first invalid one
pub fn build_pairs(pools: &[PoolConfig], registry: &AssetRegistry) -> Result<Vec<Pair>> {
    pools.iter().map(|pool| pool.to_pair(registry)).collect()
}
