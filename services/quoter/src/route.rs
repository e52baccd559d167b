//! Route selection over configured pools
//!
//! A direct pool wins when one exists. Otherwise the first pair of pools
//! that chain through a single pivot asset into the requested outer assets
//! is used.

use amm::{AmmPool, CompositePair, Pair};
use anyhow::{bail, Result};
use std::fmt;
use tracing::debug;
use types::Asset;

/// Pool, or pools, a quote is priced through
#[derive(Debug, Clone)]
pub enum Route {
    Direct(Pair),
    Composite(CompositePair),
}

impl Route {
    /// Resolve a route swapping `from` into `to`
    pub fn resolve(pairs: &[Pair], from: &Asset, to: &Asset) -> Result<Self> {
        if from == to {
            bail!("Cannot route {} into itself", from.ticker());
        }

        if let Some(pair) = pairs.iter().find(|pair| pair.contains(from) && pair.contains(to)) {
            debug!(pool = %pair.symbol(), "Selected direct route");
            return Ok(Route::Direct(pair.clone()));
        }

        for entry in pairs.iter().filter(|pair| pair.contains(from)) {
            for exit in pairs.iter().filter(|pair| pair.contains(to)) {
                // Pools sharing no asset, or both, do not chain
                let Ok(composite) = CompositePair::new(entry.clone(), exit.clone()) else {
                    continue;
                };
                if composite.contains(from) && composite.contains(to) {
                    debug!(
                        pivot = %composite.shared_asset(),
                        first = %entry.symbol(),
                        second = %exit.symbol(),
                        "Selected two-hop route"
                    );
                    return Ok(Route::Composite(composite));
                }
            }
        }

        bail!("No route from {} to {}", from.ticker(), to.ticker())
    }

    /// The route as a uniform quoting surface
    pub fn pool(&self) -> &dyn AmmPool {
        match self {
            Route::Direct(pair) => pair,
            Route::Composite(composite) => composite,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Direct(pair) => write!(f, "direct via {}", pair.symbol()),
            Route::Composite(composite) => write!(
                f,
                "two-hop via {} and {} (pivot {})",
                composite.pair1().symbol(),
                composite.pair2().symbol(),
                composite.shared_asset().ticker()
            ),
        }
    }
}
