//! # AMM Library - Slip-Based Pool Pricing Engine
//!
//! ## Purpose
//!
//! Exact pricing for continuous-liquidity pools: forward swaps, reverse swaps
//! and two-hop routed swaps, computed on fixed-point big integers scaled to
//! 36 fractional digits so quotes reproduce the settlement formula digit for
//! digit at every asset's native precision.
//!
//! ## Integration Points
//!
//! - **Input Sources**: `Asset` definitions from configuration, reserve
//!   snapshots from chain queries, both as `AssetAmount` values
//! - **Output Destinations**: Quote display, transaction builders
//! - **Precision**: Native asset precision preservation (18 decimals ROWAN, 6 USDC)
//! - **Validation**: Typed errors for foreign assets, ambiguous routes and
//!   outputs beyond pool depth
//!
//! ## Architecture Role
//!
//! ```text
//! SlipMath (closed-form formulas on Quantity)
//!     └── Pair (one pool snapshot, forward/reverse/fee/slip)
//!           └── CompositePair (two Pairs sharing a pivot asset)
//! AmmPool trait: uniform quoting over Pair and CompositePair
//! ```
//!
//! ## Concurrency Profile
//!
//! Every type is an immutable value and every operation a pure function of
//! its inputs: no I/O, no shared state, no caching. Quotes for independent
//! pools can be computed on any number of threads without coordination.

pub mod composite_pair;
pub mod error;
pub mod pair;
pub mod pool_traits;
pub mod slip_math;

pub use composite_pair::CompositePair;
pub use error::{PoolError, Result};
pub use pair::{Pair, SwapQuote};
pub use pool_traits::{AmmPool, PoolType};
pub use slip_math::SlipMath;

/// Common types for AMM calculations
pub use types::{Asset, AssetAmount, AssetError, Network, Quantity};
