//! # Asset Types Library
//!
//! Asset identity and exact-decimal amount types consumed by the AMM pricing
//! engine.
//!
//! ## Design Philosophy
//!
//! - **No Precision Loss**: All quantities stored as big integers scaled by 10^36
//! - **Native Precision Rendering**: Every amount prints at its asset's own width
//! - **Typed Identity**: Asset equality goes through [`AssetKey`], never through
//!   display strings
//! - **Clear Boundaries**: Explicit conversions to minor units and to
//!   `rust_decimal::Decimal`
//!
//! ## Quick Start
//!
//! ```rust
//! use types::{Asset, AssetAmount, Network};
//!
//! let atk = Asset::token("atk", "AppleToken", 6, Network::Ethereum, "123").unwrap();
//! let reserve = AssetAmount::parse(atk, "1000000").unwrap();
//! assert_eq!(reserve.to_string(), "1000000.000000 ATK");
//! ```
//!
//! ## Integration Points
//!
//! - **Input Sources**: Asset lists from the config loader, reserve snapshots
//!   from chain queries (decimal strings or integer minor units)
//! - **Output Destinations**: Pool pricing in the `amm` crate, quote rendering

pub mod asset;
pub mod asset_amount;
pub mod common;

pub use asset::{Asset, AssetKey, Network};
pub use asset_amount::AssetAmount;
pub use common::errors::AssetError;
pub use common::fixed_point::{div_round_half_even, pow10, Quantity, PRECISION};

pub type Result<T> = std::result::Result<T, AssetError>;
