//! # Pricing Engine Configuration
//!
//! Loads the static data the pricing engine consumes but never fetches
//! itself: asset definitions and pool reserve snapshots.
//!
//! ## Features
//!
//! - **Asset lists**: JSON or TOML lists of asset definitions, validated
//!   through the `types` constructors and indexed in an [`AssetRegistry`]
//! - **Pool snapshots**: reserve pairs turned into [`amm::Pair`]s
//! - **Quoter settings**: layered file, environment file and `QUOTER_*`
//!   variable loading
//!
//! ## Usage
//!
//! ```rust,no_run
//! use config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config/quoter.toml"), Some("local"))?;
//! let registry = config.registry()?;
//! let pairs = config.pairs(&registry)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod assets;
pub mod pools;
pub mod quoter_config;

// Re-export commonly used types
pub use assets::{parse_assets_json, parse_assets_toml, AssetConfig, AssetList, AssetRegistry};
pub use pools::{build_pairs, PoolConfig};
pub use quoter_config::{load_config, QuoterConfig, QuoterSettings};
