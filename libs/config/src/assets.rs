//! Asset list loading
//!
//! Asset definitions arrive as plain records and only become [`Asset`]s
//! through the validating constructors, so a bad list fails at load time
//! rather than at quote time.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;
use types::{Asset, AssetKey, Network};

/// One entry of an asset list
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AssetConfig {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    pub network: Network,

    /// Contract address; absent for native coins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl AssetConfig {
    pub fn to_asset(&self) -> Result<Asset> {
        Asset::new(
            self.symbol.clone(),
            self.name.clone(),
            self.decimals,
            self.network,
            self.address.clone(),
        )
        .with_context(|| format!("Invalid asset definition '{}'", self.symbol))
    }
}

/// Asset list document
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct AssetList {
    #[serde(default)]
    pub assets: Vec<AssetConfig>,
}

/// JSON lists come either wrapped (`{"assets": [...]}`) or as a bare array
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonAssetList {
    Wrapped(AssetList),
    Bare(Vec<AssetConfig>),
}

/// Parse a JSON asset list
pub fn parse_assets_json(content: &str) -> Result<AssetList> {
    let list: JsonAssetList =
        serde_json::from_str(content).context("Failed to parse JSON asset list")?;

    Ok(match list {
        JsonAssetList::Wrapped(list) => list,
        JsonAssetList::Bare(assets) => AssetList { assets },
    })
}

/// Parse a TOML asset list of `[[assets]]` tables
pub fn parse_assets_toml(content: &str) -> Result<AssetList> {
    toml::from_str(content).context("Failed to parse TOML asset list")
}

/// Validated assets indexed by network and symbol
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    assets: Vec<Asset>,
    by_symbol: HashMap<(Network, String), usize>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry, rejecting invalid or duplicate entries
    pub fn from_configs<'a>(configs: impl IntoIterator<Item = &'a AssetConfig>) -> Result<Self> {
        let mut registry = Self::new();
        for config in configs {
            registry.insert(config.to_asset()?)?;
        }
        Ok(registry)
    }

    /// Add an asset; the same symbol twice on a network, or the same contract
    /// under two symbols, is an error
    pub fn insert(&mut self, asset: Asset) -> Result<()> {
        let lookup = (asset.network(), asset.symbol().to_ascii_lowercase());
        if self.by_symbol.contains_key(&lookup) {
            bail!(
                "Duplicate asset '{}' on network {}",
                asset.symbol(),
                asset.network()
            );
        }
        if let Some(existing) = self.assets.iter().find(|known| known.key() == asset.key()) {
            bail!(
                "Asset '{}' has the same identity {} as '{}'",
                asset.symbol(),
                asset.key(),
                existing.symbol()
            );
        }

        debug!(asset = %asset, key = %asset.key(), "Registered asset");
        self.by_symbol.insert(lookup, self.assets.len());
        self.assets.push(asset);
        Ok(())
    }

    /// Case-insensitive lookup on one network
    pub fn get(&self, network: Network, symbol: &str) -> Option<&Asset> {
        self.by_symbol
            .get(&(network, symbol.to_ascii_lowercase()))
            .map(|&index| &self.assets[index])
    }

    /// Lookup by symbol alone; fails when the symbol is unknown or listed on
    /// more than one network
    pub fn find(&self, symbol: &str) -> Result<&Asset> {
        let matches: Vec<&Asset> = self
            .assets
            .iter()
            .filter(|asset| asset.symbol().eq_ignore_ascii_case(symbol))
            .collect();

        match matches.as_slice() {
            [asset] => Ok(asset),
            [] => bail!("Unknown asset '{symbol}'"),
            _ => bail!(
                "Asset '{symbol}' is listed on {} networks, specify one",
                matches.len()
            ),
        }
    }

    pub fn get_by_key(&self, key: &AssetKey) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.key() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
