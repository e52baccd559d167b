//! Quoter Configuration Module
//!
//! Loads the quoter's settings, asset list and pool snapshots from a TOML
//! file with environment-specific overrides.

use crate::assets::{parse_assets_json, parse_assets_toml, AssetConfig, AssetRegistry};
use crate::pools::{build_pairs, PoolConfig};
use amm::Pair;
use anyhow::{Context, Result};
use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use types::Network;

/// Main quoter configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct QuoterConfig {
    #[serde(default)]
    pub quoter: QuoterSettings,

    /// Inline asset definitions
    #[serde(default)]
    pub assets: Vec<AssetConfig>,

    /// Reserve snapshots
    #[serde(default)]
    pub pools: Vec<PoolConfig>,
}

/// Global quoter settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct QuoterSettings {
    /// Default tracing directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Network used to resolve bare symbols on the command line
    #[serde(default)]
    pub default_network: Option<Network>,

    /// External asset list (`.json` or `.toml`), merged with inline assets
    #[serde(default)]
    pub asset_list: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for QuoterSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_network: None,
            asset_list: None,
        }
    }
}

impl QuoterConfig {
    /// Load configuration from files with environment overrides
    ///
    /// Sources, later ones winning: `base_path`, then
    /// `environments/<environment>.toml` next to it, then `QUOTER_*`
    /// variables with `__` separating nested keys
    /// (`QUOTER_QUOTER__LOG_LEVEL=debug`).
    pub fn load(base_path: &Path, environment: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::from(base_path).required(true));

        // Add environment-specific overrides if specified
        if let Some(env) = environment {
            let env_file = base_path
                .parent()
                .unwrap_or(Path::new("."))
                .join("environments")
                .join(format!("{env}.toml"));

            if env_file.exists() {
                info!("Loading environment config: {:?}", env_file);
                builder = builder.add_source(File::from(env_file));
            } else {
                warn!("Environment config not found: {:?}", env_file);
            }
        }

        // Override with environment variables (QUOTER_ prefix)
        builder = builder.add_source(
            Environment::with_prefix("QUOTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .with_context(|| format!("Failed to build configuration from {base_path:?}"))?;

        let mut loaded: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        // A relative asset list is relative to the config file
        if let Some(list) = &loaded.quoter.asset_list {
            let path = Path::new(list);
            if path.is_relative() && !list.starts_with('$') && !list.starts_with('~') {
                if let Some(dir) = base_path.parent() {
                    loaded.quoter.asset_list = Some(dir.join(path).to_string_lossy().into_owned());
                }
            }
        }

        Ok(loaded)
    }

    /// Expand `$VAR` and `~` in path values
    pub fn expand_env_vars(&mut self) -> Result<()> {
        if let Some(list) = &self.quoter.asset_list {
            let expanded = shellexpand::full(list).context("Failed to expand asset list path")?;
            self.quoter.asset_list = Some(expanded.to_string());
        }
        Ok(())
    }

    /// Inline assets plus those of the external asset list
    pub fn asset_configs(&self) -> Result<Vec<AssetConfig>> {
        let mut configs = self.assets.clone();

        if let Some(list) = &self.quoter.asset_list {
            let path = PathBuf::from(list);
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read asset list {path:?}"))?;

            let parsed = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => parse_assets_toml(&content)?,
                _ => parse_assets_json(&content)?,
            };
            debug!(path = ?path, count = parsed.assets.len(), "Loaded asset list");
            configs.extend(parsed.assets);
        }

        Ok(configs)
    }

    /// Validated registry of every configured asset
    pub fn registry(&self) -> Result<AssetRegistry> {
        AssetRegistry::from_configs(&self.asset_configs()?)
    }

    /// Every configured pool, resolved against `registry`
    pub fn pairs(&self, registry: &AssetRegistry) -> Result<Vec<Pair>> {
        build_pairs(&self.pools, registry)
    }
}

/// Convenience function to load configuration and expand paths
pub fn load_config(path: &Path, environment: Option<&str>) -> Result<QuoterConfig> {
    let mut config = QuoterConfig::load(path, environment)?;
    config.expand_env_vars()?;
    Ok(config)
}
