//! Asset identity
//!
//! An [`Asset`] is the immutable description of a fungible unit: symbol,
//! display name, decimal precision, origin network and, for contract tokens,
//! the contract address. Equality never compares display fields; it goes
//! through the typed [`AssetKey`].

use crate::common::errors::AssetError;
use crate::common::fixed_point::PRECISION;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Chain an asset originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Settlement chain hosting the liquidity pools
    Sifchain,
    /// Execution chain hosting bridged ERC-20 contracts
    Ethereum,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Sifchain => "sifchain",
            Network::Ethereum => "ethereum",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sifchain" => Ok(Network::Sifchain),
            "ethereum" => Ok(Network::Ethereum),
            _ => Err(AssetError::UnknownNetwork {
                input: s.to_string(),
            }),
        }
    }
}

/// Typed identity of an asset
///
/// Contract tokens are identified by address, native coins by symbol. Both
/// are normalised to lower case so `0xABC` and `0xabc` name the same token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKey {
    Native { network: Network, symbol: String },
    Contract { network: Network, address: String },
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKey::Native { network, symbol } => write!(f, "{network}:{symbol}"),
            AssetKey::Contract { network, address } => write!(f, "{network}:{address}"),
        }
    }
}

/// Immutable description of a fungible unit
#[derive(Debug, Clone, Serialize)]
pub struct Asset {
    symbol: String,
    name: String,
    decimals: u8,
    network: Network,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(skip)]
    key: AssetKey,
}

impl Asset {
    /// Native coin of a network (no contract address)
    pub fn coin(
        symbol: impl Into<String>,
        name: impl Into<String>,
        decimals: u8,
        network: Network,
    ) -> Result<Self, AssetError> {
        Self::new(symbol.into(), name.into(), decimals, network, None)
    }

    /// Contract token identified by its address
    pub fn token(
        symbol: impl Into<String>,
        name: impl Into<String>,
        decimals: u8,
        network: Network,
        address: impl Into<String>,
    ) -> Result<Self, AssetError> {
        Self::new(
            symbol.into(),
            name.into(),
            decimals,
            network,
            Some(address.into()),
        )
    }

    /// General constructor; `address` decides whether this is a coin or a token
    pub fn new(
        symbol: String,
        name: String,
        decimals: u8,
        network: Network,
        address: Option<String>,
    ) -> Result<Self, AssetError> {
        if u32::from(decimals) > PRECISION {
            return Err(AssetError::UnsupportedDecimals {
                decimals,
                max: PRECISION,
            });
        }

        let key = match &address {
            Some(address) => AssetKey::Contract {
                network,
                address: address.to_ascii_lowercase(),
            },
            None => AssetKey::Native {
                network,
                symbol: symbol.to_ascii_lowercase(),
            },
        };

        Ok(Self {
            symbol,
            name,
            decimals,
            network,
            address,
            key,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Identity used for equality and hashing
    pub fn key(&self) -> &AssetKey {
        &self.key
    }

    /// Upper-case ticker used when rendering amounts
    pub fn ticker(&self) -> String {
        self.symbol.to_ascii_uppercase()
    }
}

impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Asset {}

impl Hash for Asset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.ticker(), self.network)
    }
}
