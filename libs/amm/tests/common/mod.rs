//! Shared asset fixtures for pool pricing tests

#![allow(dead_code)]

use amm::Pair;
use types::{Asset, AssetAmount, Network};

pub fn atk() -> Asset {
    Asset::token("atk", "AppleToken", 6, Network::Ethereum, "123").unwrap()
}

pub fn btk() -> Asset {
    Asset::token("btk", "BananaToken", 18, Network::Ethereum, "1234").unwrap()
}

pub fn eth() -> Asset {
    Asset::coin("eth", "Ethereum", 18, Network::Ethereum).unwrap()
}

pub fn rwn() -> Asset {
    Asset::coin("rwn", "Rowan", 18, Network::Sifchain).unwrap()
}

/// 18-decimal token on the execution chain
pub fn token18(symbol: &str, address: &str) -> Asset {
    Asset::token(symbol, symbol, 18, Network::Ethereum, address).unwrap()
}

pub fn amount(asset: &Asset, literal: &str) -> AssetAmount {
    AssetAmount::parse(asset.clone(), literal).unwrap()
}

pub fn pair(a: &Asset, a_amount: &str, b: &Asset, b_amount: &str) -> Pair {
    Pair::new(amount(a, a_amount), amount(b, b_amount)).unwrap()
}
