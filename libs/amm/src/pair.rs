//! Two-asset liquidity pool pricing
//!
//! A [`Pair`] is a value snapshot of a pool's two reserves. It is rebuilt
//! from fresh chain data for every quote and never mutated.
//!
//! Quotes leave the pair at the settling asset's native precision, so a
//! pivot amount fed into a second pool carries only transferable digits.

use crate::error::{PoolError, Result};
use crate::slip_math::SlipMath;
use std::fmt;
use tracing::{debug, warn};
use types::{Asset, AssetAmount, AssetError, Quantity};

/// Swap quote with the derived display quantities of the same formula family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapQuote {
    pub input: AssetAmount,
    pub output: AssetAmount,
    /// Retained by the pool, denominated in the output asset
    pub liquidity_fee: AssetAmount,
    /// Dimensionless, `0.21` means 21%
    pub trade_slip: Quantity,
}

/// Unordered pool of exactly two distinct assets and their balances
#[derive(Debug, Clone)]
pub struct Pair {
    amounts: [AssetAmount; 2],
}

impl Pair {
    /// Build a pool snapshot from its two current reserves
    pub fn new(a: AssetAmount, b: AssetAmount) -> Result<Self> {
        if a.asset() == b.asset() {
            return Err(PoolError::IdenticalAssets {
                asset: a.asset().key().to_string(),
            });
        }
        if let Some(negative) = [&a, &b].into_iter().find(|r| r.amount().is_negative()) {
            return Err(PoolError::NegativeAmount {
                amount: negative.to_string(),
            });
        }

        Ok(Self { amounts: [a, b] })
    }

    /// Reserves in construction order
    pub fn amounts(&self) -> &[AssetAmount; 2] {
        &self.amounts
    }

    pub fn assets(&self) -> [&Asset; 2] {
        [self.amounts[0].asset(), self.amounts[1].asset()]
    }

    pub fn contains(&self, asset: &Asset) -> bool {
        self.amounts.iter().any(|reserve| reserve.asset() == asset)
    }

    /// Pool balance of `asset`
    pub fn amount_of(&self, asset: &Asset) -> Result<&AssetAmount> {
        self.reserves_for(asset).map(|(own, _)| own)
    }

    /// The asset on the other side of `asset`
    pub fn other_asset(&self, asset: &Asset) -> Result<&Asset> {
        self.reserves_for(asset).map(|(_, other)| other.asset())
    }

    /// Lower-cased symbols in alphabetical order, joined by `_`
    pub fn symbol(&self) -> String {
        let mut symbols = self
            .amounts
            .iter()
            .map(|reserve| reserve.asset().symbol().to_ascii_lowercase())
            .collect::<Vec<_>>();
        symbols.sort();
        symbols.join("_")
    }

    /// Spot price: units of the other asset per unit of `asset`
    pub fn price_of(&self, asset: &Asset) -> Result<Quantity> {
        let (own, other) = self.reserves_for(asset)?;
        other
            .amount()
            .checked_div(own.amount())
            .ok_or(PoolError::Asset(AssetError::DivisionByZero))
    }

    /// Output received for sending `x` into the pool
    pub fn calc_swap_result(&self, x: &AssetAmount) -> Result<AssetAmount> {
        let (reserve_in, reserve_out) = self.reserves_for(x.asset())?;
        let output =
            SlipMath::calculate_output_amount(x.amount(), reserve_in.amount(), reserve_out.amount())?;
        let result = AssetAmount::native(reserve_out.asset().clone(), output);

        debug!(pool = %self.symbol(), input = %x, output = %result, "Computed swap result");
        Ok(result)
    }

    /// Input of the other asset required to receive exactly `y`
    pub fn calc_reverse_swap_result(&self, y: &AssetAmount) -> Result<AssetAmount> {
        let (reserve_out, reserve_in) = self.reserves_for(y.asset())?;
        let input = SlipMath::calculate_input_amount(
            y.amount(),
            reserve_in.amount(),
            reserve_out.amount(),
        )
        .inspect_err(|err| {
            if matches!(err, PoolError::InsufficientLiquidity { .. }) {
                warn!(pool = %self.symbol(), desired = %y, "Reverse swap exceeds pool depth");
            }
        })?;
        let result = AssetAmount::native(reserve_in.asset().clone(), input);

        debug!(pool = %self.symbol(), desired = %y, required = %result, "Computed reverse swap");
        Ok(result)
    }

    /// Liquidity fee charged on sending `x`, in the output asset
    pub fn calc_liquidity_fee(&self, x: &AssetAmount) -> Result<AssetAmount> {
        let (reserve_in, reserve_out) = self.reserves_for(x.asset())?;
        let fee =
            SlipMath::calculate_liquidity_fee(x.amount(), reserve_in.amount(), reserve_out.amount())?;
        Ok(AssetAmount::native(reserve_out.asset().clone(), fee))
    }

    /// Trade slip of sending `x`
    pub fn calc_trade_slip(&self, x: &AssetAmount) -> Result<Quantity> {
        let (reserve_in, _) = self.reserves_for(x.asset())?;
        SlipMath::calculate_trade_slip(x.amount(), reserve_in.amount())
    }

    /// Output, fee and slip for sending `x`, all from the same reserves
    pub fn quote(&self, x: &AssetAmount) -> Result<SwapQuote> {
        Ok(SwapQuote {
            input: x.clone(),
            output: self.calc_swap_result(x)?,
            liquidity_fee: self.calc_liquidity_fee(x)?,
            trade_slip: self.calc_trade_slip(x)?,
        })
    }

    /// (reserve of `asset`, reserve of the other asset)
    fn reserves_for(&self, asset: &Asset) -> Result<(&AssetAmount, &AssetAmount)> {
        let [a, b] = &self.amounts;
        if a.asset() == asset {
            Ok((a, b))
        } else if b.asset() == asset {
            Ok((b, a))
        } else {
            Err(PoolError::AssetNotInPair {
                asset: asset.key().to_string(),
                pool: self.symbol(),
            })
        }
    }
}

/// Structural equality, independent of the order reserves were supplied in
impl PartialEq for Pair {
    fn eq(&self, other: &Self) -> bool {
        let [a, b] = &self.amounts;
        let [c, d] = &other.amounts;
        (a == c && b == d) || (a == d && b == c)
    }
}

impl Eq for Pair {}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{} / {}]", self.symbol(), self.amounts[0], self.amounts[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::Network;

    fn atk() -> Asset {
        Asset::token("atk", "AppleToken", 6, Network::Ethereum, "123").unwrap()
    }

    fn btk() -> Asset {
        Asset::token("btk", "BananaToken", 18, Network::Ethereum, "1234").unwrap()
    }

    fn rwn() -> Asset {
        Asset::coin("rwn", "Rowan", 18, Network::Sifchain).unwrap()
    }

    fn amount(asset: Asset, literal: &str) -> AssetAmount {
        AssetAmount::parse(asset, literal).unwrap()
    }

    fn pair(a: &str, b: &str) -> Pair {
        Pair::new(amount(atk(), a), amount(btk(), b)).unwrap()
    }

    #[test]
    fn test_rejects_identical_assets() {
        let err = Pair::new(amount(atk(), "1"), amount(atk(), "2")).unwrap_err();
        assert!(matches!(err, PoolError::IdenticalAssets { .. }));
    }

    #[test]
    fn test_rejects_negative_reserves() {
        let err = Pair::new(amount(atk(), "-1"), amount(btk(), "2")).unwrap_err();
        assert_eq!(
            err,
            PoolError::NegativeAmount {
                amount: "-1.000000 ATK".to_string()
            }
        );
    }

    #[test]
    fn test_introspection() {
        let pool = pair("5", "10");
        assert_eq!(pool.amount_of(&btk()).unwrap(), &amount(btk(), "10"));
        assert_eq!(pool.other_asset(&atk()).unwrap(), &btk());
        assert_eq!(pool.price_of(&atk()).unwrap().to_string(), "2");
        assert_eq!(pool.price_of(&btk()).unwrap().to_string(), "0.5");
        assert!(matches!(
            pool.other_asset(&rwn()),
            Err(PoolError::AssetNotInPair { .. })
        ));
    }

    #[test]
    fn test_order_independent_identity() {
        let forward = pair("5", "10");
        let backward = Pair::new(amount(btk(), "10"), amount(atk(), "5")).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.symbol(), backward.symbol());
        assert_eq!(forward.to_string(), "atk_btk [5.000000 ATK / 10.000000000000000000 BTK]");
    }

    #[test]
    fn test_quote_bundles_derived_quantities() {
        let pool = pair("10", "10");
        let quote = pool.quote(&amount(atk(), "1")).unwrap();
        assert_eq!(quote.output.to_string(), "0.826446280991735537 BTK");
        assert_eq!(quote.liquidity_fee.to_string(), "0.082644628099173554 BTK");
        assert_eq!(quote.trade_slip.to_string(), "0.21");
    }

    #[test]
    fn test_results_held_at_native_precision() {
        let pool = pair("10", "10");

        let to_btk = pool.calc_swap_result(&amount(atk(), "1")).unwrap();
        assert_eq!(to_btk.amount().to_string(), "0.826446280991735537");

        let to_atk = pool.calc_swap_result(&amount(btk(), "1")).unwrap();
        assert_eq!(to_atk.amount(), amount(atk(), "0.826446").amount());

        let required = pool.calc_reverse_swap_result(&amount(btk(), "1")).unwrap();
        assert_eq!(required.amount(), &required.amount().round_dp(6));
    }

    #[test]
    fn test_reverse_swap_against_empty_reserve() {
        let pool = Pair::new(amount(atk(), "0"), amount(btk(), "10")).unwrap();

        let err = pool.calc_reverse_swap_result(&amount(btk(), "1")).unwrap_err();
        assert!(matches!(err, PoolError::InsufficientLiquidity { .. }));

        // Nothing asked, nothing owed
        let input = pool.calc_reverse_swap_result(&amount(btk(), "0")).unwrap();
        assert!(input.is_zero());
    }

    #[test]
    fn test_reverse_swap_beyond_depth() {
        let pool = pair("10", "10");
        let err = pool
            .calc_reverse_swap_result(&amount(btk(), "3"))
            .unwrap_err();
        assert!(matches!(err, PoolError::InsufficientLiquidity { .. }));
    }
}
