//! Asset amounts with native precision preservation
//!
//! An [`AssetAmount`] pairs an [`Asset`] with an exact [`Quantity`]. The
//! quantity is always held at full internal precision; the asset's `decimals`
//! only matter when the amount is rendered or converted to minor units.
//!
//! ## Critical Rules
//!
//! 1. **Same asset only**: sums, differences and comparisons across assets fail
//! 2. **NO FLOATING POINT**: literals are parsed exactly
//! 3. **Render at native width**: an 18-decimal asset always prints 18 digits

use crate::asset::Asset;
use crate::common::errors::AssetError;
use crate::common::fixed_point::Quantity;
use num_bigint::BigInt;
use std::cmp::Ordering;
use std::fmt;

/// Exact quantity of a specific asset
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetAmount {
    asset: Asset,
    amount: Quantity,
}

impl AssetAmount {
    pub fn new(asset: Asset, amount: Quantity) -> Self {
        Self { asset, amount }
    }

    /// Build at the asset's own precision, rounding half-even past `decimals`
    ///
    /// Settled quantities (swap outputs, required inputs, fees) are held at
    /// the width the chain can actually transfer.
    pub fn native(asset: Asset, amount: Quantity) -> Self {
        let amount = amount.round_dp(u32::from(asset.decimals()));
        Self::new(asset, amount)
    }

    /// Parse a decimal literal exactly, e.g. `AssetAmount::parse(atk, "100.0")`
    pub fn parse(asset: Asset, literal: &str) -> Result<Self, AssetError> {
        Ok(Self::new(asset, literal.parse()?))
    }

    /// Build from integer minor units as reported by chain queries
    pub fn from_base_units(asset: Asset, units: impl Into<BigInt>) -> Result<Self, AssetError> {
        let amount = Quantity::from_base_units(units, asset.decimals())?;
        Ok(Self::new(asset, amount))
    }

    pub fn zero(asset: Asset) -> Self {
        Self::new(asset, Quantity::zero())
    }

    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    pub fn amount(&self) -> &Quantity {
        &self.amount
    }

    pub fn into_parts(self) -> (Asset, Quantity) {
        (self.asset, self.amount)
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Fail unless `other` is denominated in the same asset
    pub fn ensure_same_asset(&self, other: &AssetAmount) -> Result<(), AssetError> {
        if self.asset == other.asset {
            Ok(())
        } else {
            Err(AssetError::MismatchedAsset {
                left: self.asset.key().to_string(),
                right: other.asset.key().to_string(),
            })
        }
    }

    pub fn add(&self, other: &AssetAmount) -> Result<AssetAmount, AssetError> {
        self.ensure_same_asset(other)?;
        Ok(Self::new(self.asset.clone(), &self.amount + &other.amount))
    }

    pub fn subtract(&self, other: &AssetAmount) -> Result<AssetAmount, AssetError> {
        self.ensure_same_asset(other)?;
        Ok(Self::new(self.asset.clone(), &self.amount - &other.amount))
    }

    /// Scale by a dimensionless factor
    pub fn multiply(&self, factor: &Quantity) -> AssetAmount {
        Self::new(self.asset.clone(), &self.amount * factor)
    }

    /// Divide by a dimensionless factor
    pub fn divide(&self, divisor: &Quantity) -> Result<AssetAmount, AssetError> {
        let amount = self
            .amount
            .checked_div(divisor)
            .ok_or(AssetError::DivisionByZero)?;
        Ok(Self::new(self.asset.clone(), amount))
    }

    /// Compare against an amount of the same asset
    pub fn try_cmp(&self, other: &AssetAmount) -> Result<Ordering, AssetError> {
        self.ensure_same_asset(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Render with exactly `asset.decimals` fractional digits
    pub fn to_fixed(&self) -> String {
        self.amount.to_fixed(u32::from(self.asset.decimals()))
    }

    /// Integer minor units for transaction builders, rounded half-even
    pub fn to_base_units(&self) -> BigInt {
        self.amount.to_base_units(self.asset.decimals())
    }
}

/// Ordering is only defined between amounts of the same asset
impl PartialOrd for AssetAmount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

/// `"0.826446 ATK"`: fixed native width followed by the upper-case ticker
impl fmt::Display for AssetAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_fixed(), self.asset.ticker())
    }
}
