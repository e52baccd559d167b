//! Fixed-point arithmetic for exact pool pricing
//!
//! This module provides an arbitrary-precision decimal quantity used for every
//! reserve, swap amount and ratio the pricing engine touches. Values are stored
//! as big integers with an implicit scale of 10^36: eighteen guard digits
//! beyond the widest asset precision in circulation (18 decimals).
//!
//! ## Design Principles
//!
//! - **No Precision Loss**: Addition and subtraction are exact; multiplication,
//!   division and square roots round once at the 36th fractional digit
//! - **No Floating Point**: Literals are parsed digit-by-digit, never through f64
//! - **Deterministic Rounding**: Round-half-even everywhere a digit is dropped
//! - **Clear Boundaries**: Explicit conversions to integer minor units and to
//!   `rust_decimal::Decimal` for display consumers

use crate::common::errors::AssetError;
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Number of fractional digits carried by every [`Quantity`]
pub const PRECISION: u32 = 36;

/// Largest scale `rust_decimal::Decimal` can represent
const DECIMAL_MAX_SCALE: u32 = 28;

/// 10^exp as a big integer
pub fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u32).pow(exp)
}

/// Integer division rounded half-to-even
///
/// Returns `None` when `denominator` is zero. Rounding is symmetric around
/// zero, so `-x / d` always equals `-(x / d)`.
pub fn div_round_half_even(numerator: &BigInt, denominator: &BigInt) -> Option<BigInt> {
    if denominator.is_zero() {
        return None;
    }
    let quotient = round_div_magnitude(numerator, &denominator.abs());
    if numerator.is_negative() != denominator.is_negative() {
        Some(-quotient)
    } else {
        Some(quotient)
    }
}

/// |numerator| / denominator rounded half-to-even; denominator must be positive
fn round_div_magnitude(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    let magnitude = numerator.abs();
    let quotient = &magnitude / denominator;
    let remainder = &magnitude - &quotient * denominator;
    let twice = &remainder + &remainder;

    match twice.cmp(denominator) {
        Ordering::Greater => quotient + BigInt::one(),
        Ordering::Equal if (&quotient % BigInt::from(2u8)).is_one() => quotient + BigInt::one(),
        _ => quotient,
    }
}

/// Exact decimal quantity scaled by 10^36
///
/// Examples:
/// - 1 = Quantity { raw: 10^36 }
/// - 0.000001 = Quantity { raw: 10^30 }
/// - 1 wei of an 18-decimal asset = Quantity { raw: 10^18 }
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity {
    raw: BigInt,
}

impl Quantity {
    /// Zero
    pub fn zero() -> Self {
        Self::default()
    }

    /// One
    pub fn one() -> Self {
        Self { raw: pow10(PRECISION) }
    }

    /// Create from raw scaled integer (value = raw / 10^36)
    pub fn from_raw(raw: BigInt) -> Self {
        Self { raw }
    }

    /// Get the raw scaled integer value
    pub fn raw(&self) -> &BigInt {
        &self.raw
    }

    /// Create from a whole number
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            raw: value.into() * pow10(PRECISION),
        }
    }

    /// Create from integer minor units of an asset with `decimals` precision
    ///
    /// `from_base_units(1_500_000, 6)` is 1.5.
    pub fn from_base_units(units: impl Into<BigInt>, decimals: u8) -> Result<Self, AssetError> {
        let shift = PRECISION
            .checked_sub(u32::from(decimals))
            .ok_or(AssetError::UnsupportedDecimals {
                decimals,
                max: PRECISION,
            })?;
        Ok(Self {
            raw: units.into() * pow10(shift),
        })
    }

    /// Create from a `rust_decimal::Decimal` without loss
    ///
    /// Decimal scales top out at 28, well inside the 36 digits kept here.
    pub fn from_decimal(value: Decimal) -> Self {
        let shift = PRECISION - value.scale();
        Self {
            raw: BigInt::from(value.mantissa()) * pow10(shift),
        }
    }

    /// Convert to `rust_decimal::Decimal` for display consumers
    ///
    /// Keeps as many fractional digits as fit into Decimal's 96-bit mantissa,
    /// rounding half-even. Returns `None` when even the integer part does not fit.
    pub fn to_decimal(&self) -> Option<Decimal> {
        (0..=DECIMAL_MAX_SCALE).rev().find_map(|scale| {
            let mantissa = self.scaled_units(scale).to_i128()?;
            Decimal::try_from_i128_with_scale(mantissa, scale)
                .ok()
                .map(|d| d.normalize())
        })
    }

    /// Convert to integer minor units of an asset, rounding half-even
    pub fn to_base_units(&self, decimals: u8) -> BigInt {
        self.scaled_units(u32::from(decimals))
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.raw.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.raw.is_positive()
    }

    /// Checked division - returns None when dividing by zero
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        div_round_half_even(&(&self.raw * pow10(PRECISION)), &rhs.raw).map(Self::from_raw)
    }

    /// Square root truncated at the 36th fractional digit - None for negative values
    pub fn sqrt(&self) -> Option<Self> {
        if self.raw.is_negative() {
            return None;
        }
        Some(Self {
            raw: (&self.raw * pow10(PRECISION)).sqrt(),
        })
    }

    /// Round to `dp` fractional digits, half-even
    pub fn round_dp(&self, dp: u32) -> Self {
        if dp >= PRECISION {
            return self.clone();
        }
        Self {
            raw: self.scaled_units(dp) * pow10(PRECISION - dp),
        }
    }

    /// Render with exactly `dp` fractional digits, never in exponent notation
    ///
    /// # Examples
    /// ```
    /// use types::Quantity;
    ///
    /// let q: Quantity = "0.8264462809917355371".parse().unwrap();
    /// assert_eq!(q.to_fixed(6), "0.826446");
    /// assert_eq!(Quantity::zero().to_fixed(3), "0.000");
    /// ```
    pub fn to_fixed(&self, dp: u32) -> String {
        let units = self.scaled_units(dp);
        let digits = units.abs().to_string();
        let sign = if units.is_negative() { "-" } else { "" };

        if dp == 0 {
            return format!("{sign}{digits}");
        }

        let width = dp as usize;
        let padded = if digits.len() <= width {
            format!("{}{}", "0".repeat(width + 1 - digits.len()), digits)
        } else {
            digits
        };
        let (int_part, frac_part) = padded.split_at(padded.len() - width);
        format!("{sign}{int_part}.{frac_part}")
    }

    /// Value expressed in units of 10^-dp, rounded half-even
    fn scaled_units(&self, dp: u32) -> BigInt {
        match dp.cmp(&PRECISION) {
            Ordering::Equal => self.raw.clone(),
            Ordering::Greater => &self.raw * pow10(dp - PRECISION),
            Ordering::Less => {
                let units = round_div_magnitude(&self.raw, &pow10(PRECISION - dp));
                if self.raw.is_negative() {
                    -units
                } else {
                    units
                }
            }
        }
    }
}

impl FromStr for Quantity {
    type Err = AssetError;

    /// Parse plain decimal notation exactly: `"10"`, `"0.0"`, `"-1.5"`, `".25"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AssetError::InvalidAmount {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(int_part) || !is_digits(frac_part) {
            return Err(invalid());
        }
        if frac_part.len() > PRECISION as usize {
            return Err(AssetError::PrecisionLoss {
                input: s.to_string(),
                max: PRECISION,
            });
        }

        let mut digits = String::with_capacity(int_part.len() + PRECISION as usize);
        digits.push_str(int_part);
        digits.push_str(frac_part);
        digits.extend(std::iter::repeat('0').take(PRECISION as usize - frac_part.len()));

        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        Ok(Self {
            raw: if negative { -magnitude } else { magnitude },
        })
    }
}

/// Canonical rendering: full precision with trailing zeros trimmed
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = self.to_fixed(PRECISION);
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        f.write_str(trimmed)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let literal = String::deserialize(deserializer)?;
        literal.parse().map_err(serde::de::Error::custom)
    }
}

impl From<Decimal> for Quantity {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self::from_integer(value)
    }
}

impl Add<&Quantity> for &Quantity {
    type Output = Quantity;

    fn add(self, rhs: &Quantity) -> Quantity {
        Quantity {
            raw: &self.raw + &rhs.raw,
        }
    }
}

impl Sub<&Quantity> for &Quantity {
    type Output = Quantity;

    fn sub(self, rhs: &Quantity) -> Quantity {
        Quantity {
            raw: &self.raw - &rhs.raw,
        }
    }
}

/// Product rounded half-even at the 36th fractional digit
impl Mul<&Quantity> for &Quantity {
    type Output = Quantity;

    fn mul(self, rhs: &Quantity) -> Quantity {
        let product = &self.raw * &rhs.raw;
        let raw = round_div_magnitude(&product, &pow10(PRECISION));
        Quantity {
            raw: if product.is_negative() { -raw } else { raw },
        }
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Mul for Quantity {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl Neg for Quantity {
    type Output = Self;

    fn neg(self) -> Self {
        Self { raw: -self.raw }
    }
}
