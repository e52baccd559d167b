//! Continuous-liquidity slip AMM math with exact calculations
//!
//! The pool charges no separate fee parameter: the swap formula itself
//! embeds the liquidity fee as slippage.
//!
//! ```text
//! x = sent amount, X = sent asset pool balance, Y = received asset pool balance
//!
//! swap result   = x * X * Y / (x + X)^2
//! liquidity fee = x^2 * Y / (x + X)^2
//! trade slip    = x * (2X + x) / X^2
//! ```
//!
//! All formulas run on the raw 10^36-scaled integers of [`Quantity`] and
//! round exactly once, at the end. Bringing results to an asset's native
//! precision is the caller's job.

use crate::error::{PoolError, Result};
use num_bigint::BigInt;
use types::{div_round_half_even, pow10, AssetError, Quantity, PRECISION};

/// Slip-based AMM math functions with zero precision loss
pub struct SlipMath;

impl SlipMath {
    /// Calculate exact output amount for a forward swap
    ///
    /// # Arguments
    /// * `amount_in` - Amount sent into the pool
    /// * `reserve_in` - Pool balance of the sent asset
    /// * `reserve_out` - Pool balance of the received asset
    ///
    /// # Returns
    /// `amount_in * reserve_in * reserve_out / (amount_in + reserve_in)^2`,
    /// exactly zero for a zero input
    pub fn calculate_output_amount(
        amount_in: &Quantity,
        reserve_in: &Quantity,
        reserve_out: &Quantity,
    ) -> Result<Quantity> {
        Self::ensure_non_negative(&[amount_in, reserve_in, reserve_out])?;
        if amount_in.is_zero() {
            return Ok(Quantity::zero());
        }

        let x = amount_in.raw();
        let sum = x + reserve_in.raw();

        // Three scale factors over two leaves one
        let numerator = x * reserve_in.raw() * reserve_out.raw();
        let denominator = &sum * &sum;

        Self::ratio(&numerator, &denominator)
    }

    /// Calculate required input amount for a desired output (reverse swap)
    ///
    /// Inverting the swap formula for `x` gives the quadratic
    /// `y*x^2 + (2*y*X - X*Y)*x + y*X^2 = 0`. The physical root is the one
    /// that vanishes as `y -> 0`, `(-B - sqrt(B^2 - 4AC)) / 2A`, evaluated here
    /// in its rationalised form
    ///
    /// ```text
    /// x = 2 * X * y / (Y - 2y + sqrt(Y^2 - 4*Y*y))
    /// ```
    ///
    /// which subtracts no nearly-equal terms, so tiny outputs against deep
    /// pools keep full precision.
    ///
    /// # Arguments
    /// * `amount_out` - Desired amount received from the pool
    /// * `reserve_in` - Pool balance of the asset that will be sent
    /// * `reserve_out` - Pool balance of the desired asset
    ///
    /// # Errors
    /// `InsufficientLiquidity` when `amount_out` exceeds `reserve_out / 4`,
    /// the most the formula pays out for any input, or when `reserve_in` is
    /// empty so no input can buy anything.
    pub fn calculate_input_amount(
        amount_out: &Quantity,
        reserve_in: &Quantity,
        reserve_out: &Quantity,
    ) -> Result<Quantity> {
        Self::ensure_non_negative(&[amount_out, reserve_in, reserve_out])?;
        if amount_out.is_zero() {
            return Ok(Quantity::zero());
        }

        let y = amount_out.raw();
        let big_x = reserve_in.raw();
        let big_y = reserve_out.raw();
        let four = BigInt::from(4u8);
        let two = BigInt::from(2u8);

        if reserve_in.is_zero() {
            return Err(PoolError::InsufficientLiquidity {
                requested: amount_out.to_string(),
                max: Quantity::zero().to_string(),
            });
        }
        if &four * y > *big_y {
            return Err(PoolError::InsufficientLiquidity {
                requested: amount_out.to_string(),
                max: Self::max_output_amount(reserve_out).to_string(),
            });
        }

        let scale = pow10(PRECISION);

        // discriminant / 4X^2, carrying two scale factors
        let discriminant = big_y * big_y - &four * big_y * y;
        // Widened by two more scale factors so the root keeps two
        let root = (discriminant * &scale * &scale).sqrt();

        let denominator = (big_y - &two * y) * &scale + root;
        let numerator = &two * big_x * y * &scale;

        Self::ratio(&numerator, &denominator)
    }

    /// Fee retained by the pool: `x^2 * Y / (x + X)^2`, in the received asset
    pub fn calculate_liquidity_fee(
        amount_in: &Quantity,
        reserve_in: &Quantity,
        reserve_out: &Quantity,
    ) -> Result<Quantity> {
        Self::ensure_non_negative(&[amount_in, reserve_in, reserve_out])?;
        if amount_in.is_zero() {
            return Ok(Quantity::zero());
        }

        let x = amount_in.raw();
        let sum = x + reserve_in.raw();
        let numerator = x * x * reserve_out.raw();
        let denominator = &sum * &sum;

        Self::ratio(&numerator, &denominator)
    }

    /// Dimensionless trade slip: `x * (2X + x) / X^2`
    pub fn calculate_trade_slip(amount_in: &Quantity, reserve_in: &Quantity) -> Result<Quantity> {
        Self::ensure_non_negative(&[amount_in, reserve_in])?;
        if amount_in.is_zero() {
            return Ok(Quantity::zero());
        }

        let x = amount_in.raw();
        let big_x = reserve_in.raw();
        let numerator = x * (big_x + big_x + x) * pow10(PRECISION);
        let denominator = big_x * big_x;

        Self::ratio(&numerator, &denominator)
    }

    /// Largest output any input can buy: `reserve_out / 4`, reached when `x = X`
    pub fn max_output_amount(reserve_out: &Quantity) -> Quantity {
        let quarter = div_round_half_even(reserve_out.raw(), &BigInt::from(4u8));
        Quantity::from_raw(quarter.unwrap_or_default())
    }

    fn ratio(numerator: &BigInt, denominator: &BigInt) -> Result<Quantity> {
        div_round_half_even(numerator, denominator)
            .map(Quantity::from_raw)
            .ok_or(PoolError::Asset(AssetError::DivisionByZero))
    }

    fn ensure_non_negative(values: &[&Quantity]) -> Result<()> {
        match values.iter().find(|value| value.is_negative()) {
            Some(value) => Err(PoolError::NegativeAmount {
                amount: value.to_string(),
            }),
            None => Ok(()),
        }
    }
}
