//! Constant-product pricing formulas (`x · y = k`).
//!
//! Three pure operations over explicit reserve values, so each is
//! referentially transparent and trivially testable:
//!
//! - [`quote_out`] — output for a fixed input, floor-rounded.
//! - [`quote_in`] — required input for a fixed output, ceiling-rounded.
//! - [`quote_liquidity`] — proportional amount for a price-neutral
//!   deposit, no fee.
//!
//! # Rounding
//!
//! Rounding always biases in the pool's favor, never the trader's:
//! flooring the output protects solvency, and ceiling the required input
//! prevents under-collection. Every intermediate product is widened to
//! `u128` before dividing; the final quotient narrows back to the 64-bit
//! surface with an explicit overflow check.

use crate::domain::{Amount, FeeSchedule, ReservePair, Rounding};
use crate::error::{Result, SwapError};
use crate::math::{div_round, mul_div};

/// Computes the output amount for a fixed input.
///
/// Formula, with `c = fee.complement()` and `s = fee.scale()`:
///
/// ```text
/// amount_in_with_fee = amount_in × c
/// amount_out = ⌊amount_in_with_fee × reserve_out
///              / (reserve_in × s + amount_in_with_fee)⌋
/// ```
///
/// The result is always strictly less than `reserve_out`; a swap can
/// never fully drain the output side.
///
/// # Errors
///
/// - [`SwapError::InsufficientInput`] if `amount_in` is zero.
/// - [`SwapError::ZeroLiquidity`] if either reserve is zero.
/// - [`SwapError::Overflow`] if an intermediate product exceeds 128 bits.
///
/// # Examples
///
/// ```
/// use swapguard::domain::{Amount, FeeSchedule, ReservePair};
/// use swapguard::pricing::quote_out;
///
/// let reserves = ReservePair::new(Amount::new(100_000), Amount::new(100_000));
/// let out = quote_out(Amount::new(1_000), &reserves, &FeeSchedule::STANDARD).unwrap();
/// assert_eq!(out, Amount::new(987));
/// ```
pub fn quote_out(amount_in: Amount, reserves: &ReservePair, fee: &FeeSchedule) -> Result<Amount> {
    if amount_in.is_zero() {
        return Err(SwapError::InsufficientInput("amount_in must be non-zero"));
    }
    if !reserves.has_liquidity() {
        return Err(SwapError::ZeroLiquidity);
    }

    // u64 × u32 cannot overflow u128, but every product stays checked.
    let amount_in_with_fee = amount_in
        .widen()
        .checked_mul(u128::from(fee.complement()))
        .ok_or(SwapError::Overflow("fee-adjusted input"))?;

    let numerator = amount_in_with_fee
        .checked_mul(reserves.reserve_out().widen())
        .ok_or(SwapError::Overflow("quote_out numerator"))?;

    let denominator = reserves
        .reserve_in()
        .widen()
        .checked_mul(u128::from(fee.scale()))
        .ok_or(SwapError::Overflow("scaled input reserve"))?
        .checked_add(amount_in_with_fee)
        .ok_or(SwapError::Overflow("quote_out denominator"))?;

    let out = div_round(numerator, denominator, Rounding::Down).ok_or(SwapError::DivisionByZero)?;

    Amount::from_wide(out).ok_or(SwapError::Overflow("quote_out result"))
}

/// Computes the input amount required for a fixed output.
///
/// Formula, with `c = fee.complement()` and `s = fee.scale()`:
///
/// ```text
/// amount_in = ⌈reserve_in × amount_out × s
///             / ((reserve_out − amount_out) × c)⌉
/// ```
///
/// # Errors
///
/// - [`SwapError::InsufficientInput`] if `amount_out` is zero or not
///   strictly less than `reserve_out` (the pool cannot pay out a whole
///   reserve side).
/// - [`SwapError::ZeroLiquidity`] if either reserve is zero.
/// - [`SwapError::Overflow`] if an intermediate product exceeds 128 bits
///   or the required input exceeds the 64-bit surface.
///
/// # Examples
///
/// ```
/// use swapguard::domain::{Amount, FeeSchedule, ReservePair};
/// use swapguard::pricing::quote_in;
///
/// let reserves = ReservePair::new(Amount::new(100_000), Amount::new(100_000));
/// let input = quote_in(Amount::new(987), &reserves, &FeeSchedule::STANDARD).unwrap();
/// assert_eq!(input, Amount::new(1_000));
/// ```
pub fn quote_in(amount_out: Amount, reserves: &ReservePair, fee: &FeeSchedule) -> Result<Amount> {
    if amount_out.is_zero() {
        return Err(SwapError::InsufficientInput("amount_out must be non-zero"));
    }
    if !reserves.has_liquidity() {
        return Err(SwapError::ZeroLiquidity);
    }
    if amount_out >= reserves.reserve_out() {
        return Err(SwapError::InsufficientInput(
            "amount_out must be strictly less than the output reserve",
        ));
    }

    let numerator = reserves
        .reserve_in()
        .widen()
        .checked_mul(amount_out.widen())
        .ok_or(SwapError::Overflow("quote_in numerator"))?
        .checked_mul(u128::from(fee.scale()))
        .ok_or(SwapError::Overflow("scaled quote_in numerator"))?;

    // Safe subtraction: amount_out < reserve_out was checked above.
    let remaining = reserves.reserve_out().widen() - amount_out.widen();
    let denominator = remaining
        .checked_mul(u128::from(fee.complement()))
        .ok_or(SwapError::Overflow("quote_in denominator"))?;

    let input = div_round(numerator, denominator, Rounding::Up).ok_or(SwapError::DivisionByZero)?;

    Amount::from_wide(input).ok_or(SwapError::Overflow("quote_in result"))
}

/// Computes the proportional counterpart amount for a price-neutral
/// liquidity deposit.
///
/// Formula: `amount_b = ⌊amount_a × reserve_b / reserve_a⌋`. No fee is
/// applied; this is a quoting helper for liquidity provisioning, not a
/// trade.
///
/// # Errors
///
/// - [`SwapError::InsufficientInput`] if `amount_a` is zero.
/// - [`SwapError::ZeroLiquidity`] if either reserve is zero.
/// - [`SwapError::Overflow`] if the proportional amount exceeds the
///   64-bit surface.
///
/// # Examples
///
/// ```
/// use swapguard::domain::Amount;
/// use swapguard::pricing::quote_liquidity;
///
/// let b = quote_liquidity(Amount::new(500), Amount::new(1_000), Amount::new(4_000)).unwrap();
/// assert_eq!(b, Amount::new(2_000));
/// ```
pub fn quote_liquidity(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount> {
    if amount_a.is_zero() {
        return Err(SwapError::InsufficientInput("amount_a must be non-zero"));
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(SwapError::ZeroLiquidity);
    }

    let amount_b = mul_div(
        amount_a.widen(),
        reserve_b.widen(),
        reserve_a.widen(),
        Rounding::Down,
    )
    .ok_or(SwapError::Overflow("quote_liquidity product"))?;

    Amount::from_wide(amount_b).ok_or(SwapError::Overflow("quote_liquidity result"))
}
