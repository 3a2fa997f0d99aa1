//! Widened multiply-divide with explicit rounding.
//!
//! Every pricing formula in this crate is a quotient of products of
//! reserve-scale integers. [`mul_div`] computes `a * b / denominator`
//! with the product held in `u128`, so two 64-bit operands never
//! truncate silently; [`div_round`] is the underlying division with an
//! explicit [`Rounding`] direction.
//!
//! # Convention
//!
//! **Always round against the trader** (pool-favorable):
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Output amount | [`Rounding::Down`] |
//! | Required input | [`Rounding::Up`] |

use crate::domain::Rounding;

/// Integer division of `u128` values with explicit rounding direction.
///
/// - [`Rounding::Down`]: floor division (round towards zero).
/// - [`Rounding::Up`]: ceiling division — the smallest integer greater
///   than or equal to the exact quotient.
///
/// Returns [`None`] if `denominator` is zero.
///
/// # Examples
///
/// ```
/// use swapguard::domain::Rounding;
/// use swapguard::math::div_round;
///
/// assert_eq!(div_round(10, 3, Rounding::Down), Some(3));
/// assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
/// assert_eq!(div_round(10, 0, Rounding::Down), None);
/// ```
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    match rounding {
        Rounding::Down => Some(numerator / denominator),
        Rounding::Up => {
            // Ceiling division: (n + d - 1) / d, guarding the adjustment
            // against overflow.
            match numerator.checked_add(denominator - 1) {
                Some(adjusted) => Some(adjusted / denominator),
                None => {
                    let q = numerator / denominator;
                    let r = numerator % denominator;
                    if r != 0 {
                        // q + 1 cannot overflow: n == u128::MAX with d == 1
                        // has r == 0, so this branch never sees q == MAX.
                        Some(q + 1)
                    } else {
                        Some(q)
                    }
                }
            }
        }
    }
}

/// Computes `a * b / denominator` with the product widened to `u128`.
///
/// Returns [`None`] if the product overflows 128 bits or `denominator`
/// is zero.
///
/// # Examples
///
/// ```
/// use swapguard::domain::Rounding;
/// use swapguard::math::mul_div;
///
/// assert_eq!(mul_div(7, 3, 2, Rounding::Down), Some(10));
/// assert_eq!(mul_div(7, 3, 2, Rounding::Up), Some(11));
/// ```
#[must_use]
pub const fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    match a.checked_mul(b) {
        Some(product) => div_round(product, denominator, rounding),
        None => None,
    }
}
