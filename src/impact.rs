//! Price-impact calculation for prospective trades.

use crate::domain::{Amount, BasisPoints, FeeSchedule, ReservePair};
use crate::error::{Result, SwapError};
use crate::pricing::quote_out;

/// Basis-point scale used for price ratios.
const BPS_SCALE: u128 = 10_000;

/// Computes the relative price movement a prospective trade would cause,
/// in basis points.
///
/// The spot price is the output reserve over the input reserve, scaled
/// by 10 000. The projected post-trade price uses the would-be reserves
/// `(reserve_in + amount_in, reserve_out − quote_out(…))`:
///
/// ```text
/// impact = (price_before − price_after) × 10 000 / price_before
/// ```
///
/// Impact is measured as depletion of the output side only: when the
/// price does not move, or moves favorably for subsequent traders, the
/// result is zero. This asymmetry is deliberate and matches the pool's
/// risk model; do not symmetrize it.
///
/// # Errors
///
/// Reuses [`quote_out`] internally and inherits its error conditions
/// ([`SwapError::ZeroLiquidity`], [`SwapError::InsufficientInput`],
/// [`SwapError::Overflow`]).
///
/// # Examples
///
/// ```
/// use swapguard::domain::{Amount, FeeSchedule, ReservePair};
/// use swapguard::impact::price_impact_bps;
///
/// let reserves = ReservePair::new(Amount::new(100_000), Amount::new(100_000));
/// let impact = price_impact_bps(Amount::new(5_000), &reserves, &FeeSchedule::STANDARD).unwrap();
/// assert_eq!(impact.get(), 929);
/// ```
pub fn price_impact_bps(
    amount_in: Amount,
    reserves: &ReservePair,
    fee: &FeeSchedule,
) -> Result<BasisPoints> {
    let amount_out = quote_out(amount_in, reserves, fee)?;

    let reserve_in = reserves.reserve_in().widen();
    let reserve_out = reserves.reserve_out().widen();

    // Both prices scaled by 10_000 for basis-point precision. The
    // divisors are non-zero: quote_out already rejected empty reserves.
    let price_before = reserve_out
        .checked_mul(BPS_SCALE)
        .ok_or(SwapError::Overflow("pre-trade price"))?
        / reserve_in;

    let post_reserve_in = reserve_in + amount_in.widen();
    // quote_out guarantees amount_out < reserve_out.
    let post_reserve_out = reserve_out - amount_out.widen();

    let price_after = post_reserve_out
        .checked_mul(BPS_SCALE)
        .ok_or(SwapError::Overflow("post-trade price"))?
        / post_reserve_in;

    if price_after >= price_before {
        return Ok(BasisPoints::ZERO);
    }

    // price_before > price_after >= 0 implies price_before > 0 here, and
    // the quotient is at most 10_000.
    let impact = (price_before - price_after) * BPS_SCALE / price_before;

    u32::try_from(impact)
        .map(BasisPoints::new)
        .map_err(|_| SwapError::Overflow("price impact"))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn reserves(r_in: u64, r_out: u64) -> ReservePair {
        ReservePair::new(Amount::new(r_in), Amount::new(r_out))
    }

    // -- Reference values ---------------------------------------------------

    #[test]
    fn five_percent_trade_on_balanced_pool() {
        // 5 000 into 100 000/100 000: output 4 748, post-trade price
        // 95 252·10 000 / 105 000 = 9 071 → impact 929bp.
        let Ok(impact) = price_impact_bps(
            Amount::new(5_000),
            &reserves(100_000, 100_000),
            &FeeSchedule::STANDARD,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(impact, BasisPoints::new(929));
    }

    #[test]
    fn one_percent_trade_on_balanced_pool() {
        // 1 000 into 100 000/100 000: output 987, post-trade price
        // 99 013·10 000 / 101 000 = 9 803 → impact 197bp.
        let Ok(impact) = price_impact_bps(
            Amount::new(1_000),
            &reserves(100_000, 100_000),
            &FeeSchedule::STANDARD,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(impact, BasisPoints::new(197));
    }

    #[test]
    fn negligible_trade_approaches_zero() {
        // A single unit against a deep pool barely moves the price.
        let Ok(impact) = price_impact_bps(
            Amount::new(1),
            &reserves(100_000, 100_000),
            &FeeSchedule::STANDARD,
        ) else {
            panic!("expected Ok");
        };
        assert!(impact <= BasisPoints::new(1));
    }

    #[test]
    fn impact_grows_with_trade_size() {
        let pool = reserves(100_000, 100_000);
        let Ok(small) = price_impact_bps(Amount::new(1_000), &pool, &FeeSchedule::STANDARD) else {
            panic!("expected Ok");
        };
        let Ok(large) = price_impact_bps(Amount::new(10_000), &pool, &FeeSchedule::STANDARD)
        else {
            panic!("expected Ok");
        };
        assert!(large > small);
    }

    // -- Clamp to zero ------------------------------------------------------

    #[test]
    fn favorable_move_clamps_to_zero() {
        // With a truncated pre-trade price of zero (tiny output reserve
        // against a deep input reserve), the post-trade price cannot be
        // lower; the clamp returns zero rather than a negative impact.
        let Ok(impact) = price_impact_bps(
            Amount::new(10),
            &reserves(u64::MAX / 2, 2),
            &FeeSchedule::STANDARD,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(impact, BasisPoints::ZERO);
    }

    // -- Inherited error conditions -----------------------------------------

    #[test]
    fn zero_amount_rejected() {
        let err = price_impact_bps(
            Amount::ZERO,
            &reserves(100_000, 100_000),
            &FeeSchedule::STANDARD,
        );
        let Err(SwapError::InsufficientInput(_)) = err else {
            panic!("expected InsufficientInput");
        };
    }

    #[test]
    fn zero_liquidity_rejected() {
        let err = price_impact_bps(
            Amount::new(10),
            &reserves(0, 100_000),
            &FeeSchedule::STANDARD,
        );
        let Err(SwapError::ZeroLiquidity) = err else {
            panic!("expected ZeroLiquidity");
        };
    }

    // -- Bounds -------------------------------------------------------------

    #[test]
    fn impact_never_exceeds_full_scale() {
        // Swapping many times the pool depth cannot exceed 10 000bp.
        let Ok(impact) = price_impact_bps(
            Amount::new(10_000_000),
            &reserves(100_000, 100_000),
            &FeeSchedule::STANDARD,
        ) else {
            panic!("expected Ok");
        };
        assert!(impact <= BasisPoints::MAX_PERCENT);
    }
}
