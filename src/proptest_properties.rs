//! Property-based tests using `proptest` for pricing invariants.
//!
//! Covers the core guarantees of the constant-product formulas:
//!
//! 1. **No drain** — a swap output is always strictly below the output
//!    reserve.
//! 2. **Monotonicity** — larger input never quotes a smaller output.
//! 3. **Invariant growth** — the reserve product never shrinks across a
//!    quoted swap.
//! 4. **Exact-out sufficiency** — paying `quote_in(y)` always yields at
//!    least `y`.
//! 5. **Round-trip quantization** — `quote_in(quote_out(x))` recovers
//!    `x` up to one unit of output-flooring loss, never more than `x`.
//! 6. **Liquidity round trip** — proportional quoting loses value, never
//!    creates it.
//! 7. **Impact/slippage ranges** — both stay within `0..=10_000`bp.

use proptest::prelude::*;

use crate::domain::{Amount, BasisPoints, FeeSchedule, ReservePair};
use crate::impact::price_impact_bps;
use crate::pricing::{quote_in, quote_liquidity, quote_out};
use crate::slippage::slippage_bps;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes where
/// a single quantization unit dominates the price.
fn reserve_strategy() -> impl Strategy<Value = u64> {
    10_000u64..=10_000_000u64
}

fn pair_strategy() -> impl Strategy<Value = (u64, u64)> {
    (reserve_strategy(), reserve_strategy())
}

fn fee() -> FeeSchedule {
    FeeSchedule::STANDARD
}

fn reserves(r_in: u64, r_out: u64) -> ReservePair {
    ReservePair::new(Amount::new(r_in), Amount::new(r_out))
}

// ---------------------------------------------------------------------------
// Property 1: No drain
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_output_never_drains_reserve(
        (r_in, r_out) in pair_strategy(),
        amount_in in 1u64..=1_000_000_000u64,
    ) {
        let out = quote_out(Amount::new(amount_in), &reserves(r_in, r_out), &fee())
            .expect("valid inputs");
        prop_assert!(out.get() < r_out);
    }

    // -----------------------------------------------------------------------
    // Property 2: Monotonicity in amount_in
    // -----------------------------------------------------------------------

    #[test]
    fn prop_output_monotone_in_input(
        (r_in, r_out) in pair_strategy(),
        amount_in in 1u64..=1_000_000u64,
        step in 1u64..=1_000u64,
    ) {
        let pool = reserves(r_in, r_out);
        let smaller = quote_out(Amount::new(amount_in), &pool, &fee()).expect("valid inputs");
        let larger = quote_out(Amount::new(amount_in + step), &pool, &fee())
            .expect("valid inputs");
        prop_assert!(larger >= smaller);
    }

    // -----------------------------------------------------------------------
    // Property 3: Reserve product never shrinks
    // -----------------------------------------------------------------------

    #[test]
    fn prop_reserve_product_non_decreasing(
        (r_in, r_out) in pair_strategy(),
        amount_in in 1u64..=1_000_000u64,
    ) {
        let pool = reserves(r_in, r_out);
        let out = quote_out(Amount::new(amount_in), &pool, &fee()).expect("valid inputs");
        let k_before = u128::from(r_in) * u128::from(r_out);
        let k_after = (u128::from(r_in) + u128::from(amount_in))
            * (u128::from(r_out) - u128::from(out.get()));
        prop_assert!(k_after >= k_before);
    }

    // -----------------------------------------------------------------------
    // Property 4: Paying the quoted input always covers the output
    // -----------------------------------------------------------------------

    #[test]
    fn prop_quoted_input_is_sufficient(
        (r_in, r_out) in pair_strategy(),
        divisor in 3u64..=1_000u64,
    ) {
        let amount_out = (r_out / divisor).max(1);
        let pool = reserves(r_in, r_out);
        let input = quote_in(Amount::new(amount_out), &pool, &fee()).expect("valid inputs");
        let realized = quote_out(input, &pool, &fee()).expect("valid inputs");
        prop_assert!(realized.get() >= amount_out);
    }

    // -----------------------------------------------------------------------
    // Property 5: Round trip recovers the input up to one unit
    // -----------------------------------------------------------------------

    #[test]
    fn prop_round_trip_bounded(
        r_in in 10_000u64..=1_000_000u64,
        multiplier in 1u64..=10u64,
        amount_in in 2u64..=100u64,
    ) {
        // Keep the output side at least as deep as the input side so one
        // unit of output flooring maps to at most one input unit.
        let r_out = r_in * multiplier;
        let x = amount_in * (r_in / 10_000);
        prop_assume!(x >= 2);
        let pool = reserves(r_in, r_out);
        let out = quote_out(Amount::new(x), &pool, &fee()).expect("valid inputs");
        prop_assume!(!out.is_zero());
        let recovered = quote_in(out, &pool, &fee()).expect("valid inputs");
        prop_assert!(recovered.get() <= x);
        prop_assert!(recovered.get() + 1 >= x);
    }

    // -----------------------------------------------------------------------
    // Property 6: Liquidity round trip loses value, never creates it
    // -----------------------------------------------------------------------

    #[test]
    fn prop_liquidity_round_trip_never_gains(
        (r_a, r_b) in pair_strategy(),
        amount_a in 1u64..=1_000_000u64,
    ) {
        let b = quote_liquidity(Amount::new(amount_a), Amount::new(r_a), Amount::new(r_b))
            .expect("valid inputs");
        prop_assume!(!b.is_zero());
        let a = quote_liquidity(b, Amount::new(r_b), Amount::new(r_a)).expect("valid inputs");
        prop_assert!(a.get() <= amount_a);
    }

    // -----------------------------------------------------------------------
    // Property 7: Impact and slippage stay in the basis-point range
    // -----------------------------------------------------------------------

    #[test]
    fn prop_impact_within_range(
        (r_in, r_out) in pair_strategy(),
        amount_in in 1u64..=100_000_000u64,
    ) {
        let impact = price_impact_bps(Amount::new(amount_in), &reserves(r_in, r_out), &fee())
            .expect("valid inputs");
        prop_assert!(impact <= BasisPoints::MAX_PERCENT);
    }

    #[test]
    fn prop_slippage_within_range(
        expected in 1u64..=1_000_000_000u64,
        floor in 0u64..=1_000_000_000u64,
    ) {
        let bps = slippage_bps(Amount::new(expected), Amount::new(floor))
            .expect("non-zero expected");
        prop_assert!(bps <= BasisPoints::MAX_PERCENT);
        if floor >= expected {
            prop_assert_eq!(bps, BasisPoints::ZERO);
        }
    }
}
