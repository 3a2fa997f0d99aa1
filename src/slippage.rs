//! Slippage measurement and validation.

use crate::domain::{Amount, BasisPoints};
use crate::error::{Result, SwapError};

/// Basis-point scale used for slippage ratios.
const BPS_SCALE: u128 = 10_000;

/// Computes the shortfall between an expected output and a floor value,
/// in basis points of the expected output.
///
/// Returns zero when the floor meets or exceeds the expectation; the
/// shortfall is never negative.
///
/// # Errors
///
/// Returns [`SwapError::InsufficientInput`] if `expected_output` is
/// zero — a shortfall relative to nothing is undefined.
///
/// # Examples
///
/// ```
/// use swapguard::domain::{Amount, BasisPoints};
/// use swapguard::slippage::slippage_bps;
///
/// let bps = slippage_bps(Amount::new(1_000), Amount::new(950)).unwrap();
/// assert_eq!(bps, BasisPoints::new(500));
/// ```
pub fn slippage_bps(expected_output: Amount, floor_output: Amount) -> Result<BasisPoints> {
    if expected_output.is_zero() {
        return Err(SwapError::InsufficientInput(
            "expected output must be non-zero",
        ));
    }
    if floor_output >= expected_output {
        return Ok(BasisPoints::ZERO);
    }

    let shortfall = expected_output.widen() - floor_output.widen();
    // shortfall < expected, so the quotient is strictly below 10_000.
    let bps = shortfall * BPS_SCALE / expected_output.widen();

    u32::try_from(bps)
        .map(BasisPoints::new)
        .map_err(|_| SwapError::Overflow("slippage"))
}

/// Validates that the shortfall between `expected_output` and
/// `floor_output` stays within `max_slippage`.
///
/// A computed value exactly equal to the bound passes; only a strictly
/// greater shortfall fails. This function performs no I/O and has no
/// side effects — it is a guard, not a calculator of trade outcome.
///
/// # Errors
///
/// - [`SwapError::SlippageExceeded`] if the shortfall is strictly
///   greater than `max_slippage`.
/// - [`SwapError::InsufficientInput`] if `expected_output` is zero.
///
/// # Examples
///
/// ```
/// use swapguard::domain::{Amount, BasisPoints};
/// use swapguard::slippage::validate_slippage;
///
/// // 5.0% exactly at the bound is allowed.
/// assert!(validate_slippage(Amount::new(1_000), Amount::new(950), BasisPoints::new(500)).is_ok());
/// // 6.0% is not.
/// assert!(validate_slippage(Amount::new(1_000), Amount::new(940), BasisPoints::new(500)).is_err());
/// ```
pub fn validate_slippage(
    expected_output: Amount,
    floor_output: Amount,
    max_slippage: BasisPoints,
) -> Result<()> {
    let slippage = slippage_bps(expected_output, floor_output)?;
    if slippage > max_slippage {
        return Err(SwapError::SlippageExceeded {
            slippage,
            max: max_slippage,
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- slippage_bps -------------------------------------------------------

    #[test]
    fn five_percent_shortfall() {
        let Ok(bps) = slippage_bps(Amount::new(1_000), Amount::new(950)) else {
            panic!("expected Ok");
        };
        assert_eq!(bps, BasisPoints::new(500));
    }

    #[test]
    fn six_percent_shortfall() {
        let Ok(bps) = slippage_bps(Amount::new(1_000), Amount::new(940)) else {
            panic!("expected Ok");
        };
        assert_eq!(bps, BasisPoints::new(600));
    }

    #[test]
    fn floor_meets_expectation() {
        let Ok(bps) = slippage_bps(Amount::new(1_000), Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(bps, BasisPoints::ZERO);
    }

    #[test]
    fn floor_above_expectation() {
        let Ok(bps) = slippage_bps(Amount::new(1_000), Amount::new(1_100)) else {
            panic!("expected Ok");
        };
        assert_eq!(bps, BasisPoints::ZERO);
    }

    #[test]
    fn zero_floor_is_full_shortfall() {
        let Ok(bps) = slippage_bps(Amount::new(1_000), Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(bps, BasisPoints::MAX_PERCENT);
    }

    #[test]
    fn shortfall_floors_fractional_bps() {
        // (987 − 950)·10 000 / 987 = 374.87… → 374
        let Ok(bps) = slippage_bps(Amount::new(987), Amount::new(950)) else {
            panic!("expected Ok");
        };
        assert_eq!(bps, BasisPoints::new(374));
    }

    #[test]
    fn zero_expected_rejected() {
        let err = slippage_bps(Amount::ZERO, Amount::new(10));
        let Err(SwapError::InsufficientInput(_)) = err else {
            panic!("expected InsufficientInput");
        };
    }

    // -- validate_slippage --------------------------------------------------

    #[test]
    fn exactly_at_bound_passes() {
        assert!(
            validate_slippage(Amount::new(1_000), Amount::new(950), BasisPoints::new(500)).is_ok()
        );
    }

    #[test]
    fn above_bound_fails_with_values() {
        let err = validate_slippage(Amount::new(1_000), Amount::new(940), BasisPoints::new(500));
        let Err(SwapError::SlippageExceeded { slippage, max }) = err else {
            panic!("expected SlippageExceeded");
        };
        assert_eq!(slippage, BasisPoints::new(600));
        assert_eq!(max, BasisPoints::new(500));
    }

    #[test]
    fn zero_tolerance_requires_full_fill() {
        assert!(
            validate_slippage(Amount::new(1_000), Amount::new(1_000), BasisPoints::ZERO).is_ok()
        );
        let err = validate_slippage(Amount::new(1_000), Amount::new(999), BasisPoints::ZERO);
        let Err(SwapError::SlippageExceeded { .. }) = err else {
            panic!("expected SlippageExceeded");
        };
    }
}
