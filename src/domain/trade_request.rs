//! Caller-supplied parameters for one swap attempt.

use core::fmt;

use crate::error::SwapError;

use super::{Amount, BasisPoints};

/// The parameters a trader submits for a single protected swap.
///
/// The two basis-point bounds are the caller's tolerances. At
/// orchestration time they are clamped to the engine's configured
/// ceilings, so a caller can only ever tighten the protection, never
/// loosen it.
///
/// # Invariants
///
/// - `amount_in` is strictly positive.
/// - Both bounds are valid percentages (`0..=10_000`).
///
/// # Examples
///
/// ```
/// use swapguard::domain::{Amount, BasisPoints, TradeRequest};
///
/// let request = TradeRequest::new(
///     Amount::new(1_000),
///     Amount::new(950),
///     BasisPoints::new(500),
///     BasisPoints::new(300),
/// );
/// assert!(request.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TradeRequest {
    amount_in: Amount,
    min_amount_out: Amount,
    max_slippage: BasisPoints,
    max_price_impact: BasisPoints,
}

impl TradeRequest {
    /// Creates a new trade request with validated invariants.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InsufficientInput`] if `amount_in` is zero.
    /// - [`SwapError::InvalidBound`] if either bound exceeds 100%.
    pub const fn new(
        amount_in: Amount,
        min_amount_out: Amount,
        max_slippage: BasisPoints,
        max_price_impact: BasisPoints,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(SwapError::InsufficientInput(
                "trade amount_in must be non-zero",
            ));
        }
        if !max_slippage.is_valid_percent() {
            return Err(SwapError::InvalidBound(
                "max slippage must be at most 10000bp",
            ));
        }
        if !max_price_impact.is_valid_percent() {
            return Err(SwapError::InvalidBound(
                "max price impact must be at most 10000bp",
            ));
        }
        Ok(Self {
            amount_in,
            min_amount_out,
            max_slippage,
            max_price_impact,
        })
    }

    /// Creates a request whose tolerances are left at 100%, so only the
    /// engine's configured ceilings apply.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InsufficientInput`] if `amount_in` is zero.
    pub const fn with_system_bounds(
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> crate::error::Result<Self> {
        Self::new(
            amount_in,
            min_amount_out,
            BasisPoints::MAX_PERCENT,
            BasisPoints::MAX_PERCENT,
        )
    }

    /// Returns the input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the minimum acceptable output.
    pub const fn min_amount_out(&self) -> Amount {
        self.min_amount_out
    }

    /// Returns the caller's slippage tolerance.
    #[must_use]
    pub const fn max_slippage(&self) -> BasisPoints {
        self.max_slippage
    }

    /// Returns the caller's price-impact tolerance.
    #[must_use]
    pub const fn max_price_impact(&self) -> BasisPoints {
        self.max_price_impact
    }
}

impl fmt::Display for TradeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TradeRequest(in={}, min_out={}, slippage<={}, impact<={})",
            self.amount_in, self.min_amount_out, self.max_slippage, self.max_price_impact
        )
    }
}
