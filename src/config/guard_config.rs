//! Safety configuration for the swap orchestrator.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{BasisPoints, FeeSchedule};
use crate::error::SwapError;

/// The fee schedule and hard safety ceilings applied to every guarded
/// swap.
///
/// The ceilings are enforced independently of caller input: a trade
/// request's own bounds are clamped to these values, so callers can only
/// tighten the protection. The configuration is injected into the engine
/// rather than hard-coded, keeping the pricing formulas testable against
/// alternative fee schedules and ceilings.
///
/// # Validation
///
/// - The fee schedule must satisfy its own invariants.
/// - Both ceilings must be valid percentages (`0..=10_000`).
///
/// Deserialized configurations bypass [`new`](Self::new); the engine
/// validates on construction.
///
/// # Examples
///
/// ```
/// use swapguard::config::GuardConfig;
///
/// let config = GuardConfig::default();
/// assert_eq!(config.max_slippage().get(), 500);
/// assert_eq!(config.max_price_impact().get(), 300);
/// assert_eq!(config.fee().complement(), 997);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    fee: FeeSchedule,
    max_slippage: BasisPoints,
    max_price_impact: BasisPoints,
}

impl GuardConfig {
    /// Default slippage ceiling: 5%.
    pub const DEFAULT_MAX_SLIPPAGE: BasisPoints = BasisPoints::new(500);

    /// Default price-impact ceiling: 3%.
    pub const DEFAULT_MAX_PRICE_IMPACT: BasisPoints = BasisPoints::new(300);

    /// Creates a new configuration.
    ///
    /// # Errors
    ///
    /// - Propagates [`SwapError::InvalidFee`] from the fee schedule.
    /// - Returns [`SwapError::InvalidBound`] if either ceiling exceeds
    ///   100%.
    pub fn new(
        fee: FeeSchedule,
        max_slippage: BasisPoints,
        max_price_impact: BasisPoints,
    ) -> crate::error::Result<Self> {
        let config = Self {
            fee,
            max_slippage,
            max_price_impact,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn validate(&self) -> crate::error::Result<()> {
        self.fee.validate()?;
        if !self.max_slippage.is_valid_percent() {
            return Err(SwapError::InvalidBound(
                "slippage ceiling must be at most 10000bp",
            ));
        }
        if !self.max_price_impact.is_valid_percent() {
            return Err(SwapError::InvalidBound(
                "price impact ceiling must be at most 10000bp",
            ));
        }
        Ok(())
    }

    /// Returns the fee schedule.
    #[must_use]
    pub const fn fee(&self) -> &FeeSchedule {
        &self.fee
    }

    /// Returns the slippage ceiling.
    #[must_use]
    pub const fn max_slippage(&self) -> BasisPoints {
        self.max_slippage
    }

    /// Returns the price-impact ceiling.
    #[must_use]
    pub const fn max_price_impact(&self) -> BasisPoints {
        self.max_price_impact
    }
}

impl Default for GuardConfig {
    /// The canonical configuration: 0.3% fee, 5% slippage ceiling, 3%
    /// price-impact ceiling.
    fn default() -> Self {
        Self {
            fee: FeeSchedule::STANDARD,
            max_slippage: Self::DEFAULT_MAX_SLIPPAGE,
            max_price_impact: Self::DEFAULT_MAX_PRICE_IMPACT,
        }
    }
}

impl fmt::Display for GuardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GuardConfig(fee={}, slippage<={}, impact<={})",
            self.fee, self.max_slippage, self.max_price_impact
        )
    }
}
