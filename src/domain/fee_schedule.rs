//! Per-mille fee schedule for constant-product pricing.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SwapError;

use super::BasisPoints;

/// The input fee applied by the pricing formulas, expressed as a
/// per-mille complement.
///
/// A swap keeps `complement / scale` of the input amount for pricing and
/// leaves the remainder in the pool as the fee. The canonical 0.3% fee
/// is `997 / 1000`: the formulas multiply the input by 997 and the
/// reserve by 1000, so the fee is applied without any intermediate
/// division.
///
/// The schedule is injected into every pricing call rather than
/// hard-coded, so the engine can be exercised against alternative fee
/// schedules without code changes.
///
/// # Invariants
///
/// - `scale` is non-zero.
/// - `0 < complement <= scale` — a 100% fee (zero complement) would make
///   every swap return nothing and is rejected at construction.
///
/// # Examples
///
/// ```
/// use swapguard::domain::FeeSchedule;
///
/// let fee = FeeSchedule::STANDARD;
/// assert_eq!(fee.complement(), 997);
/// assert_eq!(fee.scale(), 1000);
/// assert_eq!(fee.fee_bps().get(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeeSchedule {
    complement: u32,
    scale: u32,
}

impl FeeSchedule {
    /// The canonical 0.3% input fee (`997 / 1000`).
    pub const STANDARD: Self = Self {
        complement: 997,
        scale: 1000,
    };

    /// Creates a new fee schedule.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidFee`] if `scale` is zero, `complement`
    /// is zero, or `complement` exceeds `scale`.
    pub fn new(complement: u32, scale: u32) -> crate::error::Result<Self> {
        let schedule = Self { complement, scale };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Validates the schedule invariants.
    ///
    /// Deserialized schedules bypass [`new`](Self::new); callers loading
    /// configuration must validate before use (the orchestrator does so
    /// on construction).
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidFee`] on any violated invariant.
    pub const fn validate(&self) -> crate::error::Result<()> {
        if self.scale == 0 {
            return Err(SwapError::InvalidFee("fee scale must be non-zero"));
        }
        if self.complement == 0 {
            return Err(SwapError::InvalidFee("fee complement must be non-zero"));
        }
        if self.complement > self.scale {
            return Err(SwapError::InvalidFee(
                "fee complement must not exceed the scale",
            ));
        }
        Ok(())
    }

    /// Returns the kept fraction's numerator.
    #[must_use]
    pub const fn complement(&self) -> u32 {
        self.complement
    }

    /// Returns the kept fraction's denominator.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns the fee rate in basis points, floor-rounded.
    #[must_use]
    pub const fn fee_bps(&self) -> BasisPoints {
        let taken = (self.scale - self.complement) as u64;
        BasisPoints::new(((taken * 10_000) / self.scale as u64) as u32)
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for FeeSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.complement, self.scale)
    }
}
