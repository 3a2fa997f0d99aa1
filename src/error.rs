//! Unified error type for the swapguard library.
//!
//! All fallible operations across the crate return [`SwapError`] as their
//! error type, ensuring a consistent error handling experience for
//! consumers. Every check is fail-fast: errors are surfaced immediately,
//! never retried, and never partially applied.

use thiserror::Error;

use crate::domain::BasisPoints;

/// Errors produced by pricing, guard checks, and swap orchestration.
///
/// Variants carrying a `&'static str` include a short context message
/// describing which computation failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    /// One or both reserve sides of the pair are zero; pricing is
    /// undefined for an uninitialized or fully-drained pool.
    #[error("zero liquidity: both reserves must be strictly positive")]
    ZeroLiquidity,

    /// A supplied amount is zero, or a requested output is not strictly
    /// less than the available reserve.
    #[error("insufficient input: {0}")]
    InsufficientInput(&'static str),

    /// The projected trade would move the pool price beyond the ceiling.
    /// The caller must resubmit with a smaller input amount.
    #[error("price impact {impact} exceeds maximum {max}")]
    PriceImpactExceeded {
        /// The computed price impact of the prospective trade.
        impact: BasisPoints,
        /// The effective ceiling the trade was checked against.
        max: BasisPoints,
    },

    /// The caller's slippage tolerance is violated by the current quote.
    /// The caller must resubmit with updated expectations.
    #[error("slippage {slippage} exceeds maximum {max}")]
    SlippageExceeded {
        /// The computed slippage between expected and floor output.
        slippage: BasisPoints,
        /// The effective bound the trade was checked against.
        max: BasisPoints,
    },

    /// A caller-supplied or configured basis-point bound is outside the
    /// valid percentage range (`0..=10_000`).
    #[error("invalid bound: {0}")]
    InvalidBound(&'static str),

    /// A fee schedule violates its invariants.
    #[error("invalid fee schedule: {0}")]
    InvalidFee(&'static str),

    /// A widened intermediate result does not fit the surface integer
    /// width, or an intermediate product exceeds 128 bits.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Division by zero during a pricing computation.
    #[error("division by zero")]
    DivisionByZero,

    /// Opaque failure reported by the external swap executor, surfaced
    /// unchanged. Typically the realized output fell below the caller's
    /// minimum between quoting and execution.
    #[error("swap execution failed: {0}")]
    Execution(String),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, SwapError>;
