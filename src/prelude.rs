//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use swapguard::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    AccountId, Amount, BasisPoints, FeeSchedule, PairId, ReservePair, Rounding, SwapReceipt,
    TradeRequest,
};

// Re-export ledger seams
pub use crate::traits::{ReserveReader, SwapExecutor};

// Re-export configuration
pub use crate::config::GuardConfig;

// Re-export the guarded entry point
pub use crate::orchestrator::SafeSwapEngine;

// Re-export pricing operations
pub use crate::impact::price_impact_bps;
pub use crate::pricing::{quote_in, quote_liquidity, quote_out};
pub use crate::slippage::{slippage_bps, validate_slippage};

// Re-export error types
pub use crate::error::{Result, SwapError};
