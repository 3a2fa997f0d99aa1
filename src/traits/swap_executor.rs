//! Delegated swap execution against the external pool ledger.

use crate::domain::{AccountId, Amount, PairId, SwapReceipt};
use crate::error::SwapError;

/// Performs the actual balance transfer and reserve mutation for a swap.
///
/// The pricing core validates a trade (price impact, slippage) and then
/// delegates execution through this trait. The executor re-derives the
/// realized output from the ledger's state *at execution time*; the
/// orchestrator's exclusive borrow guarantees that state matches the
/// snapshot it validated against within a process.
///
/// # Contract
///
/// - The swap is atomic: it either completes fully or fails without any
///   partial application.
/// - The executor must fail if the realized output would be less than
///   `min_amount_out`; the failure is implementation-defined and is
///   surfaced by the orchestrator unchanged, typically as
///   [`SwapError::Execution`].
/// - The executor never retries internally.
pub trait SwapExecutor {
    /// Executes the swap of `amount_in` on `pair` for `trader`,
    /// transferring at least `min_amount_out` to the trader.
    ///
    /// # Errors
    ///
    /// Implementation-defined; [`SwapError::Execution`] for realized
    /// output below the minimum or any transfer failure.
    fn execute_swap(
        &mut self,
        trader: &AccountId,
        pair: &PairId,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<SwapReceipt, SwapError>;
}
