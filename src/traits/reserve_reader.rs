//! Read access to the external pool ledger.

use crate::domain::{PairId, ReservePair};
use crate::error::SwapError;

/// Synchronous read access to a pair's current reserve balances.
///
/// The pricing core never stores reserves itself; it reads a snapshot
/// through this trait at the start of each guarded swap and prices
/// against that snapshot. The ledger behind the trait owns and mutates
/// the balances.
///
/// # Snapshot semantics
///
/// A single call returns one consistent `(reserve_in, reserve_out)`
/// observation. The orchestrator reads exactly once per swap and holds
/// the exclusive borrow of the ledger until execution completes, so
/// within one process no other trade can move the pair between the read
/// and the execution. Implementations shared across processes must
/// provide their own serialization (for example a per-pair lock or a
/// transactional host).
///
/// # Errors
///
/// - [`SwapError::ZeroLiquidity`] may be returned directly for an
///   uninitialized pair, or the implementation may report the zero
///   balances as-is and let the pricing functions reject them.
/// - Any other failure mode is implementation-defined.
pub trait ReserveReader {
    /// Returns the current reserve balances for `pair`, oriented so that
    /// `reserve_in` is the side the trader pays into.
    fn reserves(&self, pair: &PairId) -> Result<ReservePair, SwapError>;
}
