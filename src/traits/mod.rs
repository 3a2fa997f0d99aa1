//! Boundary traits to the external pool ledger.
//!
//! The pricing core is a coordinator, not an owner of reserve data. It
//! consumes two narrow interfaces: [`ReserveReader`] for snapshot reads
//! of a pair's balances and [`SwapExecutor`] for the actual balance
//! transfer and reserve mutation.

mod reserve_reader;
mod swap_executor;

pub use reserve_reader::ReserveReader;
pub use swap_executor::SwapExecutor;
