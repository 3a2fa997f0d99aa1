//! Fundamental domain value types used throughout the pricing core.
//!
//! All types use newtypes with validated constructors to enforce
//! invariants: amounts are 64-bit on the external surface, percentages
//! are basis points, and every division names an explicit rounding
//! direction.

mod amount;
mod basis_points;
mod fee_schedule;
mod identifiers;
mod reserves;
mod rounding;
mod swap_receipt;
mod trade_request;

pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use fee_schedule::FeeSchedule;
pub use identifiers::{AccountId, PairId};
pub use reserves::ReservePair;
pub use rounding::Rounding;
pub use swap_receipt::SwapReceipt;
pub use trade_request::TradeRequest;
