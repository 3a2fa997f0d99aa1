//! # Swapguard
//!
//! Constant-product pricing and slippage-guarded swap orchestration for
//! AMM trading pairs.
//!
//! This crate implements the pricing mathematics and the safety checks
//! wrapped around a single-pair swap: exact integer quoting over a
//! `x · y = k` curve, price-impact projection, slippage validation, and
//! a guarded orchestrator that delegates execution to an external pool
//! ledger. Pool creation, liquidity management, and routing live outside
//! this crate, behind the [`traits`] seams.
//!
//! # Numeric policy
//!
//! The external surface is unsigned 64-bit. Every intermediate product
//! widens to `u128` before dividing, every division names an explicit
//! rounding direction, and rounding always biases in the pool's favor:
//! outputs floor, required inputs ceil. No floating point is used
//! anywhere.
//!
//! # Quick Start
//!
//! ```rust
//! use swapguard::config::GuardConfig;
//! use swapguard::domain::{
//!     AccountId, Amount, FeeSchedule, PairId, ReservePair, SwapReceipt, TradeRequest,
//! };
//! use swapguard::orchestrator::SafeSwapEngine;
//! use swapguard::pricing::quote_out;
//! use swapguard::traits::{ReserveReader, SwapExecutor};
//! use swapguard::{Result, SwapError};
//!
//! // A minimal in-memory ledger standing in for the external pool.
//! struct Ledger {
//!     reserves: ReservePair,
//! }
//!
//! impl ReserveReader for Ledger {
//!     fn reserves(&self, _pair: &PairId) -> Result<ReservePair> {
//!         Ok(self.reserves)
//!     }
//! }
//!
//! impl SwapExecutor for Ledger {
//!     fn execute_swap(
//!         &mut self,
//!         _trader: &AccountId,
//!         pair: &PairId,
//!         amount_in: Amount,
//!         min_amount_out: Amount,
//!     ) -> Result<SwapReceipt> {
//!         let reserves = self.reserves(pair)?;
//!         let amount_out = quote_out(amount_in, &reserves, &FeeSchedule::STANDARD)?;
//!         if amount_out < min_amount_out {
//!             return Err(SwapError::Execution("output below minimum".into()));
//!         }
//!         self.reserves = ReservePair::new(
//!             Amount::new(reserves.reserve_in().get() + amount_in.get()),
//!             Amount::new(reserves.reserve_out().get() - amount_out.get()),
//!         );
//!         SwapReceipt::new(amount_in, amount_out)
//!     }
//! }
//!
//! let ledger = Ledger {
//!     reserves: ReservePair::new(Amount::new(100_000), Amount::new(100_000)),
//! };
//! let mut engine = SafeSwapEngine::with_default_config(ledger);
//!
//! let trader = AccountId::from_bytes([1u8; 32]);
//! let pair = PairId::from_bytes([7u8; 32]);
//! let request = TradeRequest::with_system_bounds(Amount::new(1_000), Amount::new(950))
//!     .expect("non-zero input");
//!
//! let receipt = engine.safe_swap(&trader, &pair, &request).expect("swap succeeded");
//! assert_eq!(receipt.amount_out().get(), 987);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  builds TradeRequest + GuardConfig
//! └──────┬───────┘
//!        │ safe_swap(trader, pair, request)
//!        ▼
//! ┌──────────────┐
//! │ Orchestrator  │  snapshot read → impact guard → slippage guard
//! └──────┬───────┘
//!        │ quote_out / price_impact_bps / validate_slippage
//!        ▼
//! ┌──────────────┐
//! │ Pricing core  │  widened integer math, explicit rounding
//! └──────┬───────┘
//!        │ ReserveReader + SwapExecutor
//!        ▼
//! ┌──────────────┐
//! │ Pool ledger   │  external: owns reserves, settles transfers
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`BasisPoints`](domain::BasisPoints), [`TradeRequest`](domain::TradeRequest), … |
//! | [`traits`] | Ledger seams: [`ReserveReader`](traits::ReserveReader), [`SwapExecutor`](traits::SwapExecutor) |
//! | [`config`] | [`GuardConfig`](config::GuardConfig): fee schedule and safety ceilings |
//! | [`pricing`] | `quote_out`, `quote_in`, `quote_liquidity` |
//! | [`impact`] | `price_impact_bps` |
//! | [`slippage`] | `slippage_bps`, `validate_slippage` |
//! | [`orchestrator`] | [`SafeSwapEngine`](orchestrator::SafeSwapEngine) guarded entry point |
//! | [`math`] | Widened multiply-divide with explicit rounding |
//! | [`error`] | [`SwapError`](error::SwapError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod impact;
pub mod math;
pub mod orchestrator;
pub mod prelude;
pub mod pricing;
pub mod slippage;
pub mod traits;

pub use error::{Result, SwapError};

#[cfg(test)]
mod proptest_properties;
