//! Slippage- and impact-guarded swap orchestration.

use tracing::{debug, warn};

use crate::config::GuardConfig;
use crate::domain::{AccountId, Amount, BasisPoints, PairId, SwapReceipt, TradeRequest};
use crate::error::{Result, SwapError};
use crate::impact::price_impact_bps;
use crate::pricing::quote_out;
use crate::slippage::validate_slippage;
use crate::traits::{ReserveReader, SwapExecutor};

/// Coordinates a protected trade against an external pool ledger.
///
/// The engine holds a [`GuardConfig`] and a ledger implementing both
/// [`ReserveReader`] and [`SwapExecutor`]. It never mutates reserves
/// itself; validation happens against a single snapshot read, and the
/// actual transfer is delegated to the executor.
///
/// # Read-execute consistency
///
/// [`safe_swap`](Self::safe_swap) takes `&mut self` and therefore an
/// exclusive borrow of the ledger for the whole read → validate →
/// execute sequence. Within a process this makes the sequence indivisible
/// with respect to concurrent trades on the same ledger value. A ledger
/// shared across processes must provide its own serialization, e.g. a
/// per-pair lock or a transactional host.
///
/// # Protocol
///
/// 1. Read the pair's reserves once.
/// 2. Check the projected price impact against the effective ceiling.
/// 3. Quote the expected output from the same snapshot.
/// 4. Validate slippage against the caller's floor and the effective
///    tolerance.
/// 5. Delegate execution; the executor's error, if any, is surfaced
///    unchanged.
///
/// All guard failures occur strictly before the executor is invoked.
#[derive(Debug)]
pub struct SafeSwapEngine<L> {
    config: GuardConfig,
    ledger: L,
}

impl<L> SafeSwapEngine<L> {
    /// Creates an engine with the given configuration and ledger.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from [`GuardConfig::validate`];
    /// deserialized configurations are checked here.
    pub fn new(config: GuardConfig, ledger: L) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, ledger })
    }

    /// Creates an engine with the default configuration (0.3% fee, 5%
    /// slippage ceiling, 3% price-impact ceiling).
    pub fn with_default_config(ledger: L) -> Self {
        Self {
            config: GuardConfig::default(),
            ledger,
        }
    }

    /// Returns the engine's configuration.
    #[must_use]
    pub const fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Returns a shared reference to the ledger.
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Consumes the engine and returns the ledger.
    pub fn into_ledger(self) -> L {
        self.ledger
    }
}

impl<L> SafeSwapEngine<L>
where
    L: ReserveReader + SwapExecutor,
{
    /// Executes a protected swap for `trader` on `pair`.
    ///
    /// The caller's tolerances in `request` are clamped to the
    /// configured ceilings, so they can only tighten the protection.
    ///
    /// # Errors
    ///
    /// - [`SwapError::PriceImpactExceeded`] if the projected impact is
    ///   above the effective ceiling; the executor is not called.
    /// - [`SwapError::SlippageExceeded`] if the quote violates the
    ///   caller's floor tolerance; the executor is not called.
    /// - Pricing errors ([`SwapError::ZeroLiquidity`],
    ///   [`SwapError::InsufficientInput`], [`SwapError::Overflow`]) from
    ///   the snapshot computations.
    /// - Any executor failure, surfaced unchanged and never retried.
    pub fn safe_swap(
        &mut self,
        trader: &AccountId,
        pair: &PairId,
        request: &TradeRequest,
    ) -> Result<SwapReceipt> {
        let reserves = self.ledger.reserves(pair)?;

        let max_impact = request.max_price_impact().min(self.config.max_price_impact());
        let impact = price_impact_bps(request.amount_in(), &reserves, self.config.fee())?;
        if impact > max_impact {
            warn!(%impact, max = %max_impact, %reserves, "trade rejected: price impact above ceiling");
            return Err(SwapError::PriceImpactExceeded {
                impact,
                max: max_impact,
            });
        }

        let expected_output = quote_out(request.amount_in(), &reserves, self.config.fee())?;

        let max_slippage = request.max_slippage().min(self.config.max_slippage());
        if let Err(err) = validate_slippage(expected_output, request.min_amount_out(), max_slippage)
        {
            warn!(%expected_output, min_out = %request.min_amount_out(), "trade rejected: slippage above tolerance");
            return Err(err);
        }

        debug!(
            amount_in = %request.amount_in(),
            %expected_output,
            %impact,
            %reserves,
            "guards passed, delegating execution"
        );

        self.ledger
            .execute_swap(trader, pair, request.amount_in(), request.min_amount_out())
    }

    /// Quotes the expected output for `amount_in` on `pair` without
    /// executing anything.
    ///
    /// Intended for read-only price discovery; the ledger is not
    /// mutated.
    ///
    /// # Errors
    ///
    /// Propagates reserve-read and pricing errors.
    pub fn quote(&self, pair: &PairId, amount_in: Amount) -> Result<(Amount, Amount)> {
        let reserves = self.ledger.reserves(pair)?;
        let amount_out = quote_out(amount_in, &reserves, self.config.fee())?;
        Ok((amount_in, amount_out))
    }

    /// Computes the price impact `amount_in` would have on `pair`
    /// without executing anything.
    ///
    /// # Errors
    ///
    /// Propagates reserve-read and pricing errors.
    pub fn preview_impact(&self, pair: &PairId, amount_in: Amount) -> Result<BasisPoints> {
        let reserves = self.ledger.reserves(pair)?;
        price_impact_bps(amount_in, &reserves, self.config.fee())
    }
}
