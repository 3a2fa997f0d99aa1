//! Outcome of an executed swap.

use core::fmt;

use crate::error::SwapError;

use super::Amount;

/// The amounts actually exchanged by the external swap executor.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0` — a receipt never records an
///   empty leg; executors report failure instead of a zero fill.
///
/// # Examples
///
/// ```
/// use swapguard::domain::{Amount, SwapReceipt};
///
/// let receipt = SwapReceipt::new(Amount::new(1000), Amount::new(987));
/// assert!(receipt.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapReceipt {
    amount_in: Amount,
    amount_out: Amount,
}

impl SwapReceipt {
    /// Creates a new receipt with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InsufficientInput`] if either amount is zero.
    pub const fn new(amount_in: Amount, amount_out: Amount) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(SwapError::InsufficientInput(
                "receipt amount_in must be non-zero",
            ));
        }
        if amount_out.is_zero() {
            return Err(SwapError::InsufficientInput(
                "receipt amount_out must be non-zero",
            ));
        }
        Ok(Self {
            amount_in,
            amount_out,
        })
    }

    /// Returns the amount the trader paid in.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the amount the trader received.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }
}

impl fmt::Display for SwapReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapReceipt(in={}, out={})",
            self.amount_in, self.amount_out
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_receipt() {
        let Ok(r) = SwapReceipt::new(Amount::new(1000), Amount::new(987)) else {
            panic!("expected Ok");
        };
        assert_eq!(r.amount_in(), Amount::new(1000));
        assert_eq!(r.amount_out(), Amount::new(987));
    }

    #[test]
    fn zero_in_rejected() {
        let err = SwapReceipt::new(Amount::ZERO, Amount::new(1));
        let Err(SwapError::InsufficientInput(_)) = err else {
            panic!("expected InsufficientInput");
        };
    }

    #[test]
    fn zero_out_rejected() {
        let err = SwapReceipt::new(Amount::new(1), Amount::ZERO);
        let Err(SwapError::InsufficientInput(_)) = err else {
            panic!("expected InsufficientInput");
        };
    }

    #[test]
    fn display() {
        let Ok(r) = SwapReceipt::new(Amount::new(1000), Amount::new(987)) else {
            panic!("expected Ok");
        };
        assert_eq!(format!("{r}"), "SwapReceipt(in=1000, out=987)");
    }
}
