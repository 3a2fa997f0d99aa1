//! Opaque identifiers for trading pairs and trader accounts.
//!
//! The pricing core never interprets these values; it only forwards them
//! to the external reserve reader and swap executor. Both wrap a
//! fixed-size `[u8; 32]` byte array so they stay chain-agnostic.

/// Identifies a trading pair in the external pool ledger.
///
/// All 32-byte sequences are considered valid identifiers, so
/// construction is infallible.
///
/// # Examples
///
/// ```
/// use swapguard::domain::PairId;
///
/// let pair = PairId::from_bytes([7u8; 32]);
/// assert_eq!(pair.as_bytes(), [7u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairId([u8; 32]);

impl PairId {
    /// Creates a `PairId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

/// Identifies the account initiating a trade.
///
/// # Examples
///
/// ```
/// use swapguard::domain::AccountId;
///
/// let trader = AccountId::from_bytes([1u8; 32]);
/// assert_eq!(trader.as_bytes(), [1u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}
