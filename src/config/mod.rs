//! Engine configuration: fee schedule and safety ceilings.
//!
//! [`GuardConfig`] is the single injected configuration value for the
//! swap orchestrator. Its `Default` carries the canonical constants
//! (0.3% fee as `997/1000`, 5% slippage ceiling, 3% price-impact
//! ceiling); deployments may deserialize alternatives and must validate
//! them before use.

mod guard_config;

pub use guard_config::GuardConfig;
