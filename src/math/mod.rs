//! Arithmetic utilities for pricing calculations.
//!
//! This module provides the widened multiply-divide building block used
//! by every pricing formula: intermediate products are held in `u128`
//! and every division names an explicit
//! [`Rounding`](crate::domain::Rounding) direction. No floating point is
//! used anywhere in the crate; price-sensitive results must be bit-exact
//! and reproducible.

mod wide;

pub use wide::{div_round, mul_div};
