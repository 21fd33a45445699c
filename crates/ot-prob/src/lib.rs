//! Probability building blocks for Optran.
//!
//! This crate hosts the distribution representations shared by the
//! transport algorithms:
//! - analytic distributions with exact closed-form pdf/cdf/icdf
//! - named density functions for tabulation
//! - the tabulated distribution (discretized CDF with numeric inversion)
//! - small numeric helpers (lerp/clamp)

pub mod analytic;
pub mod density;
pub mod math;
pub mod tabulated;

pub use analytic::{Linear, Quadratic, Uniform};
pub use density::{Cubic, GaussianBump};
pub use tabulated::{invert_table, Tabulated};
