//! Core types for Optran.
//!
//! This crate hosts the pieces every other Optran crate builds on:
//! - the error type and `Result` alias
//! - the `Distribution` capability trait (pdf/cdf/icdf over `[0,1]`)

pub mod error;
pub mod traits;

pub use error::{Error, Result};
pub use traits::{Distribution, DOMAIN_MAX, DOMAIN_MIN};
