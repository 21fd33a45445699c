//! # ot-transport
//!
//! Transport statistics over the `Distribution` capability:
//! - Monte-Carlo estimation of the p-Wasserstein distance
//! - interpolation between distributions (density-space and quantile-space)
//!
//! ## Architecture
//!
//! This crate depends on the `Distribution` trait from ot-core, not on
//! concrete representations; analytic and tabulated distributions are
//! interchangeable everywhere.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Interpolation strategies producing discretized PDF families.
pub mod interpolate;
/// Online accumulators for streaming Monte-Carlo statistics.
pub mod running;
/// Monte-Carlo p-Wasserstein distance estimation.
pub mod wasserstein;

pub use interpolate::{blend_densities, blend_quantiles, InterpolatedPdf, InterpolationConfig};
pub use running::RunningMean;
pub use wasserstein::{estimate, SeedMode, WassersteinConfig, WassersteinResult};
