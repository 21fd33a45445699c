//! Interpolation between distributions.
//!
//! Two independent strategies produce, for each of `steps` equally spaced
//! parameters `t` in `[0,1]`, one normalized discretized PDF:
//!
//! - **Density-space**: lerp the two PDFs pointwise and renormalize. Simple,
//!   but not transport-optimal: when the shapes differ it can introduce
//!   artificial multimodality (mass fades out in one place and in at
//!   another instead of moving).
//! - **Quantile-space**: lerp the two quantile functions pointwise and
//!   re-invert the blended table. Blending quantiles approximates the
//!   displacement interpolation between the endpoints, the path that
//!   corresponds to Wasserstein-barycentric interpolation in one dimension.
//!
//! Neither strategy writes output anywhere; each hands back arrays for the
//! caller to persist.

use ot_core::{Distribution, Error, Result};
use ot_prob::invert_table;
use ot_prob::math::lerp;
use serde::{Deserialize, Serialize};

/// Resolutions for both interpolation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpolationConfig {
    /// Number of interpolation parameters `t`, evenly spaced over `[0,1]`.
    pub steps: usize,
    /// Density-space: output PDF resolution.
    pub values: usize,
    /// Quantile-space: resolution of the blended quantile table.
    pub icdf_values: usize,
    /// Quantile-space: output PDF resolution.
    pub pdf_values: usize,
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self { steps: 5, values: 100, icdf_values: 1000, pdf_values: 100 }
    }
}

/// One normalized discretized PDF at interpolation parameter `t`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpolatedPdf {
    /// Interpolation parameter in `[0,1]`.
    pub t: f64,
    /// Discretized PDF, normalized to sum to 1.
    pub values: Vec<f64>,
}

fn require_at_least(value: usize, min: usize, name: &str) -> Result<()> {
    if value < min {
        return Err(Error::Validation(format!("{} must be >= {}, got {}", name, min, value)));
    }
    Ok(())
}

/// Normalize a discretized PDF to unit sum.
fn normalize_pdf(values: &mut [f64]) -> Result<()> {
    let total: f64 = values.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(Error::Computation(format!(
            "interpolated PDF has no mass to normalize (sum = {})",
            total
        )));
    }
    for v in values.iter_mut() {
        *v /= total;
    }
    Ok(())
}

/// Density-space interpolation: pointwise PDF blend.
///
/// For each `t`, samples both PDFs on `config.values` evenly spaced points,
/// lerps pointwise, and renormalizes. At `t = 0` and `t = 1` this reproduces
/// the normalized discretizations of the two sources.
pub fn blend_densities(
    a: &dyn Distribution,
    b: &dyn Distribution,
    config: &InterpolationConfig,
) -> Result<Vec<InterpolatedPdf>> {
    require_at_least(config.steps, 2, "steps")?;
    require_at_least(config.values, 2, "values")?;

    let mut out = Vec::with_capacity(config.steps);
    for step in 0..config.steps {
        let t = step as f64 / (config.steps - 1) as f64;
        let mut values: Vec<f64> = (0..config.values)
            .map(|i| {
                let x = i as f64 / (config.values - 1) as f64;
                lerp(a.pdf(x), b.pdf(x), t)
            })
            .collect();
        normalize_pdf(&mut values)?;
        out.push(InterpolatedPdf { t, values });
    }
    Ok(out)
}

/// Quantile-space interpolation: blend the quantile functions and re-invert.
///
/// For each `t`:
/// 1. evaluate both ICDFs on `config.icdf_values` evenly spaced `u` and lerp
///    pointwise; the final entry is forced to exactly `1.0`;
/// 2. invert the blended quantile table into a CDF of `config.pdf_values + 1`
///    points with the same binary-search-and-interpolate routine the
///    tabulated distributions use, renormalized so the last entry is `1.0`;
/// 3. forward-difference the CDF into a PDF and renormalize to unit sum.
pub fn blend_quantiles(
    a: &dyn Distribution,
    b: &dyn Distribution,
    config: &InterpolationConfig,
) -> Result<Vec<InterpolatedPdf>> {
    require_at_least(config.steps, 2, "steps")?;
    require_at_least(config.icdf_values, 2, "icdf_values")?;
    require_at_least(config.pdf_values, 2, "pdf_values")?;

    let mut out = Vec::with_capacity(config.steps);
    for step in 0..config.steps {
        let t = step as f64 / (config.steps - 1) as f64;

        // Pointwise blend of the two quantile functions. Both are
        // non-decreasing, so the blend is a valid quantile table.
        let mut blended: Vec<f64> = (0..config.icdf_values)
            .map(|i| {
                let u = i as f64 / (config.icdf_values - 1) as f64;
                lerp(a.icdf(u), b.icdf(u), t)
            })
            .collect();
        let len = blended.len();
        blended[len - 1] = 1.0;

        // Re-invert into a coarse CDF and pin the last entry to 1.0.
        let mut cdf: Vec<f64> = (0..=config.pdf_values)
            .map(|j| {
                let x = j as f64 / config.pdf_values as f64;
                invert_table(&blended, x)
            })
            .collect();
        let last = cdf[config.pdf_values];
        if !last.is_finite() || last <= 0.0 {
            return Err(Error::Computation(format!(
                "blended quantile table inverted to an empty CDF (last = {})",
                last
            )));
        }
        for v in cdf.iter_mut() {
            *v /= last;
        }

        // Forward differences attribute each bin's mass to its left edge, so
        // the reconstruction sits up to half a bin below its true position.
        // Known limitation of this reconstruction; the output is treated as
        // bin-indexed rather than x-positioned.
        let mut values: Vec<f64> = cdf.windows(2).map(|w| w[1] - w[0]).collect();
        normalize_pdf(&mut values)?;
        out.push(InterpolatedPdf { t, values });
    }
    Ok(out)
}
