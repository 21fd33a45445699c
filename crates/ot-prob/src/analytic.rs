//! Analytic distributions on `[0,1]`.
//!
//! Each variant carries exact closed-form pdf/cdf/icdf, with the icdf the
//! exact inverse of the cumulative integral of the density. These are the
//! ground truth against which the tabulated path is validated.

use ot_core::{Distribution, DOMAIN_MAX, DOMAIN_MIN};

use crate::math::clamp01;

#[inline]
fn in_domain(x: f64) -> bool {
    (DOMAIN_MIN..=DOMAIN_MAX).contains(&x)
}

/// Uniform distribution: `pdf(x) = 1`.
///
/// `cdf(x) = x`, `icdf(u) = u`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl Distribution for Uniform {
    fn pdf(&self, x: f64) -> f64 {
        if in_domain(x) { 1.0 } else { 0.0 }
    }

    fn cdf(&self, x: f64) -> f64 {
        clamp01(x)
    }

    fn icdf(&self, u: f64) -> f64 {
        clamp01(u)
    }
}

/// Linearly increasing distribution: `pdf(x) = 2x`.
///
/// `cdf(x) = x²`, `icdf(u) = √u`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl Distribution for Linear {
    fn pdf(&self, x: f64) -> f64 {
        if in_domain(x) { 2.0 * x } else { 0.0 }
    }

    fn cdf(&self, x: f64) -> f64 {
        let x = clamp01(x);
        x * x
    }

    fn icdf(&self, u: f64) -> f64 {
        clamp01(u).sqrt()
    }
}

/// Quadratically increasing distribution: `pdf(x) = 3x²`.
///
/// `cdf(x) = x³`, `icdf(u) = u^(1/3)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quadratic;

impl Distribution for Quadratic {
    fn pdf(&self, x: f64) -> f64 {
        if in_domain(x) { 3.0 * x * x } else { 0.0 }
    }

    fn cdf(&self, x: f64) -> f64 {
        let x = clamp01(x);
        x * x * x
    }

    fn icdf(&self, u: f64) -> f64 {
        clamp01(u).cbrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn variants() -> Vec<Box<dyn Distribution>> {
        vec![Box::new(Uniform), Box::new(Linear), Box::new(Quadratic)]
    }

    #[test]
    fn test_icdf_bounds() {
        for d in variants() {
            assert_eq!(d.icdf(0.0), 0.0);
            assert_eq!(d.icdf(1.0), 1.0);
        }
    }

    #[test]
    fn test_icdf_clamps_out_of_domain() {
        for d in variants() {
            assert_eq!(d.icdf(-0.5), 0.0);
            assert_eq!(d.icdf(1.5), 1.0);
        }
    }

    #[test]
    fn test_icdf_non_decreasing() {
        for d in variants() {
            let mut prev = d.icdf(0.0);
            for i in 1..=1000 {
                let u = i as f64 / 1000.0;
                let q = d.icdf(u);
                assert!(q >= prev, "icdf decreased at u={}", u);
                prev = q;
            }
        }
    }

    #[test]
    fn test_cdf_icdf_round_trip() {
        for d in variants() {
            for i in 0..=1000 {
                let u = i as f64 / 1000.0;
                assert_abs_diff_eq!(d.cdf(d.icdf(u)), u, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn test_pdf_zero_outside_domain() {
        for d in variants() {
            assert_eq!(d.pdf(-0.1), 0.0);
            assert_eq!(d.pdf(1.1), 0.0);
        }
    }

    #[test]
    fn test_linear_closed_forms() {
        assert_abs_diff_eq!(Linear.pdf(0.5), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Linear.icdf(0.25), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(Quadratic.icdf(0.125), 0.5, epsilon = 1e-12);
    }
}
