//! Named density functions for tabulation.
//!
//! A density is any `Fn(f64) -> f64` over `[0,1]`, nonnegative, not
//! necessarily normalized; tabulation normalizes the discretized mass. The
//! types here hold externally chosen parameters so a `Tabulated` can ask
//! for "density at x" without knowing the parameterization.

use ot_core::{Error, Result};

/// Unnormalized Gaussian bump, truncated to `[0,1]` by the tabulation domain.
///
/// `density(x) = exp(-((x - mean)/sigma)² / 2)`.
#[derive(Debug, Clone, Copy)]
pub struct GaussianBump {
    mean: f64,
    sigma: f64,
}

impl GaussianBump {
    /// Create a bump centered at `mean` with width `sigma`.
    pub fn new(mean: f64, sigma: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::Validation(format!("mean must be finite, got {}", mean)));
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(Error::Validation(format!("sigma must be finite and > 0, got {}", sigma)));
        }
        Ok(Self { mean, sigma })
    }

    /// Density at `x`.
    pub fn density(&self, x: f64) -> f64 {
        let z = (x - self.mean) / self.sigma;
        (-0.5 * z * z).exp()
    }
}

/// Cubic polynomial density `(x³ - 10x² + 5x + 11) / 10.417`.
///
/// Positive on `[0,1]` and already close to unit mass; the divisor is the
/// numerical integral of the polynomial over the domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cubic;

impl Cubic {
    /// Density at `x`.
    pub fn density(&self, x: f64) -> f64 {
        (x * x * x - 10.0 * x * x + 5.0 * x + 11.0) / 10.417
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gaussian_peak_at_mean() {
        let g = GaussianBump::new(0.4, 0.1).unwrap();
        assert_relative_eq!(g.density(0.4), 1.0, epsilon = 1e-12);
        assert!(g.density(0.2) < g.density(0.35));
    }

    #[test]
    fn test_gaussian_rejects_bad_sigma() {
        assert!(GaussianBump::new(0.5, 0.0).is_err());
        assert!(GaussianBump::new(0.5, -1.0).is_err());
        assert!(GaussianBump::new(0.5, f64::NAN).is_err());
        assert!(GaussianBump::new(f64::INFINITY, 0.1).is_err());
    }

    #[test]
    fn test_cubic_positive_on_domain() {
        for i in 0..=100 {
            let x = i as f64 / 100.0;
            assert!(Cubic.density(x) > 0.0, "x={}", x);
        }
    }

    #[test]
    fn test_cubic_near_unit_mass() {
        let n = 100_000;
        let mass: f64 = (0..n).map(|i| Cubic.density(i as f64 / (n - 1) as f64) / n as f64).sum();
        assert_relative_eq!(mass, 1.0, epsilon = 1e-2);
    }
}
