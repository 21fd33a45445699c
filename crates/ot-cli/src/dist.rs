//! Parse distribution specs from the command line.

use anyhow::{anyhow, bail, Context, Result};
use ot_core::Distribution;
use ot_prob::{Cubic, GaussianBump, Linear, Quadratic, Tabulated, Uniform};

/// Parse a distribution spec string.
///
/// `uniform`, `linear` and `quadratic` are analytic; `cubic` and
/// `gauss:<mean>:<sigma>` are tabulated at the given resolutions.
pub fn parse_distribution(
    spec: &str,
    pdf_samples: usize,
    cdf_samples: usize,
) -> Result<Box<dyn Distribution>> {
    match spec {
        "uniform" => Ok(Box::new(Uniform)),
        "linear" => Ok(Box::new(Linear)),
        "quadratic" => Ok(Box::new(Quadratic)),
        "cubic" => {
            let t = Tabulated::from_density(|x| Cubic.density(x), pdf_samples, cdf_samples)?;
            Ok(Box::new(t))
        }
        other => {
            let Some(rest) = other.strip_prefix("gauss:") else {
                bail!(
                    "unknown distribution spec '{}' \
                     (expected uniform|linear|quadratic|cubic|gauss:<mean>:<sigma>)",
                    other
                );
            };
            let (mean_s, sigma_s) = rest
                .split_once(':')
                .ok_or_else(|| anyhow!("gauss spec needs '<mean>:<sigma>', got '{}'", rest))?;
            let mean: f64 =
                mean_s.parse().with_context(|| format!("invalid gauss mean '{}'", mean_s))?;
            let sigma: f64 =
                sigma_s.parse().with_context(|| format!("invalid gauss sigma '{}'", sigma_s))?;
            let bump = GaussianBump::new(mean, sigma)?;
            let t = Tabulated::from_density(move |x| bump.density(x), pdf_samples, cdf_samples)?;
            Ok(Box::new(t))
        }
    }
}
