//! Optran CLI

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ot_transport::interpolate::{blend_densities, blend_quantiles, InterpolationConfig};
use ot_transport::wasserstein::{
    estimate, SeedMode, WassersteinConfig, WassersteinResult, DEFAULT_SEED,
};

mod dist;
mod table;

#[derive(Parser)]
#[command(name = "optran")]
#[command(about = "Optran - one-dimensional optimal-transport statistics")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Pointwise PDF blend
    Density,
    /// Blend the quantile functions and re-invert
    Quantile,
}

#[derive(Subcommand)]
enum Commands {
    /// Monte-Carlo p-Wasserstein distance between two distributions
    Wasserstein {
        /// First distribution (uniform|linear|quadratic|cubic|gauss:<mean>:<sigma>)
        #[arg(long)]
        first: String,

        /// Second distribution
        #[arg(long)]
        second: String,

        /// Distance exponent (> 0)
        #[arg(long, default_value = "2.0")]
        p: f64,

        /// Number of uniform draws
        #[arg(long, default_value = "10000000")]
        samples: u64,

        /// RNG seed (deterministic mode)
        #[arg(long, conflicts_with = "entropy")]
        seed: Option<u64>,

        /// Seed from OS entropy instead of a fixed seed
        #[arg(long)]
        entropy: bool,

        /// Fine sampling resolution for tabulated specs
        #[arg(long, default_value = "10000")]
        pdf_samples: usize,

        /// Table resolution for tabulated specs
        #[arg(long, default_value = "100")]
        cdf_samples: usize,

        /// Output file for the result (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Interpolate between two distributions and write a CSV table
    Interpolate {
        /// First distribution (uniform|linear|quadratic|cubic|gauss:<mean>:<sigma>)
        #[arg(long)]
        first: String,

        /// Second distribution
        #[arg(long)]
        second: String,

        /// Interpolation strategy
        #[arg(long, value_enum, default_value = "quantile")]
        strategy: Strategy,

        /// Number of interpolation steps (CSV columns)
        #[arg(long, default_value = "5")]
        steps: usize,

        /// Density-space output resolution
        #[arg(long, default_value = "100")]
        values: usize,

        /// Quantile-space blended-table resolution
        #[arg(long, default_value = "1000")]
        icdf_values: usize,

        /// Quantile-space output resolution
        #[arg(long, default_value = "100")]
        pdf_values: usize,

        /// Fine sampling resolution for tabulated specs
        #[arg(long, default_value = "10000")]
        pdf_samples: usize,

        /// Table resolution for tabulated specs
        #[arg(long, default_value = "100")]
        cdf_samples: usize,

        /// Output CSV path
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn write_json(output: Option<&Path>, value: &serde_json::Value) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            std::fs::write(path, pretty)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{}", pretty),
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_wasserstein(
    first: &str,
    second: &str,
    p: f64,
    samples: u64,
    seed: Option<u64>,
    entropy: bool,
    pdf_samples: usize,
    cdf_samples: usize,
    output: Option<&Path>,
) -> Result<()> {
    let a = dist::parse_distribution(first, pdf_samples, cdf_samples)?;
    let b = dist::parse_distribution(second, pdf_samples, cdf_samples)?;

    let seed = if entropy {
        SeedMode::Entropy
    } else {
        SeedMode::Fixed(seed.unwrap_or(DEFAULT_SEED))
    };
    let config = WassersteinConfig { p, samples, seed };

    let distance = estimate(a.as_ref(), b.as_ref(), &config)?;
    let result = WassersteinResult { p, samples, distance };
    write_json(output, &serde_json::to_value(&result)?)
}

#[allow(clippy::too_many_arguments)]
fn run_interpolate(
    first: &str,
    second: &str,
    strategy: Strategy,
    config: &InterpolationConfig,
    pdf_samples: usize,
    cdf_samples: usize,
    output: &Path,
) -> Result<()> {
    let a = dist::parse_distribution(first, pdf_samples, cdf_samples)?;
    let b = dist::parse_distribution(second, pdf_samples, cdf_samples)?;

    let pdfs = match strategy {
        Strategy::Density => blend_densities(a.as_ref(), b.as_ref(), config)?,
        Strategy::Quantile => blend_quantiles(a.as_ref(), b.as_ref(), config)?,
    };

    let file = std::fs::File::create(output)
        .with_context(|| format!("creating {}", output.display()))?;
    table::write_interpolation_csv(file, &pdfs)?;
    eprintln!("Wrote {}", output.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Wasserstein {
            first,
            second,
            p,
            samples,
            seed,
            entropy,
            pdf_samples,
            cdf_samples,
            output,
        } => run_wasserstein(
            &first,
            &second,
            p,
            samples,
            seed,
            entropy,
            pdf_samples,
            cdf_samples,
            output.as_deref(),
        ),
        Commands::Interpolate {
            first,
            second,
            strategy,
            steps,
            values,
            icdf_values,
            pdf_values,
            pdf_samples,
            cdf_samples,
            output,
        } => {
            let config = InterpolationConfig { steps, values, icdf_values, pdf_values };
            run_interpolate(&first, &second, strategy, &config, pdf_samples, cdf_samples, &output)
        }
    }
}
