use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use ot_prob::{Linear, Uniform};
use ot_transport::interpolate::{blend_quantiles, InterpolationConfig};
use ot_transport::wasserstein::{estimate, SeedMode, WassersteinConfig};

fn bench_transport(c: &mut Criterion) {
    let cfg = WassersteinConfig { p: 2.0, samples: 100_000, seed: SeedMode::Fixed(7) };
    c.bench_function("wasserstein_w2_100k", |b| {
        b.iter(|| black_box(estimate(&Uniform, &Linear, &cfg).unwrap()))
    });

    let icfg = InterpolationConfig::default();
    c.bench_function("quantile_blend_default", |b| {
        b.iter(|| black_box(blend_quantiles(&Uniform, &Linear, &icfg).unwrap().len()))
    });
}

criterion_group!(benches, bench_transport);
criterion_main!(benches);
