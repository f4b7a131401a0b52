//! Exact versus trapezoid cdf evaluation for the families without an
//! elementary cdf.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pk_core::{CdfMethod, EngineConfig};
use pk_distributions::distribution;

const FAMILIES: [(&str, &[f64]); 4] = [
    ("gamma", &[2.0, 2.0]),
    ("t", &[5.0]),
    ("f", &[5.0, 10.0]),
    ("chiSquare", &[4.0]),
];

fn bench_cdf(c: &mut Criterion) {
    let mut group = c.benchmark_group("cdf");
    for (label, method) in [("exact", CdfMethod::Exact), ("trapezoid", CdfMethod::trapezoid())] {
        let config = EngineConfig::default().with_cdf_method(method);
        for (name, values) in FAMILIES {
            let Ok(d) = distribution(name, values, &config) else {
                continue;
            };
            let x = d.median();
            group.bench_with_input(BenchmarkId::new(label, name), &x, |b, &x| {
                b.iter(|| d.cdf(black_box(x)))
            });
        }
    }
    group.finish();
}

fn bench_quantile(c: &mut Criterion) {
    let config = EngineConfig::default();
    let mut group = c.benchmark_group("quantile");
    for (name, values) in FAMILIES {
        let Ok(d) = distribution(name, values, &config) else {
            continue;
        };
        group.bench_function(name, |b| b.iter(|| d.quantile(black_box(0.95))));
    }
    group.finish();
}

criterion_group!(benches, bench_cdf, bench_quantile);
criterion_main!(benches);
