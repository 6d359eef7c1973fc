//! Criterion benchmarks for the kernel hot paths.
//! Focus: rational arithmetic, track evaluation by keyframe count, arc/edge tests.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p animgeom

use animgeom::anim::{Animation, Keyframe, KeyframeKind};
use animgeom::geom2::{region_contains, Arc, Edge, PathSegment, Point};
use animgeom::rational::Rational;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_rationals(n: usize, seed: u64) -> Vec<Rational> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .filter_map(|_| Rational::new(rng.gen_range(-10_000..10_000), rng.gen_range(1..1_000)).ok())
        .collect()
}

fn random_track(n: usize, seed: u64) -> Animation<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Animation::from_keyframes((0..n).map(|i| {
        Keyframe::new(rng.gen::<f64>(), KeyframeKind::Spline, Rational::from(i as i64))
    }))
}

fn random_edges(n: usize, seed: u64) -> Vec<Edge> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pt = || Point::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
    (0..n).map(|_| Edge::new(pt(), pt())).collect()
}

fn bench_rational(c: &mut Criterion) {
    let xs = random_rationals(256, 41);
    let mut group = c.benchmark_group("rational");
    group.bench_function("sum_products", |b| {
        b.iter(|| {
            xs.windows(2)
                .filter_map(|w| w[0].checked_mul(w[1]).ok())
                .fold(Rational::ZERO, |acc, x| acc.checked_add(x).unwrap_or(acc))
        })
    });
    group.bench_function("approximate_pi", |b| {
        b.iter(|| Rational::approximate(black_box(std::f64::consts::PI), 1_000_000, 1e-12))
    });
    group.finish();
}

fn bench_track(c: &mut Criterion) {
    let mut group = c.benchmark_group("track");
    for &n in &[2usize, 10, 100, 1000] {
        let track = random_track(n, 42);
        let t = Rational::new(n as i64 * 3 - 3, 4).unwrap_or(Rational::ZERO);
        group.bench_with_input(BenchmarkId::new("value_at", n), &t, |b, &t| {
            b.iter(|| track.value_at(black_box(t)))
        });
    }
    group.finish();
}

fn bench_arc(c: &mut Criterion) {
    let edges = random_edges(256, 43);
    let circle = Arc::new(Point::zeros(), 1.0, 0.0, std::f64::consts::TAU);
    let upper = Arc::new(Point::zeros(), 1.0, 0.0, std::f64::consts::PI);
    let mut group = c.benchmark_group("arc");
    group.bench_function("edge_intersections", |b| {
        b.iter(|| edges.iter().map(|e| circle.intersections(e).len()).sum::<usize>())
    });
    for &samples in &[4usize, 10, 40] {
        let other = Arc::new(Point::new(0.0, 1.9), 1.0, -std::f64::consts::PI, 0.0);
        group.bench_with_input(BenchmarkId::new("arc_sampled", samples), &samples, |b, &s| {
            b.iter(|| upper.intersects_arc_sampled(&other, s))
        });
    }
    let outline: Vec<PathSegment> = vec![
        PathSegment::Arc(upper),
        PathSegment::Line(Edge::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0))),
    ];
    group.bench_function("region_contains", |b| {
        b.iter(|| region_contains(&outline, black_box(&Point::new(0.1, 0.5))))
    });
    group.finish();
}

criterion_group!(benches, bench_rational, bench_track, bench_arc);
criterion_main!(benches);
