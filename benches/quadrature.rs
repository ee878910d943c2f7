//! Criterion benchmarks for the quadrature rules.
//!
//! Run with: cargo bench
//! Run one group: cargo bench -- fixed_rules

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use quadr::oscillator::period;
use quadr::quadrature::{
    fixed_quad, midpoint, quad, romberg, simpson, trapezoid, QuadOptions, RombergOptions,
};

fn bench_fixed_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_rules");
    for n in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("midpoint", n), &n, |b, &n| {
            b.iter(|| midpoint(|x: f64| black_box(x).sin(), 0.0, 1.0, n).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("trapezoid", n), &n, |b, &n| {
            b.iter(|| trapezoid(|x: f64| black_box(x).sin(), 0.0, 1.0, n).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("simpson", n), &n, |b, &n| {
            b.iter(|| simpson(|x: f64| black_box(x).sin(), 0.0, 1.0, n).unwrap())
        });
    }
    group.finish();
}

fn bench_gauss(c: &mut Criterion) {
    let mut group = c.benchmark_group("gauss_legendre");
    for m in [4usize, 16, 64] {
        // Node solve plus integration, as a caller would see it
        group.bench_with_input(BenchmarkId::new("fixed_quad", m), &m, |b, &m| {
            b.iter(|| fixed_quad(|x: f64| black_box(x).exp(), 0.0, 1.0, m).unwrap())
        });
    }
    group.finish();
}

fn bench_self_reporting(c: &mut Criterion) {
    let mut group = c.benchmark_group("self_reporting");
    group.bench_function("quad_sin", |b| {
        b.iter(|| quad(|x: f64| black_box(x).sin(), 0.0, 1.0, &QuadOptions::default()).unwrap())
    });
    group.bench_function("romberg_sin", |b| {
        b.iter(|| {
            romberg(|x: f64| black_box(x).sin(), 0.0, 1.0, &RombergOptions::default()).unwrap()
        })
    });
    group.bench_function("oscillator_period", |b| {
        b.iter(|| period(black_box(2.0)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_fixed_rules, bench_gauss, bench_self_reporting);
criterion_main!(benches);
