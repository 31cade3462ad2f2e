use bls12381_algebra::{Point, Scalar, G1, G2, GT};
use criterion::{criterion_group, BatchSize, Criterion};
use rand::thread_rng;
use std::hint::black_box;

fn benchmark_scalar_mul(c: &mut Criterion) {
    c.bench_function(&format!("{}/group=g1", module_path!()), |b| {
        b.iter_batched(
            || Scalar::random(&mut thread_rng()),
            |s| black_box(G1::generator() * s),
            BatchSize::SmallInput,
        );
    });
    c.bench_function(&format!("{}/group=g2", module_path!()), |b| {
        b.iter_batched(
            || Scalar::random(&mut thread_rng()),
            |s| black_box(G2::generator() * s),
            BatchSize::SmallInput,
        );
    });
    let base = bls12381_algebra::pairing(&G1::generator(), &G2::generator());
    c.bench_function(&format!("{}/group=gt", module_path!()), |b| {
        b.iter_batched(
            || Scalar::random(&mut thread_rng()),
            |s| black_box(GT::pow(&base, &s)),
            BatchSize::SmallInput,
        );
    });
}

fn benchmark_scalar_inverse(c: &mut Criterion) {
    c.bench_function(&format!("{}/inverse", module_path!()), |b| {
        b.iter_batched(
            || Scalar::random(&mut thread_rng()),
            |s| black_box(s.inverse().unwrap()),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, benchmark_scalar_mul, benchmark_scalar_inverse);
