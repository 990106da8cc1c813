//! Field arithmetic benchmarks across the three limb widths.

use criterion::{criterion_group, criterion_main, Criterion};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

use curvekit_algorithms::ec::{bls12381, ed448, k256, p384};

fn bench_4_limb(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let a = k256::FieldElement::random(&mut rng);
    let b = k256::FieldElement::random(&mut rng);

    let mut group = c.benchmark_group("field/secp256k1-fp");
    group.bench_function("mul", |bench| bench.iter(|| a.mul(&b)));
    group.bench_function("square", |bench| bench.iter(|| a.square()));
    group.bench_function("invert", |bench| bench.iter(|| a.invert()));
    group.bench_function("sqrt", |bench| bench.iter(|| a.square().sqrt()));
    group.finish();
}

fn bench_6_limb(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    let a = p384::FieldElement::random(&mut rng);
    let b = p384::FieldElement::random(&mut rng);

    let mut group = c.benchmark_group("field/p384-fp");
    group.bench_function("mul", |bench| bench.iter(|| a.mul(&b)));
    group.bench_function("square", |bench| bench.iter(|| a.square()));
    group.bench_function("invert", |bench| bench.iter(|| a.invert()));
    group.finish();
}

fn bench_7_limb(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let a = ed448::Fp::random(&mut rng);
    let b = ed448::Fp::random(&mut rng);

    let mut group = c.benchmark_group("field/ed448-fp");
    group.bench_function("mul", |bench| bench.iter(|| a.mul(&b)));
    group.bench_function("square", |bench| bench.iter(|| a.square()));
    group.bench_function("invert", |bench| bench.iter(|| a.invert()));
    group.finish();
}

fn bench_tower(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    let a = bls12381::Fp2::random(&mut rng);
    let b = bls12381::Fp2::random(&mut rng);

    let mut group = c.benchmark_group("field/bls12381-fp2");
    group.bench_function("mul", |bench| bench.iter(|| a.mul(&b)));
    group.bench_function("square", |bench| bench.iter(|| a.square()));
    group.bench_function("invert", |bench| bench.iter(|| a.invert()));
    group.finish();
}

criterion_group!(benches, bench_4_limb, bench_6_limb, bench_7_limb, bench_tower);
criterion_main!(benches);
