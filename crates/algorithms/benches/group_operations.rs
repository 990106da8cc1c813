//! Group operation benchmarks: scalar multiplication, multi-scalar
//! multiplication, hashing and the pairing.

use criterion::{criterion_group, criterion_main, Criterion};

use curvekit_algorithms::ec::{bls12381, ed25519, ed448, k256};
use curvekit_algorithms::hash2curve::PointHasher;

fn scalar_bytes(v: u64) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[..8].copy_from_slice(&v.to_le_bytes());
    out
}

fn bench_weierstrass(c: &mut Criterion) {
    let g = k256::ProjectivePoint::generator();
    let s = scalar_bytes(0xdead_beef_0123_4567);

    let mut group = c.benchmark_group("secp256k1");
    group.bench_function("mul", |bench| bench.iter(|| g.mul(&s).unwrap()));
    group.bench_function("add", |bench| bench.iter(|| g.add(&g.double())));
    let dst = k256::hash_dst(&k256::DEFAULT_HASHER);
    group.bench_function("hash_to_curve", |bench| {
        bench.iter(|| k256::hash_to_curve(b"bench input", &k256::DEFAULT_HASHER, &dst))
    });
    let points = [g, g.double(), g.double().double()];
    let (s1, s2, s3) = (scalar_bytes(11), scalar_bytes(13), scalar_bytes(17));
    let scalars: [&[u8]; 3] = [&s1, &s2, &s3];
    group.bench_function("sum_of_products/3", |bench| {
        bench.iter(|| k256::ProjectivePoint::sum_of_products(&points, &scalars).unwrap())
    });
    group.finish();
}

fn bench_edwards(c: &mut Criterion) {
    let g25519 = ed25519::EdwardsPoint::generator();
    let s25519 = ed25519::Scalar::from_u64(0xdead_beef);
    let g448 = ed448::EdwardsPoint::generator();
    let s448 = ed448::Fq::from_u64(0xdead_beef);

    let mut group = c.benchmark_group("edwards");
    group.bench_function("ed25519/mul", |bench| bench.iter(|| g25519.mul(&s25519)));
    group.bench_function("ed448/mul", |bench| bench.iter(|| g448.mul(&s448)));
    group.bench_function("ed448/decompress", |bench| {
        let bytes = g448.compress();
        bench.iter(|| ed448::EdwardsPoint::decompress(&bytes).unwrap())
    });
    group.finish();
}

fn bench_pairing(c: &mut Criterion) {
    let g1 = bls12381::G1Projective::generator();
    let g2 = bls12381::G2Projective::generator();

    let mut group = c.benchmark_group("bls12381");
    group.sample_size(10);
    group.bench_function("pairing", |bench| bench.iter(|| bls12381::pairing(&g1, &g2)));
    group.bench_function("g1/hash_to_curve", |bench| {
        bench.iter(|| {
            bls12381::G1Projective::hash_to_curve(
                b"bench input",
                &PointHasher::Sha256,
                bls12381::G1_HASH_DST,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, bench_weierstrass, bench_edwards, bench_pairing);
criterion_main!(benches);
