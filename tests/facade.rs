//! End-to-end checks of the uniform facade: the concrete scenarios from
//! the design requirements plus cross-curve dispatch rules.

use curvekit::{
    point_from_binary, point_from_json, point_from_text, point_to_binary, point_to_json,
    point_to_text, scalar_from_binary, scalar_from_json, scalar_from_text, scalar_to_binary,
    scalar_to_text, Curve, Error, Point, BLS12381, BLS12381G1_NAME,
    BLS12381G2_NAME, ED25519_NAME, ED448_NAME, K256_NAME, P256_NAME, P384_NAME, PALLAS_NAME,
    RISTRETTO25519_NAME,
};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

fn all_names() -> [&'static str; 9] {
    [
        K256_NAME,
        P256_NAME,
        P384_NAME,
        BLS12381G1_NAME,
        BLS12381G2_NAME,
        ED25519_NAME,
        ED448_NAME,
        RISTRETTO25519_NAME,
        PALLAS_NAME,
    ]
}

#[test]
fn registry_resolves_every_name() {
    for name in all_names() {
        let curve = Curve::by_name(name).unwrap();
        assert_eq!(curve.name, name);
    }
    assert!(matches!(
        Curve::by_name("curve9000"),
        Err(Error::UnrecognizedCurve)
    ));
}

#[test]
fn ed448_hash_to_point_reference_vector() {
    let curve = Curve::by_name(ED448_NAME).unwrap();
    let point = curve.point_hash(&[0u8; 57]);
    assert_eq!(
        hex::encode(point.to_affine_compressed()),
        "1f3842fe9f6456b899c934711c03d756d9065e7d026a29a430f691d7ee952a36d122ee8fb8a34f77c6532a28af437c77679eac8031cf17b180"
    );
}

#[test]
fn ed448_hash_to_scalar_reference_vector() {
    let curve = Curve::by_name(ED448_NAME).unwrap();
    let scalar = curve.scalar_hash(b"");
    assert_eq!(
        hex::encode(scalar.to_bytes()),
        "000295c173bdce27f6c92ccaa741e4e0c83a7ecf6508c271e490d85f4d09cb7d62e44246a664eaeff78f3413a427b17b1a0e07e116baac0ce3"
    );
}

#[test]
fn secp256k1_generator_times_order_is_identity() {
    let curve = Curve::by_name(K256_NAME).unwrap();
    // n - 1, then one more addition of G.
    let order_minus_one = curve
        .scalar_from_be_bytes_reduced(
            &hex::decode("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140")
                .unwrap(),
        )
        .unwrap();
    let g = curve.point_generator();
    let almost = g.mul(&order_minus_one).unwrap();
    assert!(almost.add(&g).unwrap().is_identity());
}

#[test]
fn bls_pairing_sanity() {
    // e(G1, G2) * e(-G1, G2) == 1.
    let g1 = BLS12381.g1_generator();
    let g2 = BLS12381.g2_generator();
    let e1 = g1.pairing(&g2).unwrap();
    let e2 = g1.neg().pairing(&g2).unwrap();
    let product = e1.add(&e2).unwrap();
    assert!(product.is_zero());
}

#[test]
fn bls_multi_pairing_matches_product() {
    let g1 = BLS12381.g1_generator();
    let g2 = BLS12381.g2_generator();
    let s2 = Curve::by_name(BLS12381G1_NAME).unwrap().scalar_new(2);
    let s3 = Curve::by_name(BLS12381G2_NAME).unwrap().scalar_new(3);

    let p = g1.mul(&s2).unwrap();
    let q = g2.mul(&s3.set_point(&g2)).unwrap();

    let combined = Point::multi_pairing(&[p, q, g1, g2]).unwrap();
    let separate = p.pairing(&q).unwrap().add(&g1.pairing(&g2).unwrap()).unwrap();
    assert!(combined.equal(&separate));

    // Odd argument counts are rejected.
    assert!(Point::multi_pairing(&[g1]).is_err());
    // Wrong group order within a pair is rejected.
    assert!(Point::multi_pairing(&[g2, g1]).is_err());
}

#[test]
fn pallas_generator_compressed_round_trip() {
    let curve = Curve::by_name(PALLAS_NAME).unwrap();
    let g = curve.point_generator();
    let bytes = g.to_affine_compressed();
    let back = curve.point_from_compressed(&bytes).unwrap();
    assert!(g.equal(&back));
}

#[test]
fn every_curve_round_trips_points_and_scalars() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for name in all_names() {
        let curve = Curve::by_name(name).unwrap();

        let s = curve.scalar_random(&mut rng).unwrap();
        let s_bytes = s.to_bytes();
        let s_back = curve.scalar_from_bytes(&s_bytes).unwrap();
        assert!(s.equal(&s_back), "scalar round trip failed for {name}");

        let p = curve.point_random(&mut rng).unwrap();
        assert!(p.is_on_curve(), "random point off curve for {name}");
        let compressed = p.to_affine_compressed();
        let p_back = curve.point_from_compressed(&compressed).unwrap();
        assert!(p.equal(&p_back), "compressed round trip failed for {name}");

        let uncompressed = p.to_affine_uncompressed();
        let p_back = curve.point_from_uncompressed(&uncompressed).unwrap();
        assert!(p.equal(&p_back), "uncompressed round trip failed for {name}");
    }
}

#[test]
fn scalar_laws_hold_on_every_curve() {
    for name in all_names() {
        let curve = Curve::by_name(name).unwrap();
        let a = curve.scalar_new(12);
        let b = curve.scalar_new(34);

        assert!(a.add(&b).unwrap().equal(&b.add(&a).unwrap()));
        assert!(a.mul(&b).unwrap().equal(&b.mul(&a).unwrap()));
        assert!(a.square().equal(&a.mul(&a).unwrap()));
        assert!(a.double().equal(&a.add(&a).unwrap()));
        assert!(a.sub(&a).unwrap().is_zero());

        let inv = a.invert().unwrap();
        assert!(a.mul(&inv).unwrap().is_one(), "inversion failed for {name}");
        assert!(matches!(
            curve.scalar_zero().invert(),
            Err(Error::NotInverse)
        ));

        // 12 * 34 + 5 = 413
        let got = a.mul_add(&b, &curve.scalar_new(5)).unwrap();
        assert!(got.equal(&curve.scalar_new(413)));
        assert!(a.div(&b).unwrap().mul(&b).unwrap().equal(&a));

        assert!(curve.scalar_new(-1).add(&curve.scalar_one()).unwrap().is_zero());
    }
}

#[test]
fn scalar_sqrt_round_trips_where_defined() {
    for name in all_names() {
        let curve = Curve::by_name(name).unwrap();
        let nine = curve.scalar_new(9);
        let root = nine.sqrt().unwrap();
        assert!(root.square().equal(&nine), "sqrt failed for {name}");
    }
}

#[test]
fn point_laws_hold_on_every_curve() {
    for name in all_names() {
        let curve = Curve::by_name(name).unwrap();
        let g = curve.point_generator();
        let id = curve.point_identity();

        assert!(g.add(&id).unwrap().equal(&g));
        assert!(id.add(&g).unwrap().equal(&g));
        assert!(g.sub(&g).unwrap().is_identity());
        assert!(g.add(&g).unwrap().equal(&g.double()));

        let two = curve.scalar_new(2);
        let five = curve.scalar_new(5);
        let seven = curve.scalar_new(7);
        let lhs = g.mul(&two).unwrap().add(&g.mul(&five).unwrap()).unwrap();
        assert!(lhs.equal(&g.mul(&seven).unwrap()), "distributivity failed for {name}");

        // [a]([b]G) == [ab]G
        let ab = g.mul(&two).unwrap().mul(&five).unwrap();
        assert!(ab.equal(&g.mul(&curve.scalar_new(10)).unwrap()));
    }
}

#[test]
fn sum_of_products_matches_naive_on_every_curve() {
    for name in all_names() {
        let curve = Curve::by_name(name).unwrap();
        let g = curve.point_generator();
        let points = vec![g, g.double()];
        let scalars = vec![curve.scalar_new(3), curve.scalar_new(4)];
        let got = Point::sum_of_products(&points, &scalars).unwrap();
        // 3 + 8 = 11
        assert!(got.equal(&g.mul(&curve.scalar_new(11)).unwrap()), "msm failed for {name}");
    }
}

#[test]
fn hashed_points_land_on_curve() {
    for name in all_names() {
        let curve = Curve::by_name(name).unwrap();
        let p = curve.point_hash(b"hash input");
        assert!(p.is_on_curve(), "hash off curve for {name}");
        assert!(!p.is_identity());
        // Deterministic.
        assert!(p.equal(&curve.point_hash(b"hash input")));
    }
}

#[test]
fn mixing_curves_is_a_typed_error() {
    let k = Curve::by_name(K256_NAME).unwrap();
    let p = Curve::by_name(P256_NAME).unwrap();

    assert!(matches!(
        k.scalar_new(1).add(&p.scalar_new(1)),
        Err(Error::InvalidType)
    ));
    assert!(matches!(
        k.point_generator().add(&p.point_generator()),
        Err(Error::InvalidType)
    ));
    assert!(matches!(
        k.point_generator().mul(&p.scalar_new(2)),
        Err(Error::InvalidType)
    ));
    assert!(!k.scalar_new(5).equal(&p.scalar_new(5)));
    assert!(k.scalar_new(5).cmp(&p.scalar_new(5)).is_none());
    assert!(!k.point_generator().equal(&p.point_generator()));
    assert!(matches!(
        k.point_generator().pairing(&p.point_generator()),
        Err(Error::InvalidType)
    ));
}

#[test]
fn scalar_ordering_is_observable() {
    use core::cmp::Ordering;
    let curve = Curve::by_name(ED25519_NAME).unwrap();
    let three = curve.scalar_new(3);
    let nine = curve.scalar_new(9);
    assert_eq!(three.cmp(&nine), Some(Ordering::Less));
    assert_eq!(nine.cmp(&three), Some(Ordering::Greater));
    assert_eq!(nine.cmp(&nine), Some(Ordering::Equal));
}

#[test]
fn envelope_round_trips() {
    let mut rng = ChaCha20Rng::seed_from_u64(13);
    for name in all_names() {
        let curve = Curve::by_name(name).unwrap();
        let s = curve.scalar_random(&mut rng).unwrap();
        let p = curve.point_random(&mut rng).unwrap();

        let bin = scalar_to_binary(&s);
        assert!(bin.starts_with(name.as_bytes()));
        assert!(s.equal(&scalar_from_binary(&bin).unwrap()));

        let text = scalar_to_text(&s);
        assert!(s.equal(&scalar_from_text(&text).unwrap()));

        let json = curvekit::scalar_to_json(&s);
        assert!(s.equal(&scalar_from_json(&json).unwrap()));

        let bin = point_to_binary(&p);
        assert!(p.equal(&point_from_binary(&bin).unwrap()));
        let text = point_to_text(&p);
        assert!(p.equal(&point_from_text(&text).unwrap()));
        let json = point_to_json(&p);
        assert!(p.equal(&point_from_json(&json).unwrap()));
    }
}

#[test]
fn envelope_rejects_unknown_curves() {
    assert!(matches!(
        scalar_from_binary(b"curve9000:0102"),
        Err(Error::UnrecognizedCurve)
    ));
    assert!(matches!(
        point_from_text(b"unknown:00"),
        Err(Error::UnrecognizedCurve)
    ));
}

#[test]
fn envelope_hex_accepts_either_case() {
    let curve = Curve::by_name(P256_NAME).unwrap();
    let s = curve.scalar_new(0x1a2b);
    let text = scalar_to_text(&s);
    let upper: Vec<u8> = text
        .iter()
        .map(|b| b.to_ascii_uppercase())
        .collect();
    // Only the payload is case-folded; the name must stay intact.
    let mut mixed = text.clone();
    let idx = mixed.iter().position(|b| *b == b':').unwrap();
    mixed[idx + 1..].copy_from_slice(&upper[idx + 1..]);
    assert!(s.equal(&scalar_from_text(&mixed).unwrap()));
}

#[test]
fn gt_behaves_as_scalar_and_point() {
    let g1 = BLS12381.g1_generator();
    let g2 = BLS12381.g2_generator();
    let e = g1.pairing(&g2).unwrap();

    // Scalar facade: add is the group operation, mul by a BLS scalar is
    // exponentiation.
    let doubled = e.add(&e).unwrap();
    assert!(BLS12381.scalar().is_zero());
    let s2 = Curve::by_name(BLS12381G1_NAME).unwrap().scalar_new(2);
    let exp = e.mul(&s2).unwrap();
    assert!(doubled.equal(&exp));

    // cube = [3]g, consistent with the group structure.
    let tripled = e.add(&e).unwrap().add(&e).unwrap();
    assert!(e.cube().equal(&tripled));

    // div is exponent subtraction.
    assert!(e.div(&e).unwrap().is_zero());

    // The point facade sees the same element bytes.
    let gt_point = BLS12381.gt_generator();
    assert_eq!(gt_point.to_affine_compressed(), e.to_bytes());

    // Gt round-trips through its envelope under the pairing-curve name.
    let bin = scalar_to_binary(&e);
    assert!(bin.starts_with(b"BLS12831:"));
    assert!(e.equal(&scalar_from_binary(&bin).unwrap()));
}

#[test]
fn ed448_is_on_curve_reports_true_for_curve_points() {
    // Regression for the inverted boolean in an earlier implementation.
    let curve = Curve::by_name(ED448_NAME).unwrap();
    assert!(curve.point_generator().is_on_curve());
    assert!(curve.point_identity().is_on_curve());
    let p = curve.point_hash(b"on-curve check");
    assert!(p.is_on_curve());
}

#[test]
fn insufficient_entropy_is_reported() {
    struct Empty;
    impl rand_core::RngCore for Empty {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {}
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
            Err(rand_core::Error::new("out of entropy"))
        }
    }
    let curve = Curve::by_name(K256_NAME).unwrap();
    assert!(matches!(
        curve.scalar_random(&mut Empty),
        Err(Error::InsufficientEntropy)
    ));
    assert!(matches!(
        curve.point_random(&mut Empty),
        Err(Error::InsufficientEntropy)
    ));
}

#[test]
fn set_builds_points_from_affine_coordinates() {
    let curve = Curve::by_name(P256_NAME).unwrap();
    let g = curve.point_generator();
    let uncompressed = g.to_affine_uncompressed();
    let (x, y) = (&uncompressed[1..33], &uncompressed[33..]);
    let rebuilt = curve.point_set(x, y).unwrap();
    assert!(g.equal(&rebuilt));

    // The all-zero pair is the identity sentinel.
    let id = curve.point_set(&[0u8; 32], &[0u8; 32]).unwrap();
    assert!(id.is_identity());

    // Off-curve coordinates are rejected.
    assert!(matches!(
        curve.point_set(&[1u8; 32], &[1u8; 32]),
        Err(Error::InvalidCoordinates)
    ));
}

#[test]
fn wide_scalar_reduction_widths() {
    for (name, wide) in [
        (K256_NAME, 64usize),
        (P384_NAME, 96),
        (ED448_NAME, 114),
        (RISTRETTO25519_NAME, 64),
    ] {
        let curve = Curve::by_name(name).unwrap();
        let bytes = vec![0xabu8; wide];
        let s = curve.scalar_from_bytes_wide(&bytes).unwrap();
        assert!(!s.is_zero());
        // Wrong widths are length errors.
        assert!(curve.scalar_from_bytes_wide(&bytes[1..]).is_err());
    }
}
