use super::*;

#[test]
fn generator_is_on_curve() {
    assert!(bool::from(EdwardsPoint::generator().is_on_curve()));
    assert!(bool::from(EdwardsPoint::identity().is_on_curve()));
}

#[test]
fn isogeny_pair_multiplies_by_four() {
    let g = EdwardsPoint::generator();
    let through = EdwardsPoint::from_twisted(&g.to_twisted());
    assert_eq!(through, g.double().double());
}

#[test]
fn identity_is_neutral() {
    let g = EdwardsPoint::generator();
    let id = EdwardsPoint::identity();
    assert_eq!(g.add(&id), g);
    assert_eq!(id.add(&g), g);
    assert_eq!(g.sub(&g), id);
    assert_eq!(id.double(), id);
}

#[test]
fn small_scalar_multiples() {
    let g = EdwardsPoint::generator();
    assert_eq!(g.mul(&Fq::from_u64(0)), EdwardsPoint::identity());
    assert_eq!(g.mul(&Fq::from_u64(1)), g);
    assert_eq!(g.mul(&Fq::from_u64(2)), g.double());
    assert_eq!(g.mul(&Fq::from_u64(3)), g.double().add(&g));
    assert_eq!(g.mul(&Fq::from_u64(4)), g.double().double());
    // Residues 0..3 all exercise the mod-4 correction table.
    assert_eq!(g.mul(&Fq::from_u64(5)), g.double().double().add(&g));
    assert_eq!(g.mul(&Fq::from_u64(6)), g.double().add(&g).double());
    assert_eq!(
        g.mul(&Fq::from_u64(7)),
        g.double().double().double().sub(&g)
    );
}

#[test]
fn scalar_distributivity() {
    let g = EdwardsPoint::generator();
    let lhs = g.mul(&Fq::from_u64(123)).add(&g.mul(&Fq::from_u64(77)));
    assert_eq!(lhs, g.mul(&Fq::from_u64(200)));
}

#[test]
fn generator_is_torsion_free() {
    assert!(bool::from(EdwardsPoint::generator().is_torsion_free()));
    assert!(bool::from(
        EdwardsPoint::generator().mul(&Fq::from_u64(12345)).is_torsion_free()
    ));
}

#[test]
fn compress_round_trip() {
    let g = EdwardsPoint::generator();
    for k in 1u64..6 {
        let p = g.mul(&Fq::from_u64(k));
        let bytes = p.compress();
        let q = EdwardsPoint::decompress(&bytes).unwrap();
        assert_eq!(p, q);
    }
    // Identity: y = 1, sign 0.
    let mut expected = [0u8; POINT_BYTES];
    expected[0] = 1;
    assert_eq!(EdwardsPoint::identity().compress(), expected);
}

#[test]
fn decompress_rejects_out_of_range_y() {
    let mut bytes = [0u8; POINT_BYTES];
    curvekit_internal::limbs_to_le_bytes(&fp::FP_PARAMS.modulus, &mut bytes[..56]);
    assert!(EdwardsPoint::decompress(&bytes).is_err());
}

#[test]
fn hash_of_57_zero_bytes_matches_reference() {
    let p = EdwardsPoint::hash_to_curve(&[0u8; 57], HASH_DST);
    assert_eq!(
        hex::encode(p.compress()),
        "1f3842fe9f6456b899c934711c03d756d9065e7d026a29a430f691d7ee952a36d122ee8fb8a34f77c6532a28af437c77679eac8031cf17b180"
    );
}

#[test]
fn hash_lands_in_prime_subgroup() {
    for msg in [&b""[..], &b"ed448 hash input"[..]] {
        let p = EdwardsPoint::hash_to_curve(msg, HASH_DST);
        assert!(bool::from(p.is_on_curve()));
        assert!(bool::from(p.is_torsion_free()));
        assert!(!bool::from(p.is_identity()));
    }
}

#[test]
fn scalar_hash_of_empty_matches_reference() {
    let s = hash_to_scalar(b"");
    // Big-endian form of the derived scalar (57 bytes, leading zero).
    let mut be = [0u8; 57];
    be[..56].copy_from_slice(&s.to_bytes());
    be.reverse();
    assert_eq!(
        hex::encode(be),
        "000295c173bdce27f6c92ccaa741e4e0c83a7ecf6508c271e490d85f4d09cb7d62e44246a664eaeff78f3413a427b17b1a0e07e116baac0ce3"
    );
}

#[test]
fn montgomery_ladder_matches_edwards() {
    // The Edwards point maps to the 4-isogenous Montgomery curve, so the
    // u-coordinate of [s]P corresponds to the ladder result on u(P).
    let g = EdwardsPoint::generator();
    for k in [3u64, 5, 11] {
        let via_edwards = g.mul(&Fq::from_u64(k)).to_montgomery();
        let via_ladder = g.to_montgomery().mul(&Fq::from_u64(k)).unwrap();
        assert_eq!(via_edwards, via_ladder);
    }
}

#[test]
fn montgomery_low_order_detection() {
    let mut zero = MontgomeryPoint([0u8; 56]);
    assert!(bool::from(zero.is_low_order()));
    zero.0[0] = 1;
    assert!(bool::from(zero.is_low_order()));
    assert!(!bool::from(
        EdwardsPoint::generator().to_montgomery().is_low_order()
    ));
}

#[test]
fn sum_of_products_matches_naive() {
    let g = EdwardsPoint::generator();
    let points = [g, g.double(), g.mul(&Fq::from_u64(3))];
    let scalars = [Fq::from_u64(4), Fq::from_u64(5), Fq::from_u64(6)];
    let got = EdwardsPoint::sum_of_products(&points, &scalars).unwrap();
    // 4 + 10 + 18 = 32
    assert_eq!(got, g.mul(&Fq::from_u64(32)));
}

#[test]
fn radix16_recoding_is_balanced() {
    let s = Fq::from_u64(0xdead_beef_1234_5678);
    let digits = twisted::to_radix16(&s.to_bytes());
    // Digits stay in [-8, 8) and reassemble to the scalar.
    let mut acc = 0i128;
    for (i, d) in digits.iter().enumerate().take(32) {
        assert!(*d >= -8 && *d < 8);
        acc += (*d as i128) << (4 * i);
    }
    assert_eq!(acc as u64, 0xdead_beef_1234_5678);
}
