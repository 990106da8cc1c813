use super::*;

fn order_minus_one() -> Scalar {
    let mut bytes = [0u8; 32];
    curvekit_internal::limbs_to_le_bytes(&scalar::FQ_PARAMS.modulus, &mut bytes);
    bytes[0] -= 1;
    Option::<Scalar>::from(Scalar::from_bytes(&bytes)).unwrap()
}

#[test]
fn generator_is_on_curve() {
    assert!(bool::from(EdwardsPoint::generator().is_on_curve()));
    assert!(bool::from(EdwardsPoint::identity().is_on_curve()));
}

#[test]
fn identity_is_neutral() {
    let g = EdwardsPoint::generator();
    let id = EdwardsPoint::identity();
    assert_eq!(g.add(&id), g);
    assert_eq!(id.add(&g), g);
    assert_eq!(g.sub(&g), id);
}

#[test]
fn generator_has_prime_order() {
    let g = EdwardsPoint::generator();
    let almost = g.mul(&order_minus_one());
    assert_eq!(almost.add(&g), EdwardsPoint::identity());
    assert_eq!(almost, g.neg());
}

#[test]
fn small_scalar_multiples() {
    let g = EdwardsPoint::generator();
    let two = g.double();
    let three = two.add(&g);
    assert_eq!(g.mul(&Scalar::from_u64(2)), two);
    assert_eq!(g.mul(&Scalar::from_u64(3)), three);
    assert_eq!(g.mul(&Scalar::from_u64(0)), EdwardsPoint::identity());
}

#[test]
fn scalar_distributivity() {
    let g = EdwardsPoint::generator();
    let lhs = g.mul(&Scalar::from_u64(13)).add(&g.mul(&Scalar::from_u64(29)));
    assert_eq!(lhs, g.mul(&Scalar::from_u64(42)));
}

#[test]
fn compress_round_trip() {
    let g = EdwardsPoint::generator();
    for k in 1u64..8 {
        let p = g.mul(&Scalar::from_u64(k));
        let bytes = p.compress();
        let q = EdwardsPoint::decompress(&bytes).unwrap();
        assert_eq!(p, q);
    }
    // Identity compresses to the canonical y = 1 encoding.
    let mut expected = [0u8; 32];
    expected[0] = 1;
    assert_eq!(EdwardsPoint::identity().compress(), expected);
}

#[test]
fn decompress_rejects_non_canonical_y() {
    // y = p is an out-of-range encoding.
    let mut bytes = [0u8; 32];
    curvekit_internal::limbs_to_le_bytes(&field::FP_PARAMS.modulus, &mut bytes);
    assert!(EdwardsPoint::decompress(&bytes).is_err());
}

#[test]
fn decompress_rejects_non_square_rhs() {
    // Scan for an encoding whose curve equation has no solution; at least
    // one must exist among small y values.
    let mut rejected = false;
    for y in 2u8..64 {
        let mut bytes = [0u8; 32];
        bytes[0] = y;
        if EdwardsPoint::decompress(&bytes).is_err() {
            rejected = true;
            break;
        }
    }
    assert!(rejected);
}

#[test]
fn hash_lands_in_prime_subgroup() {
    for msg in [&b""[..], &b"edwards25519 hash input"[..]] {
        let p = EdwardsPoint::hash_to_curve(msg, HASH_DST);
        assert!(bool::from(p.is_on_curve()));
        assert!(!bool::from(p.is_identity()));
        // [l]P = identity, via [l-1]P + P.
        let almost = p.mul(&order_minus_one());
        assert_eq!(almost.add(&p), EdwardsPoint::identity());
        // Deterministic.
        assert_eq!(p, EdwardsPoint::hash_to_curve(msg, HASH_DST));
    }
}

#[test]
fn elligator_outputs_are_on_curve() {
    for seed in 0u64..8 {
        let r = FieldElement::from_u64(seed * 7 + 3);
        let p = super::map_to_edwards(&r);
        assert!(bool::from(p.is_on_curve()));
    }
}

#[test]
fn sum_of_products_matches_naive() {
    let g = EdwardsPoint::generator();
    let points = [g, g.double()];
    let scalars = [Scalar::from_u64(5), Scalar::from_u64(11)];
    let got = EdwardsPoint::sum_of_products(&points, &scalars).unwrap();
    assert_eq!(got, g.mul(&Scalar::from_u64(27)));
}

#[test]
fn clamped_base_mul_is_in_group() {
    let p = EdwardsPoint::mul_base_clamped(&[42u8; 32]);
    assert!(bool::from(p.is_on_curve()));
    assert!(!bool::from(p.is_identity()));
}

#[test]
fn hash_to_scalar_reduces_sha512() {
    let a = hash_to_scalar(b"");
    let b = hash_to_scalar(b"");
    assert_eq!(a.to_bytes(), b.to_bytes());
    assert!(!bool::from(a.is_zero()));
}

#[test]
fn sqrt_ratio_agrees_with_field_sqrt() {
    for k in 1u64..16 {
        let u = FieldElement::from_u64(k);
        let (ok, r) = sqrt_ratio(&u, &FieldElement::one());
        assert_eq!(bool::from(ok), bool::from(u.is_square()));
        if bool::from(ok) {
            assert_eq!(r.square(), u);
            // sqrt_ratio returns the even root.
            assert!(!bool::from(r.sgn0()));
        }
    }
}
