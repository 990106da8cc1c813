use super::*;

#[test]
fn identity_encodes_to_zero() {
    let id = RistrettoPoint::identity();
    assert_eq!(id.encode(), [0u8; 32]);
    let back = RistrettoPoint::decode(&[0u8; 32]).unwrap();
    assert!(bool::from(back.is_identity()));
}

#[test]
fn generator_round_trip() {
    let g = RistrettoPoint::generator();
    let enc = g.encode();
    let back = RistrettoPoint::decode(&enc).unwrap();
    assert_eq!(g, back);
}

#[test]
fn encoding_is_canonical_per_coset() {
    // The generator and its 4-torsion translates encode identically is a
    // property of the full torsion subgroup; here we at least pin the
    // quotient behaviour P == P + [l]Q style by checking the doubled
    // representative encodes consistently.
    let g = RistrettoPoint::generator();
    let two_g = g.double();
    assert_eq!(two_g.encode(), g.add(&g).encode());
}

#[test]
fn small_multiples_are_distinct() {
    let g = RistrettoPoint::generator();
    let mut encodings = Vec::new();
    let mut acc = RistrettoPoint::identity();
    for _ in 0..8 {
        encodings.push(acc.encode());
        acc = acc.add(&g);
    }
    for i in 0..encodings.len() {
        for j in i + 1..encodings.len() {
            assert_ne!(encodings[i], encodings[j]);
        }
    }
}

#[test]
fn scalar_mul_matches_repeated_addition() {
    let g = RistrettoPoint::generator();
    let five = g.add(&g).add(&g).add(&g).add(&g);
    assert_eq!(g.mul(&Scalar::from_u64(5)), five);
    let round = five.encode();
    assert_eq!(RistrettoPoint::decode(&round).unwrap(), five);
}

#[test]
fn decode_rejects_negative_s() {
    // Take a valid encoding and negate the field element: s must be
    // non-negative, so the flipped value is rejected.
    let enc = RistrettoPoint::generator().mul(&Scalar::from_u64(9)).encode();
    let s = Option::<FieldElement>::from(FieldElement::from_bytes(&enc)).unwrap();
    let neg = s.neg();
    if bool::from(neg.sgn0()) {
        assert!(RistrettoPoint::decode(&neg.to_bytes()).is_err());
    }
    // An out-of-range string is always rejected.
    assert!(RistrettoPoint::decode(&[0xff; 32]).is_err());
}

#[test]
fn uniform_map_is_deterministic_and_valid() {
    let p = RistrettoPoint::from_uniform_bytes(&[7u8; 64]);
    let q = RistrettoPoint::from_uniform_bytes(&[7u8; 64]);
    assert_eq!(p, q);
    assert!(bool::from(p.0.is_on_curve()));
    // Round-trips through its own encoding.
    let enc = p.encode();
    assert_eq!(RistrettoPoint::decode(&enc).unwrap(), p);
}

#[test]
fn hash_to_group_separates_messages() {
    let a = RistrettoPoint::hash_to_group(b"msg a");
    let b = RistrettoPoint::hash_to_group(b"msg b");
    assert_ne!(a.encode(), b.encode());
}

#[test]
fn subtraction_inverts_addition() {
    let g = RistrettoPoint::generator();
    let p = g.mul(&Scalar::from_u64(17));
    assert!(bool::from(p.sub(&p).is_identity()));
    assert_eq!(p.add(&g).sub(&g), p);
}

#[test]
fn sum_of_products_matches_naive() {
    let g = RistrettoPoint::generator();
    let points = [g, g.double()];
    let scalars = [Scalar::from_u64(3), Scalar::from_u64(4)];
    let got = RistrettoPoint::sum_of_products(&points, &scalars).unwrap();
    assert_eq!(got, g.mul(&Scalar::from_u64(11)));
}
