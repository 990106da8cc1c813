//! NIST P-384: curve definition and direct SSWU suite.

mod field;
mod scalar;

pub use field::FieldElement;
pub use scalar::Scalar;

use crate::ec::sswu::{SswuParams};
use crate::ec::weierstrass::WeierstrassCurve;
use crate::hash2curve::PointHasher;

/// Marker binding the P384 parameters to the generic point engine.
#[derive(Clone, Copy, Debug)]
pub struct P384;

impl WeierstrassCurve for P384 {
    type Fe = FieldElement;
    const NAME: &'static str = "P384";
    const A_IS_ZERO: bool = false;
    const A: FieldElement = FieldElement::from_raw_unchecked([
            0x00000003fffffffc, 0xfffffffc00000000,
            0xfffffffffffffffb, 0xffffffffffffffff,
            0xffffffffffffffff, 0xffffffffffffffff,
        ]);
    const B: FieldElement = FieldElement::from_raw_unchecked([
            0x081188719d412dcc, 0xf729add87a4c32ec,
            0x77f2209b1920022e, 0xe3374bee94938ae2,
            0xb62b21f41f022094, 0xcd08114b604fbff9,
        ]);
    const GX: FieldElement = FieldElement::from_raw_unchecked([
            0x3dd0756649c0b528, 0x20e378e2a0d6ce38,
            0x879c3afc541b4d6e, 0x6454868459a30eff,
            0x812ff723614ede2b, 0x4d3aadc2299e1513,
        ]);
    const GY: FieldElement = FieldElement::from_raw_unchecked([
            0x23043dad4b03a4fe, 0xa1bfa8bf7bb4a9ac,
            0x8bade7562e83b050, 0xc6c3521968f4ffd9,
            0xdd8002263969a840, 0x2b78abc25a15c5e9,
        ]);
    const SCALAR_BYTES: usize = 48;
}

/// A P384 point in projective coordinates.
pub type ProjectivePoint = crate::ec::weierstrass::ProjectivePoint<P384>;

/// Hash algorithm this curve's random-oracle suite is built on.
pub const DEFAULT_HASHER: PointHasher = PointHasher::Sha384;

const SSWU: SswuParams<FieldElement> = SswuParams {
    a: FieldElement::from_raw_unchecked([
            0x00000003fffffffc, 0xfffffffc00000000,
            0xfffffffffffffffb, 0xffffffffffffffff,
            0xffffffffffffffff, 0xffffffffffffffff,
        ]),
    b: FieldElement::from_raw_unchecked([
            0x081188719d412dcc, 0xf729add87a4c32ec,
            0x77f2209b1920022e, 0xe3374bee94938ae2,
            0xb62b21f41f022094, 0xcd08114b604fbff9,
        ]),
    z: FieldElement::from_raw_unchecked([
            0x0000000cfffffff3, 0xfffffff300000000,
            0xfffffffffffffff2, 0xffffffffffffffff,
            0xffffffffffffffff, 0xffffffffffffffff,
        ]),
};

/// Domain-separation tag for a hash-to-curve suite over this curve.
pub fn hash_dst(hasher: &PointHasher) -> Vec<u8> {
    format!(
        "{}_{}:{}_SSWU_RO_",
        P384::NAME,
        hasher.kind().label(),
        hasher.label()
    )
    .into_bytes()
}

/// Hash a message to the curve (random-oracle SSWU construction).
pub fn hash_to_curve(msg: &[u8], hasher: &PointHasher, dst: &[u8]) -> ProjectivePoint {
    let uniform = hasher.expand(msg, dst, 144);
    let (u0, u1) = crate::ec::sswu::two_wide_elements::<FieldElement, 96>(&uniform, |b| {
        FieldElement::from_bytes_wide(b)
    });
    let (x0, y0) = SSWU.map_to_curve(&u0);
    let (x1, y1) = SSWU.map_to_curve(&u1);
    let q0 = ProjectivePoint::from_affine_unchecked(x0, y0);
    let q1 = ProjectivePoint::from_affine_unchecked(x1, y1);
    q0.add(&q1)
}

/// Hash input bytes to a scalar: a 72-byte SHA-384 expansion interpreted
/// big-endian and reduced modulo the order.
pub fn hash_to_scalar(input: &[u8]) -> Scalar {
    let xmd = crate::hash2curve::expand_message_xmd::<sha2::Sha384>(
        input,
        b"P384_XMD:SHA-384_SSWU_RO_",
        72,
    );
    let mut wide = [0u8; 96];
    for (i, b) in xmd.iter().rev().enumerate() {
        wide[i] = *b;
    }
    Scalar::from_bytes_wide(&wide)
}

#[cfg(test)]
mod tests {
    use super::*;
    use subtle::ConstantTimeEq;

    fn order_bytes() -> [u8; 48] {
        let mut out = [0u8; 48];
        curvekit_internal::limbs_to_le_bytes(&scalar::FQ_PARAMS.modulus, &mut out);
        out
    }

    fn scalar_bytes(v: u64) -> [u8; 48] {
        let mut out = [0u8; 48];
        out[..8].copy_from_slice(&v.to_le_bytes());
        out
    }

    #[test]
    fn generator_is_on_curve() {
        assert!(bool::from(ProjectivePoint::generator().is_on_curve()));
        assert!(bool::from(ProjectivePoint::identity().is_on_curve()));
    }

    #[test]
    fn generator_has_group_order() {
        let got = ProjectivePoint::generator().mul(&order_bytes()).unwrap();
        assert!(bool::from(got.ct_eq(&ProjectivePoint::identity())));
    }

    #[test]
    fn add_double_agree() {
        let g = ProjectivePoint::generator();
        assert_eq!(g.add(&g), g.double());
        let four_a = g.double().double();
        let four_b = g.mul(&scalar_bytes(4)).unwrap();
        assert_eq!(four_a, four_b);
    }

    #[test]
    fn identity_is_neutral() {
        let g = ProjectivePoint::generator();
        let id = ProjectivePoint::identity();
        assert_eq!(g.add(&id), g);
        assert_eq!(id.add(&g), g);
        assert_eq!(g.sub(&g), id);
    }

    #[test]
    fn scalar_distributivity() {
        let g = ProjectivePoint::generator();
        let lhs = g.mul(&scalar_bytes(17)).unwrap().add(&g.mul(&scalar_bytes(25)).unwrap());
        let rhs = g.mul(&scalar_bytes(42)).unwrap();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn affine_round_trip() {
        let p = ProjectivePoint::generator().mul(&scalar_bytes(7)).unwrap();
        let (x, y) = p.to_affine();
        let q = ProjectivePoint::from_affine_coordinates(x, y).unwrap();
        assert_eq!(p, q);
        // Identity round-trips through the (0, 0) sentinel.
        let (x, y) = ProjectivePoint::identity().to_affine();
        assert!(bool::from(x.is_zero()) && bool::from(y.is_zero()));
    }

    #[test]
    fn compressed_sign_recovery() {
        let p = ProjectivePoint::generator().mul(&scalar_bytes(11)).unwrap();
        let (x, y) = p.to_affine();
        let q = ProjectivePoint::from_x_and_sign(x, y.sgn0()).unwrap();
        assert_eq!(p, q);
    }

    #[test]
    fn hash_lands_on_curve() {
        let dst = hash_dst(&DEFAULT_HASHER);
        for msg in [&b"abc"[..], &[0u8; 32][..], &b""[..]] {
            let p = hash_to_curve(msg, &DEFAULT_HASHER, &dst);
            assert!(bool::from(p.is_on_curve()));
            assert!(!bool::from(p.is_identity()));
            // Deterministic.
            let q = hash_to_curve(msg, &DEFAULT_HASHER, &dst);
            assert_eq!(p, q);
        }
    }

    #[test]
    fn sum_of_products_matches_naive() {
        let g = ProjectivePoint::generator();
        let points = [g, g.double(), g.mul(&scalar_bytes(5)).unwrap()];
        let (s1, s2, s3) = (scalar_bytes(3), scalar_bytes(9), scalar_bytes(2));
        let scalars: [&[u8]; 3] = [&s1, &s2, &s3];
        let got = ProjectivePoint::sum_of_products(&points, &scalars).unwrap();
        // 3*1 + 9*2 + 2*5 = 31
        let want = g.mul(&scalar_bytes(31)).unwrap();
        assert_eq!(got, want);
    }

    #[test]
    fn hash_of_zero_seed_matches_reference() {
        let dst = hash_dst(&DEFAULT_HASHER);
        let p = hash_to_curve(&[0u8; 32], &DEFAULT_HASHER, &dst);
        let (x, y) = p.to_affine();
        assert_eq!(
            hex::encode(x.to_be_bytes()),
            "f39d09eeae220312e24f4053958f9b22edec35e514b9e5cc41641bd3b1e2629181ee8e89865ca13e0ccf9663ca501914"
        );
        assert_eq!(
            hex::encode(y.to_be_bytes()),
            "813561fc7b43a171d29a63ea08cf29590cddf77b2aea4e78db039be7c4ad0ec80e18e668339868a15a6aaf00264bb2dc"
        );
    }
}
