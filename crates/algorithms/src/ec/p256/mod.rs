//! NIST P-256: curve definition and direct SSWU suite.

mod field;
mod scalar;

pub use field::FieldElement;
pub use scalar::Scalar;

use crate::ec::sswu::{SswuParams};
use crate::ec::weierstrass::WeierstrassCurve;
use crate::hash2curve::PointHasher;

/// Marker binding the P-256 parameters to the generic point engine.
#[derive(Clone, Copy, Debug)]
pub struct P256;

impl WeierstrassCurve for P256 {
    type Fe = FieldElement;
    const NAME: &'static str = "P-256";
    const A_IS_ZERO: bool = false;
    const A: FieldElement = FieldElement::from_raw_unchecked([
            0xfffffffffffffffc, 0x00000003ffffffff,
            0x0000000000000000, 0xfffffffc00000004,
        ]);
    const B: FieldElement = FieldElement::from_raw_unchecked([
            0xd89cdf6229c4bddf, 0xacf005cd78843090,
            0xe5a220abf7212ed6, 0xdc30061d04874834,
        ]);
    const GX: FieldElement = FieldElement::from_raw_unchecked([
            0x79e730d418a9143c, 0x75ba95fc5fedb601,
            0x79fb732b77622510, 0x18905f76a53755c6,
        ]);
    const GY: FieldElement = FieldElement::from_raw_unchecked([
            0xddf25357ce95560a, 0x8b4ab8e4ba19e45c,
            0xd2e88688dd21f325, 0x8571ff1825885d85,
        ]);
    const SCALAR_BYTES: usize = 32;
}

/// A P-256 point in projective coordinates.
pub type ProjectivePoint = crate::ec::weierstrass::ProjectivePoint<P256>;

/// Hash algorithm this curve's random-oracle suite is built on.
pub const DEFAULT_HASHER: PointHasher = PointHasher::Sha256;

const SSWU: SswuParams<FieldElement> = SswuParams {
    a: FieldElement::from_raw_unchecked([
            0xfffffffffffffffc, 0x00000003ffffffff,
            0x0000000000000000, 0xfffffffc00000004,
        ]),
    b: FieldElement::from_raw_unchecked([
            0xd89cdf6229c4bddf, 0xacf005cd78843090,
            0xe5a220abf7212ed6, 0xdc30061d04874834,
        ]),
    z: FieldElement::from_raw_unchecked([
            0xfffffffffffffff5, 0x0000000affffffff,
            0x0000000000000000, 0xfffffff50000000b,
        ]),
};

/// Domain-separation tag for a hash-to-curve suite over this curve.
pub fn hash_dst(hasher: &PointHasher) -> Vec<u8> {
    format!(
        "{}_{}:{}_SSWU_RO_",
        P256::NAME,
        hasher.kind().label(),
        hasher.label()
    )
    .into_bytes()
}

/// Hash a message to the curve (random-oracle SSWU construction).
pub fn hash_to_curve(msg: &[u8], hasher: &PointHasher, dst: &[u8]) -> ProjectivePoint {
    let uniform = hasher.expand(msg, dst, 96);
    let (u0, u1) = crate::ec::sswu::two_wide_elements::<FieldElement, 64>(&uniform, |b| {
        FieldElement::from_bytes_wide(b)
    });
    let (x0, y0) = SSWU.map_to_curve(&u0);
    let (x1, y1) = SSWU.map_to_curve(&u1);
    let q0 = ProjectivePoint::from_affine_unchecked(x0, y0);
    let q1 = ProjectivePoint::from_affine_unchecked(x1, y1);
    q0.add(&q1)
}

/// Hash input bytes to a scalar: a 48-byte SHA-256 expansion interpreted
/// big-endian and reduced modulo the order.
pub fn hash_to_scalar(input: &[u8]) -> Scalar {
    let xmd = crate::hash2curve::expand_message_xmd::<sha2::Sha256>(
        input,
        b"P256_XMD:SHA-256_SSWU_RO_",
        48,
    );
    let mut wide = [0u8; 64];
    for (i, b) in xmd.iter().rev().enumerate() {
        wide[i] = *b;
    }
    Scalar::from_bytes_wide(&wide)
}

#[cfg(test)]
mod tests {
    use super::*;
    use subtle::ConstantTimeEq;

    fn order_bytes() -> [u8; 32] {
        let mut out = [0u8; 32];
        curvekit_internal::limbs_to_le_bytes(&scalar::FQ_PARAMS.modulus, &mut out);
        out
    }

    fn scalar_bytes(v: u64) -> [u8; 32] {
        let mut out = [0u8; 32];
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
}
