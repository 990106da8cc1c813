//! secp256k1: curve definition, SSWU suite and its 3-isogeny.

mod field;
mod scalar;

pub use field::FieldElement;
pub use scalar::Scalar;

use crate::ec::sswu::{IsogenyMap, SswuParams};
use crate::ec::weierstrass::WeierstrassCurve;
use crate::hash2curve::PointHasher;

/// Marker binding the secp256k1 parameters to the generic point engine.
#[derive(Clone, Copy, Debug)]
pub struct K256;

impl WeierstrassCurve for K256 {
    type Fe = FieldElement;
    const NAME: &'static str = "secp256k1";
    const A_IS_ZERO: bool = true;
    const A: FieldElement = FieldElement::from_raw_unchecked([
            0x0000000000000000, 0x0000000000000000,
            0x0000000000000000, 0x0000000000000000,
        ]);
    const B: FieldElement = FieldElement::from_raw_unchecked([
            0x0000000700001ab7, 0x0000000000000000,
            0x0000000000000000, 0x0000000000000000,
        ]);
    const GX: FieldElement = FieldElement::from_raw_unchecked([
            0xd7362e5a487e2097, 0x231e295329bc66db,
            0x979f48c033fd129c, 0x9981e643e9089f48,
        ]);
    const GY: FieldElement = FieldElement::from_raw_unchecked([
            0xb15ea6d2d3dbabe2, 0x8dfc5d5d1f1dc64d,
            0x70b6b59aac19c136, 0xcf3f851fd4a582d6,
        ]);
    const SCALAR_BYTES: usize = 32;
}

/// A secp256k1 point in projective coordinates.
pub type ProjectivePoint = crate::ec::weierstrass::ProjectivePoint<K256>;

/// Hash algorithm this curve's random-oracle suite is built on.
pub const DEFAULT_HASHER: PointHasher = PointHasher::Sha256;

const SSWU: SswuParams<FieldElement> = SswuParams {
    a: FieldElement::from_raw_unchecked([
            0xdb714ce7b18444a1, 0x4458ce38a32a19a2,
            0xa0e58ae2837bfbf0, 0x505aabc49336d959,
        ]),
    b: FieldElement::from_raw_unchecked([
            0x000006eb001a66db, 0x0000000000000000,
            0x0000000000000000, 0x0000000000000000,
        ]),
    z: FieldElement::from_raw_unchecked([
            0xfffffff3ffffd234, 0xffffffffffffffff,
            0xffffffffffffffff, 0xffffffffffffffff,
        ]),
};

static ISO_X_NUM: [FieldElement; 4] = [
    FieldElement::from_raw_unchecked([
            0x4f6a9d816da3de35, 0x140b83565b02bb11,
            0xa2f6ec8c5ffe63bb, 0xfc327c18dda79df1,
        ]),
    FieldElement::from_raw_unchecked([
            0x73759583da46c756, 0x56b346052e8d2799,
            0xbb8b5f08b96d24a0, 0xb2b8d3197b1a0aa9,
        ]),
    FieldElement::from_raw_unchecked([
            0xaa65c7ac3baa3729, 0xd9c41ffacd89ad35,
            0x66180c9b5cac6ecd, 0x763d47f938c3c598,
        ]),
    FieldElement::from_raw_unchecked([
            0xbd43166e457fd307, 0xff8e752de069637a,
            0x00c99b645aa587e2, 0x2b4d165e5ccec04c,
        ]),
];
static ISO_X_DEN: [FieldElement; 3] = [
    FieldElement::from_raw_unchecked([
            0x8af79c1ffdf1e7fa, 0xb84bc22235735eb5,
            0x82ee5655a55ace04, 0xce4b32dea0a2becb,
        ]),
    FieldElement::from_raw_unchecked([
            0x8ecde3f3762e1fa5, 0x2c3b1ad77be333fd,
            0xb102a1a152ea6e12, 0x57b82df5a1ffc133,
        ]),
    FieldElement::from_raw_unchecked([
            0x00000001000003d1, 0x0000000000000000,
            0x0000000000000000, 0x0000000000000000,
        ]),
];
static ISO_Y_NUM: [FieldElement; 4] = [
    FieldElement::from_raw_unchecked([
            0x00000030bda1e96c, 0x0000000000000000,
            0x0000000000000000, 0x0000000000000000,
        ]),
    FieldElement::from_raw_unchecked([
            0x459f2a0191a96a01, 0xb13e6737675bca0d,
            0xd81885a884689b54, 0x4c47f5ee689ae2ed,
        ]),
    FieldElement::from_raw_unchecked([
            0x5b9f3a71f96f3539, 0x52e0459eb201998e,
            0x20d52fe8d0ba1654, 0x7b206f397700037d,
        ]),
    FieldElement::from_raw_unchecked([
            0xfffffffef684b9ac, 0xffffffffffffffff,
            0xffffffffffffffff, 0xffffffffffffffff,
        ]),
];
static ISO_Y_DEN: [FieldElement; 4] = [
    FieldElement::from_raw_unchecked([
            0xfffffd0afff4b6fb, 0xffffffffffffffff,
            0xffffffffffffffff, 0xffffffffffffffff,
        ]),
    FieldElement::from_raw_unchecked([
            0xa0e6d461f9d5bf90, 0x28e34666a05a1c20,
            0x88cb0300f0106a0e, 0x6ae1989be1e83c62,
        ]),
    FieldElement::from_raw_unchecked([
            0x5634d5edb1453160, 0x4258a84339d4cdfc,
            0x8983f271fc5fa51b, 0x039444f072ffa1cd,
        ]),
    FieldElement::from_raw_unchecked([
            0x00000001000003d1, 0x0000000000000000,
            0x0000000000000000, 0x0000000000000000,
        ]),
];

/// Rational map from the isogenous SSWU curve back onto secp256k1.
static ISOGENY: IsogenyMap<FieldElement> = IsogenyMap {
    x_num: &ISO_X_NUM,
    x_den: &ISO_X_DEN,
    y_num: &ISO_Y_NUM,
    y_den: &ISO_Y_DEN,
};
/// Domain-separation tag for a hash-to-curve suite over this curve.
pub fn hash_dst(hasher: &PointHasher) -> Vec<u8> {
    format!(
        "{}_{}:{}_SSWU_RO_",
        K256::NAME,
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
    let (x0, y0) = ISOGENY.map(&x0, &y0);
    let (x1, y1) = ISOGENY.map(&x1, &y1);
    let q0 = ProjectivePoint::from_affine_unchecked(x0, y0);
    let q1 = ProjectivePoint::from_affine_unchecked(x1, y1);
    q0.add(&q1)
}

/// Hash input bytes to a scalar: a 48-byte SHA-256 expansion interpreted
/// big-endian and reduced modulo the order.
pub fn hash_to_scalar(input: &[u8]) -> Scalar {
    let xmd = crate::hash2curve::expand_message_xmd::<sha2::Sha256>(
        input,
        b"secp256k1_XMD:SHA-256_SSWU_RO_",
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

    #[test]
    fn rejects_wrong_scalar_width() {
        let g = ProjectivePoint::generator();
        assert!(g.mul(&[0u8; 16]).is_err());
    }
}
