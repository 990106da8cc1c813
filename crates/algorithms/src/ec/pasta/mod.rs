//! Pallas: curve definition, Tonelli-Shanks SSWU suite and its 3-isogeny.

mod fp;
mod fq;

pub use fp::Fp;
pub use fq::Fq;

use crate::ec::sswu::{IsogenyMap, SswuParams};
use crate::ec::weierstrass::WeierstrassCurve;
use crate::hash2curve::PointHasher;

/// Marker binding the pallas parameters to the generic point engine.
#[derive(Clone, Copy, Debug)]
pub struct Pallas;

impl WeierstrassCurve for Pallas {
    type Fe = Fp;
    const NAME: &'static str = "pallas";
    const A_IS_ZERO: bool = true;
    const A: Fp = Fp::from_raw_unchecked([
            0x0000000000000000, 0x0000000000000000,
            0x0000000000000000, 0x0000000000000000,
        ]);
    const B: Fp = Fp::from_raw_unchecked([
            0xa1a55e68ffffffed, 0x74c2a54b4f4982f3,
            0xfffffffffffffffd, 0x3fffffffffffffff,
        ]);
    const GX: Fp = Fp::from_raw_unchecked([
            0x34786d38fffffffd, 0x992c350be41914ad,
            0xffffffffffffffff, 0x3fffffffffffffff,
        ]);
    const GY: Fp = Fp::from_raw_unchecked([
            0x2f474795455d409d, 0xb443b9b74b8255d9,
            0x270c412f2c9a5d66, 0x08e00f71ba43dd6b,
        ]);
    const SCALAR_BYTES: usize = 32;
}

/// A pallas point in projective coordinates.
pub type ProjectivePoint = crate::ec::weierstrass::ProjectivePoint<Pallas>;

/// Hash algorithm this curve's random-oracle suite is built on.
pub const DEFAULT_HASHER: PointHasher = PointHasher::Blake2b;

const SSWU: SswuParams<Fp> = SswuParams {
    a: Fp::from_raw_unchecked([
            0x7fc5d29077bb08de, 0x93090252cf122108,
            0x49f63ff5da1145bb, 0x1c6d4f087137f0dc,
        ]),
    b: Fp::from_raw_unchecked([
            0xf7f22478ffffec3d, 0xa6dec35433e1339b,
            0xfffffffffffffd5a, 0x3fffffffffffffff,
        ]),
    z: Fp::from_raw_unchecked([
            0x1d2df02400000034, 0xf6571331e3a2999b,
            0x0000000000000006, 0x0000000000000000,
        ]),
};

static ISO_X_NUM: [Fp; 4] = [
    Fp::from_raw_unchecked([
            0x6eeb22cb38e38d91, 0x857a8f27ada1851f,
            0xffffffffffffffe9, 0x3fffffffffffffff,
        ]),
    Fp::from_raw_unchecked([
            0x6a3ee7799df56376, 0x126b79ab78c7152f,
            0x3260d1c7394f73d9, 0x3faf24198196224d,
        ]),
    Fp::from_raw_unchecked([
            0x4c6e64f2323d5cee, 0x501f41cfd25ec1f0,
            0x05dee76e883f5ca7, 0x33183c981332cc59,
        ]),
    Fp::from_raw_unchecked([
            0xc6e037a01c71c71d, 0x130ac6c4e8b8fc2b,
            0x0000000000000000, 0x4000000000000000,
        ]),
];
static ISO_X_DEN: [Fp; 3] = [
    Fp::from_raw_unchecked([
            0xa60b71c1a8e17d58, 0x762a4b7ccb2def32,
            0x503620030b6137e1, 0x3778ceb0aad59e24,
        ]),
    Fp::from_raw_unchecked([
            0x7fa53608c4284457, 0xe12b216a243a01b1,
            0x34d622e2ca3a41e0, 0x0bda2158acc92f21,
        ]),
    Fp::from_raw_unchecked([
            0x34786d38fffffffd, 0x992c350be41914ad,
            0xffffffffffffffff, 0x3fffffffffffffff,
        ]),
];
static ISO_Y_NUM: [Fp; 4] = [
    Fp::from_raw_unchecked([
            0xee9add1584bda1bb, 0x05fa29228d90933b,
            0x5555555555555568, 0x1555555555555555,
        ]),
    Fp::from_raw_unchecked([
            0x64b468a19883c203, 0x8760f32b499db7b0,
            0x0e0dabda7ccdfe1b, 0x29822f08307bd31b,
        ]),
    Fp::from_raw_unchecked([
            0x26373279191eae77, 0xa80fa0e7e92f60f8,
            0x82ef73b7441fae53, 0x198c1e4c0999662c,
        ]),
    Fp::from_raw_unchecked([
            0xcaaf22d9b425ed0a, 0xbc70754050aca717,
            0xaaaaaaaaaaaaaaaa, 0x2aaaaaaaaaaaaaaa,
        ]),
];
static ISO_Y_DEN: [Fp; 4] = [
    Fp::from_raw_unchecked([
            0x6d4ccfb000000870, 0x33aace8e7975d8dc,
            0x0000000000000121, 0x0000000000000000,
        ]),
    Fp::from_raw_unchecked([
            0xbfc7f36afaa47806, 0x1df1b07e4eefdb60,
            0xf0a260092223a7a4, 0x266a6c120080da6c,
        ]),
    Fp::from_raw_unchecked([
            0x0c0e6983a63c6683, 0x62e3fe9d3afd7f18,
            0xcf4134542f5762d1, 0x31c73205032dc6b1,
        ]),
    Fp::from_raw_unchecked([
            0x34786d38fffffffd, 0x992c350be41914ad,
            0xffffffffffffffff, 0x3fffffffffffffff,
        ]),
];

/// Rational map from the isogenous SSWU curve back onto pallas.
static ISOGENY: IsogenyMap<Fp> = IsogenyMap {
    x_num: &ISO_X_NUM,
    x_den: &ISO_X_DEN,
    y_num: &ISO_Y_NUM,
    y_den: &ISO_Y_DEN,
};
/// Domain-separation tag for a hash-to-curve suite over this curve.
pub fn hash_dst(hasher: &PointHasher) -> Vec<u8> {
    format!(
        "{}_{}:{}_SSWU_RO_",
        Pallas::NAME,
        hasher.kind().label(),
        hasher.label()
    )
    .into_bytes()
}

/// Hash a message to the curve (random-oracle SSWU construction).
///
/// The wide field elements are read little-endian here, the byte order the
/// pallas wire formats use throughout.
pub fn hash_to_curve(msg: &[u8], hasher: &PointHasher, dst: &[u8]) -> ProjectivePoint {
    let uniform = hasher.expand(msg, dst, 128);
    let mut half = [0u8; 64];
    half.copy_from_slice(&uniform[..64]);
    let u0 = Fp::from_bytes_wide(&half);
    half.copy_from_slice(&uniform[64..]);
    let u1 = Fp::from_bytes_wide(&half);
    let (x0, y0) = SSWU.map_to_curve(&u0);
    let (x1, y1) = SSWU.map_to_curve(&u1);
    let (x0, y0) = ISOGENY.map(&x0, &y0);
    let (x1, y1) = ISOGENY.map(&x1, &y1);
    let q0 = ProjectivePoint::from_affine_unchecked(x0, y0);
    let q1 = ProjectivePoint::from_affine_unchecked(x1, y1);
    q0.add(&q1)
}

/// Hash input bytes to a scalar: a 64-byte BLAKE2b expansion reduced
/// little-endian modulo the order.
pub fn hash_to_scalar(input: &[u8]) -> Fq {
    let xmd = crate::hash2curve::expand_message_xmd::<blake2::Blake2b512>(
        input,
        b"pallas_XMD:BLAKE2b_SSWU_RO_",
        64,
    );
    let mut wide = [0u8; 64];
    wide.copy_from_slice(&xmd);
    Fq::from_bytes_wide(&wide)
}

#[cfg(test)]
mod tests {
    use super::*;
    use subtle::ConstantTimeEq;

    fn order_bytes() -> [u8; 32] {
        let mut out = [0u8; 32];
        curvekit_internal::limbs_to_le_bytes(&fq::FQ_PARAMS.modulus, &mut out);
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
