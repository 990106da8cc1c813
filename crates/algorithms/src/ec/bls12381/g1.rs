//! The BLS12-381 G1 group: y² = x³ + 4 over Fp.
//!
//! Group arithmetic comes from the generic Weierstrass engine; this module
//! adds the ZCash-flag codecs, cofactor clearing, the subgroup check and
//! the SSWU suite through the 11-isogenous curve.

use subtle::{Choice, ConditionallySelectable};

use super::curve_constants::{
    B_G1, G1_GENERATOR_X, G1_GENERATOR_Y, G1_ISO_A, G1_ISO_B, G1_ISO_X_DEN, G1_ISO_X_NUM,
    G1_ISO_Y_DEN, G1_ISO_Y_NUM, G1_SSWU_Z,
};
use super::fp::Fp;
use super::scalar;
use crate::ec::sswu::{IsogenyMap, SswuParams};
use crate::ec::weierstrass::WeierstrassCurve;
use crate::error::{Error, Result};
use crate::hash2curve::PointHasher;

/// Marker binding the G1 parameters to the generic point engine.
#[derive(Clone, Copy, Debug)]
pub struct Bls12381G1;

impl WeierstrassCurve for Bls12381G1 {
    type Fe = Fp;
    const NAME: &'static str = "BLS12381G1";
    const A_IS_ZERO: bool = true;
    const A: Fp = Fp::zero();
    const B: Fp = B_G1;
    const GX: Fp = G1_GENERATOR_X;
    const GY: Fp = G1_GENERATOR_Y;
    const SCALAR_BYTES: usize = 32;
}

/// A G1 point in projective coordinates.
pub type G1Projective = crate::ec::weierstrass::ProjectivePoint<Bls12381G1>;

/// h_eff = 1 − x = 1 + |x| for G1 cofactor clearing.
const H_EFF: u64 = 0xd201_0000_0001_0001;

/// Domain-separation tag of the standard G1 hash suite.
pub const G1_HASH_DST: &[u8] = b"BLS12381G1_XMD:SHA-256_SSWU_RO_";

const SSWU: SswuParams<Fp> = SswuParams {
    a: G1_ISO_A,
    b: G1_ISO_B,
    z: G1_SSWU_Z,
};

static ISOGENY: IsogenyMap<Fp> = IsogenyMap {
    x_num: &G1_ISO_X_NUM,
    x_den: &G1_ISO_X_DEN,
    y_num: &G1_ISO_Y_NUM,
    y_den: &G1_ISO_Y_DEN,
};

impl G1Projective {
    /// Multiply by the effective cofactor so the result lands in the
    /// r-order subgroup.
    pub fn clear_cofactor(&self) -> Self {
        let mut scalar = [0u8; 32];
        scalar[..8].copy_from_slice(&H_EFF.to_le_bytes());
        // The width is fixed and public, so the unwrap cannot fire.
        self.mul(&scalar).expect("fixed-width scalar")
    }

    /// True iff the point is in the r-order subgroup.
    pub fn is_torsion_free(&self) -> Choice {
        let mut order = [0u8; 32];
        curvekit_internal::limbs_to_le_bytes(&scalar::FQ_PARAMS.modulus, &mut order);
        let res = self.mul(&order).expect("fixed-width scalar");
        res.is_identity()
    }

    /// Sign of the affine y-coordinate per the ZCash convention.
    pub fn y_is_lexicographically_largest(&self) -> Choice {
        let (_, y) = self.to_affine();
        y.lexicographically_largest()
    }

    /// 48-byte compressed encoding with the ZCash flag bits.
    pub fn to_compressed(&self) -> [u8; 48] {
        let (x, y) = self.to_affine();
        let infinity = self.is_identity();

        // The identity serialises as zero with the infinity flag.
        let x = Fp::conditional_select(&x, &Fp::zero(), infinity);
        let mut bytes = x.to_be_bytes();
        let sort = y.lexicographically_largest() & !infinity;
        bytes[0] |= 0x80;
        bytes[0] |= u8::conditional_select(&0, &0x40, infinity);
        bytes[0] |= u8::conditional_select(&0, &0x20, sort);
        bytes
    }

    /// 96-byte uncompressed encoding (x || y, big-endian).
    pub fn to_uncompressed(&self) -> [u8; 96] {
        let (x, y) = self.to_affine();
        let infinity = self.is_identity();
        let mut out = [0u8; 96];
        out[..48].copy_from_slice(&x.to_be_bytes());
        out[48..].copy_from_slice(&y.to_be_bytes());
        if bool::from(infinity) {
            out = [0u8; 96];
            out[0] = 0x40;
        }
        out
    }

    /// Decode a compressed point, enforcing canonical field elements, the
    /// flag rules and membership in the r-order subgroup.
    pub fn from_compressed(bytes: &[u8; 48]) -> Result<Self> {
        let compression = bytes[0] >> 7;
        let infinity = bytes[0] >> 6 & 1;
        let sort = Choice::from(bytes[0] >> 5 & 1);

        if compression != 1 {
            return Err(Error::InvalidEncoding);
        }

        let mut x_bytes = *bytes;
        x_bytes[0] &= 0x1f;

        if infinity == 1 {
            if x_bytes.iter().all(|b| *b == 0) && !bool::from(sort) {
                return Ok(Self::identity());
            }
            return Err(Error::InvalidEncoding);
        }

        let x = Option::<Fp>::from(Fp::from_be_bytes(&x_bytes)).ok_or(Error::InvalidEncoding)?;
        let y = Option::<Fp>::from(Self::rhs_equation(&x).sqrt()).ok_or(Error::InvalidEncoding)?;

        let y_neg = y.neg();
        let y = Fp::conditional_select(&y, &y_neg, y.lexicographically_largest() ^ sort);
        let point = Self::from_affine_unchecked(x, y);
        if bool::from(point.is_torsion_free()) {
            Ok(point)
        } else {
            Err(Error::InvalidEncoding)
        }
    }

    /// Decode an uncompressed point, with the same validity rules.
    pub fn from_uncompressed(bytes: &[u8; 96]) -> Result<Self> {
        if bytes[0] >> 7 == 1 {
            return Err(Error::InvalidEncoding);
        }
        if bytes[0] >> 6 & 1 == 1 {
            if bytes[0] == 0x40 && bytes[1..].iter().all(|b| *b == 0) {
                return Ok(Self::identity());
            }
            return Err(Error::InvalidEncoding);
        }
        let mut x_bytes = [0u8; 48];
        x_bytes.copy_from_slice(&bytes[..48]);
        let mut y_bytes = [0u8; 48];
        y_bytes.copy_from_slice(&bytes[48..]);

        let x = Option::<Fp>::from(Fp::from_be_bytes(&x_bytes)).ok_or(Error::InvalidEncoding)?;
        let y = Option::<Fp>::from(Fp::from_be_bytes(&y_bytes)).ok_or(Error::InvalidEncoding)?;

        let point = Self::from_affine_unchecked(x, y);
        if bool::from(point.is_on_curve() & point.is_torsion_free()) {
            Ok(point)
        } else {
            Err(Error::InvalidEncoding)
        }
    }

    /// Hash a message to G1: SSWU onto the 11-isogenous curve, the rational
    /// map back, and cofactor clearing.
    pub fn hash_to_curve(msg: &[u8], hasher: &PointHasher, dst: &[u8]) -> Self {
        let uniform = hasher.expand(msg, dst, 128);
        let (u0, u1) =
            crate::ec::sswu::two_wide_elements::<Fp, 96>(&uniform, |b| Fp::from_bytes_wide(b));

        let (x0, y0) = SSWU.map_to_curve(&u0);
        let (x0, y0) = ISOGENY.map(&x0, &y0);
        let (x1, y1) = SSWU.map_to_curve(&u1);
        let (x1, y1) = ISOGENY.map(&x1, &y1);

        let q0 = Self::from_affine_unchecked(x0, y0);
        let q1 = Self::from_affine_unchecked(x1, y1);
        q0.add(&q1).clear_cofactor()
    }
}
