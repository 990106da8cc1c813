//! The BLS12-381 G2 group: y² = x³ + 4(u + 1) over Fp2.
//!
//! Group arithmetic comes from the generic Weierstrass engine over Fp2;
//! this module adds the psi endomorphism, Budroni–Pintore cofactor
//! clearing, the ZCash-flag codecs and the SSWU suite through the
//! 3-isogenous curve.

use subtle::{Choice, ConditionallySelectable};

use super::curve_constants::{
    B_G2, G2_GENERATOR_X, G2_GENERATOR_Y, G2_ISO_A, G2_ISO_B, G2_ISO_X_DEN, G2_ISO_X_NUM,
    G2_ISO_Y_DEN, G2_ISO_Y_NUM, G2_SSWU_Z, PSI2_COEFF_X, PSI_COEFF_X, PSI_COEFF_Y,
};
use super::fp::Fp;
use super::fp2::Fp2;
use super::scalar;
use super::BLS_X;
use crate::ec::sswu::{IsogenyMap, SswuParams};
use crate::ec::weierstrass::WeierstrassCurve;
use crate::error::{Error, Result};
use crate::hash2curve::PointHasher;

/// Marker binding the G2 parameters to the generic point engine.
#[derive(Clone, Copy, Debug)]
pub struct Bls12381G2;

impl WeierstrassCurve for Bls12381G2 {
    type Fe = Fp2;
    const NAME: &'static str = "BLS12381G2";
    const A_IS_ZERO: bool = true;
    const A: Fp2 = Fp2::zero();
    const B: Fp2 = B_G2;
    const GX: Fp2 = G2_GENERATOR_X;
    const GY: Fp2 = G2_GENERATOR_Y;
    const SCALAR_BYTES: usize = 32;
}

/// A G2 point in projective coordinates.
pub type G2Projective = crate::ec::weierstrass::ProjectivePoint<Bls12381G2>;

/// Domain-separation tag of the standard G2 hash suite.
pub const G2_HASH_DST: &[u8] = b"BLS12381G2_XMD:SHA-256_SSWU_RO_";

const SSWU: SswuParams<Fp2> = SswuParams {
    a: G2_ISO_A,
    b: G2_ISO_B,
    z: G2_SSWU_Z,
};

static ISOGENY: IsogenyMap<Fp2> = IsogenyMap {
    x_num: &G2_ISO_X_NUM,
    x_den: &G2_ISO_X_DEN,
    y_num: &G2_ISO_Y_NUM,
    y_den: &G2_ISO_Y_DEN,
};

impl G2Projective {
    /// Multiply by x = −|x| (double-and-add over the public loop constant,
    /// then negate).
    fn mul_by_x(&self) -> Self {
        let mut acc = Self::identity();
        let mut bit = 1u64 << 63;
        let mut started = false;
        while bit != 0 {
            if started {
                acc = acc.double();
            }
            if BLS_X & bit != 0 {
                acc = acc.add(self);
                started = true;
            }
            bit >>= 1;
        }
        acc.neg()
    }

    /// The untwist-Frobenius-twist endomorphism.
    fn psi(&self) -> Self {
        Self {
            x: self.x.frobenius_map().mul(&PSI_COEFF_X),
            y: self.y.frobenius_map().mul(&PSI_COEFF_Y),
            z: self.z.frobenius_map(),
        }
    }

    /// psi applied twice; the y coefficient collapses to −1.
    fn psi2(&self) -> Self {
        Self {
            x: self.x.mul_by_fp(&PSI2_COEFF_X),
            y: self.y.neg(),
            z: self.z,
        }
    }

    /// Budroni–Pintore cofactor clearing:
    /// psi²(2P) + [x²]P + [x]psi(P) − [x]P − psi(P) − P.
    pub fn clear_cofactor(&self) -> Self {
        let t1 = self.mul_by_x();
        let t2 = self.psi();

        self.double()
            .psi2()
            .add(&t1.add(&t2).mul_by_x())
            .sub(&t1)
            .sub(&t2)
            .sub(self)
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

    /// 96-byte compressed encoding: x.c1 || x.c0 big-endian with the flag
    /// bits in the leading byte.
    pub fn to_compressed(&self) -> [u8; 96] {
        let (x, y) = self.to_affine();
        let infinity = self.is_identity();
        let x = Fp2::conditional_select(&x, &Fp2::zero(), infinity);

        let mut out = [0u8; 96];
        out[..48].copy_from_slice(&x.c1.to_be_bytes());
        out[48..].copy_from_slice(&x.c0.to_be_bytes());

        let sort = y.lexicographically_largest() & !infinity;
        out[0] |= 0x80;
        out[0] |= u8::conditional_select(&0, &0x40, infinity);
        out[0] |= u8::conditional_select(&0, &0x20, sort);
        out
    }

    /// 192-byte uncompressed encoding: x.c1 || x.c0 || y.c1 || y.c0.
    pub fn to_uncompressed(&self) -> [u8; 192] {
        let (x, y) = self.to_affine();
        let mut out = [0u8; 192];
        out[..48].copy_from_slice(&x.c1.to_be_bytes());
        out[48..96].copy_from_slice(&x.c0.to_be_bytes());
        out[96..144].copy_from_slice(&y.c1.to_be_bytes());
        out[144..].copy_from_slice(&y.c0.to_be_bytes());
        if bool::from(self.is_identity()) {
            out = [0u8; 192];
            out[0] = 0x40;
        }
        out
    }

    /// Decode a compressed point with full validation.
    pub fn from_compressed(bytes: &[u8; 96]) -> Result<Self> {
        let compression = bytes[0] >> 7;
        let infinity = bytes[0] >> 6 & 1;
        let sort = Choice::from(bytes[0] >> 5 & 1);

        if compression != 1 {
            return Err(Error::InvalidEncoding);
        }

        let mut c1_bytes = [0u8; 48];
        c1_bytes.copy_from_slice(&bytes[..48]);
        c1_bytes[0] &= 0x1f;
        let mut c0_bytes = [0u8; 48];
        c0_bytes.copy_from_slice(&bytes[48..]);

        if infinity == 1 {
            if c1_bytes.iter().all(|b| *b == 0)
                && c0_bytes.iter().all(|b| *b == 0)
                && !bool::from(sort)
            {
                return Ok(Self::identity());
            }
            return Err(Error::InvalidEncoding);
        }

        let c1 = Option::<Fp>::from(Fp::from_be_bytes(&c1_bytes)).ok_or(Error::InvalidEncoding)?;
        let c0 = Option::<Fp>::from(Fp::from_be_bytes(&c0_bytes)).ok_or(Error::InvalidEncoding)?;
        let x = Fp2 { c0, c1 };

        let y = Option::<Fp2>::from(Self::rhs_equation(&x).sqrt()).ok_or(Error::InvalidEncoding)?;
        let y_neg = y.neg();
        let y = Fp2::conditional_select(&y, &y_neg, y.lexicographically_largest() ^ sort);

        let point = Self::from_affine_unchecked(x, y);
        if bool::from(point.is_torsion_free()) {
            Ok(point)
        } else {
            Err(Error::InvalidEncoding)
        }
    }

    /// Decode an uncompressed point with full validation.
    pub fn from_uncompressed(bytes: &[u8; 192]) -> Result<Self> {
        if bytes[0] >> 7 == 1 {
            return Err(Error::InvalidEncoding);
        }
        if bytes[0] >> 6 & 1 == 1 {
            if bytes[0] == 0x40 && bytes[1..].iter().all(|b| *b == 0) {
                return Ok(Self::identity());
            }
            return Err(Error::InvalidEncoding);
        }

        let mut chunk = [0u8; 48];
        let mut parts = [Fp::zero(); 4];
        for (i, part) in parts.iter_mut().enumerate() {
            chunk.copy_from_slice(&bytes[i * 48..(i + 1) * 48]);
            *part =
                Option::<Fp>::from(Fp::from_be_bytes(&chunk)).ok_or(Error::InvalidEncoding)?;
        }
        let x = Fp2 {
            c0: parts[1],
            c1: parts[0],
        };
        let y = Fp2 {
            c0: parts[3],
            c1: parts[2],
        };

        let point = Self::from_affine_unchecked(x, y);
        if bool::from(point.is_on_curve() & point.is_torsion_free()) {
            Ok(point)
        } else {
            Err(Error::InvalidEncoding)
        }
    }

    /// Hash a message to G2: SSWU onto the 3-isogenous curve over Fp2, the
    /// rational map back, and cofactor clearing.
    pub fn hash_to_curve(msg: &[u8], hasher: &PointHasher, dst: &[u8]) -> Self {
        let uniform = hasher.expand(msg, dst, 256);
        let u0 = fp2_from_wide(&uniform[..128]);
        let u1 = fp2_from_wide(&uniform[128..]);

        let (x0, y0) = SSWU.map_to_curve(&u0);
        let (x0, y0) = ISOGENY.map(&x0, &y0);
        let (x1, y1) = SSWU.map_to_curve(&u1);
        let (x1, y1) = ISOGENY.map(&x1, &y1);

        let q0 = Self::from_affine_unchecked(x0, y0);
        let q1 = Self::from_affine_unchecked(x1, y1);
        q0.add(&q1).clear_cofactor()
    }
}

/// Interpret 128 uniform bytes as an Fp2 element: two 64-byte big-endian
/// integers reduced into c0 and c1.
fn fp2_from_wide(bytes: &[u8]) -> Fp2 {
    debug_assert_eq!(bytes.len(), 128);
    let mut buf = [0u8; 96];
    for (i, b) in bytes[..64].iter().rev().enumerate() {
        buf[i] = *b;
    }
    let c0 = Fp::from_bytes_wide(&buf);
    let mut buf = [0u8; 96];
    for (i, b) in bytes[64..].iter().rev().enumerate() {
        buf[i] = *b;
    }
    let c1 = Fp::from_bytes_wide(&buf);
    Fp2 { c0, c1 }
}
