//! Edwards25519: extended-coordinate group arithmetic, the RFC 8032 point
//! codec and the Elligator2 hash-to-curve pipeline.
//!
//! The field layer is this library's 4-limb Montgomery engine; the point
//! model and the square-root-ratio trick follow the curve25519-dalek
//! conventions.

mod field;
mod scalar;

pub use field::FieldElement;
pub use scalar::Scalar;

use sha2::{Digest, Sha512};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::hash2curve::expand_message_xmd;

/// Edwards d = −121665/121666.
pub(crate) const EDWARDS_D: FieldElement = FieldElement::from_raw_unchecked([
            0x80ed8bfedf47e9fa, 0x10a18777afc62973,
            0xe5939207bc188690, 0x2c822b5a729fc526,
        ]);

/// 2d.
pub(crate) const EDWARDS_D2: FieldElement = FieldElement::from_raw_unchecked([
            0x01db17fdbe8fd3f4, 0x21430eef5f8c52e7,
            0xcb27240f78310d20, 0x590456b4e53f8a4d,
        ]);

/// √−1.
pub(crate) const SQRT_M1: FieldElement = FieldElement::from_raw_unchecked([
            0x3b5807d4fe2bdb04, 0x03f590fdb51be9ed,
            0x6d6e16bf336202d1, 0x75776b0bd6c71ba8,
        ]);

/// Montgomery A = 486662 for the Elligator2 map.
const MONT_A: FieldElement = FieldElement::from_raw_unchecked([
            0x00000000011a2ee4, 0x0000000000000000,
            0x0000000000000000, 0x0000000000000000,
        ]);

/// −A.
const NEG_MONT_A: FieldElement = FieldElement::from_raw_unchecked([
            0xfffffffffee5d109, 0xffffffffffffffff,
            0xffffffffffffffff, 0x7fffffffffffffff,
        ]);

/// √−(A+2), the Montgomery→Edwards x-scaling constant.
const SQRT_NEG_A_PLUS_TWO: FieldElement = FieldElement::from_raw_unchecked([
            0x5854b161e450b530, 0x560571113491ef6a,
            0x3e4350a89773ccd1, 0x3fc7524657c0ffe1,
        ]);

const BASE_X: FieldElement = FieldElement::from_raw_unchecked([
            0xe2cabc553f9da287, 0x9ca598562396e489,
            0x9879936bade4b5b7, 0x759e23707e6077d0,
        ]);
const BASE_Y: FieldElement = FieldElement::from_raw_unchecked([
            0x333333333333334a, 0x3333333333333333,
            0x3333333333333333, 0x3333333333333333,
        ]);
const BASE_T: FieldElement = FieldElement::from_raw_unchecked([
            0x4f0896aa994ae86c, 0xe3b7ad11b612506e,
            0x46c7a922f183c492, 0x5e181c59feb3930d,
        ]);

/// Exponent (p − 5) / 8 = 2^252 − 3 for the square-root-ratio ladder.
const SQRT_RATIO_EXP: [u64; 4] = [
    0xfffffffffffffffd,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0x0fffffffffffffff,
];

/// Domain-separation tag of the Ed25519 hash-to-curve suite.
pub const HASH_DST: &[u8] = b"edwards25519_XMD:SHA-512_ELL2_RO_";

/// A point on edwards25519 in extended coordinates (X, Y, Z, T) with
/// T·Z = X·Y.
#[derive(Clone, Copy, Debug)]
pub struct EdwardsPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

/// Return the non-negative square root of u/v along with a flag that is
/// set when u/v was square. Follows the curve25519-dalek `sqrt_ratio_i`
/// shape: on failure the result is √(iu/v).
pub(crate) fn sqrt_ratio(u: &FieldElement, v: &FieldElement) -> (Choice, FieldElement) {
    let v3 = v.square().mul(v);
    let v7 = v3.square().mul(v);
    let mut r = u.mul(&v3).mul(&u.mul(&v7).pow(&SQRT_RATIO_EXP));
    let check = v.mul(&r.square());

    let neg_u = u.neg();
    let correct_sign = check.ct_eq(u);
    let flipped_sign = check.ct_eq(&neg_u);
    let flipped_sign_i = check.ct_eq(&neg_u.mul(&SQRT_M1));

    let r_prime = r.mul(&SQRT_M1);
    r = FieldElement::conditional_select(&r, &r_prime, flipped_sign | flipped_sign_i);

    // Normalise to the even root.
    let r_neg = r.neg();
    r = FieldElement::conditional_select(&r, &r_neg, r.sgn0());

    (correct_sign | flipped_sign, r)
}

impl EdwardsPoint {
    /// The neutral element (0, 1).
    pub fn identity() -> Self {
        Self {
            x: FieldElement::zero(),
            y: FieldElement::one(),
            z: FieldElement::one(),
            t: FieldElement::zero(),
        }
    }

    /// The RFC 8032 base point.
    pub fn generator() -> Self {
        Self {
            x: BASE_X,
            y: BASE_Y,
            z: FieldElement::one(),
            t: BASE_T,
        }
    }

    /// True iff this point is the neutral element.
    pub fn is_identity(&self) -> Choice {
        self.ct_eq(&Self::identity())
    }

    /// Check the extended-coordinate curve relations.
    pub fn is_on_curve(&self) -> Choice {
        // -x² + y² = z² + d·t²  and  t·z = x·y
        let lhs = self.y.square().sub(&self.x.square());
        let rhs = self.z.square().add(&EDWARDS_D.mul(&self.t.square()));
        let tz = self.t.mul(&self.z);
        let xy = self.x.mul(&self.y);
        lhs.ct_eq(&rhs) & tz.ct_eq(&xy)
    }

    /// Complete unified addition (Hisil et al., a = −1).
    pub fn add(&self, rhs: &Self) -> Self {
        let a = self.y.sub(&self.x).mul(&rhs.y.sub(&rhs.x));
        let b = self.y.add(&self.x).mul(&rhs.y.add(&rhs.x));
        let c = self.t.mul(&EDWARDS_D2).mul(&rhs.t);
        let d = self.z.double().mul(&rhs.z);
        let e = b.sub(&a);
        let f = d.sub(&c);
        let g = d.add(&c);
        let h = b.add(&a);
        Self {
            x: e.mul(&f),
            y: g.mul(&h),
            z: f.mul(&g),
            t: e.mul(&h),
        }
    }

    /// Doubling.
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Negation.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x.neg(),
            y: self.y,
            z: self.z,
            t: self.t.neg(),
        }
    }

    /// Subtraction.
    pub fn sub(&self, rhs: &Self) -> Self {
        self.add(&rhs.neg())
    }

    /// Multiply by the cofactor 8.
    pub fn mul_by_cofactor(&self) -> Self {
        self.double().double().double()
    }

    fn lookup(table: &[Self; 16], index: u8) -> Self {
        let mut acc = Self::identity();
        for (j, entry) in table.iter().enumerate() {
            let hit = (j as u8).ct_eq(&index);
            acc = Self::conditional_select(&acc, entry, hit);
        }
        acc
    }

    /// Constant-time scalar multiplication, 4-bit fixed windows with a
    /// masked 16-entry table.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        let bytes = scalar.to_bytes();
        let mut table = [Self::identity(); 16];
        table[1] = *self;
        let mut i = 2;
        while i < 16 {
            table[i] = table[i >> 1].double();
            table[i + 1] = table[i].add(self);
            i += 2;
        }
        let mut acc = Self::identity();
        for i in 0..64 {
            for _ in 0..4 {
                acc = acc.double();
            }
            let byte = bytes[31 - (i >> 1)];
            let nibble = (byte >> (4 * ((i & 1) ^ 1))) & 0x0f;
            acc = acc.add(&Self::lookup(&table, nibble));
        }
        acc
    }

    /// RFC 8032 base multiplication with the clamping bit-mangling applied
    /// to the scalar bytes first.
    pub fn mul_base_clamped(bytes: &[u8; 32]) -> Self {
        let mut clamped = *bytes;
        clamped[0] &= 248;
        clamped[31] &= 127;
        clamped[31] |= 64;
        // The clamped value fits the scalar field after wide reduction.
        let mut wide = [0u8; 64];
        wide[..32].copy_from_slice(&clamped);
        let s = Scalar::from_bytes_wide(&wide);
        Self::generator().mul(&s)
    }

    /// Bucketed multi-scalar multiplication: Σ [sᵢ]Pᵢ.
    pub fn sum_of_products(points: &[Self], scalars: &[Scalar]) -> crate::Result<Self> {
        if points.len() != scalars.len() {
            return Err(crate::Error::InvalidLength {
                context: "sum_of_products",
                expected: points.len(),
                actual: scalars.len(),
            });
        }
        let bytes: Vec<[u8; 32]> = scalars.iter().map(|s| s.to_bytes()).collect();
        let mut window_sums = [Self::identity(); 64];
        let mut buckets = [Self::identity(); 16];
        for (j, window_sum) in window_sums.iter_mut().enumerate() {
            for bucket in buckets.iter_mut() {
                *bucket = Self::identity();
            }
            for (point, scalar) in points.iter().zip(bytes.iter()) {
                let index = ((scalar[j >> 1] >> (4 * (j & 1))) & 0x0f) as usize;
                buckets[index] = buckets[index].add(point);
            }
            let mut sum = Self::identity();
            for bucket in buckets.iter().skip(1).rev() {
                sum = sum.add(bucket);
                *window_sum = window_sum.add(&sum);
            }
        }
        let mut acc = Self::identity();
        for window_sum in window_sums.iter().rev() {
            for _ in 0..4 {
                acc = acc.double();
            }
            acc = acc.add(window_sum);
        }
        Ok(acc)
    }

    /// Projective equality: X1Z2 = X2Z1 and Y1Z2 = Y2Z1.
    pub fn ct_eq(&self, rhs: &Self) -> Choice {
        let xz = self.x.mul(&rhs.z);
        let zx = self.z.mul(&rhs.x);
        let yz = self.y.mul(&rhs.z);
        let zy = self.z.mul(&rhs.y);
        xz.ct_eq(&zx) & yz.ct_eq(&zy)
    }

    /// Affine coordinates.
    pub fn to_affine(&self) -> (FieldElement, FieldElement) {
        let zi = self.z.invert().unwrap_or(FieldElement::zero());
        (self.x.mul(&zi), self.y.mul(&zi))
    }

    /// RFC 8032 compression: the y-coordinate with the sign of x in the
    /// top bit.
    pub fn compress(&self) -> [u8; 32] {
        let (x, y) = self.to_affine();
        let mut out = y.to_bytes();
        out[31] |= x.sgn0().unwrap_u8() << 7;
        out
    }

    /// RFC 8032 decompression. Rejects non-canonical y, a non-square
    /// right-hand side and the −0 encoding.
    pub fn decompress(bytes: &[u8; 32]) -> crate::Result<Self> {
        let sign = Choice::from(bytes[31] >> 7);
        let mut y_bytes = *bytes;
        y_bytes[31] &= 0x7f;
        let y = Option::<FieldElement>::from(FieldElement::from_bytes(&y_bytes))
            .ok_or(crate::Error::InvalidEncoding)?;

        // x² = (y² − 1) / (d·y² + 1)
        let yy = y.square();
        let u = yy.sub(&FieldElement::one());
        let v = EDWARDS_D.mul(&yy).add(&FieldElement::one());
        let (was_square, mut x) = sqrt_ratio(&u, &v);
        if !bool::from(was_square) {
            return Err(crate::Error::InvalidEncoding);
        }
        // −0 is not a valid encoding.
        if bool::from(x.is_zero() & sign) {
            return Err(crate::Error::InvalidEncoding);
        }
        let x_neg = x.neg();
        x = FieldElement::conditional_select(&x, &x_neg, x.sgn0() ^ sign);
        Ok(Self {
            x,
            y,
            z: FieldElement::one(),
            t: x.mul(&y),
        })
    }

    /// Build a point from affine coordinates, validating the curve
    /// equation; (0, 0) is accepted as the identity sentinel.
    pub fn from_affine(x: FieldElement, y: FieldElement) -> crate::Result<Self> {
        let sentinel = x.is_zero() & y.is_zero();
        if bool::from(sentinel) {
            return Ok(Self::identity());
        }
        let p = Self {
            x,
            y,
            z: FieldElement::one(),
            t: x.mul(&y),
        };
        if bool::from(p.is_on_curve()) {
            Ok(p)
        } else {
            Err(crate::Error::InvalidCoordinates)
        }
    }

    /// Hash a message to the prime-order subgroup: two Elligator2 maps on
    /// wide field elements, summed, then cleared of cofactor.
    pub fn hash_to_curve(msg: &[u8], dst: &[u8]) -> Self {
        let uniform = expand_message_xmd::<Sha512>(msg, dst, 96);
        let (u0, u1) = crate::ec::sswu::two_wide_elements::<FieldElement, 64>(&uniform, |b| {
            FieldElement::from_bytes_wide(b)
        });
        let p0 = map_to_edwards(&u0);
        let p1 = map_to_edwards(&u1);
        p0.add(&p1).mul_by_cofactor()
    }
}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
            t: FieldElement::conditional_select(&a.t, &b.t, choice),
        }
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for EdwardsPoint {}

/// Elligator2 onto the Montgomery curve, then the birational map to
/// Edwards form.
fn map_to_edwards(r: &FieldElement) -> EdwardsPoint {
    let (u, v) = elligator2_montgomery(r);
    montgomery_to_edwards(&u, &v)
}

fn elligator2_montgomery(r: &FieldElement) -> (FieldElement, FieldElement) {
    let mut t1 = r.square().double(); // 2r²
    let e1 = t1.ct_eq(&FieldElement::one().neg());
    t1 = FieldElement::conditional_select(&t1, &FieldElement::zero(), e1);

    let x1 = t1
        .add(&FieldElement::one())
        .invert()
        .unwrap_or(FieldElement::zero())
        .mul(&NEG_MONT_A); // −A / (t1 + 1)

    let gx1 = x1
        .add(&MONT_A)
        .mul(&x1)
        .add(&FieldElement::one())
        .mul(&x1); // x1³ + A·x1² + x1

    let x2 = x1.neg().sub(&MONT_A);
    let gx2 = t1.mul(&gx1);

    let (square1, root1) = sqrt_ratio(&gx1, &FieldElement::one());
    let (_, root2) = sqrt_ratio(&gx2, &FieldElement::one());

    // On the square branch the point is (x1, −√gx1); otherwise (x2, +√gx2).
    let x = FieldElement::conditional_select(&x2, &x1, square1);
    let y = FieldElement::conditional_select(&root2, &root1.neg(), square1);
    (x, y)
}

fn montgomery_to_edwards(u: &FieldElement, v: &FieldElement) -> EdwardsPoint {
    let x = v
        .invert()
        .unwrap_or(FieldElement::zero())
        .mul(u)
        .mul(&SQRT_NEG_A_PLUS_TWO);
    let y = u
        .sub(&FieldElement::one())
        .mul(&u.add(&FieldElement::one()).invert().unwrap_or(FieldElement::zero()));
    EdwardsPoint {
        x,
        y,
        z: FieldElement::one(),
        t: x.mul(&y),
    }
}

/// Reduce the SHA-512 digest of the input into a scalar, the uniform
/// hash-to-scalar used by the Ed25519 and Ristretto facades.
pub fn hash_to_scalar(input: &[u8]) -> Scalar {
    let digest = Sha512::digest(input);
    let mut wide = [0u8; 64];
    wide.copy_from_slice(&digest);
    Scalar::from_bytes_wide(&wide)
}

#[cfg(test)]
mod tests;
