//! Ed448-Goldilocks: the untwisted public group, its twisted internal
//! curve, the 57-byte codec, the X448 Montgomery ladder and the
//! SHAKE-256 Elligator2 hash suite.
//!
//! Scalar multiplication splits s = 4·(s >> 2) + (s mod 4): the quotient
//! runs through the degree-4 isogeny pair onto the twisted curve (where
//! untwist(twist(P)) = [4]P) and the residue is corrected with a masked
//! four-entry table, so the two halves stay independently checkable.

mod fp;
mod fq;
mod twisted;

pub use fp::Fp;
pub use fq::Fq;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::error::{Error, Result};
use crate::hash2curve::expand_message_xof;
use twisted::{variable_base, TwistedExtendedPoint};

/// Compressed point width: 56 bytes of y plus the sign byte.
pub const POINT_BYTES: usize = 57;

/// Edwards d = −39081.
pub(crate) fn edwards_d() -> Fp {
    Fp::from_u64(39081).neg()
}

/// 2·d'.
pub(crate) const TWO_X_TWISTED_D: Fp = Fp::from_raw_unchecked([
            0xfffffffffffeceab, 0xffffffffffffffff,
            0xffffffffffffffff, 0xfffeceaaffffffff,
            0xffffffffffffffff, 0xffffffffffffffff,
            0xffffffffffffffff,
        ]);

/// Elligator2 J = 156326 (the Montgomery A of the isogenous curve).
fn ell2_j() -> Fp {
    Fp::from_u64(156326)
}

/// (A + 2)/4 = 39082 for the Montgomery ladder.
fn ap2_div4() -> Fp {
    Fp::from_u64(39082)
}

const BASE_X: Fp = Fp::from_raw_unchecked([
            0x6d35bf93b17aa383, 0x65fab7bc2914f8fe,
            0x7e9b28e44cd37ab7, 0x9be886a7f2ed152a,
            0xc7295e6eb444d6fb, 0x6ef0905d88b9ee96,
            0x420685f0ea8836d1,
        ]);
const BASE_Y: Fp = Fp::from_raw_unchecked([
            0x04ac119c79a99632, 0x5486da8e9ac23c21,
            0xa98abb416ef259fc, 0x012232506ee00948,
            0xe6acaf94714fa9dd, 0xf7687a33ab50a1f0,
            0xd81f4fba18417765,
        ]);
const BASE_T: Fp = Fp::from_raw_unchecked([
            0x2a8ab420e386ac5c, 0x481d32474a6b9736,
            0xdf9bfafd84761acf, 0x445dc2c4a99422e3,
            0x0f71014e6a0f05f3, 0x5339b7fc98aac411,
            0x70f2d86ecdbe176a,
        ]);

/// Domain-separation tag of the Ed448 hash-to-curve suite.
pub const HASH_DST: &[u8] = b"edwards448_XOF:SHAKE256_ELL2_RO_";

/// Domain-separation tag of the Ed448 hash-to-scalar derivation.
pub const SCALAR_DST: &[u8] = b"edwards448_XOF:SHAKE256_RO_";

/// A point on the untwisted Edwards curve x² + y² = 1 + d·x²y², in
/// extended coordinates.
#[derive(Clone, Copy, Debug)]
pub struct EdwardsPoint {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    pub(crate) z: Fp,
    pub(crate) t: Fp,
}

impl EdwardsPoint {
    /// The neutral element (0, 1).
    pub fn identity() -> Self {
        Self {
            x: Fp::zero(),
            y: Fp::one(),
            z: Fp::one(),
            t: Fp::zero(),
        }
    }

    /// The RFC 8032 Goldilocks base point.
    pub fn generator() -> Self {
        Self {
            x: BASE_X,
            y: BASE_Y,
            z: Fp::one(),
            t: BASE_T,
        }
    }

    /// True iff this point is the neutral element.
    pub fn is_identity(&self) -> Choice {
        self.ct_eq(&Self::identity())
    }

    /// Check the extended-coordinate curve relations
    /// (y² + x² = z² + d·t² and x·y = z·t).
    pub fn is_on_curve(&self) -> Choice {
        let xy = self.x.mul(&self.y);
        let zt = self.z.mul(&self.t);
        let lhs = self.y.square().add(&self.x.square());
        let rhs = self.t.square().mul(&edwards_d()).add(&self.z.square());
        xy.ct_eq(&zt) & lhs.ct_eq(&rhs)
    }

    /// Complete addition on the untwisted curve (a = 1, d non-square).
    pub fn add(&self, rhs: &Self) -> Self {
        let xy_sum = self.x.mul(&rhs.y).add(&self.y.mul(&rhs.x));
        let xx = self.x.mul(&rhs.x);
        let dtt = edwards_d().mul(&self.t).mul(&rhs.t);
        let zz = self.z.mul(&rhs.z);
        let yy = self.y.mul(&rhs.y);

        let zz_m_dtt = zz.sub(&dtt);
        let zz_p_dtt = zz.add(&dtt);
        let yy_m_xx = yy.sub(&xx);

        Self {
            x: zz_m_dtt.mul(&xy_sum),
            y: zz_p_dtt.mul(&yy_m_xx),
            z: zz_m_dtt.mul(&zz_p_dtt),
            t: yy_m_xx.mul(&xy_sum),
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

    /// Projective equality.
    pub fn ct_eq(&self, rhs: &Self) -> Choice {
        let xz = self.x.mul(&rhs.z);
        let zx = self.z.mul(&rhs.x);
        let yz = self.y.mul(&rhs.z);
        let zy = self.z.mul(&rhs.y);
        xz.ct_eq(&zx) & yz.ct_eq(&zy)
    }

    /// Affine coordinates.
    pub fn to_affine(&self) -> (Fp, Fp) {
        let zi = self.z.invert().unwrap_or(Fp::zero());
        (self.x.mul(&zi), self.y.mul(&zi))
    }

    /// The 2-isogeny onto the twisted curve.
    pub(crate) fn to_twisted(&self) -> TwistedExtendedPoint {
        let (x, y) = self.to_affine();
        let xy = x.mul(&y);
        let xx = x.square();
        let yy = y.square();

        // x' = 2xy / (y² − x²), y' = (y² + x²) / (2 − y² − x²)
        let xn = xy.double();
        let xd = yy.sub(&xx);
        let new_x = xd.invert().unwrap_or(Fp::zero()).mul(&xn);

        let yn = yy.add(&xx);
        let yd = Fp::one().double().sub(&yy).sub(&xx);
        let new_y = yd.invert().unwrap_or(Fp::zero()).mul(&yn);

        TwistedExtendedPoint {
            x: new_x,
            y: new_y,
            z: Fp::one(),
            t: new_x.mul(&new_y),
        }
    }

    /// The dual isogeny back from the twisted curve (a = −1 variant of the
    /// same map).
    pub(crate) fn from_twisted(p: &TwistedExtendedPoint) -> Self {
        let zi = p.z.invert().unwrap_or(Fp::zero());
        let x = p.x.mul(&zi);
        let y = p.y.mul(&zi);
        let xy = x.mul(&y);
        let axx = x.square().neg();
        let yy = y.square();

        let xn = xy.double();
        let xd = yy.sub(&axx);
        let new_x = xd.invert().unwrap_or(Fp::zero()).mul(&xn);

        let yn = yy.add(&axx);
        let yd = Fp::one().double().sub(&yy).sub(&axx);
        let new_y = yd.invert().unwrap_or(Fp::zero()).mul(&yn);

        Self {
            x: new_x,
            y: new_y,
            z: Fp::one(),
            t: new_x.mul(&new_y),
        }
    }

    /// [s mod 4]·P via a masked four-entry table.
    fn scalar_mod4(&self, residue: u8) -> Self {
        let two_p = self.double();
        let three_p = two_p.add(self);

        let mut acc = Self::identity();
        acc = Self::conditional_select(&acc, self, residue.ct_eq(&1));
        acc = Self::conditional_select(&acc, &two_p, residue.ct_eq(&2));
        acc = Self::conditional_select(&acc, &three_p, residue.ct_eq(&3));
        acc
    }

    /// Constant-time scalar multiplication.
    ///
    /// The quotient s >> 2 runs on the twisted curve (the isogeny pair
    /// contributes the factor 4) and the residue s mod 4 is added back.
    pub fn mul(&self, scalar: &Fq) -> Self {
        let bytes = scalar.to_bytes();
        let residue = bytes[0] & 3;
        let quarter = shift_right_two(&bytes);

        let quotient =
            Self::from_twisted(&variable_base(&self.to_twisted(), &quarter));
        quotient.add(&self.scalar_mod4(residue))
    }

    /// Torsion-freeness: [q]P = identity, evaluated as
    /// [4·(q−3)/4]P + [3]P.
    pub fn is_torsion_free(&self) -> Choice {
        let mut q_bytes = [0u8; 56];
        curvekit_internal::limbs_to_le_bytes(&fq::FQ_PARAMS.modulus, &mut q_bytes);
        let quarter = shift_right_two(&q_bytes);

        let big = Self::from_twisted(&variable_base(&self.to_twisted(), &quarter));
        let small = self.double().add(self);
        big.add(&small).is_identity()
    }

    /// Multiply by the cofactor 4.
    pub fn mul_by_cofactor(&self) -> Self {
        self.double().double()
    }

    /// Bucketed multi-scalar multiplication: Σ [sᵢ]Pᵢ.
    pub fn sum_of_products(points: &[Self], scalars: &[Fq]) -> Result<Self> {
        if points.len() != scalars.len() {
            return Err(Error::InvalidLength {
                context: "sum_of_products",
                expected: points.len(),
                actual: scalars.len(),
            });
        }
        let bytes: Vec<[u8; 56]> = scalars.iter().map(|s| s.to_bytes()).collect();
        let mut window_sums = [Self::identity(); 112];
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

    /// Compress to the 57-byte form: y little-endian, sign of x in the top
    /// bit of the final byte.
    pub fn compress(&self) -> [u8; POINT_BYTES] {
        let (x, y) = self.to_affine();
        let mut out = [0u8; POINT_BYTES];
        out[..56].copy_from_slice(&y.to_bytes());
        out[56] = x.sgn0().unwrap_u8() << 7;
        out
    }

    /// Decompress a 57-byte encoding, rejecting non-canonical y, a
    /// non-square ratio and points outside the prime-order subgroup.
    pub fn decompress(bytes: &[u8; POINT_BYTES]) -> Result<Self> {
        let mut y_bytes = [0u8; 56];
        y_bytes.copy_from_slice(&bytes[..56]);
        let sign = Choice::from(bytes[56] >> 7);

        let y = Option::<Fp>::from(Fp::from_bytes(&y_bytes)).ok_or(Error::InvalidEncoding)?;

        // x² = (1 − y²) / (1 − d·y²)
        let yy = y.square();
        let num = Fp::one().sub(&yy);
        let den = Fp::one().sub(&edwards_d().mul(&yy));
        let (mut x, was_square) = fp_sqrt_ratio(&num, &den);
        if !bool::from(was_square) {
            return Err(Error::InvalidEncoding);
        }

        let x_neg = x.neg();
        x = Fp::conditional_select(&x, &x_neg, x.sgn0() ^ sign);

        let point = Self {
            x,
            y,
            z: Fp::one(),
            t: x.mul(&y),
        };
        if bool::from(point.is_on_curve() & point.is_torsion_free()) {
            Ok(point)
        } else {
            Err(Error::InvalidEncoding)
        }
    }

    /// Build a point from affine coordinates, accepting only curve points
    /// of prime order; (0, 1) is the identity.
    pub fn from_affine(x: Fp, y: Fp) -> Result<Self> {
        let p = Self {
            x,
            y,
            z: Fp::one(),
            t: x.mul(&y),
        };
        if bool::from(p.is_on_curve() & p.is_torsion_free()) {
            Ok(p)
        } else {
            Err(Error::InvalidCoordinates)
        }
    }

    /// The u-coordinate on the 4-isogenous Montgomery curve:
    /// u = y²(1 − d·y²)/(1 − y²).
    pub fn to_montgomery(&self) -> MontgomeryPoint {
        let (_, y) = self.to_affine();
        let yy = y.square();
        let dyy = edwards_d().mul(&yy);

        let t1 = Fp::one().sub(&dyy);
        let t2 = Fp::one().sub(&yy).invert().unwrap_or(Fp::zero());
        let u = yy.mul(&t1).mul(&t2);
        MontgomeryPoint(u.to_bytes())
    }

    /// Hash a message to the prime-order subgroup: two Elligator2 maps on
    /// wide field elements, the 4-isogeny, a sum, and two doublings.
    pub fn hash_to_curve(msg: &[u8], dst: &[u8]) -> Self {
        let uniform = expand_message_xof::<sha3::Shake256>(msg, dst, 168);
        let (u0, u1) = crate::ec::sswu::two_wide_elements::<Fp, 112>(&uniform, |b| {
            Fp::from_bytes_wide(b)
        });

        let (x0, y0) = isogeny_to_edwards(map_to_curve_elligator2(&u0));
        let (x1, y1) = isogeny_to_edwards(map_to_curve_elligator2(&u1));

        let q0 = Self {
            x: x0,
            y: y0,
            z: Fp::one(),
            t: x0.mul(&y0),
        };
        let q1 = Self {
            x: x1,
            y: y1,
            z: Fp::one(),
            t: x1.mul(&y1),
        };
        q0.add(&q1).double().double()
    }
}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            z: Fp::conditional_select(&a.z, &b.z, choice),
            t: Fp::conditional_select(&a.t, &b.t, choice),
        }
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for EdwardsPoint {}

/// Shift a 56-byte little-endian value right by two bits.
fn shift_right_two(bytes: &[u8; 56]) -> [u8; 56] {
    let mut out = [0u8; 56];
    for i in 0..56 {
        let hi = if i + 1 < 56 { bytes[i + 1] } else { 0 };
        out[i] = (bytes[i] >> 2) | (hi << 6);
    }
    out
}

/// 1/√a via the fixed Goldilocks addition chain; the flag reports whether
/// a was a non-zero square.
fn fp_inv_sqrt(a: &Fp) -> (Fp, Choice) {
    let mut l0;
    let mut l1;
    let mut l2;

    l1 = a.square();
    l2 = l1.mul(a);
    l1 = l2.square();
    l2 = l1.mul(a);
    l1 = l2.pow2k(3);
    l0 = l2.mul(&l1);
    l1 = l0.pow2k(3);
    l0 = l2.mul(&l1);
    l2 = l0.pow2k(9);
    l1 = l0.mul(&l2);
    l0 = l1.square();
    l2 = l0.mul(a);
    l0 = l2.pow2k(18);
    l2 = l1.mul(&l0);
    l0 = l2.pow2k(37);
    l1 = l2.mul(&l0);
    l0 = l1.pow2k(37);
    l1 = l2.mul(&l0);
    l0 = l1.pow2k(111);
    l2 = l1.mul(&l0);
    l0 = l2.square();
    l1 = l0.mul(a);
    l0 = l1.pow2k(223);
    l1 = l2.mul(&l0);
    l2 = l1.square();
    l0 = l2.mul(a);

    let is_residue = l0.is_one();
    (l1, is_residue)
}

/// √(u/v) with a flag reporting whether the ratio was square.
fn fp_sqrt_ratio(u: &Fp, v: &Fp) -> (Fp, Choice) {
    // 1/sqrt(uv) multiplied by u gives sqrt(u/v); u = 0 needs its own flag
    // because the chain reports zero as a non-residue.
    let x = u.mul(v);
    let (inv_sqrt_x, is_res) = fp_inv_sqrt(&x);
    let zero_u = u.is_zero();
    (inv_sqrt_x.mul(u), zero_u | is_res)
}

/// Elligator2 onto the Montgomery curve with J = 156326, Z = −1.
fn map_to_curve_elligator2(u: &Fp) -> (Fp, Fp) {
    let j = ell2_j();
    let minus_one = Fp::one().neg();

    let mut t1 = u.square().neg(); // Z·u²
    let e1 = t1.ct_eq(&minus_one);
    t1 = Fp::conditional_select(&t1, &Fp::zero(), e1);

    let x1 = t1
        .add(&Fp::one())
        .invert()
        .unwrap_or(Fp::zero())
        .mul(&j.neg());
    let gx1 = x1.add(&j).mul(&x1).add(&Fp::one()).mul(&x1);
    let x2 = x1.neg().sub(&j);
    let gx2 = t1.mul(&gx1);

    let e2 = gx1.is_square();
    let x = Fp::conditional_select(&x2, &x1, e2);
    let y2 = Fp::conditional_select(&gx2, &gx1, e2);
    let mut y = y2.sqrt().unwrap_or(Fp::zero());

    let e3 = y.sgn0();
    let y_neg = y.neg();
    y = Fp::conditional_select(&y, &y_neg, e2 ^ e3);
    (x, y)
}

/// The degree-4 isogeny from the Elligator target onto the Edwards curve.
fn isogeny_to_edwards((x, y): (Fp, Fp)) -> (Fp, Fp) {
    let t0 = x.square(); // x²
    let t1 = t0.add(&Fp::one()); // x² + 1
    let t0 = t0.sub(&Fp::one()); // x² − 1
    let mut t2 = y.square();
    t2 = t2.double(); // 2y²
    let t3 = x.double(); // 2x

    let mut t4 = t0.mul(&y); // y(x² − 1)
    t4 = t4.double(); // 2y(x² − 1)
    let x_num = t4.double(); // 4y(x² − 1)

    let t5 = t0.square(); // x⁴ − 2x² + 1
    t4 = t5.add(&t2); // x⁴ − 2x² + 1 + 2y²
    let x_den = t4.add(&t2); // x⁴ − 2x² + 1 + 4y²

    let t5 = t5.mul(&x); // x⁵ − 2x³ + x
    t4 = t2.mul(&t3); // 4xy²
    let y_num = t4.sub(&t5); // −(x⁵ − 2x³ + x − 4xy²)

    t4 = t1.mul(&t2); // 2x²y² + 2y²
    let y_den = t5.sub(&t4); // x⁵ − 2x³ + x − 2x²y² − 2y²

    let out_x = x_den.invert().unwrap_or(Fp::zero()).mul(&x_num);
    let out_y = y_den.invert().unwrap_or(Fp::zero()).mul(&y_num);
    (out_x, out_y)
}

/// The u-coordinate of a point on the Montgomery form of the curve
/// (X448 wire format).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MontgomeryPoint(pub [u8; 56]);

impl MontgomeryPoint {
    /// The X448 base point u = 5.
    pub fn generator() -> Self {
        let mut bytes = [0u8; 56];
        bytes[0] = 5;
        Self(bytes)
    }

    /// True for the low-order u-coordinates 0, 1 and −1.
    pub fn is_low_order(&self) -> Choice {
        let zero = [0u8; 56];
        let mut one = [0u8; 56];
        one[0] = 1;
        let minus_one = Fp::one().neg().to_bytes();
        curvekit_internal::ct_bytes_eq(&self.0, &zero)
            | curvekit_internal::ct_bytes_eq(&self.0, &one)
            | curvekit_internal::ct_bytes_eq(&self.0, &minus_one)
    }

    /// The X448 ladder (Costello–Smith algorithm 8): differential
    /// add-and-double driven by the scalar bits, with conditional swaps.
    pub fn mul(&self, scalar: &Fq) -> Result<Self> {
        let affine_u =
            Option::<Fp>::from(Fp::from_bytes(&self.0)).ok_or(Error::InvalidEncoding)?;

        let mut x0 = ProjectiveMontgomeryPoint::identity();
        let mut x1 = ProjectiveMontgomeryPoint {
            u: affine_u,
            w: Fp::one(),
        };

        let bytes = scalar.to_bytes();
        let mut swap = Choice::from(0);
        for byte in bytes.iter().rev() {
            for i in (0..8).rev() {
                let bit = Choice::from((byte >> i) & 1);
                let choice = swap ^ bit;
                ProjectiveMontgomeryPoint::conditional_swap(&mut x0, &mut x1, choice);
                differential_add_and_double(&mut x0, &mut x1, &affine_u);
                swap = bit;
            }
        }

        Ok(x0.to_affine())
    }
}

#[derive(Clone, Copy, Debug)]
struct ProjectiveMontgomeryPoint {
    u: Fp,
    w: Fp,
}

impl ProjectiveMontgomeryPoint {
    fn identity() -> Self {
        Self {
            u: Fp::one(),
            w: Fp::zero(),
        }
    }

    fn to_affine(&self) -> MontgomeryPoint {
        let u = self.w.invert().unwrap_or(Fp::zero()).mul(&self.u);
        MontgomeryPoint(u.to_bytes())
    }

    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        let (ua, ub) = (a.u, b.u);
        a.u = Fp::conditional_select(&ua, &ub, choice);
        b.u = Fp::conditional_select(&ub, &ua, choice);
        let (wa, wb) = (a.w, b.w);
        a.w = Fp::conditional_select(&wa, &wb, choice);
        b.w = Fp::conditional_select(&wb, &wa, choice);
    }
}

fn differential_add_and_double(
    p: &mut ProjectiveMontgomeryPoint,
    q: &mut ProjectiveMontgomeryPoint,
    affine_p_minus_q: &Fp,
) {
    let t0 = p.u.add(&p.w);
    let t1 = p.u.sub(&p.w);
    let t2 = q.u.add(&q.w);
    let t3 = q.u.sub(&q.w);

    let t4 = t0.square(); // (U_P + W_P)²
    let t5 = t1.square(); // (U_P − W_P)²
    let t6 = t4.sub(&t5); // 4 U_P W_P

    let t7 = t0.mul(&t3);
    let t8 = t1.mul(&t2);
    let t9 = t7.add(&t8); // 2(U_P U_Q − W_P W_Q)
    let t10 = t7.sub(&t8); // 2(W_P U_Q − U_P W_Q)

    let t11 = t9.square();
    let t12 = t10.square();
    let t13 = ap2_div4().mul(&t6);

    let t14 = t4.mul(&t5);
    let t15 = t13.add(&t5);
    let t16 = t6.mul(&t15);
    let t17 = affine_p_minus_q.mul(&t12);

    p.u = t14;
    p.w = t16;
    q.u = t11;
    q.w = t17;
}

/// Hash input bytes to a scalar: an 84-byte SHAKE-256 expansion reduced
/// little-endian modulo the group order.
pub fn hash_to_scalar(input: &[u8]) -> Fq {
    let xof = expand_message_xof::<sha3::Shake256>(input, SCALAR_DST, 84);
    let mut wide = [0u8; 112];
    wide[..84].copy_from_slice(&xof);
    Fq::from_bytes_wide(&wide)
}

/// Reduce a 114-byte little-endian value: lo + hi·R + top·R² modulo the
/// group order.
pub fn fq_wide_reduce(bytes: &[u8; 114]) -> Fq {
    let mut lo_hi = [0u8; 112];
    lo_hi.copy_from_slice(&bytes[..112]);
    let folded = Fq::from_bytes_wide(&lo_hi);

    let mut top_bytes = [0u8; 56];
    top_bytes[..2].copy_from_slice(&bytes[112..]);
    let top = Option::<Fq>::from(Fq::from_bytes(&top_bytes)).unwrap_or(Fq::zero());
    let r2 = Fq::from_raw_unchecked(fq::FQ_PARAMS.r2);
    folded.add(&top.mul(&r2).mul(&r2))
}

#[cfg(test)]
mod tests;
