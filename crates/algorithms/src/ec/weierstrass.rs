//! Generic short-Weierstrass point engine.
//!
//! Points are held in homogeneous projective coordinates (X : Y : Z) with
//! the identity at (0 : 1 : 0). The group law uses the complete
//! Renes–Costello–Batina formulas; the `a = 0` and `a = −3` variants are
//! both provided and the curve parameter block picks the right one, so no
//! input needs special-casing.
//!
//! Scalar multiplication is the fixed 4-bit-window method over a masked
//! 16-entry table; multi-scalar multiplication is the bucketed
//! sum-of-products walk with the same window width.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::error::{expect_len, Error, Result};
use crate::field::PrimeFieldElement;

/// Parameter block describing a short-Weierstrass curve y² = x³ + ax + b.
pub trait WeierstrassCurve: Copy + Clone + core::fmt::Debug + 'static {
    /// The base field.
    type Fe: PrimeFieldElement;
    /// Curve name used in domain-separation tags and envelopes.
    const NAME: &'static str;
    /// Whether the `a` coefficient is zero (selects the group-law variant).
    const A_IS_ZERO: bool;
    /// The `a` coefficient in Montgomery form.
    const A: Self::Fe;
    /// The `b` coefficient in Montgomery form.
    const B: Self::Fe;
    /// Affine x of the generator.
    const GX: Self::Fe;
    /// Affine y of the generator.
    const GY: Self::Fe;
    /// Canonical scalar width in bytes.
    const SCALAR_BYTES: usize;
}

/// A point on a short-Weierstrass curve in projective coordinates.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint<C: WeierstrassCurve> {
    pub(crate) x: C::Fe,
    pub(crate) y: C::Fe,
    pub(crate) z: C::Fe,
}

impl<C: WeierstrassCurve> ProjectivePoint<C> {
    /// The point at infinity.
    pub fn identity() -> Self {
        Self {
            x: C::Fe::zero(),
            y: C::Fe::one(),
            z: C::Fe::zero(),
        }
    }

    /// The fixed generator.
    pub fn generator() -> Self {
        Self {
            x: C::GX,
            y: C::GY,
            z: C::Fe::one(),
        }
    }

    /// Build a point from affine coordinates without validation.
    pub fn from_affine_unchecked(x: C::Fe, y: C::Fe) -> Self {
        Self {
            x,
            y,
            z: C::Fe::one(),
        }
    }

    /// Build a point from affine coordinates; the all-zero pair is the
    /// identity sentinel and any other pair must satisfy the curve
    /// equation.
    pub fn from_affine_coordinates(x: C::Fe, y: C::Fe) -> Result<Self> {
        let is_sentinel = x.is_zero() & y.is_zero();
        let candidate = Self::from_affine_unchecked(x, y);
        let valid = candidate.affine_on_curve() | is_sentinel;
        if bool::from(valid) {
            Ok(Self::conditional_select(
                &candidate,
                &Self::identity(),
                is_sentinel,
            ))
        } else {
            Err(Error::InvalidCoordinates)
        }
    }

    /// True iff this is the point at infinity.
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Check the projective curve equation y²z = x³ + axz² + bz³.
    pub fn is_on_curve(&self) -> Choice {
        let z2 = self.z.square();
        let z3 = z2 * self.z;
        let lhs = self.y.square() * self.z;
        let rhs = self.x.square() * self.x + C::A * self.x * z2 + C::B * z3;
        lhs.ct_eq(&rhs)
    }

    fn affine_on_curve(&self) -> Choice {
        let rhs = Self::rhs_equation(&self.x);
        self.y.square().ct_eq(&rhs)
    }

    /// Right-hand side of the affine curve equation, x³ + ax + b.
    pub fn rhs_equation(x: &C::Fe) -> C::Fe {
        (x.square() + C::A) * *x + C::B
    }

    /// Negation.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// Complete point addition.
    pub fn add(&self, rhs: &Self) -> Self {
        if C::A_IS_ZERO {
            self.add_a0(rhs)
        } else {
            self.add_a_minus3(rhs)
        }
    }

    /// Complete point doubling.
    pub fn double(&self) -> Self {
        if C::A_IS_ZERO {
            self.double_a0()
        } else {
            self.double_a_minus3()
        }
    }

    /// Subtraction.
    pub fn sub(&self, rhs: &Self) -> Self {
        self.add(&rhs.neg())
    }

    // Renes-Costello-Batina 2015, algorithm 7 (a = 0, b3 = 3b).
    fn add_a0(&self, rhs: &Self) -> Self {
        let b3 = C::B.double() + C::B;
        let (x1, y1, z1) = (self.x, self.y, self.z);
        let (x2, y2, z2) = (rhs.x, rhs.y, rhs.z);

        let mut t0 = x1 * x2;
        let mut t1 = y1 * y2;
        let mut t2 = z1 * z2;
        let mut t3 = (x1 + y1) * (x2 + y2);
        let mut t4 = t0 + t1;
        t3 = t3 - t4;
        t4 = (y1 + z1) * (y2 + z2);
        let mut x3 = t1 + t2;
        t4 = t4 - x3;
        x3 = (x1 + z1) * (x2 + z2);
        let mut y3 = t0 + t2;
        let t5 = x3 - y3;
        t0 = t0.double() + t0;
        t2 = b3 * t2;
        let mut z3 = t1 + t2;
        t1 = t1 - t2;
        y3 = b3 * t5;
        x3 = t4 * y3;
        t2 = t3 * t1;
        x3 = t2 - x3;
        y3 = y3 * t0;
        t1 = t1 * z3;
        y3 = t1 + y3;
        t0 = t0 * t3;
        z3 = z3 * t4;
        z3 = z3 + t0;

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    // Renes-Costello-Batina 2015, algorithm 9 (a = 0, b3 = 3b).
    fn double_a0(&self) -> Self {
        let b3 = C::B.double() + C::B;
        let (x, y, z) = (self.x, self.y, self.z);

        let t0 = y.square();
        let mut z3 = t0.double().double().double();
        let t1 = y * z;
        let mut t2 = z.square();
        t2 = b3 * t2;
        let mut x3 = t2 * z3;
        let mut y3 = t0 + t2;
        z3 = t1 * z3;
        let t1 = t2.double();
        let t2 = t1 + t2;
        let t0 = t0 - t2;
        y3 = t0 * y3;
        y3 = x3 + y3;
        let t1 = x * y;
        x3 = t0 * t1;
        x3 = x3.double();

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    // Complete addition for a = -3 curves, as used for the NIST primes.
    fn add_a_minus3(&self, rhs: &Self) -> Self {
        let b = C::B;
        let (x1, y1, z1) = (self.x, self.y, self.z);
        let (x2, y2, z2) = (rhs.x, rhs.y, rhs.z);

        let xx = x1 * x2;
        let yy = y1 * y2;
        let zz = z1 * z2;

        let xy_pairs = (x1 + y1) * (x2 + y2) - (xx + yy);
        let yz_pairs = (y1 + z1) * (y2 + z2) - (yy + zz);
        let xz_pairs = (x1 + z1) * (x2 + z2) - (xx + zz);

        let bzz_part = xz_pairs - b * zz;
        let bzz3_part = bzz_part.double() + bzz_part;
        let yy_m_bzz3 = yy - bzz3_part;
        let yy_p_bzz3 = yy + bzz3_part;

        let zz3 = zz.double() + zz;
        let bxz_part = b * xz_pairs - (zz3 + xx);
        let bxz3_part = bxz_part.double() + bxz_part;
        let xx3_m_zz3 = xx.double() + xx - zz3;

        Self {
            x: yy_p_bzz3 * xy_pairs - yz_pairs * bxz3_part,
            y: yy_p_bzz3 * yy_m_bzz3 + xx3_m_zz3 * bxz3_part,
            z: yy_m_bzz3 * yz_pairs + xy_pairs * xx3_m_zz3,
        }
    }

    // Complete doubling for a = -3 curves.
    fn double_a_minus3(&self) -> Self {
        let b = C::B;
        let (x, y, z) = (self.x, self.y, self.z);

        let xx = x.square();
        let yy = y.square();
        let zz = z.square();

        let xy2 = (x * y).double();
        let yz2 = (y * z).double();
        let xz2 = (x * z).double();

        let bzz_part = b * zz - xz2;
        let bzz3_part = bzz_part.double() + bzz_part;
        let yy_m_bzz3 = yy - bzz3_part;
        let yy_p_bzz3 = yy + bzz3_part;

        let y_frag = yy_p_bzz3 * yy_m_bzz3;
        let x_frag = yy_m_bzz3 * xy2;

        let zz3 = zz.double() + zz;
        let bxz2_part = b * xz2 - (zz3 + xx);
        let bxz6_part = bxz2_part.double() + bxz2_part;
        let xx3_m_zz3 = xx.double() + xx - zz3;

        Self {
            x: x_frag - bxz6_part * yz2,
            y: y_frag + xx3_m_zz3 * bxz6_part,
            z: (yz2 * yy).double().double(),
        }
    }

    /// Constant-time equality: cross-multiplied coordinates, with both
    /// points at infinity also comparing equal.
    pub fn ct_eq_point(&self, rhs: &Self) -> Choice {
        let x1 = self.x * rhs.z;
        let x2 = rhs.x * self.z;
        let y1 = self.y * rhs.z;
        let y2 = rhs.y * self.z;

        let e1 = self.z.is_zero();
        let e2 = rhs.z.is_zero();

        (e1 & e2) | (!e1 & !e2 & x1.ct_eq(&x2) & y1.ct_eq(&y2))
    }

    /// Convert to affine coordinates; the identity maps to (0, 0).
    pub fn to_affine(&self) -> (C::Fe, C::Fe) {
        let inv = self.z.invert();
        let was_inverted = inv.is_some();
        let zi = inv.unwrap_or(C::Fe::zero());
        let x = self.x * zi;
        let y = self.y * zi;
        (
            C::Fe::conditional_select(&C::Fe::zero(), &x, was_inverted),
            C::Fe::conditional_select(&C::Fe::zero(), &y, was_inverted),
        )
    }

    /// Recover a point from an affine x-coordinate and the parity of y.
    ///
    /// Fails when the right-hand side of the curve equation has no square
    /// root.
    pub fn from_x_and_sign(x: C::Fe, y_is_odd: Choice) -> CtOption<Self> {
        let rhs = Self::rhs_equation(&x);
        rhs.sqrt().map(|y| {
            let flip = y.sgn0() ^ y_is_odd;
            let y = C::Fe::conditional_select(&y, &(-y), flip);
            Self::from_affine_unchecked(x, y)
        })
    }

    /// Constant-time scan of the 16-entry window table.
    fn lookup(table: &[Self; 16], index: u8) -> Self {
        let mut acc = Self::identity();
        for (j, entry) in table.iter().enumerate() {
            let hit = (j as u8).ct_eq(&index);
            acc = Self::conditional_select(&acc, entry, hit);
        }
        acc
    }

    fn window_table(&self) -> [Self; 16] {
        let mut table = [Self::identity(); 16];
        table[1] = *self;
        let mut i = 2;
        while i < 16 {
            table[i] = table[i >> 1].double();
            table[i + 1] = table[i].add(self);
            i += 2;
        }
        table
    }

    /// Scalar multiplication by a little-endian scalar of the curve's
    /// canonical width, using 4-bit fixed windows with masked lookups.
    pub fn mul(&self, scalar_le: &[u8]) -> Result<Self> {
        expect_len("scalar", scalar_le.len(), C::SCALAR_BYTES)?;
        let table = self.window_table();
        let nb = scalar_le.len();
        let mut acc = Self::identity();
        for i in 0..nb * 2 {
            for _ in 0..4 {
                acc = acc.double();
            }
            let byte = scalar_le[nb - 1 - (i >> 1)];
            let nibble = (byte >> (4 * ((i & 1) ^ 1))) & 0x0f;
            acc = acc.add(&Self::lookup(&table, nibble));
        }
        Ok(acc)
    }

    /// Bucketed multi-scalar multiplication: Σ [sᵢ]Pᵢ.
    ///
    /// W = 4 windows over the canonical scalar width. The bucket walk is
    /// not constant time; it serves public verification workloads.
    pub fn sum_of_products(points: &[Self], scalars: &[&[u8]]) -> Result<Self> {
        if points.len() != scalars.len() {
            return Err(Error::InvalidLength {
                context: "sum_of_products",
                expected: points.len(),
                actual: scalars.len(),
            });
        }
        for s in scalars {
            expect_len("sum_of_products scalar", s.len(), C::SCALAR_BYTES)?;
        }

        let windows = C::SCALAR_BYTES * 2;
        let mut window_sums = vec![Self::identity(); windows];
        let mut buckets = [Self::identity(); 16];

        for (j, window_sum) in window_sums.iter_mut().enumerate() {
            for bucket in buckets.iter_mut() {
                *bucket = Self::identity();
            }
            for (point, scalar) in points.iter().zip(scalars.iter()) {
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
}

impl<C: WeierstrassCurve> ConditionallySelectable for ProjectivePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::Fe::conditional_select(&a.x, &b.x, choice),
            y: C::Fe::conditional_select(&a.y, &b.y, choice),
            z: C::Fe::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C: WeierstrassCurve> ConstantTimeEq for ProjectivePoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.ct_eq_point(other)
    }
}

impl<C: WeierstrassCurve> PartialEq for ProjectivePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq_point(other))
    }
}

impl<C: WeierstrassCurve> Eq for ProjectivePoint<C> {}
