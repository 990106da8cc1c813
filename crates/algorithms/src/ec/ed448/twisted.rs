//! The twisted (internal) curve for Ed448 scalar multiplication.
//!
//! Variable-base multiplication runs on the 4-isogenous twisted Edwards
//! curve −x² + y² = 1 + d'x²y² with d' = d − 1, where the formulas are
//! cheaper. Points move between extended, extensible and projective-Niels
//! forms; the lookup table is scanned with masked selects and the signed
//! digits negate entries in constant time.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::{Fp, TWO_X_TWISTED_D};

/// Twisted extended coordinates (X, Y, Z, T) with T = XY/Z.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TwistedExtendedPoint {
    pub x: Fp,
    pub y: Fp,
    pub z: Fp,
    pub t: Fp,
}

/// Extensible coordinates carrying the T = T1·T2 split, which saves a
/// multiplication between chained operations.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TwistedExtensiblePoint {
    pub x: Fp,
    pub y: Fp,
    pub z: Fp,
    pub t1: Fp,
    pub t2: Fp,
}

/// Precomputed form for repeated additions: (Y+X, Y−X, 2d'T, 2Z).
#[derive(Clone, Copy, Debug)]
pub(crate) struct TwistedProjectiveNielsPoint {
    pub y_plus_x: Fp,
    pub y_minus_x: Fp,
    pub td: Fp,
    pub z: Fp,
}

impl TwistedExtendedPoint {
    pub fn identity() -> Self {
        Self {
            x: Fp::zero(),
            y: Fp::one(),
            z: Fp::one(),
            t: Fp::zero(),
        }
    }

    pub fn to_extensible(&self) -> TwistedExtensiblePoint {
        TwistedExtensiblePoint {
            x: self.x,
            y: self.y,
            z: self.z,
            t1: self.t,
            t2: Fp::one(),
        }
    }

}

impl ConditionallySelectable for TwistedExtendedPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            z: Fp::conditional_select(&a.z, &b.z, choice),
            t: Fp::conditional_select(&a.t, &b.t, choice),
        }
    }
}

impl TwistedExtensiblePoint {
    pub fn identity() -> Self {
        Self {
            x: Fp::zero(),
            y: Fp::one(),
            z: Fp::one(),
            t1: Fp::zero(),
            t2: Fp::one(),
        }
    }

    pub fn to_extended(&self) -> TwistedExtendedPoint {
        TwistedExtendedPoint {
            x: self.x,
            y: self.y,
            z: self.z,
            t: self.t1.mul(&self.t2),
        }
    }

    pub fn to_projective_niels(&self) -> TwistedProjectiveNielsPoint {
        let td = self.t1.mul(&self.t2).mul(&TWO_X_TWISTED_D);
        TwistedProjectiveNielsPoint {
            y_plus_x: self.y.add(&self.x),
            y_minus_x: self.y.sub(&self.x),
            td,
            z: self.z.double(),
        }
    }

    /// Doubling (dbl-2008-hwcd with a = −1).
    pub fn double(&self) -> Self {
        let a = self.x.square();
        let b = self.y.square();
        let c = self.z.square().double();

        let d = a.neg();
        let e = self
            .x
            .add(&self.y)
            .square()
            .sub(&a)
            .sub(&b);

        let g = d.add(&b);
        let f = g.sub(&c);
        let h = d.sub(&b);

        Self {
            x: e.mul(&f),
            y: g.mul(&h),
            z: f.mul(&g),
            t1: e,
            t2: h,
        }
    }

    /// Mixed addition with a projective-Niels point.
    pub fn add_projective_niels(&self, rhs: &TwistedProjectiveNielsPoint) -> Self {
        let z = self.z.mul(&rhs.z);

        let a = self.y.sub(&self.x).mul(&rhs.y_minus_x);
        let b = self.y.add(&self.x).mul(&rhs.y_plus_x);
        let c = rhs.td.mul(&self.t1).mul(&self.t2);
        let d = b.add(&a);
        let e = b.sub(&a);
        let f = z.sub(&c);
        let g = z.add(&c);

        Self {
            x: e.mul(&f),
            y: g.mul(&d),
            z: f.mul(&g),
            t1: e,
            t2: d,
        }
    }
}

impl TwistedProjectiveNielsPoint {
    /// The Niels form of the identity: (1, 1, 0, 2).
    pub fn identity() -> Self {
        Self {
            y_plus_x: Fp::one(),
            y_minus_x: Fp::one(),
            td: Fp::zero(),
            z: Fp::one().double(),
        }
    }

    /// Conditionally negate: swap the Y±X entries and negate Td.
    pub fn conditional_negate(&self, choice: Choice) -> Self {
        Self {
            y_plus_x: Fp::conditional_select(&self.y_plus_x, &self.y_minus_x, choice),
            y_minus_x: Fp::conditional_select(&self.y_minus_x, &self.y_plus_x, choice),
            td: Fp::conditional_select(&self.td, &self.td.neg(), choice),
            z: self.z,
        }
    }
}

impl ConditionallySelectable for TwistedProjectiveNielsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            y_plus_x: Fp::conditional_select(&a.y_plus_x, &b.y_plus_x, choice),
            y_minus_x: Fp::conditional_select(&a.y_minus_x, &b.y_minus_x, choice),
            td: Fp::conditional_select(&a.td, &b.td, choice),
            z: Fp::conditional_select(&a.z, &b.z, choice),
        }
    }
}

/// An 8-entry table of odd-free multiples [1]P … [8]P in Niels form.
pub(crate) struct LookupTable([TwistedProjectiveNielsPoint; 8]);

impl LookupTable {
    pub fn from_point(p: &TwistedExtendedPoint) -> Self {
        let ext = p.to_extensible();
        let mut table = [ext.to_projective_niels(); 8];
        for i in 1..8 {
            table[i] = ext.add_projective_niels(&table[i - 1]).to_projective_niels();
        }
        Self(table)
    }

    /// Constant-time select of [index]P for index in 0..=8; index 0 yields
    /// the Niels identity.
    pub fn select(&self, index: u32) -> TwistedProjectiveNielsPoint {
        let mut result = TwistedProjectiveNielsPoint::identity();
        for (i, entry) in self.0.iter().enumerate() {
            let hit = (i as u32 + 1).ct_eq(&index);
            result = TwistedProjectiveNielsPoint::conditional_select(&result, entry, hit);
        }
        result
    }
}

/// Recode 56 little-endian scalar bytes to 113 signed radix-16 digits in
/// [−8, 8).
pub(crate) fn to_radix16(bytes: &[u8; 56]) -> [i8; 113] {
    let mut output = [0i8; 113];
    for i in 0..56 {
        output[2 * i] = (bytes[i] & 0xf) as i8;
        output[2 * i + 1] = ((bytes[i] >> 4) & 0xf) as i8;
    }
    // Re-centre the coefficients.
    for i in 0..112 {
        let carry = (output[i] + 8) >> 4;
        output[i] -= carry << 4;
        output[i + 1] += carry;
    }
    output
}

/// Variable-base scalar multiplication on the twisted curve over the
/// signed radix-16 digits of `scalar_bytes`, four doublings and one masked
/// Niels addition per digit.
pub(crate) fn variable_base(
    point: &TwistedExtendedPoint,
    scalar_bytes: &[u8; 56],
) -> TwistedExtendedPoint {
    let digits = to_radix16(scalar_bytes);
    let table = LookupTable::from_point(point);

    let mut result = TwistedExtensiblePoint::identity();
    for i in (0..113).rev() {
        result = result.double().double().double().double();

        let digit = digits[i];
        // Top bit selects the sign; the mask recovers the absolute value.
        let mask = digit >> 7;
        let sign = Choice::from((mask & 1) as u8);
        let abs = ((digit + mask) ^ mask) as u32;

        let entry = table.select(abs).conditional_negate(sign);
        result = result.add_projective_niels(&entry);
    }
    result.to_extended()
}
