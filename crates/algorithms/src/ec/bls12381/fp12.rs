//! Twelfth-degree extension Fp12 = Fp6[w] / (w² − v), the pairing target
//! field.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp2::Fp2;
use super::fp6::Fp6;
use super::frobenius::FROBENIUS_COEFF_FP12_C1;

/// An element c0 + c1·w of Fp12.
#[derive(Clone, Copy, Default)]
pub struct Fp12 {
    pub c0: Fp6,
    pub c1: Fp6,
}

impl Fp12 {
    pub const fn zero() -> Self {
        Self {
            c0: Fp6::zero(),
            c1: Fp6::zero(),
        }
    }

    pub fn one() -> Self {
        Self {
            c0: Fp6::one(),
            c1: Fp6::zero(),
        }
    }

    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Self::one())
    }

    pub fn add(&self, rhs: &Self) -> Self {
        Self {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
        }
    }

    pub fn sub(&self, rhs: &Self) -> Self {
        Self {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
        }
    }

    pub fn neg(&self) -> Self {
        Self {
            c0: self.c0.neg(),
            c1: self.c1.neg(),
        }
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        let aa = self.c0.mul(&rhs.c0);
        let bb = self.c1.mul(&rhs.c1);
        let o = rhs.c0.add(&rhs.c1);
        let c1 = self.c1.add(&self.c0).mul(&o).sub(&aa).sub(&bb);
        let c0 = bb.mul_by_nonresidue().add(&aa);
        Self { c0, c1 }
    }

    pub fn square(&self) -> Self {
        let ab = self.c0.mul(&self.c1);
        let c0c1 = self.c0.add(&self.c1);
        let c0 = self
            .c1
            .mul_by_nonresidue()
            .add(&self.c0)
            .mul(&c0c1)
            .sub(&ab)
            .sub(&ab.mul_by_nonresidue());
        let c1 = ab.add(&ab);
        Self { c0, c1 }
    }

    /// Sparse multiplication by an element with the (c0.c0, c0.c1, c1.c1)
    /// slots set, the shape produced by pairing line evaluations.
    pub fn mul_by_014(&self, c0: &Fp2, c1: &Fp2, c4: &Fp2) -> Self {
        let aa = self.c0.mul_by_01(c0, c1);
        let bb = self.c1.mul_by_1(c4);
        let o = c1.add(c4);
        let out_c1 = self
            .c1
            .add(&self.c0)
            .mul_by_01(c0, &o)
            .sub(&aa)
            .sub(&bb);
        let out_c0 = bb.mul_by_nonresidue().add(&aa);
        Self {
            c0: out_c0,
            c1: out_c1,
        }
    }

    /// The unitary inverse on the cyclotomic subgroup.
    pub fn conjugate(&self) -> Self {
        Self {
            c0: self.c0,
            c1: self.c1.neg(),
        }
    }

    pub fn frobenius_map(&self) -> Self {
        let c0 = self.c0.frobenius_map();
        let c1 = self.c1.frobenius_map();
        // Multiply every c1 coefficient by (u + 1)^((p − 1) / 6).
        let c1 = Fp6 {
            c0: c1.c0.mul(&FROBENIUS_COEFF_FP12_C1),
            c1: c1.c1.mul(&FROBENIUS_COEFF_FP12_C1),
            c2: c1.c2.mul(&FROBENIUS_COEFF_FP12_C1),
        };
        Self { c0, c1 }
    }

    pub fn invert(&self) -> CtOption<Self> {
        let t = self
            .c0
            .square()
            .sub(&self.c1.square().mul_by_nonresidue());
        t.invert().map(|t| Self {
            c0: self.c0.mul(&t),
            c1: self.c1.mul(&t).neg(),
        })
    }

    /// Exponentiation by a public little-endian limb exponent.
    pub fn pow_vartime(&self, exp: &[u64]) -> Self {
        let mut res = Self::one();
        for e in exp.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((e >> i) & 1) == 1 {
                    res = res.mul(self);
                }
            }
        }
        res
    }

    /// Constant-time exponentiation by a secret scalar given as
    /// little-endian limbs.
    pub fn pow(&self, exp: &[u64; 4]) -> Self {
        let mut res = Self::one();
        for e in exp.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                let tmp = res.mul(self);
                res = Self::conditional_select(&res, &tmp, Choice::from(((e >> i) & 1) as u8));
            }
        }
        res
    }
}

impl ConstantTimeEq for Fp12 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl ConditionallySelectable for Fp12 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            c0: Fp6::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp6::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl PartialEq for Fp12 {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for Fp12 {}

impl core::fmt::Debug for Fp12 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({:?}) + ({:?})*w", self.c0, self.c1)
    }
}
